//! HTTP access to the remote directory

mod client;

pub use client::fetch_teachers;
