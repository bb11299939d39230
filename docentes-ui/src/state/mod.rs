//! State Management
//!
//! Component-scoped directory state and its polling loop.

pub mod directory;

pub use directory::DirectoryState;
