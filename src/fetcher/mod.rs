//! Fetching
//!
//! - [`client`]: reqwest client for the remote directory
//! - [`timer`]: cancellable periodic timer driving fetch cycles

mod client;
mod timer;

pub use client::{ClientConfig, DirectoryClient};
pub use timer::PeriodicTimer;

use async_trait::async_trait;

use crate::directory::{FetchResult, TeacherRecord};

/// Anything that can produce the current directory
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Short description for logs (usually the endpoint)
    fn describe(&self) -> String;

    /// Run one request/response round-trip
    async fn fetch(&self) -> FetchResult<Vec<TeacherRecord>>;
}
