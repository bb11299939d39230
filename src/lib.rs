//! # Docentes
//!
//! Live teacher directory: polls a remote JSON endpoint every few seconds,
//! tallies teachers per gender and renders detail cards plus a bar chart.
//!
//! ## Modules
//!
//! - [`directory`]: records, tally, payload decoding and view state
//! - [`render`]: pure view tree and its terminal rendering
//! - [`fetcher`]: HTTP client and periodic timer (`native` feature)
//! - [`component`]: the mountable [`TeacherDirectoryView`] (`native` feature)
//! - [`config`]: TOML/env configuration for the terminal host (`native` feature)
//!
//! The core modules carry no runtime dependencies so the browser host can
//! build them with `default-features = false`.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use docentes::TeacherDirectoryView;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut view = TeacherDirectoryView::with_defaults()?;
//!     let mut changes = view.subscribe();
//!     view.mount();
//!
//!     while changes.changed().await.is_ok() {
//!         let text = docentes::render::render_text(&view.view(), view.snapshot().last_updated);
//!         println!("{}", text);
//!     }
//!
//!     view.unmount();
//!     Ok(())
//! }
//! ```

pub mod directory;
pub mod labels;
pub mod render;

#[cfg(feature = "native")]
pub mod component;
#[cfg(feature = "native")]
pub mod config;
#[cfg(feature = "native")]
pub mod fetcher;

// Re-export top-level types for convenience
pub use directory::{
    decode_payload, tally, FetchError, FetchErrorKind, FetchResult, Gender, GenderTally,
    TeacherRecord, ViewEvent, ViewState, DEFAULT_ENDPOINT, POLL_INTERVAL_MS,
};

pub use render::{render, render_text, View};

#[cfg(feature = "native")]
pub use component::{Lifecycle, TeacherDirectoryView};

#[cfg(feature = "native")]
pub use config::{Config, ConfigError, LoadedConfig, LoggingConfig, SourceConfig};

#[cfg(feature = "native")]
pub use fetcher::{ClientConfig, DirectoryClient, PeriodicTimer, RecordSource};
