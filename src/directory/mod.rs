//! Directory core
//!
//! Platform-independent pieces of the teacher directory:
//! - [`types`]: records and the per-gender tally
//! - [`tally`]: aggregation
//! - [`payload`]: response decoding
//! - [`state`]: the view state container and its single mutation entry point
//! - [`error`]: fetch errors

pub mod error;
pub mod payload;
pub mod state;
pub mod tally;
pub mod types;

pub use error::{FetchError, FetchErrorKind, FetchResult};
pub use payload::{decode_payload, decode_value};
pub use state::{CycleTicket, ViewEvent, ViewState};
pub use tally::tally;
pub use types::{Gender, GenderTally, TeacherRecord};

/// Remote source the directory polls
pub const DEFAULT_ENDPOINT: &str = "https://alex.starcode.com.mx/apiBD.php";

/// Time between fetch cycles, in milliseconds
pub const POLL_INTERVAL_MS: u64 = 3000;
