pub use std::time::Instant;

pub use anyhow::Context;
pub use tracing::{debug, error, info, instrument, warn};

pub type DateTime = chrono::DateTime<chrono::Utc>;
pub type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;
