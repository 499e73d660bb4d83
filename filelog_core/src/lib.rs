#![cfg_attr(all(not(debug_assertions), not(test)), deny(warnings))]
#![cfg_attr(
    all(not(debug_assertions), not(test)),
    deny(clippy::all, clippy::pedantic, clippy::nursery)
)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
//! Timestamped, leveled messages appended to a plain file.
//!
//! ## Layout
//!
//! - **Logger**: `FileLogger` owns a directory, a file name, a level and an
//!   optional type tag (`logger` module)
//! - **Format**: plain `[ts] [LEVEL] msg` or loose CSV `ts, LEVEL, msg`, chosen
//!   by whether the file name contains `.csv` (`format` module)
//! - **Levels**: the named DEBUG/INFO/ALERT/CRITICAL/ERROR/WARNING set (`level` module)
//! - **Errors**: write and read failures stay distinct (`error` module)
//!
//! ```rust,no_run
//! use filelog_core::FileLogger;
//!
//! let logger = FileLogger::new("logs", "run.log", "INFO", None)?;
//! logger.write("started")?;
//! for line in logger.get_all()? {
//!     print!("{line}");
//! }
//! # Ok::<(), filelog_core::LogError>(())
//! ```

pub mod error;
pub mod format;
pub mod level;
pub mod logger;

pub use error::{LogError, Result, UnknownLevel};
pub use format::{DATE_FILENAME_FORMAT, LineFormat, TIMESTAMP_FORMAT, dated_filename};
pub use level::Level;
pub use logger::FileLogger;

pub use filelog_config::{DEFAULT_DIR, LoggerConfig};
pub use filelog_traits::{FixedClock, SystemClock, WallClock};
