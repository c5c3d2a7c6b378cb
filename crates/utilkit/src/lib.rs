#![deny(unsafe_code)]

//! # utilkit
//!
//! Small, self-contained helpers that keep showing up across services.
//!
//! ## Overview
//!
//! - [`color`]: hex <-> RGB conversion
//! - [`yaml`]: YAML trees to JSON trees, stringifying non-string keys
//! - [`fs`]: rename files and directories with a copy-and-delete fallback
//! - [`set`]: intersect / union / except over slices, plus an ordered [`Set`]
//! - [`stack`]: a mutex-guarded LIFO [`Stack`]
//! - [`duration`]: compact duration formatting with day and year units
//! - [`validate`]: all-letters / all-digits string checks
//! - [`process`]: executable directory and shutdown signal helpers
//! - [`retry`]: bounded fixed-interval retries, re-exported from `utilkit-core`
//!
//! ## Quick Start
//!
//! ```no_run
//! use utilkit::prelude::*;
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let color = Rgb::from_hex("#1e90ff")?;
//!     println!("{} -> {:?}", color, (color.red, color.green, color.blue));
//!
//!     let config = RetryConfig::builder()
//!         .max_attempts(3)
//!         .interval(Duration::from_millis(500))
//!         .build();
//!     retry_with(config, || async { rename("report.tmp", "report.csv", &[]) }).await?;
//!
//!     println!("uptime {}", format_duration(Duration::from_secs(90_061)));
//!     Ok(())
//! }
//! ```

pub mod color;
pub mod duration;
pub mod error;
pub mod fs;
pub mod process;
pub mod set;
pub mod stack;
pub mod validate;
pub mod yaml;

pub use utilkit_core::retry;

pub use color::{Rgb, color_hex_to_rgb, color_rgb_to_hex};
pub use duration::format_duration;
pub use error::{ConvertError, FsError, ProcessError};
pub use fs::{file_exists, folder_exists, rename, rename_dir, rename_file};
pub use process::{ShutdownSignal, exec_dir, on_shutdown, wait_for_shutdown};
pub use set::{Set, except_left, except_right, intersect, union};
pub use stack::Stack;
pub use validate::{is_letter, is_number};
pub use yaml::{yaml_str_to_json, yaml_to_json};

/// Convenient re-exports of commonly used items.
pub mod prelude {
    pub use crate::color::Rgb;
    pub use crate::duration::format_duration;
    pub use crate::error::{ConvertError, FsError, ProcessError};
    pub use crate::fs::{file_exists, folder_exists, rename};
    pub use crate::set::{Set, except_left, except_right, intersect, union};
    pub use crate::stack::Stack;
    pub use crate::validate::{is_letter, is_number};
    pub use crate::yaml::{yaml_str_to_json, yaml_to_json};
    pub use utilkit_core::prelude::*;
}
