//! Declarative redirect resolution for MagicalFM
//!
//! This crate loads the site's redirect rules from a YAML file, validates
//! them, and answers point lookups for the HTTP middleware that serves the
//! actual 301/302 responses.
//!
//! # Design
//!
//! - **Load once, fail fast**: the whole file is parsed and validated at
//!   startup. Any schema violation (source without a leading '/',
//!   destination that is not an absolute URL) aborts the load; there is no
//!   partially usable table.
//! - **Explicit injection**: the table is constructed by the application
//!   bootstrap and handed to whoever needs it. Nothing in this crate keeps
//!   process-wide state.
//! - **Last write wins**: two rules with the same source resolve to the one
//!   declared last, matching the file order.
//!
//! # Example
//!
//! ```no_run
//! use mfmredirect::RedirectTable;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let table = RedirectTable::load("content/redirects.yaml")?;
//!
//! if let Some(rule) = table.resolve("/old") {
//!     println!("{} -> {} ({})", rule.source, rule.destination, rule.status_code());
//! }
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod models;
pub mod table;

#[cfg(feature = "mfmconfig")]
pub mod config_ext;

// Re-exports
pub use error::{Error, Result};
pub use models::{RedirectRule, STATUS_FOUND, STATUS_MOVED_PERMANENTLY};
pub use table::RedirectTable;

#[cfg(feature = "mfmconfig")]
pub use config_ext::RedirectConfigExt;
