//! Radar host: runs plugin-style radar commands against a loaded map.
//!
//! # Architecture
//!
//! ```text
//! HostConfig (flags / env)
//!   ├─→ radar-content loaders (defaults, scenario, map)
//!   └─→ Session (variables, map, action queue)
//!         └─→ radar_core::Radar (resolve → scan → reserve)
//! ```
//!
//! The binary reads a script line by line; see [`session`] for the command
//! language.

pub mod config;
pub mod logging;
pub mod script;
pub mod session;

pub use config::HostConfig;
pub use script::{ScriptSummary, run_script};
pub use session::{LineOutcome, Session, SessionBuilder, SessionError};
