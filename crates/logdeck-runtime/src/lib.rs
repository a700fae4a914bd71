//! Runtime composition layer for logdeck.
//!
//! Owns the TOML configuration store and the push/share preparation
//! flow. The aggregation engine itself is re-exported so the two
//! external collaborators (the local query service and the push
//! transport) depend on a single crate.

pub mod config;
mod error;
pub mod push;

pub use config::{Config, resolve_sessions_dir};
pub use error::{Error, Result};
pub use push::{PreparedPush, PushPayload, PushRequest, prepare_push};

pub use logdeck_engine::{SessionFilter, get_session, list_sessions, load_session_detail};
pub use logdeck_types::{SessionDetail, SessionSummary, Tag, merge_tags};
