//! Streaming session aggregation.
//!
//! Everything here re-reads raw log files on each call: summaries,
//! reconstructed timelines, and filtered listings are derived fresh
//! and owned by the caller. The trade is repeated I/O for guaranteed
//! freshness over a local, modestly sized log root; there is no cache,
//! background indexer, or shared mutable state to go stale.

mod detail;
mod lines;
mod query;
mod summarize;
mod timeline;
mod timing;

pub use detail::load_session_detail;
pub use query::{SessionFilter, get_session, list_sessions};
pub use summarize::summarize_file;
pub use timeline::build_timeline;
