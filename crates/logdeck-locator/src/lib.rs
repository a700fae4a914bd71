//! Filesystem discovery for logdeck session logs.
//!
//! A log root holds one subdirectory per calendar day, each containing
//! `{session_id}-{tool}-{timestamp}.log` files with one JSON record
//! per line. This crate enumerates that layout and resolves a session
//! id to the authoritative file when duplicates exist. Every failure
//! mode (missing root, unreadable directory, junk entries) degrades to
//! an empty result; listing never aborts because part of the root is
//! unreadable.

mod discovery;

pub use discovery::{LogFileEntry, enumerate_log_files, resolve_session_file};
