//! Snapshot adapter: parse exported building model snapshots into the domain model.
//!
//! This crate is intentionally IO-free: it parses snapshot text provided as strings.
//! Reading files is the caller's job (typically the CLI).

#![forbid(unsafe_code)]

mod parse;

pub use parse::{parse_snapshot, SnapshotError, SCHEMA_SNAPSHOT_V1};
