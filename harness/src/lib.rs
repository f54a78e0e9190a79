//! Wayfind harness: host-side orchestration for the search core.
//!
//! The harness does NOT implement search logic — it delegates to
//! `wayfind-core`. Worlds provide graph topology only; the runner owns the
//! time-sliced drive loop; the report module packages a finished run as a
//! digested JSON artifact.

#![forbid(unsafe_code)]

pub mod report;
pub mod runner;
pub mod worlds;
