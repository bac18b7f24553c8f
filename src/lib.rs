//! REST API over a single collection of job postings persisted to a JSON file.
//!
//! - `db`: the document store and the job repository on top of it
//! - `api`: actix-web routes, request validation and response envelopes
//! - `config` / `cli`: environment and command-line settings
//! - `logging`, `shutdown`: process plumbing used by the binary

pub mod api;
pub mod cli;
pub mod config;
pub mod db;
pub mod logging;
pub mod shutdown;
