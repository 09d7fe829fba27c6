//! # tcr-service
//!
//! Caller-facing facade over the trigger code reference catalog.
//!
//! [`TriggerCodeService`] turns raw request inputs into catalog lookups and
//! bundle stamping, and reports lookup failures as `{"error": message}`
//! values instead of propagating them. It is transport-agnostic; the
//! `tcr-stamp` binary drives it from the command line.

#![warn(missing_docs)]

mod config;
mod response;
mod service;

pub use config::ServiceConfig;
pub use response::LookupResponse;
pub use service::{ServiceError, ServiceResult, TriggerCodeService};
