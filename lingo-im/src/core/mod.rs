//! Core composition functionality
//!
//! This module contains the session state machine, the debounce/worker
//! plumbing for translation requests, and the host-facing trait boundary.

pub mod clock;
pub mod debounce;
pub mod host;
pub mod session;
pub mod worker;
