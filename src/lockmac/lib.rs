//! # Lockmac Architecture
//!
//! Lockmac locks the active macOS desktop session. Run with no arguments it
//! triggers the platform lock call once; run with arguments it only answers
//! the flags it was given and never locks.
//!
//! The crate is a library with a thin CLI binary on top:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs)                                     │
//! │  - Reads the argument vector, renders messages           │
//! │  - The ONLY place that knows about stdout/stderr/exit    │
//! └──────────────────────────────────────────────────────────┘
//!                             │
//!                             ▼
//! ┌──────────────────────────────────────────────────────────┐
//! │  Dispatch Layer (dispatch.rs)                            │
//! │  - Classifies arguments, returns a structured result     │
//! │  - Pure logic, no I/O assumptions whatsoever             │
//! └──────────────────────────────────────────────────────────┘
//!                             │
//!                             ▼
//! ┌──────────────────────────────────────────────────────────┐
//! │  Session Layer (session.rs)                              │
//! │  - Abstract SessionLock capability                       │
//! │  - SystemLock (production), RecordingLock (testing)      │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `dispatch.rs` inward, code takes regular arguments, returns regular
//! types, never writes to stdout/stderr, and never calls
//! `std::process::exit`. The dispatcher reports *what* to print and *which*
//! exit code applies; the binary decides how.
//!
//! ## Module Overview
//!
//! - [`dispatch`]: argument classification and the lock decision
//! - [`session`]: the platform lock capability and its test double
//! - [`error`]: error types

pub mod dispatch;
pub mod error;
pub mod session;
