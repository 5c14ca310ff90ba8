//! simplebot-core — the canned-reply responder, no IO.
//!
//! A `Responder` normalizes a message (trim + lower-case) and looks it up in
//! a fixed trigger table, falling back to a default reply. Frontends (the
//! `simplebot` CLI) build one from `Config` and print what it says.

pub mod config;
pub mod replies;
pub mod responder;
pub mod transcript;

pub use responder::{normalize, Responder};
