// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! Each message type implements `Display` for the human-readable line and
//! [`StructuredLog`] to emit it at its documented level with the message's
//! fields attached as structured tracing fields.

pub mod feed;
pub mod ingest;
pub mod stats;
pub mod store;

/// Emit a message through `tracing` at the message's own level.
pub trait StructuredLog {
    fn log(&self);
}
