// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging.
//!
//! This module provides centralized message types for all diagnostic and operational
//! logging throughout feedstats. Message types follow a struct-based pattern
//! with `Display` trait implementation to:
//!
//! * Eliminate magic strings scattered throughout the codebase
//! * Keep operator-facing wording in one place
//! * Provide consistent, structured logging output
//!
//! # Architecture
//!
//! Messages are organized by subsystem:
//! * `messages::ingest` - Job document reading, record skipping, consume-once removal
//! * `messages::stats` - Statistics computation and CSV output
//! * `messages::store` - SQLite store lifecycle and ignored duplicates
//! * `messages::feed` - Record feed publishing
//!
//! # Usage
//!
//! ```rust
//! use feedstats::observability::messages::StructuredLog;
//! use feedstats::observability::messages::ingest::RecordSkipped;
//!
//! let msg = RecordSkipped {
//!     document: "input.json",
//!     index: 2,
//!     reason: "missing 'input_file'",
//! };
//!
//! msg.log();
//! ```

pub mod messages;
