// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for the SQLite stores.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};

/// Connection opened and tables bootstrapped.
///
/// # Log Level
/// `info!` - Important operational event
pub struct StoreOpened<'a> {
    pub path: &'a str,
}

impl Display for StoreOpened<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Connected to database: {}", self.path)
    }
}

impl StructuredLog for StoreOpened<'_> {
    fn log(&self) {
        tracing::info!(path = self.path, "{}", self);
    }
}

/// Connection closed at shutdown.
///
/// # Log Level
/// `info!` - Important operational event
pub struct StoreClosed<'a> {
    pub path: &'a str,
}

impl Display for StoreClosed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Disconnected from the database: {}", self.path)
    }
}

impl StructuredLog for StoreClosed<'_> {
    fn log(&self) {
        tracing::info!(path = self.path, "{}", self);
    }
}

/// An insert hit an existing key and was ignored.
///
/// # Log Level
/// `debug!` - Expected on every re-run, not an error
///
/// # Example
/// ```
/// use feedstats::observability::messages::store::DuplicateKeyIgnored;
///
/// let msg = DuplicateKeyIgnored {
///     table: "word_count",
///     key: "the",
/// };
///
/// tracing::debug!("{}", msg);
/// ```
pub struct DuplicateKeyIgnored<'a> {
    pub table: &'a str,
    pub key: &'a str,
}

impl Display for DuplicateKeyIgnored<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Record for '{}' already exists in {}, ignoring duplicate",
            self.key, self.table
        )
    }
}

impl StructuredLog for DuplicateKeyIgnored<'_> {
    fn log(&self) {
        tracing::debug!(table = self.table, key = self.key, "{}", self);
    }
}
