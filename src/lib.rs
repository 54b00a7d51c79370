// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod config;        // config file + path resolution
pub mod errors;        // error handling
pub mod feed;          // news feed records
pub mod geo;           // city coordinates + haversine
pub mod ingest;        // JSON/XML job documents
pub mod merge;         // dictionary merging
pub mod observability;
pub mod rewrite;       // sentence clean-up
pub mod stats;         // word + letter statistics
pub mod store;         // SQLite persistence
