// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod config;
mod geo;
mod ingest;
mod stats;
mod store;

pub use config::ConfigError;
pub use geo::GeoError;
pub use ingest::IngestError;
pub use stats::StatsError;
pub use store::StoreError;
