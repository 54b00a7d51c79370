// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod flat;
pub mod news_feed;
pub mod record;

pub use flat::{parse_line, FlatFeedIngestor, LineOutcome};
pub use news_feed::NewsFeed;
pub use record::Record;
