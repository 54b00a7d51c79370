// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};

/// Expiration dates and command-line dates use this format
pub const DATE_FORMAT: &str = "%Y-%m-%d";
const SEPARATOR_WIDTH: usize = 50;

/// A publishable feed entry.
///
/// Timestamps are captured when the record is built; constructors take the
/// current time as an argument.
#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    News {
        text: String,
        city: String,
        published_at: NaiveDateTime,
    },
    PrivateAd {
        text: String,
        expires_on: NaiveDate,
        days_left: i64,
    },
    Quote {
        text: String,
        author: String,
        published_at: NaiveTime,
    },
}

/// Whole days from `now` until midnight of `expires_on`, rounded down.
fn days_until(expires_on: NaiveDate, now: NaiveDateTime) -> i64 {
    let days = expires_on.signed_duration_since(now.date()).num_days();
    if now.num_seconds_from_midnight() == 0 && now.nanosecond() == 0 {
        days
    } else {
        days - 1
    }
}

impl Record {
    pub fn news(text: impl Into<String>, city: impl Into<String>, now: NaiveDateTime) -> Self {
        Record::News {
            text: text.into(),
            city: city.into(),
            published_at: now,
        }
    }

    pub fn private_ad(text: impl Into<String>, expires_on: NaiveDate, now: NaiveDateTime) -> Self {
        Record::PrivateAd {
            text: text.into(),
            expires_on,
            days_left: days_until(expires_on, now),
        }
    }

    pub fn quote(text: impl Into<String>, author: impl Into<String>, now: NaiveDateTime) -> Self {
        Record::Quote {
            text: text.into(),
            author: author.into(),
            published_at: now.time(),
        }
    }

    pub fn render(&self) -> String {
        let separator = "-".repeat(SEPARATOR_WIDTH);
        match self {
            Record::News {
                text,
                city,
                published_at,
            } => format!(
                "News:\n{}\nCity: {}\nPublished at: {}\n{}",
                text,
                city,
                published_at.format("%Y-%m-%d %H:%M:%S"),
                separator
            ),
            Record::PrivateAd {
                text,
                expires_on,
                days_left,
            } => format!(
                "Private Ad:\n{}\nExpiration date: {}\nDays left: {}\n{}",
                text,
                expires_on.format(DATE_FORMAT),
                days_left,
                separator
            ),
            Record::Quote {
                text,
                author,
                published_at,
            } => format!(
                "Motivational Quote:\n\"{}\" - {}\nPublished at: {}\n{}",
                text,
                author,
                published_at.format("%H:%M:%S"),
                separator
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(date: &str, time: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&format!("{} {}", date, time), "%Y-%m-%d %H:%M:%S").unwrap()
    }

    fn date(value: &str) -> NaiveDate {
        NaiveDate::parse_from_str(value, DATE_FORMAT).unwrap()
    }

    #[test]
    fn test_render_news() {
        let record = Record::news("Bridge reopened", "Kyiv", at("2024-05-01", "09:30:00"));
        assert_eq!(
            record.render(),
            format!(
                "News:\nBridge reopened\nCity: Kyiv\nPublished at: 2024-05-01 09:30:00\n{}",
                "-".repeat(50)
            )
        );
    }

    #[test]
    fn test_render_quote() {
        let record = Record::quote("Keep going", "Anonymous", at("2024-05-01", "18:05:09"));
        assert_eq!(
            record.render(),
            format!(
                "Motivational Quote:\n\"Keep going\" - Anonymous\nPublished at: 18:05:09\n{}",
                "-".repeat(50)
            )
        );
    }

    #[test]
    fn test_render_private_ad() {
        let record = Record::private_ad("Bike for sale", date("2024-05-11"), at("2024-05-01", "12:00:00"));
        assert_eq!(
            record.render(),
            format!(
                "Private Ad:\nBike for sale\nExpiration date: 2024-05-11\nDays left: 9\n{}",
                "-".repeat(50)
            )
        );
    }

    #[test]
    fn test_days_left_rounds_down() {
        let expires = date("2024-05-11");
        assert_eq!(days_until(expires, at("2024-05-01", "00:00:00")), 10);
        assert_eq!(days_until(expires, at("2024-05-01", "00:00:01")), 9);
        assert_eq!(days_until(expires, at("2024-05-11", "08:00:00")), -1);
        assert_eq!(days_until(expires, at("2024-05-13", "00:00:00")), -2);
    }
}
