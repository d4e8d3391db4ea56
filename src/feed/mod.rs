use std::fmt;
use std::fmt::{Display, Formatter};

use chrono::{DateTime, Utc};

pub mod normalizer;
pub mod ordering;
pub mod tags;

/// One `<item>` of the RSS channel.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedItem {
    pub url: String,
    pub title: String,
    pub description: String,
    pub content: String,
    pub tags: Vec<String>,
    pub publish_date: DateTime<Utc>,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ChangeFrequency {
    Daily,
    Weekly,
    Monthly,
}

impl Display for ChangeFrequency {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let s = match self {
            ChangeFrequency::Daily => "daily",
            ChangeFrequency::Weekly => "weekly",
            ChangeFrequency::Monthly => "monthly",
        };
        write!(f, "{}", s)
    }
}

/// Sitemap priority in tenths, 0 to 10.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Priority(u8);

impl Priority {
    pub const HOME: Priority = Priority(10);
    pub const ABOUT: Priority = Priority(9);
    pub const POST: Priority = Priority(8);
    pub const TAG: Priority = Priority(6);
}

impl Display for Priority {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.0 / 10, self.0 % 10)
    }
}

/// One `<url>` of the sitemap.
#[derive(Debug, Clone, PartialEq)]
pub struct SitemapEntry {
    pub url: String,
    pub last_modified: DateTime<Utc>,
    pub priority: Priority,
    pub change_frequency: ChangeFrequency,
}
