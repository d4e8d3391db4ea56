use std::path::PathBuf;

use chrono::{DateTime, Utc};

pub mod collector;
pub mod front_matter;
pub mod markdown_renderer;
pub mod post_source;

#[derive(Debug, Clone, Eq, Hash, PartialEq, Ord, PartialOrd)]
pub struct PostSlug(pub String);

#[derive(Debug, Clone, PartialEq)]
pub struct FrontMatter {
    pub title: String,
    pub publish_date: DateTime<Utc>,
    pub description: Option<String>,
    pub tags: Vec<String>,
}

/// A post resolved from its source. Never modified after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct PostRecord {
    pub path: PathBuf,
    pub slug: PostSlug,
    pub front_matter: FrontMatter,
    pub rendered_body: Option<String>,
}
