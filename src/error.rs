use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("Could not enumerate posts in {}: {source}", .path.display())]
    Collection {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Could not read post {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Malformed front-matter in {}: {reason}", .path.display())]
    MalformedFrontmatter { path: PathBuf, reason: String },

    #[error("Posts {} and {} share the slug {slug}", .first.display(), .second.display())]
    DuplicateSlug {
        slug: String,
        first: PathBuf,
        second: PathBuf,
    },

    #[error("Could not render {}: {reason}", .path.display())]
    Render { path: PathBuf, reason: String },

    #[error("Error serializing feed: {0}")]
    Serialization(String),
}

impl FeedError {
    pub fn malformed(path: &Path, reason: impl Into<String>) -> Self {
        FeedError::MalformedFrontmatter {
            path: path.to_path_buf(),
            reason: reason.into(),
        }
    }
}

impl From<quick_xml::Error> for FeedError {
    fn from(value: quick_xml::Error) -> Self {
        FeedError::Serialization(value.to_string())
    }
}
