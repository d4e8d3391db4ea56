use std::path::Path;

use gray_matter::engine::YAML;
use gray_matter::Matter;
use serde::Deserialize;

use crate::content::FrontMatter;
use crate::error::FeedError;
use crate::text_utils::parse_publish_date;

/// A YAML scalar read as text, so `title: 2024` or `tags: [Go, 2024]` work.
#[derive(Deserialize, Debug)]
#[serde(untagged)]
enum TextValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
}

impl From<TextValue> for String {
    fn from(value: TextValue) -> Self {
        match value {
            TextValue::Text(s) => s,
            TextValue::Integer(i) => i.to_string(),
            TextValue::Float(f) => f.to_string(),
            TextValue::Boolean(b) => b.to_string(),
        }
    }
}

/// Front-matter as written by authors, before validation.
/// Keys left empty (`tags:`) come in as null and are treated as absent.
#[derive(Deserialize, Default, Debug)]
struct RawFrontMatter {
    title: Option<TextValue>,
    #[serde(rename = "publishDate", alias = "publish_date")]
    publish_date: Option<TextValue>,
    description: Option<TextValue>,
    tags: Option<Vec<TextValue>>,
}

/// Splits a markdown document into its validated front-matter and body.
pub fn parse_document(file_name: &Path, raw_content: &str) -> Result<(FrontMatter, String), FeedError> {
    let matter = Matter::<YAML>::new();
    let parsed = matter
        .parse::<RawFrontMatter>(raw_content)
        .map_err(|e| FeedError::malformed(file_name, e.to_string()))?;

    let Some(raw) = parsed.data else {
        return Err(FeedError::malformed(file_name, "front-matter block is missing"));
    };

    let front_matter = validate(file_name, raw)?;
    Ok((front_matter, parsed.content))
}

fn validate(file_name: &Path, raw: RawFrontMatter) -> Result<FrontMatter, FeedError> {
    let title = match raw.title.map(String::from) {
        Some(title) if !title.trim().is_empty() => title,
        _ => return Err(FeedError::malformed(file_name, "title is missing")),
    };

    let publish_date = match raw.publish_date.map(String::from) {
        Some(date) => parse_publish_date(&date).map_err(|e| FeedError::malformed(file_name, e))?,
        None => return Err(FeedError::malformed(file_name, "publishDate is missing")),
    };

    let description = raw.description.map(String::from).filter(|d| !d.is_empty());
    let tags = raw.tags
        .unwrap_or_default()
        .into_iter()
        .map(String::from)
        .collect();

    Ok(FrontMatter {
        title,
        publish_date,
        description,
        tags,
    })
}
