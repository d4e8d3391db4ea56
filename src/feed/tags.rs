use std::collections::BTreeSet;

use crate::content::PostRecord;
use crate::text_utils::slugify_tag;

/// Every tag used by any post, slugified, without duplicates, sorted.
pub fn aggregate_tags(records: &[PostRecord]) -> BTreeSet<String> {
    records
        .iter()
        .flat_map(|record| record.front_matter.tags.iter())
        .map(|tag| slugify_tag(tag))
        .filter(|slug| !slug.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use chrono::{TimeZone, Utc};

    use crate::content::{FrontMatter, PostSlug};

    use super::*;

    fn record(slug: &str, tags: &[&str]) -> PostRecord {
        PostRecord {
            path: PathBuf::from(format!("blog/{}.md", slug)),
            slug: PostSlug(slug.to_string()),
            front_matter: FrontMatter {
                title: slug.to_string(),
                publish_date: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
                description: None,
                tags: tags.iter().map(|t| t.to_string()).collect(),
            },
            rendered_body: None,
        }
    }

    #[test]
    fn test_aggregate() {
        let records = vec![
            record("a", &["Web Dev", "Go"]),
            record("b", &[]),
            record("c", &["web-dev", "Rust", "  "]),
        ];
        let tags: Vec<String> = aggregate_tags(&records).into_iter().collect();
        assert_eq!(tags, ["go", "rust", "web-dev"]);
    }

    #[test]
    fn test_no_tags() {
        assert!(aggregate_tags(&[record("a", &[])]).is_empty());
    }
}
