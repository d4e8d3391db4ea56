use std::collections::HashMap;

use rayon::prelude::*;
use spdlog::info;

use crate::content::post_source::PostSource;
use crate::content::PostRecord;
use crate::error::FeedError;

/// Resolves every document of the source in parallel. Any failure fails the
/// whole collection so an incomplete feed is never produced.
pub fn collect_posts<S: PostSource + ?Sized>(source: &S) -> Result<Vec<PostRecord>, FeedError> {
    let documents = source.documents()?;
    info!("Resolving {} posts", documents.len());

    let records = documents
        .par_iter()
        .map(|document| source.resolve(document))
        .collect::<Result<Vec<_>, _>>()?;

    check_unique_slugs(&records)?;
    Ok(records)
}

fn check_unique_slugs(records: &[PostRecord]) -> Result<(), FeedError> {
    let mut seen = HashMap::with_capacity(records.len());
    for record in records {
        if let Some(first) = seen.insert(&record.slug, record) {
            return Err(FeedError::DuplicateSlug {
                slug: record.slug.0.clone(),
                first: first.path.clone(),
                second: record.path.clone(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use chrono::{TimeZone, Utc};

    use crate::content::post_source::PostDocument;
    use crate::content::{FrontMatter, PostSlug};

    use super::*;

    struct MemPostSource {
        slugs: Vec<&'static str>,
        broken: Option<&'static str>,
    }

    impl PostSource for MemPostSource {
        fn documents(&self) -> Result<Vec<PostDocument>, FeedError> {
            Ok(self.slugs.iter().map(|slug| PostDocument {
                path: PathBuf::from(format!("blog/{}.md", slug)),
                slug: PostSlug(slug.to_string()),
            }).collect())
        }

        fn resolve(&self, document: &PostDocument) -> Result<PostRecord, FeedError> {
            if self.broken == Some(document.slug.0.as_str()) {
                return Err(FeedError::malformed(&document.path, "title is missing"));
            }
            Ok(PostRecord {
                path: document.path.clone(),
                slug: document.slug.clone(),
                front_matter: FrontMatter {
                    title: document.slug.0.clone(),
                    publish_date: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
                    description: None,
                    tags: vec![],
                },
                rendered_body: None,
            })
        }
    }

    #[test]
    fn test_collect_keeps_source_order() {
        let slugs: Vec<&'static str> = vec!["a", "b", "c", "d", "e", "f", "g", "h"];
        let source = MemPostSource { slugs: slugs.clone(), broken: None };
        let records = collect_posts(&source).unwrap();
        let titles: Vec<&str> = records.iter().map(|r| r.front_matter.title.as_str()).collect();
        assert_eq!(titles, slugs);
    }

    #[test]
    fn test_one_failure_fails_all() {
        let source = MemPostSource { slugs: vec!["a", "b", "c"], broken: Some("b") };
        let err = collect_posts(&source).unwrap_err();
        assert!(matches!(err, FeedError::MalformedFrontmatter { .. }));
    }

    #[test]
    fn test_duplicate_slug() {
        let source = MemPostSource { slugs: vec!["a", "b", "a"], broken: None };
        let err = collect_posts(&source).unwrap_err();
        match err {
            FeedError::DuplicateSlug { slug, .. } => assert_eq!(slug, "a"),
            e => panic!("unexpected error {}", e),
        }
    }

    #[test]
    fn test_empty_source() {
        let source = MemPostSource { slugs: vec![], broken: None };
        assert!(collect_posts(&source).unwrap().is_empty());
    }
}
