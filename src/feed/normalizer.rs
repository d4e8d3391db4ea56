use url::Url;

use crate::content::{PostRecord, PostSlug};
use crate::feed::{ChangeFrequency, FeedItem, Priority, SitemapEntry};
use crate::text_utils::slugify_tag;

/// Appends percent-encoded path segments to the base URL.
fn join_segments(base_url: &str, segments: &[&str]) -> String {
    let Ok(mut url) = Url::parse(base_url) else {
        return format!("{}/{}", base_url, segments.join("/"));
    };
    if let Ok(mut path) = url.path_segments_mut() {
        path.pop_if_empty().extend(segments);
    }
    url.to_string()
}

pub fn post_url(base_url: &str, slug: &PostSlug) -> String {
    join_segments(base_url, &["blog", slug.0.as_str()])
}

pub fn tag_url(base_url: &str, tag_slug: &str) -> String {
    join_segments(base_url, &["tags", tag_slug])
}

pub fn to_feed_item(base_url: &str, record: &PostRecord) -> FeedItem {
    let fm = &record.front_matter;
    let description = fm.description.clone().unwrap_or_default();

    // body, then description, then nothing
    let content = match record.rendered_body {
        Some(ref body) if !body.is_empty() => body.clone(),
        _ => description.clone(),
    };

    let mut tags: Vec<String> = Vec::with_capacity(fm.tags.len());
    for tag in fm.tags.iter().map(|t| slugify_tag(t)) {
        if !tag.is_empty() && !tags.contains(&tag) {
            tags.push(tag);
        }
    }

    FeedItem {
        url: post_url(base_url, &record.slug),
        title: fm.title.clone(),
        description,
        content,
        tags,
        publish_date: fm.publish_date,
    }
}

pub fn to_sitemap_entry(base_url: &str, record: &PostRecord) -> SitemapEntry {
    SitemapEntry {
        url: post_url(base_url, &record.slug),
        last_modified: record.front_matter.publish_date,
        priority: Priority::POST,
        change_frequency: ChangeFrequency::Monthly,
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use chrono::{TimeZone, Utc};

    use crate::content::FrontMatter;

    use super::*;

    const BASE: &str = "https://moshaban.dev";

    fn record(description: Option<&str>, body: Option<&str>, tags: &[&str]) -> PostRecord {
        PostRecord {
            path: PathBuf::from("blog/hello.md"),
            slug: PostSlug("hello".to_string()),
            front_matter: FrontMatter {
                title: "Hello".to_string(),
                publish_date: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
                description: description.map(str::to_string),
                tags: tags.iter().map(|t| t.to_string()).collect(),
            },
            rendered_body: body.map(str::to_string),
        }
    }

    #[test]
    fn test_urls() {
        let slug = PostSlug("hello".to_string());
        assert_eq!(post_url(BASE, &slug), "https://moshaban.dev/blog/hello");
        assert_eq!(tag_url(BASE, "web-dev"), "https://moshaban.dev/tags/web-dev");
    }

    #[test]
    fn test_urls_are_percent_encoded() {
        let slug = PostSlug("My Post".to_string());
        assert_eq!(post_url(BASE, &slug), "https://moshaban.dev/blog/My%20Post");
        assert_eq!(tag_url(BASE, "c#"), "https://moshaban.dev/tags/c%23");
        assert_eq!(tag_url(BASE, "a/b?"), "https://moshaban.dev/tags/a%2Fb%3F");
        assert_eq!(tag_url(BASE, "café"), "https://moshaban.dev/tags/caf%C3%A9");
    }

    #[test]
    fn test_urls_under_base_path() {
        let slug = PostSlug("hello".to_string());
        assert_eq!(post_url("https://example.com/site", &slug), "https://example.com/site/blog/hello");
    }

    #[test]
    fn test_content_prefers_body() {
        let item = to_feed_item(BASE, &record(Some("desc"), Some("<p>body</p>"), &[]));
        assert_eq!(item.content, "<p>body</p>");
        assert_eq!(item.description, "desc");
    }

    #[test]
    fn test_content_falls_back_to_description() {
        let item = to_feed_item(BASE, &record(Some("desc"), None, &[]));
        assert_eq!(item.content, "desc");
    }

    #[test]
    fn test_content_falls_back_to_empty() {
        let item = to_feed_item(BASE, &record(None, None, &[]));
        assert_eq!(item.content, "");
        assert_eq!(item.description, "");
        assert!(item.tags.is_empty());
    }

    #[test]
    fn test_tags_are_slugified() {
        let item = to_feed_item(BASE, &record(None, None, &["Go", "Web Dev", "web dev", " "]));
        assert_eq!(item.tags, ["go", "web-dev"]);
    }

    #[test]
    fn test_sitemap_entry() {
        let entry = to_sitemap_entry(BASE, &record(None, None, &[]));
        assert_eq!(entry.url, "https://moshaban.dev/blog/hello");
        assert_eq!(entry.last_modified, Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
        assert_eq!(entry.priority, Priority::POST);
        assert_eq!(entry.change_frequency, ChangeFrequency::Monthly);
    }
}
