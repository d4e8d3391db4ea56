use chrono::{DateTime, Utc};
use spdlog::info;

use crate::config::Config;
use crate::content::collector::collect_posts;
use crate::content::post_source::PostSource;
use crate::content::PostRecord;
use crate::error::FeedError;
use crate::feed::normalizer::{tag_url, to_feed_item, to_sitemap_entry};
use crate::feed::ordering::{limit, sort_by_date_desc};
use crate::feed::tags::aggregate_tags;
use crate::feed::{ChangeFrequency, FeedItem, Priority, SitemapEntry};
use crate::view::response::XmlResponse;
use crate::view::rss_renderer::RssChannel;
use crate::view::sitemap_renderer::Sitemap;

pub fn render_rss(config: &Config, records: &[PostRecord], build_date: &DateTime<Utc>) -> Result<String, FeedError> {
    let base_url = config.site.base_url.as_str();
    let mut items: Vec<FeedItem> = records.iter().map(|r| to_feed_item(base_url, r)).collect();
    sort_by_date_desc(&mut items);
    limit(&mut items, config.feed.rss_max_items);

    let channel = RssChannel {
        site: &config.site,
        contact: &config.contact,
    };
    Ok(channel.render(&items, build_date)?)
}

/// Static pages first, then posts, then tag listings.
pub fn sitemap_entries(config: &Config, records: &[PostRecord], build_date: &DateTime<Utc>) -> Vec<SitemapEntry> {
    let base_url = config.site.base_url.as_str();
    let tags = aggregate_tags(records);

    let mut entries = Vec::with_capacity(2 + records.len() + tags.len());
    entries.push(SitemapEntry {
        url: base_url.to_string(),
        last_modified: *build_date,
        priority: Priority::HOME,
        change_frequency: ChangeFrequency::Daily,
    });
    entries.push(SitemapEntry {
        url: format!("{}/about", base_url),
        last_modified: *build_date,
        priority: Priority::ABOUT,
        change_frequency: ChangeFrequency::Monthly,
    });

    entries.extend(records.iter().map(|r| to_sitemap_entry(base_url, r)));

    entries.extend(tags.iter().map(|tag| SitemapEntry {
        url: tag_url(base_url, tag),
        last_modified: *build_date,
        priority: Priority::TAG,
        change_frequency: ChangeFrequency::Weekly,
    }));

    entries
}

pub fn render_sitemap(config: &Config, records: &[PostRecord], build_date: &DateTime<Utc>) -> Result<String, FeedError> {
    let entries = sitemap_entries(config, records, build_date);
    Ok(Sitemap { entries: &entries }.render()?)
}

pub fn build_rss<S: PostSource + ?Sized>(config: &Config, source: &S, build_date: &DateTime<Utc>) -> Result<XmlResponse, FeedError> {
    let records = collect_posts(source)?;
    let body = render_rss(config, &records, build_date)?;
    info!("RSS feed generated with {} posts", records.len());
    Ok(XmlResponse::new(body, config.feed.cache_max_age_secs()))
}

pub fn build_sitemap<S: PostSource + ?Sized>(config: &Config, source: &S, build_date: &DateTime<Utc>) -> Result<XmlResponse, FeedError> {
    let records = collect_posts(source)?;
    let body = render_sitemap(config, &records, build_date)?;
    info!("Sitemap generated with {} posts", records.len());
    Ok(XmlResponse::new(body, config.feed.cache_max_age_secs()))
}

pub struct FeedSet {
    pub rss: String,
    pub sitemap: String,
}

/// Both documents from a single read of the source, so they always agree.
pub fn build_feeds<S: PostSource + ?Sized>(config: &Config, source: &S, build_date: &DateTime<Utc>) -> Result<FeedSet, FeedError> {
    let records = collect_posts(source)?;
    let rss = render_rss(config, &records, build_date)?;
    let sitemap = render_sitemap(config, &records, build_date)?;
    info!("Feeds generated with {} posts", records.len());
    Ok(FeedSet { rss, sitemap })
}
