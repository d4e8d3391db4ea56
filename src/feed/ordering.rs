use crate::feed::FeedItem;

/// Most recent first. `sort_by` is stable, so equal dates keep input order.
pub fn sort_by_date_desc(items: &mut [FeedItem]) {
    items.sort_by(|a, b| b.publish_date.cmp(&a.publish_date));
}

pub fn limit(items: &mut Vec<FeedItem>, max_items: Option<usize>) {
    if let Some(max_items) = max_items {
        items.truncate(max_items);
    }
}
