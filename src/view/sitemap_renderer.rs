use quick_xml::events::{BytesEnd, BytesStart, Event};

use crate::feed::SitemapEntry;
use crate::text_utils::format_iso8601;
use crate::view::xml_utils::{into_string, new_document, push_text, XmlWriter};

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/* Example
<?xml version="1.0" encoding="UTF-8"?>
<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
  <url>
    <loc>https://moshaban.dev</loc>
    <lastmod>2024-06-01T10:00:00.000Z</lastmod>
    <changefreq>daily</changefreq>
    <priority>1.0</priority>
  </url>
</urlset>
*/

pub struct Sitemap<'a> {
    pub entries: &'a [SitemapEntry],
}

impl Sitemap<'_> {
    pub fn render(&self) -> quick_xml::Result<String> {
        let mut writer = new_document()?;

        let mut urlset = BytesStart::new("urlset");
        urlset.push_attribute(("xmlns", SITEMAP_NS));
        writer.write_event(Event::Start(urlset))?;

        for entry in self.entries {
            push_entry(&mut writer, entry)?;
        }

        writer.write_event(Event::End(BytesEnd::new("urlset")))?;

        Ok(into_string(writer))
    }
}

fn push_entry(writer: &mut XmlWriter, entry: &SitemapEntry) -> quick_xml::Result<()> {
    writer.write_event(Event::Start(BytesStart::new("url")))?;
    push_text(writer, "loc", &entry.url)?;
    push_text(writer, "lastmod", &format_iso8601(&entry.last_modified))?;
    push_text(writer, "changefreq", &entry.change_frequency.to_string())?;
    push_text(writer, "priority", &entry.priority.to_string())?;
    writer.write_event(Event::End(BytesEnd::new("url")))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use crate::feed::{ChangeFrequency, Priority};

    use super::*;

    #[test]
    fn render_xml() {
        let entries = vec![
            SitemapEntry {
                url: "https://moshaban.dev".to_string(),
                last_modified: Utc.with_ymd_and_hms(2024, 6, 1, 10, 0, 0).unwrap(),
                priority: Priority::HOME,
                change_frequency: ChangeFrequency::Daily,
            },
            SitemapEntry {
                url: "https://moshaban.dev/tags/c&c".to_string(),
                last_modified: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
                priority: Priority::TAG,
                change_frequency: ChangeFrequency::Weekly,
            },
        ];

        let xml = Sitemap { entries: &entries }.render().unwrap();
        assert_eq!(xml, EXPECTED);
    }

    #[test]
    fn render_empty() {
        let xml = Sitemap { entries: &[] }.render().unwrap();
        assert_eq!(xml, concat!(
            r#"<?xml version="1.0" encoding="UTF-8"?>"#,
            r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9"></urlset>"#,
        ));
    }

    const EXPECTED: &str = concat!(
        r#"<?xml version="1.0" encoding="UTF-8"?>"#,
        r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">"#,
        r#"<url><loc>https://moshaban.dev</loc><lastmod>2024-06-01T10:00:00.000Z</lastmod>"#,
        r#"<changefreq>daily</changefreq><priority>1.0</priority></url>"#,
        r#"<url><loc>https://moshaban.dev/tags/c&amp;c</loc><lastmod>2024-01-01T00:00:00.000Z</lastmod>"#,
        r#"<changefreq>weekly</changefreq><priority>0.6</priority></url>"#,
        r#"</urlset>"#,
    );
}
