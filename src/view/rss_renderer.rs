use chrono::{DateTime, Utc};
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};

use crate::config::{Contact, Site};
use crate::feed::FeedItem;
use crate::text_utils::format_http_date;
use crate::view::xml_utils::{into_string, new_document, push_cdata, push_text, XmlWriter};

const ATOM_NS: &str = "http://www.w3.org/2005/Atom";
const CONTENT_NS: &str = "http://purl.org/rss/1.0/modules/content/";

/* Example
<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0" xmlns:atom="http://www.w3.org/2005/Atom" xmlns:content="http://purl.org/rss/1.0/modules/content/">
  <channel>
    <title>Mo Shaban - Tech Blog</title>
    <description>Tech insights, web development tutorials, and programming thoughts</description>
    <link>https://moshaban.dev</link>
    <atom:link href="https://moshaban.dev/rss.xml" rel="self" type="application/rss+xml"/>
    <language>en-us</language>
    <lastBuildDate>Sat, 01 Jun 2024 10:00:00 GMT</lastBuildDate>
    <managingEditor>hello@moshaban.dev (Mo Shaban)</managingEditor>
    <webMaster>hello@moshaban.dev (Mo Shaban)</webMaster>
    <image>
      <url>https://moshaban.dev/favicon.svg</url>
      <title>Mo Shaban - Tech Blog</title>
      <link>https://moshaban.dev</link>
    </image>
    <item>
      <title><![CDATA[Hello]]></title>
      <description><![CDATA[First post]]></description>
      <link>https://moshaban.dev/blog/hello</link>
      <guid isPermaLink="true">https://moshaban.dev/blog/hello</guid>
      <pubDate>Mon, 01 Jan 2024 00:00:00 GMT</pubDate>
      <author>hello@moshaban.dev (Mo Shaban)</author>
      <category><![CDATA[go]]></category>
      <content:encoded><![CDATA[<p>Hello there</p>]]></content:encoded>
    </item>
  </channel>
</rss>
*/

pub struct RssChannel<'a> {
    pub site: &'a Site,
    pub contact: &'a Contact,
}

impl<'a> RssChannel<'a> {
    /// Items are written in the given order.
    pub fn render(&self, items: &[FeedItem], build_date: &DateTime<Utc>) -> quick_xml::Result<String> {
        let mut writer = new_document()?;
        let identity = self.contact.identity();
        let site_url = self.site.base_url.as_str();

        let mut rss = BytesStart::new("rss");
        rss.push_attribute(("version", "2.0"));
        rss.push_attribute(("xmlns:atom", ATOM_NS));
        rss.push_attribute(("xmlns:content", CONTENT_NS));
        writer.write_event(Event::Start(rss))?;

        writer.write_event(Event::Start(BytesStart::new("channel")))?;

        push_text(&mut writer, "title", &self.site.name)?;
        push_text(&mut writer, "description", &self.site.description)?;
        push_text(&mut writer, "link", site_url)?;

        let self_link = format!("{}/rss.xml", site_url);
        let mut atom_link = BytesStart::new("atom:link");
        atom_link.push_attribute(("href", self_link.as_str()));
        atom_link.push_attribute(("rel", "self"));
        atom_link.push_attribute(("type", "application/rss+xml"));
        writer.write_event(Event::Empty(atom_link))?;

        push_text(&mut writer, "language", self.site.language())?;
        push_text(&mut writer, "lastBuildDate", &format_http_date(build_date))?;
        push_text(&mut writer, "managingEditor", &identity)?;
        push_text(&mut writer, "webMaster", &identity)?;

        writer.write_event(Event::Start(BytesStart::new("image")))?;
        push_text(&mut writer, "url", &self.site.favicon_url())?;
        push_text(&mut writer, "title", &self.site.name)?;
        push_text(&mut writer, "link", site_url)?;
        writer.write_event(Event::End(BytesEnd::new("image")))?;

        for item in items {
            push_item(&mut writer, item, &identity)?;
        }

        writer.write_event(Event::End(BytesEnd::new("channel")))?;
        writer.write_event(Event::End(BytesEnd::new("rss")))?;

        Ok(into_string(writer))
    }
}

fn push_item(writer: &mut XmlWriter, item: &FeedItem, identity: &str) -> quick_xml::Result<()> {
    writer.write_event(Event::Start(BytesStart::new("item")))?;

    push_cdata(writer, "title", &item.title)?;
    push_cdata(writer, "description", &item.description)?;
    push_text(writer, "link", &item.url)?;

    let mut guid = BytesStart::new("guid");
    guid.push_attribute(("isPermaLink", "true"));
    writer.write_event(Event::Start(guid))?;
    writer.write_event(Event::Text(BytesText::new(&item.url)))?;
    writer.write_event(Event::End(BytesEnd::new("guid")))?;

    push_text(writer, "pubDate", &format_http_date(&item.publish_date))?;
    push_text(writer, "author", identity)?;

    for tag in item.tags.iter() {
        push_cdata(writer, "category", tag)?;
    }

    push_cdata(writer, "content:encoded", &item.content)?;

    writer.write_event(Event::End(BytesEnd::new("item")))?;
    Ok(())
}
