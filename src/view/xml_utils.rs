use std::io::Cursor;

use quick_xml::events::{BytesCData, BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

pub type XmlWriter = Writer<Cursor<Vec<u8>>>;

const CDATA_END: &str = "]]>";

pub fn new_document() -> quick_xml::Result<XmlWriter> {
    let mut writer = Writer::new(Cursor::new(Vec::new()));

    // <?xml version="1.0" encoding="UTF-8"?>
    let decl = Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None));
    writer.write_event(decl)?;

    Ok(writer)
}

pub fn into_string(writer: XmlWriter) -> String {
    // Everything written comes from &str
    String::from_utf8_lossy(&writer.into_inner().into_inner()).into_owned()
}

pub fn push_text(writer: &mut XmlWriter, tag: &str, text: &str) -> quick_xml::Result<()> {
    writer.write_event(Event::Start(BytesStart::new(tag)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(tag)))?;
    Ok(())
}

/// `]]>` cannot appear inside a CDATA section, so the text is split right
/// after `]]` and continued in a new section.
pub fn push_cdata(writer: &mut XmlWriter, tag: &str, text: &str) -> quick_xml::Result<()> {
    writer.write_event(Event::Start(BytesStart::new(tag)))?;

    let mut rest = text;
    while let Some(pos) = rest.find(CDATA_END) {
        let (head, tail) = rest.split_at(pos + 2);
        writer.write_event(Event::CData(BytesCData::new(head)))?;
        rest = tail;
    }
    writer.write_event(Event::CData(BytesCData::new(rest)))?;

    writer.write_event(Event::End(BytesEnd::new(tag)))?;
    Ok(())
}
