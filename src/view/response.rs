pub const XML_CONTENT_TYPE: &str = "application/xml; charset=utf-8";

/// A serialized feed together with the headers it is served with.
#[derive(Debug, Clone, PartialEq)]
pub struct XmlResponse {
    pub body: String,
    pub content_type: &'static str,
    pub cache_control: String,
}

impl XmlResponse {
    pub fn new(body: String, cache_max_age_secs: u32) -> Self {
        XmlResponse {
            body,
            content_type: XML_CONTENT_TYPE,
            cache_control: format!("max-age={0}, s-maxage={0}", cache_max_age_secs),
        }
    }
}
