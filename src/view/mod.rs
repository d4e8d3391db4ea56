pub mod response;
pub mod rss_renderer;
pub mod sitemap_renderer;
mod xml_utils;
