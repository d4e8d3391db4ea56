pub mod config;
pub mod content;
pub mod error;
pub mod feed;
pub mod feed_processor;
pub mod logger;
pub mod server;
pub mod view;
mod test_data;
mod text_utils;
