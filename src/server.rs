use std::io;
use std::sync::Arc;

use chrono::Utc;
use ntex::web;
use spdlog::{error, info};

use crate::config::Config;
use crate::content::post_source::DirPostSource;
use crate::error::FeedError;
use crate::feed_processor::{build_rss, build_sitemap};
use crate::view::response::XmlResponse;

pub struct AppState {
    pub config: Config,
}

impl AppState {
    fn post_source(&self) -> DirPostSource {
        DirPostSource::new(
            self.config.paths.posts_dir.clone(),
            self.config.paths.index_file_name(),
        )
    }
}

fn to_http_response(feed_name: &str, res: Result<XmlResponse, FeedError>) -> web::HttpResponse {
    match res {
        Ok(xml) => web::HttpResponse::Ok()
            .content_type(xml.content_type)
            .header("Cache-Control", xml.cache_control)
            .body(xml.body),
        Err(e) => {
            error!("Error generating {}: {}", feed_name, e);
            web::HttpResponse::InternalServerError()
                .content_type("text/plain; charset=utf-8")
                .body(format!("Error generating {}: {}", feed_name, e))
        }
    }
}

#[web::get("/rss.xml")]
async fn rss(state: web::types::State<Arc<AppState>>) -> web::HttpResponse {
    let res = build_rss(&state.config, &state.post_source(), &Utc::now());
    to_http_response("rss.xml", res)
}

#[web::get("/sitemap.xml")]
async fn sitemap(state: web::types::State<Arc<AppState>>) -> web::HttpResponse {
    let res = build_sitemap(&state.config, &state.post_source(), &Utc::now());
    to_http_response("sitemap.xml", res)
}

pub async fn server_run(config: Config) -> io::Result<()> {
    let bind_addr = config.server.address.clone();
    let bind_port = config.server.port;
    info!("Serving posts from {}", config.paths.posts_dir.display());

    let app_state = Arc::new(AppState { config });

    web::HttpServer::new(move || {
        web::App::new()
            .state(app_state.clone())
            .service(rss)
            .service(sitemap)
    })
        .bind((bind_addr, bind_port))?
        .run()
        .await
}
