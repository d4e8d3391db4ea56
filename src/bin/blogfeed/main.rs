use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use spdlog::{info, warn};

use blogfeed::config::Config;
use blogfeed::content::post_source::DirPostSource;
use blogfeed::feed_processor::build_feeds;
use blogfeed::logger::configure_logger;
use blogfeed::server::server_run;

use crate::config::open_config;

mod config;

const CFG_FILE_NAME: &str = "blogfeed.toml";

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Config path
    #[arg(short, long, global = true)]
    config_path: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve /rss.xml and /sitemap.xml
    Serve,
    /// Write rss.xml and sitemap.xml to a directory
    Build {
        /// Output directory
        #[arg(short, long)]
        out_dir: PathBuf,
    },
}

fn build_cmd(config: &Config, out_dir: &Path) -> Result<()> {
    let source = DirPostSource::new(config.paths.posts_dir.clone(), config.paths.index_file_name());
    let now = Utc::now();

    let feeds = build_feeds(config, &source, &now)?;

    fs::create_dir_all(out_dir)
        .with_context(|| format!("Error creating {}", out_dir.display()))?;
    for (file_name, body) in [("rss.xml", feeds.rss), ("sitemap.xml", feeds.sitemap)] {
        let path = out_dir.join(file_name);
        fs::write(&path, body).with_context(|| format!("Error writing {}", path.display()))?;
        info!("Wrote {}", path.display());
    }

    Ok(())
}

#[ntex::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config = open_config(args.config_path)?;

    if let Some(ref log) = config.log {
        if let Err(err) = configure_logger(log) {
            warn!("Error creating logger sinks. Using console instead. Desc={}", err);
        }
    }

    match args.command {
        Command::Serve => {
            info!("Listening on {}:{}", config.server.address, config.server.port);
            server_run(config).await?;
        }
        Command::Build { out_dir } => build_cmd(&config, &out_dir)?,
    }

    Ok(())
}
