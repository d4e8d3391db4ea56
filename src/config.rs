use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::{env, fs, io};

use serde::Deserialize;

pub const DEFAULT_LANGUAGE: &str = "en-us";
pub const DEFAULT_FAVICON: &str = "/favicon.svg";
pub const DEFAULT_INDEX_BASE_NAME: &str = "index";
pub const DEFAULT_CACHE_MAX_AGE_SECS: u32 = 3600;

#[derive(Deserialize, Debug, Clone)]
pub struct Site {
    pub base_url: String,
    pub name: String,
    pub description: String,
    pub language: Option<String>,
    pub favicon: Option<String>,
}

impl Site {
    pub fn language(&self) -> &str {
        self.language.as_deref().unwrap_or(DEFAULT_LANGUAGE)
    }

    pub fn favicon_url(&self) -> String {
        let favicon = self.favicon.as_deref().unwrap_or(DEFAULT_FAVICON);
        if favicon.starts_with('/') {
            format!("{}{}", self.base_url, favicon)
        } else {
            format!("{}/{}", self.base_url, favicon)
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct Contact {
    pub name: String,
    pub email: String,
}

impl Contact {
    /// RSS identity form: `email (name)`
    pub fn identity(&self) -> String {
        format!("{} ({})", self.email, self.name)
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct Paths {
    pub posts_dir: PathBuf,
    pub index_base_name: Option<String>,
}

impl Paths {
    pub fn index_file_name(&self) -> String {
        let base_name = self.index_base_name.as_deref().unwrap_or(DEFAULT_INDEX_BASE_NAME);
        format!("{}.md", base_name)
    }
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct Feed {
    pub rss_max_items: Option<usize>,
    pub cache_max_age_secs: Option<u32>,
}

impl Feed {
    pub fn cache_max_age_secs(&self) -> u32 {
        self.cache_max_age_secs.unwrap_or(DEFAULT_CACHE_MAX_AGE_SECS)
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct Server {
    pub address: String,
    pub port: u16,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Log {
    pub level: LogLevel,
    pub log_to_console: bool,
    pub location: Option<PathBuf>,
}

#[derive(Deserialize, Debug, Copy, Clone)]
pub enum LogLevel {
    Critical = 0,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Config {
    pub site: Site,
    pub contact: Contact,
    pub paths: Paths,
    #[serde(default)]
    pub feed: Feed,
    pub server: Server,
    pub log: Option<Log>,
}

fn parse_path(path: PathBuf) -> io::Result<PathBuf> {
    if !path.starts_with("${exe_dir}") {
        return Ok(path);
    }

    let cur_exe = env::current_exe()?;
    let exe_dir = cur_exe.parent().ok_or_else(|| {
        io::Error::new(ErrorKind::NotFound, "Could not find the executable directory")
    })?;
    let str_path = path.to_string_lossy();
    let exe_dir = exe_dir.to_string_lossy();
    Ok(PathBuf::from(str_path.replace("${exe_dir}", &exe_dir)))
}

/// The base URL is substituted verbatim into every link, so it has to be an
/// absolute http(s) URL without the trailing slash.
pub fn validate_base_url(base_url: &str) -> io::Result<()> {
    let invalid = |reason: &str| {
        Err(io::Error::new(
            ErrorKind::InvalidData,
            format!("Invalid site.base_url {}: {}", base_url, reason),
        ))
    };

    let parsed = match url::Url::parse(base_url) {
        Ok(parsed) => parsed,
        Err(e) => return invalid(&e.to_string()),
    };

    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return invalid("scheme must be http or https");
    }
    if parsed.host_str().is_none() {
        return invalid("host is missing");
    }
    if base_url.ends_with('/') {
        return invalid("trailing slash is not allowed");
    }

    Ok(())
}

pub fn parse_config(cfg_content: &str) -> io::Result<Config> {
    let mut cfg: Config = match toml::from_str::<Config>(cfg_content) {
        Ok(cfg) => cfg,
        Err(e) => {
            return Err(io::Error::new(
                ErrorKind::InvalidData,
                format!("Error parsing configuration file: {}", e),
            ))
        }
    };

    validate_base_url(&cfg.site.base_url)?;
    cfg.paths.posts_dir = parse_path(cfg.paths.posts_dir)?;

    Ok(cfg)
}

pub fn read_config(cfg_path: &Path) -> io::Result<Config> {
    let cfg_content = match fs::read_to_string(cfg_path) {
        Ok(content) => content,
        Err(e) => {
            return Err(io::Error::new(
                e.kind(),
                format!("Error opening configuration file {}: {}", cfg_path.display(), e),
            ))
        }
    };

    parse_config(&cfg_content)
}
