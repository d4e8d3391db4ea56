use std::env;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use blogfeed::config::{read_config, Config};

use crate::CFG_FILE_NAME;

fn get_config_path() -> Option<PathBuf> {
    let exe_dir = env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|p| p.to_path_buf()));
    let cur_dir = env::current_dir().ok();
    let cfg_dir = dirs::config_dir();

    [exe_dir, cur_dir, cfg_dir]
        .into_iter()
        .flatten()
        .map(|dir| dir.join(CFG_FILE_NAME))
        .find(|path| path.exists())
}

pub(crate) fn open_config(cfg_path: Option<PathBuf>) -> Result<Config> {
    let config_path = match cfg_path {
        Some(path) => path,
        None => get_config_path().ok_or_else(|| anyhow!("Could not find {}", CFG_FILE_NAME))?,
    };

    println!("Reading config from {}", config_path.display());
    let mut config = read_config(&config_path)
        .with_context(|| format!("Error loading {}", config_path.display()))?;

    if let Some(mut log) = config.log {
        if let Some(ref location) = log.location {
            println!("Log enabled. Files will be written in {}", location.display());
        } else if let Some(cache_dir) = dirs::cache_dir() {
            let location = cache_dir.join("blogfeed").join("log").join("server.log");
            println!("Log enabled. Files will be written in {}", location.display());
            log.location = Some(location);
        }
        config.log = Some(log);
    } else {
        println!("Log disabled. Using stdout");
    }

    Ok(config)
}
