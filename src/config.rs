use anyhow::Context;
use serde::Deserialize;
use std::path::PathBuf;

/// Server configuration.
///
/// Layered, most specific last: an optional YAML file (`COURIER_CONFIG` env
/// var, falling back to `./courier.yaml` when present), then the
/// `COURIER_LISTEN` / `COURIER_DIR` environment variables, then the
/// `--directory`/`-d` command-line flag for the content directory.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Address the listening socket binds to.
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,

    /// Directory backing the file store.
    #[serde(default = "default_content_dir")]
    pub content_dir: PathBuf,
}

fn default_listen_addr() -> String {
    "127.0.0.1:4221".to_string()
}

fn default_content_dir() -> PathBuf {
    PathBuf::from(".")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            content_dir: default_content_dir(),
        }
    }
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        let mut cfg = match Self::config_path() {
            Some(path) => {
                let raw = std::fs::read_to_string(&path)
                    .with_context(|| format!("failed to read config file {}", path.display()))?;
                serde_yaml::from_str(&raw)
                    .with_context(|| format!("invalid config file {}", path.display()))?
            }
            None => Self::default(),
        };

        if let Ok(addr) = std::env::var("COURIER_LISTEN") {
            cfg.listen_addr = addr;
        }
        if let Ok(dir) = std::env::var("COURIER_DIR") {
            cfg.content_dir = PathBuf::from(dir);
        }
        if let Some(dir) = directory_flag(std::env::args()) {
            cfg.content_dir = dir;
        }

        Ok(cfg)
    }

    fn config_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var("COURIER_CONFIG") {
            return Some(PathBuf::from(path));
        }
        let default = PathBuf::from("courier.yaml");
        default.exists().then_some(default)
    }
}

/// Picks up the `--directory <dir>` (or `-d <dir>`) flag.
fn directory_flag(args: impl Iterator<Item = String>) -> Option<PathBuf> {
    let mut args = args.skip(1);
    while let Some(arg) = args.next() {
        if arg == "--directory" || arg == "-d" {
            return args.next().map(PathBuf::from);
        }
    }
    None
}
