//! Startup configuration: listen port and data directory.

use clap::Parser;
use std::path::PathBuf;

/// Web server for tracking sports prop-bet picks.
#[derive(Debug, Parser)]
#[clap(name = "propboard", about = "Prop pick tracker web server")]
pub struct Config {
    /// Port to listen on.
    #[clap(long, short, env = "PORT", default_value_t = 5000)]
    pub port: u16,

    /// Directory the entries file is stored in.
    #[clap(long, env = "DATA_DIR", default_value = ".")]
    pub data_dir: PathBuf,
}

impl Config {
    /// Path of the JSON file the entry store persists to.
    pub fn entries_path(&self) -> PathBuf {
        self.data_dir.join("entries.json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::try_parse_from(["propboard"]).unwrap();
        assert_eq!(config.port, 5000);
        assert_eq!(config.entries_path(), PathBuf::from("./entries.json"));
    }

    #[test]
    fn test_explicit_args() {
        let config =
            Config::try_parse_from(["propboard", "--port", "8080", "--data-dir", "/tmp/picks"])
                .unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.entries_path(), PathBuf::from("/tmp/picks/entries.json"));
    }
}
