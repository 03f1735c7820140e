use serde::Deserialize;
use std::path::PathBuf;

fn default_verbose() -> bool {
    false
}

#[derive(Debug, Deserialize, Default)]
pub struct FileConfig {
    /// Fence file the points are read from and written to
    #[serde(default)]
    pub store: Option<PathBuf>,
    #[serde(default = "default_verbose")]
    pub verbose: bool,
}

impl FileConfig {
    pub fn load() -> Option<Self> {
        let config_paths = get_config_paths();

        for path in config_paths {
            if path.exists()
                && let Ok(contents) = std::fs::read_to_string(&path)
            {
                match toml::from_str(&contents) {
                    Ok(config) => return Some(config),
                    Err(e) => {
                        eprintln!("Warning: Failed to parse config file {:?}: {}", path, e);
                    }
                }
            }
        }
        None
    }
}

fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    paths.push(PathBuf::from("geofencer.toml"));
    paths.push(PathBuf::from(".geofencer.toml"));

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("geofencer").join("config.toml"));
        paths.push(config_dir.join("geofencer.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".geofencer.toml"));
        paths.push(home.join(".config").join("geofencer").join("config.toml"));
    }

    paths
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config: FileConfig =
            toml::from_str("store = \"/tmp/fence.json\"\nverbose = true\n").unwrap();
        assert_eq!(config.store, Some(PathBuf::from("/tmp/fence.json")));
        assert!(config.verbose);
    }

    #[test]
    fn test_parse_empty_config_uses_defaults() {
        let config: FileConfig = toml::from_str("").unwrap();
        assert_eq!(config.store, None);
        assert!(!config.verbose);
    }
}
