//! Runtime configuration.
//!
//! The configuration is read from `cubegrid.json` in the working directory,
//! falling back to `cubegrid/config.json` in the user's config directory.
//! Missing files and missing fields use the defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub const LOCAL_CONFIG_FILE: &str = "cubegrid.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub window_title: String,
    pub window_width: u32,
    pub window_height: u32,
    pub msaa_samples: u8,
    pub texture_path: PathBuf,
    /// Vertex shader source file. The built-in shader is used when unset.
    pub vertex_shader: Option<PathBuf>,
    /// Fragment shader source file. The built-in shader is used when unset.
    pub fragment_shader: Option<PathBuf>,
    pub clear_color: [f32; 4],
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window_title: "Cube Grid".to_string(),
            window_width: 1024,
            window_height: 768,
            msaa_samples: 4,
            texture_path: PathBuf::from("assets/tex.jpg"),
            vertex_shader: None,
            fragment_shader: None,
            clear_color: [0.2, 0.2, 0.2, 0.0],
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Loads the first configuration file found, or the defaults.
    pub fn load() -> Result<Self, String> {
        match Self::locate() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Parses the configuration at `path`.
    pub fn load_from(path: &Path) -> Result<Self, String> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
        Self::from_json(&text).map_err(|e| format!("Invalid config {}: {}", path.display(), e))
    }

    pub fn from_json(text: &str) -> Result<Self, String> {
        serde_json::from_str(text).map_err(|e| e.to_string())
    }

    /// The log level filter named by `log_level`.
    pub fn level_filter(&self) -> Result<log::LevelFilter, String> {
        self.log_level
            .parse()
            .map_err(|_| format!("Unknown log level '{}'", self.log_level))
    }

    fn locate() -> Option<PathBuf> {
        let local = PathBuf::from(LOCAL_CONFIG_FILE);
        if local.is_file() {
            return Some(local);
        }
        dirs::config_dir()
            .map(|dir| dir.join("cubegrid").join("config.json"))
            .filter(|path| path.is_file())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.window_width, 1024);
        assert_eq!(config.window_height, 768);
        assert_eq!(config.msaa_samples, 4);
        assert_eq!(config.clear_color, [0.2, 0.2, 0.2, 0.0]);
        assert!(config.vertex_shader.is_none());
        assert_eq!(config.level_filter().unwrap(), log::LevelFilter::Info);
    }

    #[test]
    fn test_partial_json() {
        let config = Config::from_json(
            r#"{ "window_title": "Demo", "vertex_shader": "shaders/v.glsl", "log_level": "debug" }"#,
        )
        .unwrap();
        assert_eq!(config.window_title, "Demo");
        assert_eq!(config.vertex_shader, Some(PathBuf::from("shaders/v.glsl")));
        assert_eq!(config.fragment_shader, None);
        assert_eq!(config.window_width, 1024);
        assert_eq!(config.level_filter().unwrap(), log::LevelFilter::Debug);
    }

    #[test]
    fn test_invalid_json() {
        assert!(Config::from_json("{ window_width: }").is_err());
        assert!(Config::from_json(r#"{ "window_width": "wide" }"#).is_err());
    }

    #[test]
    fn test_unknown_log_level() {
        let config = Config {
            log_level: "loud".to_string(),
            ..Default::default()
        };
        assert!(config.level_filter().is_err());
    }

    #[test]
    fn test_missing_file() {
        assert!(Config::load_from(Path::new("does/not/exist.json")).is_err());
    }
}
