/*!
Runtime configuration.

Everything has a default, so the visualizer runs with no config file at all.
If `pairs_visualizer.json` exists in the working directory its fields override
the defaults; missing fields keep their default values.
*/

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{VisualizerError, VisualizerResult};

pub const CONFIG_FILE: &str = "pairs_visualizer.json";

/// Knowledge sources hidden from the figure (matched as lower-case substrings).
pub const DEFAULT_EXCLUSIONS: [&str; 9] = [
    "litcoin",
    "yeast",
    "costanza",
    "old_ubergraph",
    "string-db-human",
    "biolink",
    "chebiprops",
    "mondoprops",
    "ubergraphnonredundant",
];

pub const DEFAULT_SPRING_SEED: u64 = 42;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualizerConfig {
    pub input: PathBuf,
    pub exclusions: Vec<String>,
    pub spring_seed: u64,
    pub style: FigureStyle,
}

impl Default for VisualizerConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("pairs.txt"),
            exclusions: DEFAULT_EXCLUSIONS.iter().map(|s| s.to_string()).collect(),
            spring_seed: DEFAULT_SPRING_SEED,
            style: FigureStyle::default(),
        }
    }
}

impl VisualizerConfig {
    /// Load the config from `path`, or fall back to defaults when the file is absent.
    pub fn load_or_default(path: &Path) -> VisualizerResult<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path).map_err(|source| VisualizerError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&raw).map_err(|source| VisualizerError::Config {
            path: path.to_path_buf(),
            source,
        })?;

        if config.exclusions.is_empty() {
            tracing::warn!(path = %path.display(), "config sets no exclusions, every source will be drawn");
        }
        tracing::info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

/// Fixed drawing parameters shared by both panels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FigureStyle {
    /// Node radius in screen points.
    pub node_radius: f32,
    pub node_color: [u8; 3],
    pub edge_color: [u8; 3],
    pub edge_width: f32,
    pub label_color: [u8; 3],
    pub font_size: f32,
}

impl Default for FigureStyle {
    fn default() -> Self {
        Self {
            node_radius: 15.0,
            // matplotlib "lightblue"
            node_color: [173, 216, 230],
            edge_color: [128, 128, 128],
            edge_width: 1.0,
            label_color: [0, 0, 0],
            // 10 pt at 100 dpi is ~13.9 px; egui sizes are logical pixels.
            font_size: 13.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_original_figure() {
        let config = VisualizerConfig::default();
        assert_eq!(config.input, PathBuf::from("pairs.txt"));
        assert_eq!(config.spring_seed, 42);
        assert_eq!(config.exclusions.len(), DEFAULT_EXCLUSIONS.len());
        assert!(config.exclusions.iter().any(|e| e == "chebiprops"));
        assert_eq!(config.style.font_size, 13.0);
        assert_eq!(config.style.node_color, [173, 216, 230]);
    }

    #[test]
    fn partial_json_keeps_remaining_defaults() {
        let config =
            VisualizerConfig::from_json(r#"{ "input": "other.tsv", "style": { "node_radius": 8.0 } }"#)
                .unwrap();
        assert_eq!(config.input, PathBuf::from("other.tsv"));
        assert_eq!(config.style.node_radius, 8.0);
        assert_eq!(config.style.node_color, [173, 216, 230]);
        assert_eq!(config.exclusions, VisualizerConfig::default().exclusions);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = VisualizerConfig::load_or_default(&dir.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(config, VisualizerConfig::default());
    }

    #[test]
    fn invalid_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "{ not json").unwrap();
        let err = VisualizerConfig::load_or_default(&path).unwrap_err();
        assert!(matches!(err, VisualizerError::Config { .. }));
    }
}
