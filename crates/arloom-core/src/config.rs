use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct ProjectConfig {
    pub name: String,
    pub background: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlaybackConfig {
    /// Default speed multiplier for newly created layers.
    pub default_speed: f64,
    /// Default cycle duration in seconds for newly created layers.
    pub default_duration: f64,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            default_speed: 1.0,
            default_duration: 2.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExportConfig {
    /// Marker pattern name referenced by the generated scene.
    pub marker_pattern: String,
    /// Tick interval of the exported page's animation timer, in milliseconds.
    pub tick_interval_ms: u64,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            marker_pattern: "marker".to_string(),
            tick_interval_ms: 16,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct ArloomConfig {
    pub project: ProjectConfig,
    #[serde(default)]
    pub playback: PlaybackConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

impl ArloomConfig {
    pub fn load_from_file(path: &std::path::Path) -> Result<Self, Box<dyn std::error::Error>> {
        let contents = std::fs::read_to_string(path)?;
        let config: ArloomConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    pub fn save_to_file(&self, path: &std::path::Path) -> Result<(), Box<dyn std::error::Error>> {
        let contents = toml::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ArloomConfig::default();
        assert_eq!(config.playback.default_speed, 1.0);
        assert_eq!(config.playback.default_duration, 2.0);
        assert_eq!(config.export.tick_interval_ms, 16);
    }

    #[test]
    fn test_parse_partial_toml() {
        let config: ArloomConfig = toml::from_str(
            r#"
            [project]
            name = "demo"
            "#,
        )
        .unwrap();
        assert_eq!(config.project.name, "demo");
        assert_eq!(config.export.marker_pattern, "marker");
    }
}
