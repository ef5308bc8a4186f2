use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tokio::time::Duration;

use crate::classify::NormalRanges;
use crate::poll::DEFAULT_POLL_INTERVAL_MS;

/// Deployment configuration for the dashboard core. Normal ranges live here so
/// they can be overridden per install without a rebuild.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardConfig {
    pub base_url: String,
    pub poll_interval_ms: u64,
    pub normal_ranges: NormalRanges,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000/api".to_string(),
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            normal_ranges: NormalRanges::default(),
        }
    }
}

impl DashboardConfig {
    /// Load from a JSON file, falling back to defaults if the file is absent.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read config from {}", path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("invalid dashboard config in {}", path.display()))
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_fixed_tables() {
        let config = DashboardConfig::default();
        assert_eq!(config.poll_interval_ms, 5000);
        assert_eq!(config.normal_ranges, NormalRanges::default());
    }

    #[test]
    fn partial_json_falls_back_per_field() {
        let config: DashboardConfig =
            serde_json::from_str(r#"{ "pollIntervalMs": 1000 }"#).unwrap();
        assert_eq!(config.poll_interval_ms, 1000);
        assert_eq!(config.base_url, DashboardConfig::default().base_url);
        assert_eq!(config.normal_ranges, NormalRanges::default());
    }
}
