use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

/// How the actionable-item denominator shown next to each product is
/// derived. The original report hard-codes 8 (3 SEO recommendation
/// slots + 4 GEO slots + 1 description choice) regardless of the
/// actual list lengths; `PerProduct` computes it from the record
/// instead. `Fixed(8)` stays the default so behavior does not change
/// silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionablePolicy {
    Fixed(usize),
    PerProduct,
}

pub const DEFAULT_ACTIONABLE_TOTAL: usize = 8;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionableConfig {
    pub mode: String,
    pub fixed_total: usize,
}

impl Default for ActionableConfig {
    fn default() -> Self {
        Self {
            mode: "fixed".to_string(),
            fixed_total: DEFAULT_ACTIONABLE_TOTAL,
        }
    }
}

impl ActionableConfig {
    pub fn to_policy(&self) -> ActionablePolicy {
        match self.mode.to_lowercase().as_str() {
            "per-product" | "per_product" => ActionablePolicy::PerProduct,
            _ => ActionablePolicy::Fixed(self.fixed_total),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReviewConfig {
    #[serde(default)]
    pub actionable: ActionableConfig,
}

impl ReviewConfig {
    pub fn load(path: Option<PathBuf>) -> Result<(Self, Option<PathBuf>), String> {
        let config_path = path.or_else(default_config_path);
        let mut config = if let Some(path) = config_path.as_ref() {
            if path.exists() {
                let contents = std::fs::read_to_string(path)
                    .map_err(|err| format!("failed to read config: {}", err))?;
                toml::from_str(&contents)
                    .map_err(|err| format!("failed to parse config: {}", err))?
            } else {
                ReviewConfig::default()
            }
        } else {
            ReviewConfig::default()
        };

        config.apply_env_overrides();
        Ok((config, config_path))
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(mode) = env::var("REVIEW_ACTIONABLE_MODE") {
            if !mode.trim().is_empty() {
                self.actionable.mode = mode;
            }
        }
        if let Ok(total) = env::var("REVIEW_ACTIONABLE_TOTAL") {
            if let Ok(value) = total.parse::<usize>() {
                self.actionable.fixed_total = value;
            }
        }
    }
}

fn default_config_path() -> Option<PathBuf> {
    env::var("REVIEW_CONFIG_PATH")
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
        .or_else(|| Some(PathBuf::from("config/review.toml")))
}
