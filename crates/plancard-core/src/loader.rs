//! Override file loader
//!
//! Reads a JSON or YAML mapping of content keys to strings and reports keys
//! that will not do what the author expects.

use crate::error::{ConfigFinding, ConfigReport, CoreError};
use crate::models::{Price, PricingOverrides, CONTENT_KEYS, PLAN_SLOTS};
use std::path::Path;
use tracing::{debug, warn};

/// Supported override file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverrideFormat {
    Json,
    Yaml,
}

impl OverrideFormat {
    /// Detect from file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_ascii_lowercase().as_str() {
            "json" => Some(OverrideFormat::Json),
            "yaml" | "yml" => Some(OverrideFormat::Yaml),
            _ => None,
        }
    }
}

/// Loader for override files
pub struct OverridesLoader;

impl Default for OverridesLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl OverridesLoader {
    pub fn new() -> Self {
        Self
    }

    /// Read and parse one override file
    pub fn parse(&self, path: &Path) -> Result<PricingOverrides, CoreError> {
        let format = OverrideFormat::from_path(path).ok_or_else(|| CoreError::UnsupportedFormat {
            path: path.to_path_buf(),
        })?;

        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                CoreError::FileNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                CoreError::FileRead {
                    path: path.to_path_buf(),
                    source: e,
                }
            }
        })?;

        self.parse_str(&content, format, path)
    }

    /// Parse override text; `path` is only used in error messages
    pub fn parse_str(
        &self,
        content: &str,
        format: OverrideFormat,
        path: &Path,
    ) -> Result<PricingOverrides, CoreError> {
        // An empty file means "no overrides"
        if content.trim().is_empty() {
            return Ok(PricingOverrides::default());
        }

        match format {
            OverrideFormat::Json => serde_json::from_str(content).map_err(|e| CoreError::JsonParse {
                path: path.to_path_buf(),
                message: e.to_string(),
                source: e,
            }),
            OverrideFormat::Yaml => serde_yaml::from_str(content).map_err(|e| CoreError::YamlParse {
                path: path.to_path_buf(),
                message: e.to_string(),
                source: e,
            }),
        }
    }

    /// Parse a file and inspect it in one go
    pub fn load(&self, path: &Path) -> Result<(PricingOverrides, ConfigReport), CoreError> {
        let overrides = self.parse(path)?;
        let report = self.inspect(&overrides);
        debug!(?path, overridden = report.overridden, "Loaded pricing overrides");
        Ok((overrides, report))
    }

    /// Load a file for reporting only
    ///
    /// A file that cannot be read or parsed becomes a single error finding
    /// instead of failing the call.
    pub fn check(&self, path: &Path) -> ConfigReport {
        match self.load(path) {
            Ok((_, report)) => report,
            Err(err) => {
                warn!(?path, error = %err, "Override file rejected");
                let mut report = ConfigReport::new();
                report.add(ConfigFinding::from_core_error(&err));
                report
            }
        }
    }

    /// Check overrides without rejecting them
    ///
    /// Unknown keys and empty values become warnings; malformed prices become
    /// errors (the catalog would refuse them anyway).
    pub fn inspect(&self, overrides: &PricingOverrides) -> ConfigReport {
        let mut report = ConfigReport::new();
        let provided = overrides.provided();
        report.overridden = provided.len();

        for key in overrides.unknown_keys() {
            let mut finding = ConfigFinding::warning(key, "Unknown key, ignored");
            if let Some(known) = closest_key(key) {
                finding = finding.with_suggestion(format!("Did you mean '{}'?", known));
            }
            warn!(key, "Unknown pricing override key");
            report.add(finding);
        }

        let price_keys: Vec<&str> = PLAN_SLOTS.iter().map(|s| s.price).collect();
        for (key, value) in provided {
            if price_keys.contains(&key) && Price::parse(value).is_none() {
                warn!(key, value, "Malformed price override");
                report.add(ConfigFinding::from_core_error(&CoreError::InvalidPrice {
                    key,
                    value: value.to_string(),
                }));
            } else if value.is_empty() {
                report.add(
                    ConfigFinding::warning(key, "Empty value overrides the default")
                        .with_suggestion(format!("Remove '{}' to keep the default text", key)),
                );
            }
        }

        report
    }
}

/// Closest recognised key within a small edit distance
fn closest_key(unknown: &str) -> Option<&'static str> {
    let lowered = unknown.to_ascii_lowercase();
    CONTENT_KEYS
        .iter()
        .map(|key| (*key, strsim::levenshtein(&lowered, &key.to_ascii_lowercase())))
        .filter(|(_, distance)| *distance <= 2)
        .min_by_key(|(_, distance)| *distance)
        .map(|(key, _)| key)
}
