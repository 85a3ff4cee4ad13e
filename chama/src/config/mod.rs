//! Group configuration loading and management.
//!
//! The expected YAML structure is:
//! ```yaml
//! group:
//!   name: "Jobil Chama"
//!   contribution_amount: 50000
//!   payout_amount: 500000
//!   horizon_cycles: 3
//!   state_path: "chama_state.json"
//! ```
//!
//! Every field is optional; missing values fall back to
//! [`GroupConfig::default_config`].

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use tracing::{debug, info};

use crate::schedule::{DEFAULT_HORIZON_CYCLES, MAX_HORIZON_CYCLES};

// ── Defaults ──────────────────────────────────────────────────────────────────

pub const DEFAULT_GROUP_NAME: &str = "Jobil Chama";
pub const DEFAULT_CONTRIBUTION_AMOUNT: u64 = 50_000;
pub const DEFAULT_PAYOUT_AMOUNT: u64 = 500_000;
pub const DEFAULT_STATE_PATH: &str = "chama_state.json";

// ── Private YAML deserialization types ────────────────────────────────────────

/// Top-level wrapper that maps directly onto the YAML file layout.
#[derive(Debug, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    group: GroupEntry,
}

/// Group fields as they appear in the YAML file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct GroupEntry {
    name: Option<String>,
    contribution_amount: Option<u64>,
    payout_amount: Option<u64>,
    horizon_cycles: Option<u32>,
    state_path: Option<PathBuf>,
}

// ── Public data structures ────────────────────────────────────────────────────

/// Settings of one rotating-savings group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupConfig {
    pub name: String,
    /// Amount every member pays in per period.
    pub contribution_amount: u64,
    /// Amount handed to the recipient of a period.
    pub payout_amount: u64,
    /// Full rotations shown on the schedule.
    pub horizon_cycles: u32,
    /// Location of the JSON state file.
    pub state_path: PathBuf,
}

impl GroupConfig {
    /// Returns the configuration used when no file is supplied.
    pub fn default_config() -> Self {
        Self {
            name: DEFAULT_GROUP_NAME.to_string(),
            contribution_amount: DEFAULT_CONTRIBUTION_AMOUNT,
            payout_amount: DEFAULT_PAYOUT_AMOUNT,
            horizon_cycles: DEFAULT_HORIZON_CYCLES,
            state_path: PathBuf::from(DEFAULT_STATE_PATH),
        }
    }

    fn validate(&self) -> Result<()> {
        if self.horizon_cycles == 0 {
            bail!("horizon_cycles must be at least 1");
        }
        if self.horizon_cycles > MAX_HORIZON_CYCLES {
            bail!(
                "horizon_cycles {} exceeds the maximum of {}",
                self.horizon_cycles,
                MAX_HORIZON_CYCLES
            );
        }
        if self.contribution_amount == 0 {
            bail!("contribution_amount must be greater than 0");
        }
        Ok(())
    }
}

impl Default for GroupConfig {
    fn default() -> Self {
        Self::default_config()
    }
}

// ── ConfigManager ─────────────────────────────────────────────────────────────

/// Loads and holds the group configuration.
#[derive(Debug, Default)]
pub struct ConfigManager {
    config: GroupConfig,

    /// Set to `true` after a successful [`load_from_file`](Self::load_from_file).
    loaded: bool,
}

impl ConfigManager {
    /// Creates a manager holding the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses `path` and replaces the current configuration.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened, the YAML is structurally
    /// invalid, or a value is out of range.  On error the previous
    /// configuration is reset to defaults and [`is_loaded`](Self::is_loaded)
    /// returns `false`.
    pub fn load_from_file(&mut self, path: &Path) -> Result<()> {
        info!("Loading group configuration from: {}", path.display());

        // Reset state before (re-)loading
        self.config = GroupConfig::default_config();
        self.loaded = false;

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Cannot open configuration file: {}", path.display()))?;

        let file: ConfigFile = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse YAML file: {}", path.display()))?;

        let entry = file.group;
        let defaults = GroupConfig::default_config();
        let config = GroupConfig {
            name: entry.name.unwrap_or(defaults.name),
            contribution_amount: entry
                .contribution_amount
                .unwrap_or(defaults.contribution_amount),
            payout_amount: entry.payout_amount.unwrap_or(defaults.payout_amount),
            horizon_cycles: entry.horizon_cycles.unwrap_or(defaults.horizon_cycles),
            state_path: entry.state_path.unwrap_or(defaults.state_path),
        };

        config
            .validate()
            .with_context(|| format!("Invalid configuration in {}", path.display()))?;

        debug!(?config, "Parsed group configuration");
        info!(
            "  Group: {} | Contribution: {} | Payout: {} | Horizon: {} cycle(s)",
            config.name, config.contribution_amount, config.payout_amount, config.horizon_cycles,
        );

        self.config = config;
        self.loaded = true;
        Ok(())
    }

    /// The active configuration (defaults until a file has been loaded).
    pub fn config(&self) -> &GroupConfig {
        &self.config
    }

    /// Returns `true` after a successful call to [`load_from_file`](Self::load_from_file).
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Helper: write a YAML string to a temp file and return it.
    fn yaml_tempfile(content: &str) -> NamedTempFile {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(content.as_bytes()).unwrap();
        f
    }

    #[test]
    fn default_config_has_expected_values() {
        let cfg = GroupConfig::default_config();
        assert_eq!(cfg.name, "Jobil Chama");
        assert_eq!(cfg.contribution_amount, 50_000);
        assert_eq!(cfg.payout_amount, 500_000);
        assert_eq!(cfg.horizon_cycles, 3);
        assert_eq!(cfg.state_path, PathBuf::from("chama_state.json"));
    }

    #[test]
    fn new_manager_is_not_loaded_but_has_defaults() {
        let mgr = ConfigManager::new();
        assert!(!mgr.is_loaded());
        assert_eq!(mgr.config(), &GroupConfig::default_config());
    }

    #[test]
    fn load_full_yaml() {
        let yaml = r#"
group:
  name: "Umoja Savings"
  contribution_amount: 2000
  payout_amount: 20000
  horizon_cycles: 2
  state_path: "/var/lib/chama/umoja.json"
"#;
        let f = yaml_tempfile(yaml);
        let mut mgr = ConfigManager::new();
        mgr.load_from_file(f.path()).unwrap();

        assert!(mgr.is_loaded());
        let cfg = mgr.config();
        assert_eq!(cfg.name, "Umoja Savings");
        assert_eq!(cfg.contribution_amount, 2_000);
        assert_eq!(cfg.payout_amount, 20_000);
        assert_eq!(cfg.horizon_cycles, 2);
        assert_eq!(cfg.state_path, PathBuf::from("/var/lib/chama/umoja.json"));
    }

    #[test]
    fn optional_fields_use_defaults_when_absent() {
        let f = yaml_tempfile("group:\n  name: \"Small\"\n");
        let mut mgr = ConfigManager::new();
        mgr.load_from_file(f.path()).unwrap();

        let cfg = mgr.config();
        assert_eq!(cfg.name, "Small");
        assert_eq!(cfg.horizon_cycles, DEFAULT_HORIZON_CYCLES);
        assert_eq!(cfg.payout_amount, DEFAULT_PAYOUT_AMOUNT);
    }

    #[test]
    fn missing_group_section_uses_defaults() {
        let f = yaml_tempfile("{}\n");
        let mut mgr = ConfigManager::new();
        mgr.load_from_file(f.path()).unwrap();
        assert!(mgr.is_loaded());
        assert_eq!(mgr.config(), &GroupConfig::default_config());
    }

    #[test]
    fn zero_horizon_is_rejected() {
        let f = yaml_tempfile("group:\n  horizon_cycles: 0\n");
        let mut mgr = ConfigManager::new();
        assert!(mgr.load_from_file(f.path()).is_err());
        assert!(!mgr.is_loaded());
    }

    #[test]
    fn oversized_horizon_is_rejected() {
        let f = yaml_tempfile("group:\n  horizon_cycles: 10000000\n");
        let mut mgr = ConfigManager::new();
        let err = mgr.load_from_file(f.path()).unwrap_err();
        assert!(format!("{err:#}").contains("exceeds the maximum"), "got {err:#}");
        assert!(!mgr.is_loaded());
    }

    #[test]
    fn zero_contribution_is_rejected() {
        let f = yaml_tempfile("group:\n  contribution_amount: 0\n");
        let mut mgr = ConfigManager::new();
        assert!(mgr.load_from_file(f.path()).is_err());
    }

    #[test]
    fn unknown_field_is_rejected() {
        let f = yaml_tempfile("group:\n  pasword: \"secret\"\n");
        let mut mgr = ConfigManager::new();
        assert!(mgr.load_from_file(f.path()).is_err());
    }

    #[test]
    fn missing_file_returns_error() {
        let mut mgr = ConfigManager::new();
        let result = mgr.load_from_file(Path::new("/nonexistent/path/chama.yaml"));
        assert!(result.is_err());
        assert!(!mgr.is_loaded());
    }

    #[test]
    fn malformed_yaml_returns_error() {
        let f = yaml_tempfile("this is: not: valid: yaml: content:::");
        let mut mgr = ConfigManager::new();
        assert!(mgr.load_from_file(f.path()).is_err());
        assert!(!mgr.is_loaded());
    }

    #[test]
    fn failed_reload_resets_to_defaults() {
        let good = yaml_tempfile("group:\n  name: \"First\"\n");
        let bad = yaml_tempfile("group:\n  horizon_cycles: 0\n");

        let mut mgr = ConfigManager::new();
        mgr.load_from_file(good.path()).unwrap();
        assert_eq!(mgr.config().name, "First");

        assert!(mgr.load_from_file(bad.path()).is_err());
        assert_eq!(mgr.config().name, DEFAULT_GROUP_NAME);
    }
}
