//! Configuration file loading for catalogfix.
//!
//! Discovers and loads `catalogfix.toml` from the working directory (or an explicit path).
//! Merges config file settings with CLI arguments (CLI takes precedence).

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use catalogfix_types::issue::MetaEntry;
use fs_err as fs;
use serde::Deserialize;
use tracing::debug;

/// The config file name to search for.
pub const CONFIG_FILE_NAME: &str = "catalogfix.toml";

/// Top-level configuration from catalogfix.toml.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CatalogfixConfig {
    /// Values used when the CLI does not supply them.
    pub defaults: DefaultsConfig,

    /// Export gate behaviour.
    pub gate: GateConfig,

    /// Fix log output settings.
    pub report: ReportConfig,

    /// Inline registry records, applied after the registry file.
    pub meta: Vec<MetaEntry>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    /// Export format id passed to the registry.
    pub format: Option<String>,

    /// Issue-meta registry file (`.toml` or `.json`).
    pub registry: Option<Utf8PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GateConfig {
    /// Exit with code 2 when blocking errors remain.
    pub fail_on_blocking: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Directory that receives fix logs when `--out` is not given.
    pub out_dir: Option<Utf8PathBuf>,
}

/// Discover the catalogfix.toml config file in `dir`.
pub fn discover_config(dir: &Utf8Path) -> Option<Utf8PathBuf> {
    let config_path = dir.join(CONFIG_FILE_NAME);
    if config_path.exists() {
        debug!("found config file at {}", config_path);
        Some(config_path)
    } else {
        debug!("no config file found at {}", config_path);
        None
    }
}

/// Load and parse a catalogfix.toml config file.
///
/// Relative paths inside the file are resolved against the file's directory.
pub fn load_config(path: &Utf8Path) -> anyhow::Result<CatalogfixConfig> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read config file {}", path))?;
    let mut config =
        parse_config(&contents).with_context(|| format!("parse config file {}", path))?;

    if let Some(base) = path.parent().filter(|p| !p.as_str().is_empty()) {
        config.defaults.registry = config.defaults.registry.map(|p| resolve(base, p));
        config.report.out_dir = config.report.out_dir.map(|p| resolve(base, p));
    }
    Ok(config)
}

fn resolve(base: &Utf8Path, path: Utf8PathBuf) -> Utf8PathBuf {
    if path.is_absolute() {
        path
    } else {
        base.join(path)
    }
}

/// Parse a config file from a string.
pub fn parse_config(contents: &str) -> anyhow::Result<CatalogfixConfig> {
    let config: CatalogfixConfig = toml::from_str(contents).context("invalid TOML")?;
    Ok(config)
}

/// Load the explicit config if given, else the discovered one, else defaults.
pub fn load_or_default(
    dir: &Utf8Path,
    explicit: Option<&Utf8Path>,
) -> anyhow::Result<CatalogfixConfig> {
    if let Some(path) = explicit {
        return load_config(path);
    }
    match discover_config(dir) {
        Some(path) => load_config(&path),
        None => Ok(CatalogfixConfig::default()),
    }
}

/// Merged configuration combining config file and CLI arguments.
#[derive(Debug, Clone, Default)]
pub struct MergedConfig {
    pub format_id: Option<String>,
    pub registry: Option<Utf8PathBuf>,
    pub fail_on_blocking: bool,
    pub out_dir: Option<Utf8PathBuf>,
    pub inline_meta: Vec<MetaEntry>,
}

/// Builder for merging config file with CLI arguments.
pub struct ConfigMerger {
    config: CatalogfixConfig,
}

impl ConfigMerger {
    pub fn new(config: CatalogfixConfig) -> Self {
        Self { config }
    }

    /// Merge with readiness command CLI arguments.
    ///
    /// `--fail-on-blocking` can only turn the gate on; the config decides otherwise.
    pub fn merge_readiness_args(
        self,
        cli_format: Option<&str>,
        cli_registry: Option<&Utf8Path>,
        cli_fail_on_blocking: bool,
    ) -> MergedConfig {
        MergedConfig {
            format_id: cli_format
                .map(str::to_string)
                .or(self.config.defaults.format),
            registry: cli_registry
                .map(Utf8Path::to_path_buf)
                .or(self.config.defaults.registry),
            fail_on_blocking: cli_fail_on_blocking || self.config.gate.fail_on_blocking,
            out_dir: self.config.report.out_dir,
            inline_meta: self.config.meta,
        }
    }

    /// Merge with report command CLI arguments.
    pub fn merge_report_args(self, cli_format: Option<&str>) -> MergedConfig {
        MergedConfig {
            format_id: cli_format
                .map(str::to_string)
                .or(self.config.defaults.format),
            registry: self.config.defaults.registry,
            fail_on_blocking: self.config.gate.fail_on_blocking,
            out_dir: self.config.report.out_dir,
            inline_meta: self.config.meta,
        }
    }
}
