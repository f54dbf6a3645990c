use crate::export::{ExportError, ExportReport, ReportContent, SinkKind};
use crate::models::{ComponentKind, NetworkComponent, default_inventory};
use serde::Deserialize;
use anyhow::Context;
use std::collections::HashSet;
use std::env::VarError;
use std::io::Write;
use std::path::Path;

/// Default config path when CONFIG_FILE is unset.
pub const DEFAULT_CONFIG_PATH: &str = "netreport.toml";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub inventory: InventoryConfig,
    pub export: ExportConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ComponentEntry {
    pub kind: ComponentKind,
    pub id: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct InventoryConfig {
    pub components: Vec<ComponentEntry>,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            components: default_inventory()
                .iter()
                .map(|c| ComponentEntry {
                    kind: c.kind(),
                    id: c.id().to_string(),
                })
                .collect(),
        }
    }
}

impl InventoryConfig {
    pub fn components(&self) -> Vec<NetworkComponent> {
        self.components
            .iter()
            .map(|e| NetworkComponent::new(e.kind, e.id.clone()))
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ExportJob {
    pub report: ReportContent,
    pub sink: SinkKind,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    pub jobs: Vec<ExportJob>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            jobs: vec![
                ExportJob {
                    report: ReportContent::Financial,
                    sink: SinkKind::Pdf,
                },
                ExportJob {
                    report: ReportContent::Sales,
                    sink: SinkKind::Csv,
                },
                ExportJob {
                    report: ReportContent::Customer,
                    sink: SinkKind::Xml,
                },
            ],
        }
    }
}

impl ExportConfig {
    /// Run every job in order against `out`.
    pub fn run(&self, out: &mut dyn Write) -> Result<(), ExportError> {
        for job in &self.jobs {
            ExportReport::new(job.report, &job.sink).export(out)?;
        }
        Ok(())
    }
}

impl AppConfig {
    /// Reads CONFIG_FILE (or `netreport.toml`). A missing default file yields defaults;
    /// an explicitly named file must exist.
    pub fn load() -> anyhow::Result<Self> {
        Self::resolve(std::env::var("CONFIG_FILE"), Path::new(DEFAULT_CONFIG_PATH))
    }

    /// Resolution order behind `load`: the CONFIG_FILE value, then `default_path` if present,
    /// then defaults.
    pub fn resolve(
        config_file: Result<String, VarError>,
        default_path: &Path,
    ) -> anyhow::Result<Self> {
        match config_file {
            Ok(path) => Self::load_from_path(&path),
            Err(VarError::NotUnicode(raw)) => {
                anyhow::bail!("CONFIG_FILE is not valid unicode: {:?}", raw)
            }
            Err(VarError::NotPresent) if default_path.exists() => {
                Self::load_from_path(default_path)
            }
            Err(VarError::NotPresent) => {
                tracing::debug!("no {} found, using defaults", default_path.display());
                Ok(Self::default())
            }
        }
    }

    pub fn load_from_path(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let config = Self::load_from_str(&s)
            .with_context(|| format!("invalid config {}", path.display()))?;
        tracing::info!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// Parse and validate config from a string (e.g. for tests).
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            !self.inventory.components.is_empty(),
            "inventory.components must be non-empty"
        );
        let mut seen = HashSet::with_capacity(self.inventory.components.len());
        for entry in &self.inventory.components {
            anyhow::ensure!(
                !entry.id.trim().is_empty(),
                "inventory.components id must be non-empty"
            );
            anyhow::ensure!(
                seen.insert(entry.id.as_str()),
                "inventory.components id {:?} is duplicated",
                entry.id
            );
        }
        anyhow::ensure!(
            !self.export.jobs.is_empty(),
            "export.jobs must be non-empty"
        );
        Ok(())
    }
}
