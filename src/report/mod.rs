// Report dispatcher: one block per applicable component, in input order.

mod performance;
mod resource;

use crate::models::{ComponentKind, NetworkComponent};
use serde::Serialize;
use std::fmt;
use std::io::{self, Write};
use tracing::{debug, info, instrument};

/// Which metrics and formatting rules apply across the component list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ReportKind {
    ResourceUtilization,
    Performance,
}

impl ReportKind {
    pub const ALL: [ReportKind; 2] = [ReportKind::ResourceUtilization, ReportKind::Performance];

    pub fn title(self) -> &'static str {
        match self {
            ReportKind::ResourceUtilization => "Resource Utilization Report",
            ReportKind::Performance => "Performance Report",
        }
    }

    /// Block for `component`, or `None` when this kind has nothing to say about it.
    fn block(self, component: &NetworkComponent) -> Option<ReportBlock> {
        match self {
            ReportKind::ResourceUtilization => Some(resource::block(component)),
            ReportKind::Performance => performance::block(component),
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Gauges render with one decimal, counters as-is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MetricValue {
    Gauge(f64),
    Count(u64),
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricValue::Gauge(v) => write!(f, "{v:.1}"),
            MetricValue::Count(v) => write!(f, "{v}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricLine {
    pub name: &'static str,
    pub value: MetricValue,
    pub unit: &'static str,
}

impl MetricLine {
    pub(crate) fn gauge(name: &'static str, value: f64, unit: &'static str) -> Self {
        Self {
            name,
            value: MetricValue::Gauge(value),
            unit,
        }
    }

    pub(crate) fn count(name: &'static str, value: u64) -> Self {
        Self {
            name,
            value: MetricValue::Count(value),
            unit: "",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportBlock {
    pub component: ComponentKind,
    pub id: String,
    pub metrics: Vec<MetricLine>,
}

impl ReportBlock {
    pub(crate) fn new(component: &NetworkComponent, metrics: Vec<MetricLine>) -> Self {
        Self {
            component: component.kind(),
            id: component.id().to_string(),
            metrics,
        }
    }
}

impl fmt::Display for ReportBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} ({}):", self.component.label(), self.id)?;
        for m in &self.metrics {
            writeln!(f, "  {}: {}{}", m.name, m.value, m.unit)?;
        }
        writeln!(f)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub kind: ReportKind,
    pub blocks: Vec<ReportBlock>,
}

impl Report {
    /// Text form: `--- <title> ---` header followed by each block.
    pub fn render(&self) -> String {
        self.to_string()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.blocks.iter().map(|b| b.id.as_str())
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- {} ---", self.kind.title())?;
        for block in &self.blocks {
            write!(f, "{block}")?;
        }
        Ok(())
    }
}

/// Visit `components` in order and collect the blocks `kind` produces.
#[instrument(skip(components), fields(components = components.len()))]
pub fn generate(components: &[NetworkComponent], kind: ReportKind) -> Report {
    let mut blocks = Vec::with_capacity(components.len());
    for component in components {
        match kind.block(component) {
            Some(block) => blocks.push(block),
            None => debug!(id = component.id(), component = %component.kind(), "skipped"),
        }
    }
    info!(report = %kind, blocks = blocks.len(), "report generated");
    Report { kind, blocks }
}

/// Shorthand for `generate(components, kind).render()`.
pub fn render(components: &[NetworkComponent], kind: ReportKind) -> String {
    generate(components, kind).render()
}

/// Every report kind in turn, each preceded by a `Generating <title>...` line and
/// followed by a blank line.
pub fn write_all(components: &[NetworkComponent], out: &mut dyn Write) -> io::Result<()> {
    for kind in ReportKind::ALL {
        writeln!(out, "Generating {kind}...")?;
        writeln!(out, "{}", render(components, kind))?;
    }
    Ok(())
}
