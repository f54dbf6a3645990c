// Export bridge: report content (abstraction) is chosen independently of the sink (implementation).

mod sink;

pub use sink::SinkKind;

use serde::Deserialize;
use std::fmt;
use std::io::Write;
use tracing::{info, instrument};

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("{sink} export failed: {source}")]
    Io {
        sink: &'static str,
        #[source]
        source: std::io::Error,
    },
}

/// Implementation side of the bridge: where the content goes.
pub trait Exporter {
    /// Format tag written in front of the content, e.g. `PDF`.
    fn marker(&self) -> &'static str;

    /// Writes `[<marker> Export] <content>` as one line. Content is written unmodified.
    fn export(&self, content: &str, out: &mut dyn Write) -> Result<(), ExportError> {
        writeln!(out, "[{} Export] {}", self.marker(), content).map_err(|source| {
            ExportError::Io {
                sink: self.marker(),
                source,
            }
        })
    }
}

/// Abstraction side of the bridge: what text to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportContent {
    Financial,
    Sales,
    Customer,
}

impl ReportContent {
    pub fn content(self) -> &'static str {
        match self {
            ReportContent::Financial => "Financial Report Data",
            ReportContent::Sales => "Sales Report Data",
            ReportContent::Customer => "Customer Report Data",
        }
    }
}

impl fmt::Display for ReportContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ReportContent::Financial => "financial",
            ReportContent::Sales => "sales",
            ReportContent::Customer => "customer",
        };
        f.write_str(name)
    }
}

/// A report bound to an exporter. Any content pairs with any exporter.
pub struct ExportReport<'a> {
    content: ReportContent,
    exporter: &'a dyn Exporter,
}

impl<'a> ExportReport<'a> {
    pub fn new(content: ReportContent, exporter: &'a dyn Exporter) -> Self {
        Self { content, exporter }
    }

    pub fn content(&self) -> ReportContent {
        self.content
    }

    #[instrument(skip(self, out), fields(report = %self.content, sink = self.exporter.marker()))]
    pub fn export(&self, out: &mut dyn Write) -> Result<(), ExportError> {
        self.exporter.export(self.content.content(), out)?;
        info!("report exported");
        Ok(())
    }
}

/// Emit `content` through `sink`.
pub fn export(content: &str, sink: SinkKind, out: &mut dyn Write) -> Result<(), ExportError> {
    sink.export(content, out)
}
