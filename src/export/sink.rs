// Stateless export sinks

use super::Exporter;
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SinkKind {
    Pdf,
    Csv,
    Xml,
}

impl SinkKind {
    pub const ALL: [SinkKind; 3] = [SinkKind::Pdf, SinkKind::Csv, SinkKind::Xml];
}

impl Exporter for SinkKind {
    fn marker(&self) -> &'static str {
        match self {
            SinkKind::Pdf => "PDF",
            SinkKind::Csv => "CSV",
            SinkKind::Xml => "XML",
        }
    }
}
