// Resource utilization: CPU, memory and bandwidth for every component.

use super::{MetricLine, ReportBlock};
use crate::models::NetworkComponent;

pub(super) fn block(component: &NetworkComponent) -> ReportBlock {
    let u = component.utilization();
    ReportBlock::new(
        component,
        vec![
            MetricLine::gauge("CPU Usage", u.cpu_percent, "%"),
            MetricLine::gauge("Memory Stat", u.memory_percent, "%"),
            MetricLine::gauge("Bandwidth Usage", u.bandwidth_percent, "%"),
        ],
    )
}
