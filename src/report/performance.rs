// Performance: control-plane stats for controllers, forwarding stats for switches.
// Network functions have no performance block.

use super::{MetricLine, ReportBlock};
use crate::models::NetworkComponent;

pub(super) fn block(component: &NetworkComponent) -> Option<ReportBlock> {
    let metrics = match component {
        NetworkComponent::Controller(c) => vec![
            MetricLine::gauge("Control Plane Latency", c.control_plane_latency_ms(), "ms"),
            MetricLine::count("Flow Rules Installed", u64::from(c.flow_rules_installed())),
        ],
        NetworkComponent::Switch(s) => vec![
            MetricLine::count("Packets Forwarded", s.packets_forwarded()),
            MetricLine::count("Packets Dropped", s.packets_dropped()),
        ],
        NetworkComponent::Function(_) => return None,
    };
    Some(ReportBlock::new(component, metrics))
}
