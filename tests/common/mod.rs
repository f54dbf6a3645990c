// Shared test helpers

#![allow(dead_code)]

use netreport::models::NetworkComponent;

/// Controller1, Switch1, Switch2, Firewall-NF.
pub fn scenario_inventory() -> Vec<NetworkComponent> {
    vec![
        NetworkComponent::controller("Controller1"),
        NetworkComponent::switch("Switch1"),
        NetworkComponent::switch("Switch2"),
        NetworkComponent::function("Firewall-NF"),
    ]
}

/// Number of `Kind (id):` block headers in a rendered report.
pub fn block_count(rendered: &str) -> usize {
    rendered.lines().filter(|l| l.ends_with("):")).count()
}
