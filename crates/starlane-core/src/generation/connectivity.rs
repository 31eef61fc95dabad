//! Connectivity repair: isolated-system rescue, then global bridging.
//!
//! The stochastic lane builders make no reachability promises. These two
//! phases do: rescue gives every stranded system its nearest neighbor when
//! one is in range, and bridging merges whatever components remain with the
//! shortest possible extra lanes. Bridging alone guarantees the single
//! connected component invariant.

use crate::config::GalaxyConfig;
use crate::model::StarSystem;

use super::lanes::LaneNetwork;
use super::union_find::UnionFind;

/// Connect each zero-degree system to its single nearest neighbor, provided
/// that neighbor sits within 30% of the galaxy radius. A stranded system
/// beyond the cap stays untouched here; bridging picks it up.
pub fn rescue_isolated(
    config: &GalaxyConfig,
    systems: &mut [StarSystem],
    network: &mut LaneNetwork,
) {
    let cap = config.radius * 0.3;

    for i in 0..systems.len() {
        if network.degree(i) > 0 {
            continue;
        }
        let Some((distance, nearest)) = nearest_other(systems, i) else {
            continue;
        };
        if distance <= cap {
            network.connect(i, nearest, systems);
            log::info!(
                "connected isolated system {} to {} ({:.1} ly)",
                systems[i].name,
                systems[nearest].name,
                distance
            );
        } else {
            log::warn!(
                "system {} has no neighbor within {:.1} ly (nearest is {:.1} ly)",
                systems[i].name,
                cap,
                distance
            );
        }
    }
}

/// Merge all remaining components into one by repeatedly adding the shortest
/// lane that crosses a component boundary (a partial-MST construction).
pub fn bridge_components(systems: &mut [StarSystem], network: &mut LaneNetwork) {
    if systems.len() < 2 {
        return;
    }

    let mut components = UnionFind::new(systems.len());
    for a in 0..systems.len() {
        for &b in network.neighbors(a) {
            if b > a {
                components.union(a, b);
            }
        }
    }
    if components.component_count() == 1 {
        return;
    }

    let mut bridges: Vec<(f64, usize, usize)> = Vec::new();
    for i in 0..systems.len() {
        for j in (i + 1)..systems.len() {
            if !components.same_set(i, j) {
                bridges.push((systems[i].position.distance(&systems[j].position), i, j));
            }
        }
    }
    bridges.sort_by(|a, b| a.0.total_cmp(&b.0));

    let mut added = 0u32;
    for (distance, i, j) in bridges {
        if components.component_count() == 1 {
            break;
        }
        if components.union(i, j) {
            network.connect(i, j, systems);
            added += 1;
            log::info!(
                "bridged {} and {} ({:.1} ly)",
                systems[i].name,
                systems[j].name,
                distance
            );
        }
    }

    if added > 0 {
        log::info!("added {} bridge lanes for full connectivity", added);
    }
}

fn nearest_other(systems: &[StarSystem], i: usize) -> Option<(f64, usize)> {
    systems
        .iter()
        .enumerate()
        .filter(|&(j, _)| j != i)
        .map(|(j, s)| (systems[i].position.distance(&s.position), j))
        .min_by(|a, b| a.0.total_cmp(&b.0))
}
