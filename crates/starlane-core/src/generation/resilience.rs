//! Redundant-lane augmentation.
//!
//! Connectivity is already guaranteed before this runs; the pass only
//! reduces single-edge cut vulnerability around thinly connected or
//! peripheral systems. The number of added lanes is capped at
//! `min(total / 4, 40)` per galaxy.

use crate::config::GalaxyConfig;
use crate::model::{Point, StarSystem};

use super::lanes::LaneNetwork;

/// Add up to the capped number of extra lanes around vulnerable systems.
/// Returns how many lanes were created.
pub fn add_redundant_lanes(
    config: &GalaxyConfig,
    systems: &mut [StarSystem],
    network: &mut LaneNetwork,
) -> usize {
    if systems.len() < 3 {
        return 0;
    }

    let centroid = centroid(systems);
    let outskirts = config.radius * 0.6;
    let reach = config.radius * 0.4;
    let cap = (systems.len() / 4).min(40);

    // Vulnerability is judged on the pre-augmentation degrees.
    let vulnerable: Vec<usize> = (0..systems.len())
        .filter(|&i| {
            let degree = network.degree(i);
            degree <= 2
                || (systems[i].position.distance(&centroid) > outskirts && degree < 4)
        })
        .collect();
    log::debug!("{} vulnerable or outlying systems", vulnerable.len());

    let mut added = 0;
    for &i in &vulnerable {
        if added >= cap {
            break;
        }

        // Rank unconnected systems by distance, discounted for the
        // candidate's own degree so links land on well-connected hubs.
        let mut targets: Vec<(f64, usize)> = (0..systems.len())
            .filter(|&j| j != i && !network.is_connected(i, j))
            .map(|j| {
                let distance = systems[i].position.distance(&systems[j].position);
                (distance / (1.0 + network.degree(j) as f64 * 0.2), j)
            })
            .collect();
        targets.sort_by(|a, b| a.0.total_cmp(&b.0));

        let wanted = if network.degree(i) == 1 { 2 } else { 1 };
        for &(_, j) in targets.iter().take(wanted) {
            if added >= cap {
                break;
            }
            let distance = systems[i].position.distance(&systems[j].position);
            if distance < reach && network.connect(i, j, systems) {
                added += 1;
                log::info!(
                    "added redundant lane {} to {} ({:.1} ly)",
                    systems[i].name,
                    systems[j].name,
                    distance
                );
            }
        }
    }

    if added > 0 {
        log::info!("added {} redundant lanes for resilience", added);
    }
    added
}

fn centroid(systems: &[StarSystem]) -> Point {
    let n = systems.len() as f64;
    Point::new(
        systems.iter().map(|s| s.position.x).sum::<f64>() / n,
        systems.iter().map(|s| s.position.y).sum::<f64>() / n,
    )
}
