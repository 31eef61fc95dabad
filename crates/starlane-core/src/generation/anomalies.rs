//! Anomaly placement.
//!
//! Anomalies share the capped rejection-sampling policy of site placement:
//! a position that cannot clear the separation constraints within the
//! attempt budget is dropped rather than forced.

use crate::config::GalaxyConfig;
use crate::model::{Anomaly, AnomalyKind, StarSystem};
use crate::rng::SeededRng;

use super::names;
use super::sites::{sample_clear_position, MAX_PLACEMENT_ATTEMPTS};

/// Categorical distribution of anomaly kinds. Nebulae are common sights,
/// holes in spacetime are not.
const KIND_WEIGHTS: &[(AnomalyKind, f64)] = &[
    (AnomalyKind::Nebula, 0.4),
    (AnomalyKind::Blackhole, 0.1),
    (AnomalyKind::Wormhole, 0.1),
    (AnomalyKind::Artifact, 0.2),
    (AnomalyKind::Resource, 0.2),
];

/// Place up to the configured number of anomalies clear of all systems and
/// of each other.
pub fn place_anomalies(
    config: &GalaxyConfig,
    systems: &[StarSystem],
    rng: &mut SeededRng,
) -> Vec<Anomaly> {
    let mut anomalies: Vec<Anomaly> = Vec::with_capacity(config.anomaly_count);

    for index in 0..config.anomaly_count {
        let accepted = sample_clear_position(rng, config.radius, |p| {
            systems
                .iter()
                .all(|s| s.position.distance(p) >= config.system_anomaly_separation)
                && anomalies
                    .iter()
                    .all(|a| a.position.distance(p) >= config.anomaly_separation)
        });
        let Some(position) = accepted else {
            log::warn!(
                "dropped anomaly {} of {} after {} placement attempts",
                index + 1,
                config.anomaly_count,
                MAX_PLACEMENT_ATTEMPTS
            );
            continue;
        };

        let kind = roll_kind(rng);
        let ordinal = index + 1;
        anomalies.push(Anomaly {
            id: format!("anomaly-{}", ordinal),
            name: names::anomaly_name(kind, ordinal),
            position,
            kind,
            discovered: false,
            effect: kind.effect(),
        });
    }

    anomalies
}

fn roll_kind(rng: &mut SeededRng) -> AnomalyKind {
    let roll = rng.uniform01();
    let mut cumulative = 0.0;
    for &(kind, weight) in KIND_WEIGHTS {
        cumulative += weight;
        if roll < cumulative {
            return kind;
        }
    }
    AnomalyKind::Nebula
}
