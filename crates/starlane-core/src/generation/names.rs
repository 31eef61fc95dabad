//! Name tables for procedural systems, anomalies, and star classes.
//!
//! System and anomaly names are deterministic functions of an index, not of
//! the random stream, so renaming never shifts any other draw.

use crate::model::AnomalyKind;
use crate::rng::SeededRng;

/// Deterministic prefix/suffix name for the nth procedural system.
pub fn system_name(index: usize) -> String {
    let prefix = SYSTEM_PREFIXES[index % SYSTEM_PREFIXES.len()];
    let suffix = SYSTEM_SUFFIXES[(index / SYSTEM_PREFIXES.len()) % SYSTEM_SUFFIXES.len()];
    format!("{} {}", prefix, suffix)
}

/// Deterministic per-kind name for the nth anomaly (1-based).
pub fn anomaly_name(kind: AnomalyKind, ordinal: usize) -> String {
    let names: &[&str] = match kind {
        AnomalyKind::Nebula => NEBULA_NAMES,
        AnomalyKind::Blackhole => BLACKHOLE_NAMES,
        AnomalyKind::Wormhole => WORMHOLE_NAMES,
        AnomalyKind::Artifact => ARTIFACT_NAMES,
        AnomalyKind::Resource => RESOURCE_NAMES,
    };
    format!("{} {}", names[ordinal % names.len()], ordinal / names.len() + 1)
}

/// Random spectral class for a generated star.
pub fn star_class(rng: &mut SeededRng) -> &'static str {
    STAR_CLASSES[rng.int_range(0, STAR_CLASSES.len() as i32 - 1) as usize]
}

static SYSTEM_PREFIXES: &[&str] = &[
    "Alpha", "Beta", "Gamma", "Delta", "Epsilon", "Zeta", "Eta", "Theta",
];

static SYSTEM_SUFFIXES: &[&str] = &[
    "Centauri", "Draconis", "Leonis", "Aquarii", "Orionis", "Cygni", "Lyrae",
];

static STAR_CLASSES: &[&str] = &["G-class", "K-class", "M-class", "F-class", "A-class"];

static NEBULA_NAMES: &[&str] = &[
    "Crimson Nebula",
    "Azure Cloud",
    "Stellar Nursery",
    "Dark Nebula",
];

static BLACKHOLE_NAMES: &[&str] = &["Void Maw", "Event Horizon", "Singularity", "Dark Star"];

static WORMHOLE_NAMES: &[&str] = &[
    "Quantum Gate",
    "Space Fold",
    "Dimensional Rift",
    "Warp Tunnel",
];

static ARTIFACT_NAMES: &[&str] = &[
    "Ancient Relic",
    "Precursor Site",
    "Mysterious Structure",
    "Alien Beacon",
];

static RESOURCE_NAMES: &[&str] = &[
    "Asteroid Field",
    "Resource Cluster",
    "Mining Zone",
    "Rare Elements",
];
