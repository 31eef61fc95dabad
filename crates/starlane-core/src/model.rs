//! Galaxy data model: systems, warp lanes, anomalies, and the aggregate.
//!
//! Everything derives serde so the caller can put the result on whatever wire
//! it likes; field renames keep the JSON shape the existing frontends expect.

use serde::{Deserialize, Serialize};

/// Light years covered per turn of warp travel.
pub const LY_PER_TURN: f64 = 5.0;

/// 2D position in light years.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn from_polar(angle: f64, radius: f64) -> Self {
        Self {
            x: radius * angle.cos(),
            y: radius * angle.sin(),
        }
    }

    pub fn distance_squared(&self, other: &Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    pub fn distance(&self, other: &Self) -> f64 {
        self.distance_squared(other).sqrt()
    }

    /// Distance from the world origin.
    pub fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }
}

/// Connectivity classification of a system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SystemTier {
    /// The single home system.
    Origin,
    /// Inner, well-connected systems.
    Core,
    /// Outer, sparsely connected systems.
    Rim,
}

/// Mineable yields of a system.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceYield {
    pub minerals: u32,
    pub energy: u32,
    pub research: u32,
}

/// Descriptive counts for downstream flavor; never feeds topology.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemInfo {
    pub star_type: String,
    pub planet_count: u32,
    pub moon_count: u32,
    pub asteroid_count: u32,
}

/// A star system bound to a sampled site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StarSystem {
    pub id: String,
    pub name: String,
    #[serde(flatten)]
    pub position: Point,
    #[serde(rename = "type")]
    pub tier: SystemTier,
    pub is_fixed: bool,
    /// Ids of systems reachable by a single warp lane. Mutated only by lane
    /// creation; order carries no meaning.
    pub connections: Vec<String>,
    pub explored: bool,
    pub population: u64,
    pub gdp: f64,
    pub resources: ResourceYield,
    pub system_info: SystemInfo,
}

/// An undirected travel connection between two systems.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WarpLane {
    pub id: String,
    pub from: String,
    pub to: String,
    pub distance: f64,
    pub travel_time: u32,
    /// Frozen at creation from the endpoints' explored state; a system
    /// explored later does not retroactively reveal its lanes.
    pub discovered: bool,
}

impl WarpLane {
    /// Stable id for an unordered endpoint pair.
    pub fn pair_id(a: &str, b: &str) -> String {
        if a <= b {
            format!("{}--{}", a, b)
        } else {
            format!("{}--{}", b, a)
        }
    }

    /// Turns needed to traverse a lane of the given length.
    pub fn travel_time_for(distance: f64) -> u32 {
        (distance / LY_PER_TURN).ceil() as u32
    }
}

/// Categories of points of interest scattered between systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnomalyKind {
    Nebula,
    Blackhole,
    Wormhole,
    Artifact,
    Resource,
}

impl AnomalyKind {
    /// Gameplay effect, a pure function of the kind.
    pub fn effect(self) -> AnomalyEffect {
        let (kind, value) = match self {
            AnomalyKind::Nebula => ("sensor_interference", -0.5),
            AnomalyKind::Blackhole => ("gravity_well", 2.0),
            AnomalyKind::Wormhole => ("fast_travel", 0.1),
            AnomalyKind::Artifact => ("research_bonus", 1.5),
            AnomalyKind::Resource => ("mining_bonus", 2.0),
        };
        AnomalyEffect {
            kind: kind.to_string(),
            value,
        }
    }
}

/// Effect payload attached to an anomaly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnomalyEffect {
    #[serde(rename = "type")]
    pub kind: String,
    pub value: f64,
}

/// A point of interest that is not a star system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Anomaly {
    pub id: String,
    pub name: String,
    #[serde(flatten)]
    pub position: Point,
    #[serde(rename = "type")]
    pub kind: AnomalyKind,
    pub discovered: bool,
    pub effect: AnomalyEffect,
}

/// Axis-aligned extent of the generated disk.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
    pub radius: f64,
}

impl Bounds {
    pub fn for_radius(radius: f64) -> Self {
        Self {
            min_x: -radius,
            max_x: radius,
            min_y: -radius,
            max_y: radius,
            radius,
        }
    }
}

/// Diagnostic summary of a generated galaxy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalaxyStats {
    pub average_connections: f64,
    pub max_lane_distance: f64,
    pub average_lane_distance: f64,
}

impl GalaxyStats {
    pub fn compute(systems: &[StarSystem], lanes: &[WarpLane]) -> Self {
        let average_connections = if systems.is_empty() {
            0.0
        } else {
            systems.iter().map(|s| s.connections.len()).sum::<usize>() as f64
                / systems.len() as f64
        };
        let max_lane_distance = lanes.iter().map(|l| l.distance).fold(0.0, f64::max);
        let average_lane_distance = if lanes.is_empty() {
            0.0
        } else {
            lanes.iter().map(|l| l.distance).sum::<f64>() / lanes.len() as f64
        };
        Self {
            average_connections,
            max_lane_distance,
            average_lane_distance,
        }
    }
}

/// The generated galaxy snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Galaxy {
    pub config: crate::config::GalaxyConfig,
    pub systems: Vec<StarSystem>,
    pub anomalies: Vec<Anomaly>,
    pub warp_lanes: Vec<WarpLane>,
    pub bounds: Bounds,
    pub stats: GalaxyStats,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_travel_time_rounds_up() {
        assert_eq!(WarpLane::travel_time_for(0.0), 0);
        assert_eq!(WarpLane::travel_time_for(4.9), 1);
        assert_eq!(WarpLane::travel_time_for(5.0), 1);
        assert_eq!(WarpLane::travel_time_for(5.1), 2);
        assert_eq!(WarpLane::travel_time_for(23.0), 5);
    }

    #[test]
    fn test_pair_id_is_order_independent() {
        assert_eq!(
            WarpLane::pair_id("system-1", "system-2"),
            WarpLane::pair_id("system-2", "system-1"),
        );
    }

    #[test]
    fn test_point_polar_roundtrip() {
        let p = Point::from_polar(std::f64::consts::FRAC_PI_2, 10.0);
        assert!(p.x.abs() < 1e-9);
        assert!((p.y - 10.0).abs() < 1e-9);
        assert!((p.length() - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_anomaly_effects_are_fixed() {
        assert_eq!(AnomalyKind::Nebula.effect().kind, "sensor_interference");
        assert_eq!(AnomalyKind::Blackhole.effect().value, 2.0);
        assert_eq!(AnomalyKind::Wormhole.effect().kind, "fast_travel");
        assert_eq!(AnomalyKind::Artifact.effect().value, 1.5);
        assert_eq!(AnomalyKind::Resource.effect().kind, "mining_bonus");
    }

    #[test]
    fn test_tier_serializes_lowercase() {
        let json = serde_json::to_string(&SystemTier::Origin).unwrap();
        assert_eq!(json, "\"origin\"");
    }
}
