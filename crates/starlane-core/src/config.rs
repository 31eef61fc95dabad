//! Generation configuration and its validation.
//!
//! A `GalaxyConfig` is the complete, immutable input of a generation run.
//! Validation happens before any sampling so a bad request never produces a
//! half-built galaxy.

use serde::{Deserialize, Serialize};

use crate::model::SystemTier;

/// Tuning knobs for warp lane construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectivityConfig {
    pub min_connections: u32,
    pub max_connections: u32,
    /// Flat candidate cutoff for the probabilistic builder, and half the
    /// base reach of the tiered builder.
    pub max_distance: f64,
    /// Exponent applied to normalized distance in the probabilistic builder.
    pub distance_decay_factor: f64,
    /// Selects the tiered neighbor-graph builder instead of the
    /// distance-probability builder.
    pub use_tiered_voronoi_mode: bool,
}

impl Default for ConnectivityConfig {
    fn default() -> Self {
        Self {
            min_connections: 1,
            max_connections: 8,
            max_distance: 10.0,
            distance_decay_factor: 0.8,
            use_tiered_voronoi_mode: true,
        }
    }
}

/// Where a fixed system sits.
///
/// Real systems come with exact coordinates; fictional ones only constrain
/// how far from the origin they should end up, the angle is rolled.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Placement {
    Absolute { x: f64, y: f64 },
    RadialBand { distance: f64, tolerance: f64 },
}

/// A named system the configuration pins into the galaxy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixedSystemSpec {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub tier: SystemTier,
    #[serde(flatten)]
    pub placement: Placement,
}

impl FixedSystemSpec {
    pub fn absolute(id: &str, name: &str, tier: SystemTier, x: f64, y: f64) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            tier,
            placement: Placement::Absolute { x, y },
        }
    }

    pub fn radial(id: &str, name: &str, tier: SystemTier, distance: f64, tolerance: f64) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            tier,
            placement: Placement::RadialBand {
                distance,
                tolerance,
            },
        }
    }
}

/// Hints the renderer cares about; opaque to the generator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VisualizationHints {
    pub width: u32,
    pub height: u32,
    pub scale: f64,
}

impl Default for VisualizationHints {
    fn default() -> Self {
        Self {
            width: 2000,
            height: 2000,
            scale: 6.0,
        }
    }
}

/// Complete input of a generation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalaxyConfig {
    pub seed: u64,
    /// Disk radius in light years.
    pub radius: f64,
    pub star_system_count: usize,
    pub anomaly_count: usize,
    /// Minimum distance between any two systems.
    pub min_separation: f64,
    /// Systems closer to the world origin than this are classified core.
    pub core_radius: f64,
    /// Minimum distance between an anomaly and any system.
    pub system_anomaly_separation: f64,
    /// Minimum distance between two anomalies.
    pub anomaly_separation: f64,
    pub connectivity: ConnectivityConfig,
    pub fixed_systems: Vec<FixedSystemSpec>,
    pub visualization: VisualizationHints,
}

impl Default for GalaxyConfig {
    fn default() -> Self {
        Self {
            seed: 1111111111,
            radius: 500.0,
            star_system_count: 400,
            anomaly_count: 25,
            min_separation: 2.5,
            core_radius: 300.0,
            system_anomaly_separation: 3.0,
            anomaly_separation: 2.0,
            connectivity: ConnectivityConfig::default(),
            fixed_systems: vec![
                FixedSystemSpec::absolute("sol", "Sol System", SystemTier::Origin, 0.0, 0.0),
                FixedSystemSpec::absolute("alpha-centauri", "Alpha Centauri", SystemTier::Core, 4.37, 0.0),
                FixedSystemSpec::absolute("tau-ceti", "Tau Ceti", SystemTier::Core, -7.8, 9.1),
                FixedSystemSpec::absolute("barnards-star", "Barnard's Star", SystemTier::Core, 2.1, -5.6),
                FixedSystemSpec::absolute("bellatrix", "Bellatrix", SystemTier::Rim, 180.0, 165.0),
                FixedSystemSpec::radial("lumiere", "Lumière", SystemTier::Rim, 250.0, 20.0),
                FixedSystemSpec::radial("aspida", "Aspida", SystemTier::Rim, 350.0, 20.0),
            ],
            visualization: VisualizationHints::default(),
        }
    }
}

impl GalaxyConfig {
    /// Reject configurations the generator cannot honor.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.radius <= 0.0 {
            return Err(ConfigError::NonPositiveRadius(self.radius));
        }
        if self.star_system_count == 0 {
            return Err(ConfigError::ZeroSystemCount);
        }
        if self.fixed_systems.len() > self.star_system_count {
            return Err(ConfigError::TooManyFixedSystems {
                fixed: self.fixed_systems.len(),
                requested: self.star_system_count,
            });
        }
        if self.min_separation < 0.0
            || self.system_anomaly_separation < 0.0
            || self.anomaly_separation < 0.0
        {
            return Err(ConfigError::NegativeSeparation);
        }
        if self.connectivity.min_connections > self.connectivity.max_connections {
            return Err(ConfigError::ConnectionBoundsInverted {
                min: self.connectivity.min_connections,
                max: self.connectivity.max_connections,
            });
        }
        if self.connectivity.max_distance <= 0.0 {
            return Err(ConfigError::NonPositiveMaxDistance(
                self.connectivity.max_distance,
            ));
        }
        let mut origins = 0;
        for spec in &self.fixed_systems {
            if spec.tier == SystemTier::Origin {
                origins += 1;
            }
            if let Placement::RadialBand {
                distance,
                tolerance,
            } = spec.placement
            {
                if tolerance < 0.0 || tolerance > distance || distance > self.radius {
                    return Err(ConfigError::MalformedRadialBand {
                        id: spec.id.clone(),
                        distance,
                        tolerance,
                    });
                }
            }
        }
        if origins > 1 {
            return Err(ConfigError::MultipleOrigins(origins));
        }
        // Absolute fixed pairs are the one spacing the generator cannot
        // repair at runtime, so a violation is a config error.
        for (i, a) in self.fixed_systems.iter().enumerate() {
            let Placement::Absolute { x: ax, y: ay } = a.placement else {
                continue;
            };
            for b in &self.fixed_systems[i + 1..] {
                let Placement::Absolute { x: bx, y: by } = b.placement else {
                    continue;
                };
                let d = ((ax - bx).powi(2) + (ay - by).powi(2)).sqrt();
                if d < self.min_separation {
                    return Err(ConfigError::FixedSystemsTooClose {
                        a: a.id.clone(),
                        b: b.id.clone(),
                        distance: d,
                    });
                }
            }
        }
        Ok(())
    }
}

/// A configuration the generator refuses to run with.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    NonPositiveRadius(f64),
    ZeroSystemCount,
    TooManyFixedSystems { fixed: usize, requested: usize },
    NegativeSeparation,
    ConnectionBoundsInverted { min: u32, max: u32 },
    NonPositiveMaxDistance(f64),
    MalformedRadialBand { id: String, distance: f64, tolerance: f64 },
    MultipleOrigins(usize),
    FixedSystemsTooClose { a: String, b: String, distance: f64 },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::NonPositiveRadius(r) => {
                write!(f, "galaxy radius must be positive, got {}", r)
            }
            ConfigError::ZeroSystemCount => write!(f, "star system count must be at least 1"),
            ConfigError::TooManyFixedSystems { fixed, requested } => write!(
                f,
                "{} fixed systems exceed the requested system count {}",
                fixed, requested
            ),
            ConfigError::NegativeSeparation => {
                write!(f, "separation distances must be non-negative")
            }
            ConfigError::ConnectionBoundsInverted { min, max } => write!(
                f,
                "minConnections {} exceeds maxConnections {}",
                min, max
            ),
            ConfigError::NonPositiveMaxDistance(d) => {
                write!(f, "connectivity maxDistance must be positive, got {}", d)
            }
            ConfigError::MalformedRadialBand {
                id,
                distance,
                tolerance,
            } => write!(
                f,
                "fixed system {} has a malformed distance constraint ({} ± {})",
                id, distance, tolerance
            ),
            ConfigError::MultipleOrigins(n) => {
                write!(f, "at most one origin system is allowed, got {}", n)
            }
            ConfigError::FixedSystemsTooClose { a, b, distance } => write!(
                f,
                "fixed systems {} and {} are {:.2} ly apart, below the minimum separation",
                a, b, distance
            ),
        }
    }
}

impl std::error::Error for ConfigError {}
