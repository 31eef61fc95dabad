//! Galaxy generation pipeline.
//!
//! Stages run strictly forward: site sampling, neighbor linking, system
//! assignment, lane building, connectivity repair, resilience augmentation,
//! anomaly placement, assembly. Every stage draws from the single seeded
//! engine owned by the run, in a fixed order, so the result is a pure
//! function of the configuration.

mod anomalies;
mod connectivity;
mod lanes;
mod names;
mod resilience;
mod sites;
mod systems;
mod union_find;

pub use lanes::{LaneNetwork, LaneStrategy};
pub use sites::Site;
pub use union_find::UnionFind;

use crate::config::{ConfigError, GalaxyConfig};
use crate::model::{Bounds, Galaxy, GalaxyStats};
use crate::rng::SeededRng;

/// Why a generation run could not produce a galaxy.
#[derive(Debug, Clone, PartialEq)]
pub enum GenerateError {
    /// The configuration failed validation before any sampling.
    Config(ConfigError),
    /// Sampling delivered fewer sites than there are fixed systems to bind.
    InsufficientSites { fixed: usize, available: usize },
}

impl From<ConfigError> for GenerateError {
    fn from(e: ConfigError) -> Self {
        GenerateError::Config(e)
    }
}

impl std::fmt::Display for GenerateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenerateError::Config(e) => write!(f, "invalid configuration: {}", e),
            GenerateError::InsufficientSites { fixed, available } => write!(
                f,
                "only {} sites were placed but {} fixed systems need one each",
                available, fixed
            ),
        }
    }
}

impl std::error::Error for GenerateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GenerateError::Config(e) => Some(e),
            _ => None,
        }
    }
}

/// Generate a galaxy from a configuration.
///
/// Pure and synchronous; each call owns its random engine, so concurrent
/// calls with separate configs are safe and identical configs reproduce
/// identical galaxies.
pub fn generate(config: &GalaxyConfig) -> Result<Galaxy, GenerateError> {
    config.validate()?;
    GalaxyGenerator::new(config).run()
}

struct GalaxyGenerator<'a> {
    config: &'a GalaxyConfig,
    rng: SeededRng,
}

impl<'a> GalaxyGenerator<'a> {
    fn new(config: &'a GalaxyConfig) -> Self {
        Self {
            config,
            rng: SeededRng::new(config.seed),
        }
    }

    fn run(mut self) -> Result<Galaxy, GenerateError> {
        log::info!("generating galaxy with seed {}", self.config.seed);

        let mut sites = sites::sample_sites(self.config, &mut self.rng);
        sites::link_neighbors(&mut sites, self.config.radius, &mut self.rng);

        let mut systems = systems::assign_systems(self.config, &mut sites, &mut self.rng)?;

        let mut network = LaneNetwork::new(systems.len());
        let strategy = LaneStrategy::for_config(self.config);
        strategy.build(self.config, &sites, &mut systems, &mut network, &mut self.rng);

        connectivity::rescue_isolated(self.config, &mut systems, &mut network);
        connectivity::bridge_components(&mut systems, &mut network);
        resilience::add_redundant_lanes(self.config, &mut systems, &mut network);

        let anomalies = anomalies::place_anomalies(self.config, &systems, &mut self.rng);

        let stats = GalaxyStats::compute(&systems, network.lanes());
        log::info!(
            "generated galaxy: {} systems, {} anomalies, {} warp lanes ({:.1} avg connections)",
            systems.len(),
            anomalies.len(),
            network.lane_count(),
            stats.average_connections
        );

        Ok(Galaxy {
            config: self.config.clone(),
            systems,
            anomalies,
            warp_lanes: network.into_lanes(),
            bounds: Bounds::for_radius(self.config.radius),
            stats,
        })
    }
}
