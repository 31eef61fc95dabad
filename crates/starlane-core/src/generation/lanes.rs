//! Warp lane construction.
//!
//! Every lane-producing phase (the strategy builders here, connectivity
//! repair, resilience augmentation) writes into one `LaneNetwork`. The
//! network owns the lane list plus a symmetric adjacency index and refuses
//! self edges and duplicate pairs, so later phases can re-request an existing
//! connection without consequence.

use std::collections::HashSet;

use crate::config::GalaxyConfig;
use crate::model::{StarSystem, SystemTier, WarpLane};
use crate::rng::SeededRng;

use super::sites::Site;

/// Shared lane accumulator over systems addressed by index.
#[derive(Debug)]
pub struct LaneNetwork {
    lanes: Vec<WarpLane>,
    adjacency: Vec<Vec<usize>>,
    pairs: HashSet<(usize, usize)>,
}

impl LaneNetwork {
    pub fn new(system_count: usize) -> Self {
        Self {
            lanes: Vec::new(),
            adjacency: vec![Vec::new(); system_count],
            pairs: HashSet::new(),
        }
    }

    /// Create the lane for an unordered pair if it does not exist yet.
    /// Self edges are refused. Returns whether a lane was created.
    pub fn connect(&mut self, a: usize, b: usize, systems: &mut [StarSystem]) -> bool {
        if a == b {
            return false;
        }
        let key = if a < b { (a, b) } else { (b, a) };
        if !self.pairs.insert(key) {
            return false;
        }

        let distance = systems[a].position.distance(&systems[b].position);
        self.lanes.push(WarpLane {
            id: WarpLane::pair_id(&systems[a].id, &systems[b].id),
            from: systems[a].id.clone(),
            to: systems[b].id.clone(),
            distance,
            travel_time: WarpLane::travel_time_for(distance),
            discovered: systems[a].explored && systems[b].explored,
        });
        self.adjacency[a].push(b);
        self.adjacency[b].push(a);

        let id_a = systems[a].id.clone();
        let id_b = systems[b].id.clone();
        systems[a].connections.push(id_b);
        systems[b].connections.push(id_a);
        true
    }

    pub fn is_connected(&self, a: usize, b: usize) -> bool {
        let key = if a < b { (a, b) } else { (b, a) };
        self.pairs.contains(&key)
    }

    pub fn degree(&self, i: usize) -> usize {
        self.adjacency[i].len()
    }

    pub fn neighbors(&self, i: usize) -> &[usize] {
        &self.adjacency[i]
    }

    pub fn lanes(&self) -> &[WarpLane] {
        &self.lanes
    }

    pub fn lane_count(&self) -> usize {
        self.lanes.len()
    }

    pub fn into_lanes(self) -> Vec<WarpLane> {
        self.lanes
    }
}

/// Reach multiplier per tier: the capital and the core reach far, the rim
/// barely reaches past its closest neighbors.
pub(crate) fn tier_multiplier(tier: SystemTier) -> f64 {
    match tier {
        SystemTier::Origin => 2.5,
        SystemTier::Core => 2.0,
        SystemTier::Rim => 0.4,
    }
}

/// The two interchangeable lane generation strategies. Both fill the same
/// `LaneNetwork` and are interchangeable against the downstream repair
/// phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaneStrategy {
    /// Admit neighbor-graph edges under a tier-scaled distance cap.
    TieredVoronoi,
    /// Distance-probability admission over all pairs within a flat cap.
    Probabilistic,
}

impl LaneStrategy {
    pub fn for_config(config: &GalaxyConfig) -> Self {
        if config.connectivity.use_tiered_voronoi_mode {
            LaneStrategy::TieredVoronoi
        } else {
            LaneStrategy::Probabilistic
        }
    }

    pub fn build(
        self,
        config: &GalaxyConfig,
        sites: &[Site],
        systems: &mut [StarSystem],
        network: &mut LaneNetwork,
        rng: &mut SeededRng,
    ) {
        match self {
            LaneStrategy::TieredVoronoi => build_tiered(config, sites, systems, network),
            LaneStrategy::Probabilistic => build_probabilistic(config, systems, network, rng),
        }
    }
}

/// Tiered mode: every neighbor-graph edge between bound systems becomes a
/// lane if the pair distance fits under `base × max(tier multipliers)`.
/// Central systems therefore reach far while rim pairs only connect locally.
fn build_tiered(
    config: &GalaxyConfig,
    sites: &[Site],
    systems: &mut [StarSystem],
    network: &mut LaneNetwork,
) {
    let base = tiered_base_distance(config);
    let mut evaluated = 0u32;
    let mut created = 0u32;

    for (i, site) in sites.iter().enumerate() {
        let Some(a) = site.system else { continue };
        for &j in &site.neighbors {
            // Each unordered site pair is evaluated once.
            if j <= i {
                continue;
            }
            let Some(b) = sites[j].system else { continue };
            evaluated += 1;

            let reach =
                base * tier_multiplier(systems[a].tier).max(tier_multiplier(systems[b].tier));
            if systems[a].position.distance(&systems[b].position) <= reach
                && network.connect(a, b, systems)
            {
                created += 1;
            }
        }
    }

    log::debug!(
        "tiered lane builder admitted {} of {} neighbor edges",
        created,
        evaluated
    );
}

/// Base reach of the tiered builder before tier multipliers.
pub(crate) fn tiered_base_distance(config: &GalaxyConfig) -> f64 {
    (config.connectivity.max_distance * 1.5).max(config.radius * 0.25)
}

/// Classic mode: per system, guarantee the two closest candidates, then keep
/// admitting by exponentially decaying distance probability until the rolled
/// target degree is reached. Candidates with almost no lanes of their own get
/// a boost so the graph does not strand them.
fn build_probabilistic(
    config: &GalaxyConfig,
    systems: &mut [StarSystem],
    network: &mut LaneNetwork,
    rng: &mut SeededRng,
) {
    let conn = &config.connectivity;

    for i in 0..systems.len() {
        let mut candidates: Vec<(f64, usize)> = (0..systems.len())
            .filter(|&j| j != i)
            .map(|j| (systems[i].position.distance(&systems[j].position), j))
            .filter(|&(d, _)| d <= conn.max_distance)
            .collect();
        candidates.sort_by(|a, b| a.0.total_cmp(&b.0));

        let central = systems[i].position.length() / config.radius < 0.3;
        let max_connections = conn.max_connections + if central { 2 } else { 0 };
        let target =
            rng.int_range(conn.min_connections as i32, max_connections as i32) as usize;

        for &(_, j) in candidates.iter().take(2) {
            network.connect(i, j, systems);
        }

        for &(distance, j) in &candidates {
            if network.degree(i) >= target {
                break;
            }
            if network.is_connected(i, j) {
                continue;
            }
            let normalized = distance / conn.max_distance;
            let mut probability = (-normalized * conn.distance_decay_factor).exp();
            if network.degree(j) < 2 {
                probability *= 1.5;
            }
            if rng.chance(probability) {
                network.connect(i, j, systems);
            }
        }
    }
}
