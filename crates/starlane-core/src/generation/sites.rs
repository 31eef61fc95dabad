//! Site sampling and neighbor graph construction.
//!
//! Sites are placeholder positions inside the galaxy disk; system identities
//! bind to them later. The neighbor graph is a cheap stand-in for a Voronoi
//! dual: each site links to a handful of its closest peers and the relation
//! is then symmetrized. Good enough local connectivity is all lane
//! generation needs, exactness is not.

use crate::config::{GalaxyConfig, Placement};
use crate::model::Point;
use crate::rng::SeededRng;

/// Rejection-sampling attempt cap per placed site or anomaly.
pub(crate) const MAX_PLACEMENT_ATTEMPTS: u32 = 500;

/// A sampled location that may host a star system.
#[derive(Debug, Clone)]
pub struct Site {
    pub position: Point,
    /// Index into the system list once a system binds here.
    pub system: Option<usize>,
    /// Indices of neighboring sites; symmetric after `link_neighbors`.
    pub neighbors: Vec<usize>,
}

/// Sample up to the configured number of sites inside the disk, keeping the
/// minimum pairwise separation.
///
/// A site whose attempt budget runs out is dropped, so a dense request can
/// deliver fewer sites than asked for. That is deliberate degrade-gracefully
/// behavior; callers observe the shortfall through the returned length.
pub fn sample_sites(config: &GalaxyConfig, rng: &mut SeededRng) -> Vec<Site> {
    let mut sites: Vec<Site> = Vec::with_capacity(config.star_system_count);

    // Absolute fixed systems keep their configured coordinates, so the
    // sampled field has to keep clear of them up front.
    let anchors: Vec<Point> = config
        .fixed_systems
        .iter()
        .filter_map(|s| match s.placement {
            Placement::Absolute { x, y } => Some(Point::new(x, y)),
            Placement::RadialBand { .. } => None,
        })
        .collect();

    for _ in 0..config.star_system_count {
        let accepted = sample_clear_position(rng, config.radius, |p| {
            sites
                .iter()
                .all(|s| s.position.distance(p) >= config.min_separation)
                && anchors
                    .iter()
                    .all(|a| a.distance(p) >= config.min_separation)
        });
        if let Some(position) = accepted {
            sites.push(Site {
                position,
                system: None,
                neighbors: Vec::new(),
            });
        }
    }

    if sites.len() < config.star_system_count {
        log::warn!(
            "placed {} of {} requested sites; separation {} is tight for radius {}",
            sites.len(),
            config.star_system_count,
            config.min_separation,
            config.radius
        );
    }
    sites
}

/// Draw disk positions until `clear` accepts one or the attempt cap runs out.
pub(crate) fn sample_clear_position(
    rng: &mut SeededRng,
    radius: f64,
    mut clear: impl FnMut(&Point) -> bool,
) -> Option<Point> {
    for _ in 0..MAX_PLACEMENT_ATTEMPTS {
        let p = random_point_in_disk(rng, radius);
        if clear(&p) {
            return Some(p);
        }
    }
    None
}

/// Uniform position inside a disk. The square root on the radius draw keeps
/// the distribution area-uniform instead of center-biased.
fn random_point_in_disk(rng: &mut SeededRng, radius: f64) -> Point {
    let angle = rng.range(0.0, std::f64::consts::TAU);
    let r = rng.uniform01().sqrt() * radius;
    Point::from_polar(angle, r)
}

/// Build the approximate proximity graph: each site keeps its k closest
/// peers (k rolled per site) within the disk diameter, then back-references
/// are added so the relation is symmetric.
pub fn link_neighbors(sites: &mut [Site], radius: f64, rng: &mut SeededRng) {
    let cutoff = radius * 2.0;
    let positions: Vec<Point> = sites.iter().map(|s| s.position).collect();

    for (i, site) in sites.iter_mut().enumerate() {
        let k = rng.int_range(4, 8) as usize;
        let mut ranked: Vec<(f64, usize)> = positions
            .iter()
            .enumerate()
            .filter(|&(j, _)| j != i)
            .map(|(j, p)| (positions[i].distance(p), j))
            .collect();
        ranked.sort_by(|a, b| a.0.total_cmp(&b.0));
        site.neighbors = ranked
            .into_iter()
            .take(k)
            .filter(|&(d, _)| d <= cutoff)
            .map(|(_, j)| j)
            .collect();
    }

    // Symmetrize: if A lists B, B must list A.
    for i in 0..sites.len() {
        for n in sites[i].neighbors.clone() {
            if !sites[n].neighbors.contains(&i) {
                sites[n].neighbors.push(i);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GalaxyConfig;

    fn sparse_config(seed: u64) -> GalaxyConfig {
        GalaxyConfig {
            seed,
            radius: 100.0,
            star_system_count: 50,
            min_separation: 2.0,
            fixed_systems: Vec::new(),
            ..GalaxyConfig::default()
        }
    }

    #[test]
    fn test_sites_respect_min_separation() {
        let config = sparse_config(21);
        let mut rng = SeededRng::new(config.seed);
        let sites = sample_sites(&config, &mut rng);
        assert_eq!(sites.len(), 50);
        for i in 0..sites.len() {
            for j in (i + 1)..sites.len() {
                let d = sites[i].position.distance(&sites[j].position);
                assert!(d >= config.min_separation, "sites {} and {} are {} apart", i, j, d);
            }
        }
    }

    #[test]
    fn test_sites_stay_inside_disk() {
        let config = sparse_config(22);
        let mut rng = SeededRng::new(config.seed);
        for site in sample_sites(&config, &mut rng) {
            assert!(site.position.length() <= config.radius + 1e-9);
        }
    }

    #[test]
    fn test_over_dense_request_under_delivers_without_hanging() {
        let config = GalaxyConfig {
            seed: 23,
            radius: 5.0,
            star_system_count: 1000,
            min_separation: 2.0,
            fixed_systems: Vec::new(),
            ..GalaxyConfig::default()
        };
        let mut rng = SeededRng::new(config.seed);
        let sites = sample_sites(&config, &mut rng);
        assert!(sites.len() < 1000);
        // A 5 ly disk cannot hold more than ~25 points 2 ly apart.
        assert!(sites.len() <= 30, "got {}", sites.len());
    }

    #[test]
    fn test_sampling_is_deterministic() {
        let config = sparse_config(24);
        let mut a = SeededRng::new(config.seed);
        let mut b = SeededRng::new(config.seed);
        let first = sample_sites(&config, &mut a);
        let second = sample_sites(&config, &mut b);
        assert_eq!(first.len(), second.len());
        for (x, y) in first.iter().zip(second.iter()) {
            assert_eq!(x.position, y.position);
        }
    }

    #[test]
    fn test_neighbor_graph_is_symmetric() {
        let config = sparse_config(25);
        let mut rng = SeededRng::new(config.seed);
        let mut sites = sample_sites(&config, &mut rng);
        link_neighbors(&mut sites, config.radius, &mut rng);
        for (i, site) in sites.iter().enumerate() {
            assert!(!site.neighbors.is_empty());
            assert!(!site.neighbors.contains(&i), "site {} lists itself", i);
            for &n in &site.neighbors {
                assert!(
                    sites[n].neighbors.contains(&i),
                    "site {} lists {} but not vice versa",
                    i,
                    n
                );
            }
        }
    }
}
