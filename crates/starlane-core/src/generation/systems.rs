//! System assignment: binds fixed and procedural identities to sites.
//!
//! Fixed systems keep their configured coordinates and only reserve the
//! nearest free site so neighbor lookups can map back to them. Procedural
//! systems take the site position itself.

use std::f64::consts::TAU;

use crate::config::{FixedSystemSpec, GalaxyConfig, Placement};
use crate::model::{Point, ResourceYield, StarSystem, SystemInfo, SystemTier};
use crate::rng::SeededRng;

use super::names;
use super::sites::Site;
use super::GenerateError;

/// Population seeded into the origin system at generation time.
const ORIGIN_POPULATION: u64 = 1_000_000;

/// Consume sites into concrete star systems: fixed specs first, in config
/// order, then procedural identities for every remaining site.
pub fn assign_systems(
    config: &GalaxyConfig,
    sites: &mut [Site],
    rng: &mut SeededRng,
) -> Result<Vec<StarSystem>, GenerateError> {
    if config.fixed_systems.len() > sites.len() {
        return Err(GenerateError::InsufficientSites {
            fixed: config.fixed_systems.len(),
            available: sites.len(),
        });
    }

    let mut systems = Vec::with_capacity(sites.len());

    for spec in &config.fixed_systems {
        let position = match spec.placement {
            Placement::Absolute { x, y } => Point::new(x, y),
            Placement::RadialBand {
                distance,
                tolerance,
            } => {
                let p = place_in_band(config, sites, &systems, rng, distance, tolerance, spec);
                log::info!(
                    "placed {} at {:.1} ly from origin (target {} ± {})",
                    spec.name,
                    p.length(),
                    distance,
                    tolerance
                );
                p
            }
        };

        let Some(site_idx) = nearest_free_site(sites, position) else {
            return Err(GenerateError::InsufficientSites {
                fixed: config.fixed_systems.len(),
                available: sites.len(),
            });
        };
        sites[site_idx].system = Some(systems.len());

        let explored = spec.tier == SystemTier::Origin;
        let population = if explored { ORIGIN_POPULATION } else { 0 };
        let gdp = population as f64 * rng.range(0.8, 1.5);
        systems.push(StarSystem {
            id: spec.id.clone(),
            name: spec.name.clone(),
            position,
            tier: spec.tier,
            is_fixed: true,
            connections: Vec::new(),
            explored,
            population,
            gdp,
            resources: roll_resources(rng, 50, 200),
            system_info: roll_system_info(rng, true),
        });
    }

    let mut index = 1;
    for site_idx in 0..sites.len() {
        if sites[site_idx].system.is_some() {
            continue;
        }
        let position = sites[site_idx].position;
        sites[site_idx].system = Some(systems.len());

        let tier = if position.length() <= config.core_radius {
            SystemTier::Core
        } else {
            SystemTier::Rim
        };
        systems.push(StarSystem {
            id: format!("system-{}", index),
            name: names::system_name(index),
            position,
            tier,
            is_fixed: false,
            connections: Vec::new(),
            explored: false,
            population: 0,
            gdp: 0.0,
            resources: roll_resources(rng, 10, 150),
            system_info: roll_system_info(rng, false),
        });
        index += 1;
    }

    Ok(systems)
}

/// Roll a position inside the radial band, retrying until it clears every
/// placed system and every unconsumed site. A band too crowded to clear
/// within the attempt budget keeps the final draw; fixed systems cannot be
/// dropped.
fn place_in_band(
    config: &GalaxyConfig,
    sites: &[Site],
    systems: &[StarSystem],
    rng: &mut SeededRng,
    distance: f64,
    tolerance: f64,
    spec: &FixedSystemSpec,
) -> Point {
    let mut position = Point::default();
    for _ in 0..super::sites::MAX_PLACEMENT_ATTEMPTS {
        let d = rng.range(distance - tolerance, distance + tolerance);
        let angle = rng.range(0.0, TAU);
        position = Point::from_polar(angle, d);
        let clear = systems
            .iter()
            .all(|s| s.position.distance(&position) >= config.min_separation)
            && sites
                .iter()
                .filter(|s| s.system.is_none())
                .all(|s| s.position.distance(&position) >= config.min_separation);
        if clear {
            return position;
        }
    }
    log::warn!(
        "fixed system {} could not clear the minimum separation inside its band",
        spec.name
    );
    position
}

fn roll_resources(rng: &mut SeededRng, lo: i32, hi: i32) -> ResourceYield {
    ResourceYield {
        minerals: rng.int_range(lo, hi) as u32,
        energy: rng.int_range(lo, hi) as u32,
        research: rng.int_range(lo, hi) as u32,
    }
}

/// Descriptive counts only; fixed systems read as old, surveyed space.
fn roll_system_info(rng: &mut SeededRng, fixed: bool) -> SystemInfo {
    let star_type = names::star_class(rng).to_string();
    let planet_count = rng.int_range(2, 12) as u32;
    let moon_count = rng.int_range(0, planet_count as i32 * 2) as u32;
    let asteroid_count = if fixed {
        rng.int_range(100, 5000) as u32
    } else {
        rng.int_range(0, 5) as u32
    };
    SystemInfo {
        star_type,
        planet_count,
        moon_count,
        asteroid_count,
    }
}

fn nearest_free_site(sites: &[Site], position: Point) -> Option<usize> {
    sites
        .iter()
        .enumerate()
        .filter(|(_, s)| s.system.is_none())
        .min_by(|a, b| {
            a.1.position
                .distance_squared(&position)
                .total_cmp(&b.1.position.distance_squared(&position))
        })
        .map(|(i, _)| i)
}
