//! Integration tests for the full galaxy generation pipeline.
//!
//! Exercises: GalaxyConfig → sites → systems → lanes → connectivity repair
//! → resilience → anomalies → assembled Galaxy, against the hard invariants
//! every generated galaxy must satisfy.

use std::collections::{HashMap, HashSet, VecDeque};

use starlane_core::config::{FixedSystemSpec, GalaxyConfig};
use starlane_core::generation::generate;
use starlane_core::model::{Galaxy, SystemTier, WarpLane};

// ── Helpers ────────────────────────────────────────────────────────────

fn base_config(seed: u64, system_count: usize) -> GalaxyConfig {
    GalaxyConfig {
        seed,
        radius: 120.0,
        star_system_count: system_count,
        anomaly_count: 10,
        min_separation: 2.0,
        core_radius: 40.0,
        fixed_systems: vec![FixedSystemSpec::absolute(
            "home",
            "Home",
            SystemTier::Origin,
            0.0,
            0.0,
        )],
        ..GalaxyConfig::default()
    }
}

/// Number of connected components of the lane graph, via BFS over the
/// systems' connection lists.
fn component_count(galaxy: &Galaxy) -> usize {
    let index: HashMap<&str, usize> = galaxy
        .systems
        .iter()
        .enumerate()
        .map(|(i, s)| (s.id.as_str(), i))
        .collect();

    let mut seen = vec![false; galaxy.systems.len()];
    let mut components = 0;
    for start in 0..galaxy.systems.len() {
        if seen[start] {
            continue;
        }
        components += 1;
        let mut queue = VecDeque::from([start]);
        seen[start] = true;
        while let Some(i) = queue.pop_front() {
            for id in &galaxy.systems[i].connections {
                let j = index[id.as_str()];
                if !seen[j] {
                    seen[j] = true;
                    queue.push_back(j);
                }
            }
        }
    }
    components
}

// ── Determinism ────────────────────────────────────────────────────────

#[test]
fn same_seed_reproduces_the_galaxy() {
    let config = base_config(42, 60);
    let first = generate(&config).unwrap();
    let second = generate(&config).unwrap();
    assert_eq!(first, second);
}

#[test]
fn different_seed_changes_the_layout() {
    let a = generate(&base_config(42, 60)).unwrap();
    let b = generate(&base_config(43, 60)).unwrap();
    let positions_a: Vec<_> = a.systems.iter().map(|s| s.position).collect();
    let positions_b: Vec<_> = b.systems.iter().map(|s| s.position).collect();
    assert_ne!(positions_a, positions_b);
}

#[test]
fn both_strategies_are_deterministic() {
    for tiered in [true, false] {
        let mut config = base_config(7, 50);
        config.connectivity.use_tiered_voronoi_mode = tiered;
        let first = generate(&config).unwrap();
        let second = generate(&config).unwrap();
        assert_eq!(first, second, "tiered={}", tiered);
    }
}

// ── Geometric invariants ───────────────────────────────────────────────

#[test]
fn systems_keep_minimum_separation() {
    let mut config = base_config(11, 80);
    config
        .fixed_systems
        .push(FixedSystemSpec::radial("drift", "Drift", SystemTier::Rim, 60.0, 15.0));
    let galaxy = generate(&config).unwrap();
    for i in 0..galaxy.systems.len() {
        for j in (i + 1)..galaxy.systems.len() {
            let d = galaxy.systems[i]
                .position
                .distance(&galaxy.systems[j].position);
            assert!(
                d >= config.min_separation,
                "{} and {} are {:.2} ly apart",
                galaxy.systems[i].id,
                galaxy.systems[j].id,
                d
            );
        }
    }
}

#[test]
fn anomalies_keep_their_separations() {
    let config = base_config(13, 60);
    let galaxy = generate(&config).unwrap();
    for anomaly in &galaxy.anomalies {
        for system in &galaxy.systems {
            assert!(
                anomaly.position.distance(&system.position) >= config.system_anomaly_separation
            );
        }
    }
    for i in 0..galaxy.anomalies.len() {
        for j in (i + 1)..galaxy.anomalies.len() {
            assert!(
                galaxy.anomalies[i]
                    .position
                    .distance(&galaxy.anomalies[j].position)
                    >= config.anomaly_separation
            );
        }
    }
}

// ── Topological invariants ─────────────────────────────────────────────

#[test]
fn exactly_one_origin_system() {
    let galaxy = generate(&base_config(17, 60)).unwrap();
    let origins = galaxy
        .systems
        .iter()
        .filter(|s| s.tier == SystemTier::Origin)
        .count();
    assert_eq!(origins, 1);
}

#[test]
fn lane_graph_is_one_component_at_all_scales() {
    for (seed, count) in [(1u64, 1usize), (2, 2), (3, 12), (4, 60), (5, 500)] {
        let mut config = base_config(seed, count);
        config.fixed_systems.truncate(count);
        if count >= 60 {
            config.radius = 400.0;
        }
        let galaxy = generate(&config).unwrap();
        assert_eq!(galaxy.systems.len(), count);
        assert_eq!(component_count(&galaxy), 1, "seed {} count {}", seed, count);
    }
}

#[test]
fn classic_mode_is_also_fully_connected() {
    let mut config = base_config(19, 120);
    config.connectivity.use_tiered_voronoi_mode = false;
    let galaxy = generate(&config).unwrap();
    assert_eq!(component_count(&galaxy), 1);
}

#[test]
fn no_self_or_duplicate_lanes() {
    let galaxy = generate(&base_config(23, 100)).unwrap();
    let mut pairs = HashSet::new();
    for lane in &galaxy.warp_lanes {
        assert_ne!(lane.from, lane.to, "self lane {}", lane.id);
        let key = if lane.from < lane.to {
            (lane.from.clone(), lane.to.clone())
        } else {
            (lane.to.clone(), lane.from.clone())
        };
        assert!(pairs.insert(key), "duplicate lane {}", lane.id);
    }
}

#[test]
fn lanes_record_true_distance_and_travel_time() {
    let galaxy = generate(&base_config(29, 80)).unwrap();
    let by_id: HashMap<&str, _> = galaxy
        .systems
        .iter()
        .map(|s| (s.id.as_str(), s.position))
        .collect();
    assert!(!galaxy.warp_lanes.is_empty());
    for lane in &galaxy.warp_lanes {
        let expected = by_id[lane.from.as_str()].distance(&by_id[lane.to.as_str()]);
        assert!((lane.distance - expected).abs() < 1e-9, "lane {}", lane.id);
        assert_eq!(lane.travel_time, WarpLane::travel_time_for(lane.distance));
    }
}

#[test]
fn connections_mirror_the_lane_set() {
    let galaxy = generate(&base_config(31, 70)).unwrap();
    let mut degree: HashMap<&str, usize> = HashMap::new();
    for lane in &galaxy.warp_lanes {
        *degree.entry(lane.from.as_str()).or_default() += 1;
        *degree.entry(lane.to.as_str()).or_default() += 1;
    }
    for system in &galaxy.systems {
        assert_eq!(
            system.connections.len(),
            degree.get(system.id.as_str()).copied().unwrap_or(0),
            "system {}",
            system.id
        );
    }
}

// ── Degrade-gracefully behavior ────────────────────────────────────────

#[test]
fn over_dense_request_under_delivers_consistently() {
    let config = GalaxyConfig {
        seed: 99,
        radius: 5.0,
        star_system_count: 1000,
        anomaly_count: 0,
        min_separation: 2.0,
        fixed_systems: Vec::new(),
        ..GalaxyConfig::default()
    };
    let galaxy = generate(&config).unwrap();

    assert!(galaxy.systems.len() < 1000);
    for i in 0..galaxy.systems.len() {
        for j in (i + 1)..galaxy.systems.len() {
            let d = galaxy.systems[i]
                .position
                .distance(&galaxy.systems[j].position);
            assert!(d >= config.min_separation);
        }
    }
    assert_eq!(component_count(&galaxy), 1);
}

// ── End-to-end example ─────────────────────────────────────────────────

#[test]
fn seed_seven_example_reproduces_exactly() {
    let config = GalaxyConfig {
        seed: 7,
        radius: 20.0,
        star_system_count: 6,
        anomaly_count: 0,
        min_separation: 2.0,
        fixed_systems: vec![FixedSystemSpec::absolute(
            "origin",
            "Origin",
            SystemTier::Origin,
            0.0,
            0.0,
        )],
        ..GalaxyConfig::default()
    };

    let galaxy = generate(&config).unwrap();
    assert_eq!(galaxy.systems.len(), 6);
    assert!(galaxy.anomalies.is_empty());
    assert_eq!(component_count(&galaxy), 1);

    let rerun = generate(&config).unwrap();
    assert_eq!(galaxy, rerun);

    let other_seed = generate(&GalaxyConfig {
        seed: 8,
        ..config
    })
    .unwrap();
    let positions: Vec<_> = galaxy.systems.iter().map(|s| s.position).collect();
    let other_positions: Vec<_> = other_seed.systems.iter().map(|s| s.position).collect();
    assert_ne!(positions, other_positions);
}

// ── Wire shape ─────────────────────────────────────────────────────────

#[test]
fn json_shape_matches_consumers() {
    let galaxy = generate(&base_config(37, 30)).unwrap();
    let value = serde_json::to_value(&galaxy).unwrap();

    assert!(value["config"]["starSystemCount"].is_number());
    assert!(value["warpLanes"].is_array());
    assert!(value["bounds"]["minX"].is_number());
    assert_eq!(value["bounds"]["radius"], 120.0);

    let system = &value["systems"][0];
    for key in ["id", "name", "x", "y", "type", "isFixed", "explored", "connections", "systemInfo"] {
        assert!(!system[key].is_null(), "missing system field {}", key);
    }
    assert!(system["systemInfo"]["starType"].is_string());

    let lane = &value["warpLanes"][0];
    for key in ["id", "from", "to", "distance", "travelTime", "discovered"] {
        assert!(!lane[key].is_null(), "missing lane field {}", key);
    }

    let anomaly = &value["anomalies"][0];
    for key in ["id", "name", "x", "y", "type", "effect"] {
        assert!(!anomaly[key].is_null(), "missing anomaly field {}", key);
    }
}
