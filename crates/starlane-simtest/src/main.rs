//! Starlane Headless Generation Harness
//!
//! Validates the galaxy generator against its hard invariants without a
//! server or renderer. Runs entirely in-process.
//!
//! Usage:
//!   cargo run -p starlane-simtest
//!   cargo run -p starlane-simtest -- --verbose
//!   cargo run -p starlane-simtest -- --json   (dump a sample galaxy)

use std::collections::{HashMap, HashSet, VecDeque};

use starlane_core::config::{FixedSystemSpec, GalaxyConfig};
use starlane_core::generation::generate;
use starlane_core::model::{Galaxy, SystemTier, WarpLane};

// ── Test harness ────────────────────────────────────────────────────────

struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

fn check(name: &str, passed: bool, detail: String) -> TestResult {
    TestResult {
        name: name.to_string(),
        passed,
        detail,
    }
}

fn main() {
    let verbose = std::env::args().any(|a| a == "--verbose");
    let dump_json = std::env::args().any(|a| a == "--json");

    if dump_json {
        let galaxy = generate(&sample_config(4242, 80, true)).expect("sample config is valid");
        println!(
            "{}",
            serde_json::to_string_pretty(&galaxy).expect("galaxy serializes")
        );
        return;
    }

    println!("=== Starlane Generation Harness ===\n");

    let mut results = Vec::new();

    // 1. Determinism across repeated runs and strategies
    results.extend(validate_determinism());

    // 2. Hard invariants over a seed sweep
    results.extend(validate_invariants(verbose));

    // 3. Scale sweep: connectivity from tiny to large galaxies
    results.extend(validate_scales(verbose));

    // 4. Degrade-gracefully behavior on over-dense requests
    results.extend(validate_under_delivery());

    // ── Summary ──
    println!();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.iter().filter(|r| !r.passed).count();
    let total = results.len();

    for r in &results {
        let icon = if r.passed { "✓" } else { "✗" };
        if !r.passed || verbose {
            println!("  {} {}: {}", icon, r.name, r.detail);
        }
    }

    println!(
        "\n=== RESULT: {}/{} passed, {} failed ===",
        passed, total, failed
    );

    if failed > 0 {
        std::process::exit(1);
    }
}

fn sample_config(seed: u64, systems: usize, tiered: bool) -> GalaxyConfig {
    let mut config = GalaxyConfig {
        seed,
        radius: 150.0,
        star_system_count: systems,
        anomaly_count: 12,
        min_separation: 2.0,
        core_radius: 50.0,
        fixed_systems: vec![
            FixedSystemSpec::absolute("home", "Home", SystemTier::Origin, 0.0, 0.0),
            FixedSystemSpec::radial("outpost", "Outpost", SystemTier::Rim, 90.0, 15.0),
        ],
        ..GalaxyConfig::default()
    };
    config.connectivity.use_tiered_voronoi_mode = tiered;
    config
}

// ── 1. Determinism ─────────────────────────────────────────────────────

fn validate_determinism() -> Vec<TestResult> {
    let mut results = Vec::new();

    for tiered in [true, false] {
        let label = if tiered { "tiered" } else { "classic" };
        let config = sample_config(1234, 60, tiered);
        let a = generate(&config).expect("config valid");
        let b = generate(&config).expect("config valid");
        results.push(check(
            &format!("determinism ({})", label),
            a == b,
            format!("{} systems, {} lanes", a.systems.len(), a.warp_lanes.len()),
        ));
    }

    let a = generate(&sample_config(1, 60, true)).expect("config valid");
    let b = generate(&sample_config(2, 60, true)).expect("config valid");
    let differs = a
        .systems
        .iter()
        .zip(b.systems.iter())
        .any(|(x, y)| x.position != y.position);
    results.push(check(
        "seed variation",
        differs,
        "different seeds produce different layouts".to_string(),
    ));

    results
}

// ── 2. Invariants ──────────────────────────────────────────────────────

fn validate_invariants(verbose: bool) -> Vec<TestResult> {
    let mut results = Vec::new();

    for seed in [7u64, 99, 2024] {
        for tiered in [true, false] {
            let config = sample_config(seed, 80, tiered);
            let galaxy = generate(&config).expect("config valid");
            let label = format!(
                "seed {} {}",
                seed,
                if tiered { "tiered" } else { "classic" }
            );
            if verbose {
                println!(
                    "  [{}] {} systems / {} lanes / {} anomalies",
                    label,
                    galaxy.systems.len(),
                    galaxy.warp_lanes.len(),
                    galaxy.anomalies.len()
                );
            }

            results.push(check(
                &format!("single origin ({})", label),
                galaxy
                    .systems
                    .iter()
                    .filter(|s| s.tier == SystemTier::Origin)
                    .count()
                    == 1,
                "exactly one origin system".to_string(),
            ));
            results.push(check(
                &format!("separation ({})", label),
                min_system_spacing(&galaxy) >= config.min_separation,
                format!("closest pair {:.2} ly", min_system_spacing(&galaxy)),
            ));
            results.push(check(
                &format!("connected ({})", label),
                component_count(&galaxy) == 1,
                format!("{} component(s)", component_count(&galaxy)),
            ));
            results.push(check(
                &format!("lane uniqueness ({})", label),
                lanes_are_unique(&galaxy),
                "no self or duplicate lanes".to_string(),
            ));
            results.push(check(
                &format!("travel time ({})", label),
                galaxy
                    .warp_lanes
                    .iter()
                    .all(|l| l.travel_time == WarpLane::travel_time_for(l.distance)),
                "travelTime == ceil(distance / 5)".to_string(),
            ));
        }
    }

    results
}

// ── 3. Scale sweep ─────────────────────────────────────────────────────

fn validate_scales(verbose: bool) -> Vec<TestResult> {
    let mut results = Vec::new();

    for count in [1usize, 2, 10, 50, 250] {
        let mut config = sample_config(300 + count as u64, count, true);
        config.fixed_systems.truncate(count.min(1));
        config.anomaly_count = 0;
        if count >= 250 {
            config.radius = 400.0;
        }
        let galaxy = generate(&config).expect("config valid");
        if verbose {
            println!(
                "  [scale {}] {} lanes, avg degree {:.1}",
                count,
                galaxy.warp_lanes.len(),
                galaxy.stats.average_connections
            );
        }
        results.push(check(
            &format!("scale {}", count),
            galaxy.systems.len() == count && component_count(&galaxy) == 1,
            format!("{} systems in one component", galaxy.systems.len()),
        ));
    }

    results
}

// ── 4. Under-delivery ──────────────────────────────────────────────────

fn validate_under_delivery() -> Vec<TestResult> {
    let config = GalaxyConfig {
        seed: 5,
        radius: 5.0,
        star_system_count: 1000,
        anomaly_count: 0,
        min_separation: 2.0,
        fixed_systems: Vec::new(),
        ..GalaxyConfig::default()
    };
    let galaxy = generate(&config).expect("config valid");

    vec![
        check(
            "under-delivery bound",
            galaxy.systems.len() < 1000,
            format!("placed {} of 1000 requested", galaxy.systems.len()),
        ),
        check(
            "under-delivery consistency",
            min_system_spacing(&galaxy) >= config.min_separation
                && component_count(&galaxy) == 1,
            "shrunk galaxy still satisfies all invariants".to_string(),
        ),
    ]
}

// ── Shared checks ──────────────────────────────────────────────────────

fn min_system_spacing(galaxy: &Galaxy) -> f64 {
    let mut min = f64::INFINITY;
    for i in 0..galaxy.systems.len() {
        for j in (i + 1)..galaxy.systems.len() {
            min = min.min(
                galaxy.systems[i]
                    .position
                    .distance(&galaxy.systems[j].position),
            );
        }
    }
    min
}

fn lanes_are_unique(galaxy: &Galaxy) -> bool {
    let mut pairs = HashSet::new();
    galaxy.warp_lanes.iter().all(|lane| {
        lane.from != lane.to
            && pairs.insert(if lane.from < lane.to {
                (lane.from.clone(), lane.to.clone())
            } else {
                (lane.to.clone(), lane.from.clone())
            })
    })
}

fn component_count(galaxy: &Galaxy) -> usize {
    if galaxy.systems.is_empty() {
        return 0;
    }
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
        seen[start] = true;
        let mut queue = VecDeque::from([start]);
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
