//! Starlane Core - Procedural Galaxy Generation
//!
//! Generates a static galaxy snapshot from a compact configuration: star
//! systems sampled into a disk, warp lanes wiring them into a single
//! reachable network, and scattered anomalies. Generation is deterministic:
//! the same configuration (seed included) always produces the same galaxy.
//!
//! # Pipeline
//!
//! | Stage | Module | Purpose |
//! |-------|--------|---------|
//! | Sampling | [`generation`] (sites) | disk positions with minimum separation |
//! | Neighbors | [`generation`] (sites) | approximate proximity graph over sites |
//! | Assignment | [`generation`] (systems) | fixed + procedural system identities |
//! | Lanes | [`generation`] (lanes) | tiered or probabilistic lane admission |
//! | Repair | [`generation`] (connectivity) | isolation rescue, union-find bridging |
//! | Resilience | [`generation`] (resilience) | capped redundant lanes |
//! | Anomalies | [`generation`] (anomalies) | separated points of interest |
//!
//! # Example
//!
//! ```rust
//! use starlane_core::prelude::*;
//!
//! let config = GalaxyConfig {
//!     star_system_count: 60,
//!     anomaly_count: 5,
//!     ..GalaxyConfig::default()
//! };
//! let galaxy = generate(&config).expect("valid config");
//! assert_eq!(galaxy.systems.len(), 60);
//! ```
//!
//! The caller owns serialization (the whole model derives serde), transport,
//! and persistence; this crate is pure computation with no I/O.

pub mod config;
pub mod generation;
pub mod model;
pub mod rng;

pub use generation::{generate, GenerateError};

/// Commonly used types for convenient importing
pub mod prelude {
    pub use crate::config::{
        ConnectivityConfig, FixedSystemSpec, GalaxyConfig, Placement, VisualizationHints,
    };
    pub use crate::generation::{generate, GenerateError};
    pub use crate::model::*;
}
