#![warn(
	missing_docs,
	missing_debug_implementations,
	trivial_casts,
	trivial_numeric_casts,
	unsafe_code,
	unstable_features,
	unused_import_braces,
	unused_qualifications
)]

//! A crate to calculate walking Routes and turn-by-turn Directions on a Floor Plan.
//!
//! ## Introduction
//! Indoor navigation rarely needs a full search over a detailed walkability map. Shopping malls,
//! exhibition halls and office floors are built around a handful of main walkways, and people
//! walking between two shops will almost always use them. This crate takes advantage of that:
//! a Floor Plan is described by a small [`CorridorNetwork`] of waypoints on its main walkways,
//! and a Route between two Points is built by stepping onto the walkway nearest to the start,
//! following it to the walkway nearest to the goal and stepping off again.
//!
//! **This is a heuristic, not a shortest-path search.** The resulting Paths approximate how
//! people move along the main corridors. They ignore walls and never visit more than two
//! waypoints. In exchange a Route is calculated in constant time and is fully deterministic.
//!
//! All Points are normalized to `[0, 1]` relative to the width and height of the Floor Plan.
//! Distances are converted to meters by treating the full plan as 100m wide, which can be
//! changed through the [`RouteConfig`].
//!
//! ## Examples
//! Calculating a Path:
//! ```
//! use floorplan_routing::prelude::*;
//!
//! let synthesizer = RouteSynthesizer::default(); // uses the default mall layout
//!
//! let start = Point::new(0.1, 0.5);
//! let goal = Point::new(0.9, 0.5);
//! let path = synthesizer.synthesize(start, goal);
//!
//! // walk onto the left corridor, along to the right corridor and on to the goal
//! assert_eq!(path, vec![start, Point::new(0.25, 0.5), Point::new(0.85, 0.5), goal]);
//!
//! assert_eq!(synthesizer.total_distance_meters(&path).round(), 80.0);
//! assert_eq!(synthesizer.estimated_time_secs(&path), 58); // seconds at 1.4 m/s
//! ```
//!
//! ### Directions
//! Every Point of a Path gets one [`DirectionStep`]:
//! ```
//! # use floorplan_routing::prelude::*;
//! # let synthesizer = RouteSynthesizer::default();
//! let path = synthesizer.synthesize(Point::new(0.1, 0.5), Point::new(0.9, 0.5));
//! let steps = synthesizer.directions(&path, "Main Entrance", "Cinema");
//!
//! let instructions: Vec<_> = steps.iter().map(|step| step.instruction.as_str()).collect();
//! assert_eq!(
//!     instructions,
//!     vec![
//!         "Start at Main Entrance",
//!         "Head towards the main corridor",
//!         "Turn towards your destination",
//!         "Arrive at Cinema",
//!     ],
//! );
//! assert_eq!(steps[3].distance, 5.0); // meters from the last corridor waypoint
//! ```
//!
//! ### Routes between Points of Interest
//! A [`RouteService`] looks up Points of Interest through a [`PoiLookup`](storage::PoiLookup)
//! and saves every calculated Route through a [`RouteStore`](storage::RouteStore).
//! [`MemStorage`](storage::MemStorage) implements both in memory:
//! ```
//! use floorplan_routing::prelude::*;
//!
//! let service = RouteService::new(MemStorage::with_sample_mall());
//!
//! let route = service.calculate_route("poi-1", "poi-4").unwrap(); // Main Entrance -> H&M
//! assert_eq!(route.directions.first().unwrap().instruction, "Start at Main Entrance");
//! assert_eq!(route.directions.last().unwrap().instruction, "Arrive at H&M");
//!
//! // every calculation is saved as a new Route
//! let again = service.calculate_route("poi-1", "poi-4").unwrap();
//! assert_ne!(route.id, again.id);
//! assert_eq!(route.path, again.path);
//! ```
//!
//! ### Configuration
//! Each Floor Plan can have its own corridors and scale:
//! ```
//! use floorplan_routing::prelude::*;
//!
//! let mut service = RouteService::new(MemStorage::with_sample_mall());
//!
//! service.set_floor_plan_config(
//!     "sample-mall",
//!     RouteConfig {
//!         meters_per_unit: 240.0, // the plan is 240m wide
//!         ..RouteConfig::with_corridors(CorridorNetwork::new(vec![Point::new(0.5, 0.5)]))
//!     },
//! );
//!
//! let route = service.calculate_route("poi-1", "poi-5").unwrap();
//! assert_eq!(route.path[1], Point::new(0.5, 0.5));
//! ```
//!
//! ## Crate Features
//! - `parallel` (default): look up both Points of Interest of a Route concurrently using `rayon`
//! - `log`: debug output for Route calculations and storage writes through the `log` crate
//! - `serde`: `Serialize` and `Deserialize` for all data types, using camelCase field names

pub mod geometry;

mod config;
pub use self::config::RouteConfig;

mod corridor;
pub use self::corridor::{CorridorNetwork, MALL_CORRIDORS};

mod path;
pub use self::path::Path;

mod synthesizer;
pub use self::synthesizer::RouteSynthesizer;

pub mod directions;
pub use self::directions::DirectionStep;

pub mod storage;

mod service;
pub use self::service::RouteService;

mod error;
pub use self::error::RouteError;

mod utils;

/// The most commonly used types and traits
pub mod prelude {
	pub use crate::{
		geometry::{Direction, Point},
		storage::{MemStorage, Poi, PoiLookup, RouteStore},
		CorridorNetwork, DirectionStep, Path, RouteConfig, RouteError, RouteService,
		RouteSynthesizer,
	};
}
