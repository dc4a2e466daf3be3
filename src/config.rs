use crate::{
	corridor::CorridorNetwork,
	geometry::{self, seconds_at},
};

/// Options for configuring a [`RouteSynthesizer`](crate::RouteSynthesizer)
///
/// Default options:
/// ```
/// # use floorplan_routing::{CorridorNetwork, RouteConfig};
/// assert_eq!(
/// 	RouteConfig {
/// 		meters_per_unit: 100.0,
/// 		walking_speed: 1.4,
/// 		snap_threshold: 0.05,
/// 		corridors: CorridorNetwork::mall(),
/// 	},
/// 	Default::default()
/// );
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct RouteConfig {
	/// How many meters one normalized unit spans (defaults to `100.0`).
	///
	/// Normalized coordinates do not carry the physical size of a Floor Plan, so every plan is
	/// treated as 100m wide unless this is changed.
	pub meters_per_unit: f64,
	/// Walking speed in m/s used for all time estimates (defaults to `1.4`)
	pub walking_speed: f64,
	/// A start or goal closer than this (in normalized units) to its nearest corridor waypoint
	/// counts as already standing on the corridor (defaults to `0.05`, about 5m).
	pub snap_threshold: f64,
	/// The corridor waypoints Routes snap onto (defaults to [`CorridorNetwork::mall`])
	pub corridors: CorridorNetwork,
}

impl RouteConfig {
	/// Creates the default config with a different corridor layout
	///
	/// ```
	/// # use floorplan_routing::{CorridorNetwork, RouteConfig, geometry::Point};
	/// let config = RouteConfig::with_corridors(CorridorNetwork::new(vec![Point::new(0.5, 0.5)]));
	/// assert_eq!(config.corridors.len(), 1);
	/// assert_eq!(config.walking_speed, 1.4);
	/// ```
	pub fn with_corridors(corridors: CorridorNetwork) -> RouteConfig {
		RouteConfig {
			corridors,
			..Default::default()
		}
	}

	/// Converts a normalized distance to meters
	pub fn to_meters(&self, normalized_distance: f64) -> f64 {
		normalized_distance * self.meters_per_unit
	}

	/// Seconds it takes to walk `meters`, rounded up
	pub fn walking_time_secs(&self, meters: f64) -> u32 {
		seconds_at(meters, self.walking_speed)
	}
}

impl Default for RouteConfig {
	fn default() -> RouteConfig {
		RouteConfig {
			meters_per_unit: geometry::METERS_PER_UNIT,
			walking_speed: geometry::WALKING_SPEED,
			snap_threshold: 0.05,
			corridors: CorridorNetwork::mall(),
		}
	}
}

#[test]
fn test_custom_scale() {
	let config = RouteConfig {
		meters_per_unit: 250.0,
		walking_speed: 1.0,
		..Default::default()
	};
	assert_eq!(config.to_meters(0.5), 125.0);
	assert_eq!(config.walking_time_secs(125.0), 125);
	assert_eq!(config.walking_time_secs(0.0), 0);
}
