//! The walkways a Route is allowed to snap onto

use crate::geometry::{distance, Point};

/// The default mall layout: four nodes along the main east-west walkway plus a north and a south
/// corridor.
pub const MALL_CORRIDORS: [Point; 6] = [
	Point::new(0.25, 0.5), // left corridor
	Point::new(0.45, 0.5), // center-left intersection
	Point::new(0.65, 0.5), // center-right intersection
	Point::new(0.85, 0.5), // right corridor
	Point::new(0.5, 0.3),  // north corridor
	Point::new(0.5, 0.7),  // south corridor
];

/// A small set of canonical "on-path" Points representing the main walkways of a Floor Plan.
///
/// Routes enter the network at the waypoint closest to their start and leave it at the waypoint
/// closest to their goal. This is a nearest-waypoint heuristic, not a graph search: the waypoints
/// are not connected by edges and no shortest path through them is computed.
///
/// Each [`RouteSynthesizer`](crate::RouteSynthesizer) owns its own network, so different Floor
/// Plans can use different layouts:
/// ```
/// use floorplan_routing::{CorridorNetwork, geometry::Point};
///
/// let atrium = CorridorNetwork::new(vec![Point::new(0.5, 0.5)]);
/// assert_eq!(atrium.nearest(Point::new(0.9, 0.1)), Some(Point::new(0.5, 0.5)));
///
/// let mall = CorridorNetwork::default();
/// assert_eq!(mall.len(), 6);
/// assert_eq!(mall.nearest(Point::new(0.1, 0.5)), Some(Point::new(0.25, 0.5)));
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CorridorNetwork {
	waypoints: Vec<Point>,
}

impl CorridorNetwork {
	/// Creates a network from the given waypoints.
	///
	/// The order matters: when two waypoints are equally close to a Point, the earlier one wins.
	pub fn new(waypoints: Vec<Point>) -> CorridorNetwork {
		CorridorNetwork { waypoints }
	}

	/// The default mall layout, see [`MALL_CORRIDORS`]
	pub fn mall() -> CorridorNetwork {
		CorridorNetwork::new(MALL_CORRIDORS.to_vec())
	}

	/// The waypoints in the order they were given
	pub fn waypoints(&self) -> &[Point] {
		&self.waypoints
	}

	/// The number of waypoints
	pub fn len(&self) -> usize {
		self.waypoints.len()
	}

	/// `true` if the network has no waypoints
	pub fn is_empty(&self) -> bool {
		self.waypoints.is_empty()
	}

	/// Finds the waypoint closest to `point`.
	///
	/// Ties are broken in favor of the waypoint that comes first. Returns `None` only if the
	/// network is empty.
	pub fn nearest(&self, point: Point) -> Option<Point> {
		let mut iter = self.waypoints.iter().copied();
		let mut nearest = iter.next()?;
		let mut min_distance = distance(point, nearest);

		for waypoint in iter {
			let dist = distance(point, waypoint);
			if dist < min_distance {
				min_distance = dist;
				nearest = waypoint;
			}
		}
		Some(nearest)
	}
}

impl Default for CorridorNetwork {
	fn default() -> CorridorNetwork {
		CorridorNetwork::mall()
	}
}

impl From<Vec<Point>> for CorridorNetwork {
	fn from(waypoints: Vec<Point>) -> CorridorNetwork {
		CorridorNetwork::new(waypoints)
	}
}

#[test]
fn test_nearest_on_each_node() {
	let network = CorridorNetwork::mall();
	for &waypoint in MALL_CORRIDORS.iter() {
		assert_eq!(network.nearest(waypoint), Some(waypoint));
	}
}

#[test]
fn test_nearest_off_network() {
	let network = CorridorNetwork::mall();
	assert_eq!(
		network.nearest(Point::new(0.9, 0.5)),
		Some(Point::new(0.85, 0.5))
	);
	assert_eq!(
		network.nearest(Point::new(0.2, 0.4)),
		Some(Point::new(0.25, 0.5))
	);
	assert_eq!(
		network.nearest(Point::new(0.5, 0.05)),
		Some(Point::new(0.5, 0.3))
	);
	assert_eq!(
		network.nearest(Point::new(0.55, 0.95)),
		Some(Point::new(0.5, 0.7))
	);
}

#[test]
fn test_nearest_tie_prefers_first() {
	let network = CorridorNetwork::new(vec![Point::new(0.25, 0.5), Point::new(0.75, 0.5)]);
	assert_eq!(
		network.nearest(Point::new(0.5, 0.5)),
		Some(Point::new(0.25, 0.5))
	);

	let reversed = CorridorNetwork::new(vec![Point::new(0.75, 0.5), Point::new(0.25, 0.5)]);
	assert_eq!(
		reversed.nearest(Point::new(0.5, 0.5)),
		Some(Point::new(0.75, 0.5))
	);
}

#[test]
fn test_nearest_empty() {
	let network = CorridorNetwork::new(vec![]);
	assert!(network.is_empty());
	assert_eq!(network.nearest(Point::new(0.5, 0.5)), None);
}
