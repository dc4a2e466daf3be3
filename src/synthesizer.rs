use crate::{
	config::RouteConfig,
	directions::{generate_directions, DirectionStep},
	geometry::{distance, Point},
	path::Path,
};

/// Turns a start and a goal on a Floor Plan into a walkable [`Path`] through its corridors.
///
/// ## Examples
/// ```
/// use floorplan_routing::{RouteSynthesizer, geometry::Point};
///
/// let synthesizer = RouteSynthesizer::default();
///
/// let start = Point::new(0.1, 0.5);
/// let goal = Point::new(0.9, 0.5);
/// let path = synthesizer.synthesize(start, goal);
///
/// assert_eq!(
/// 	path,
/// 	vec![start, Point::new(0.25, 0.5), Point::new(0.85, 0.5), goal],
/// );
/// assert_eq!(synthesizer.total_distance_meters(&path).round(), 80.0);
/// assert_eq!(synthesizer.estimated_time_secs(&path), 58);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RouteSynthesizer {
	config: RouteConfig,
}

impl RouteSynthesizer {
	/// Creates a new RouteSynthesizer with the given config. (See [`RouteConfig`])
	pub fn new(config: RouteConfig) -> RouteSynthesizer {
		RouteSynthesizer { config }
	}

	/// Returns the config used to create this RouteSynthesizer
	pub fn config(&self) -> &RouteConfig {
		&self.config
	}

	/// Calculates the Path from `start` to `goal`.
	///
	/// The Path enters the corridor network at the waypoint nearest to `start` and leaves it at
	/// the waypoint nearest to `goal`. Waypoints closer than
	/// [`snap_threshold`](RouteConfig::snap_threshold) to their endpoint are skipped, since the
	/// endpoint already lies on the corridor.
	///
	/// The returned Path always begins with `start`, ends with `goal` and has between 2 and 4
	/// Points. If `start == goal`, or the network has no waypoints, it is simply `[start, goal]`.
	pub fn synthesize(&self, start: Point, goal: Point) -> Path {
		if start == goal {
			return Path::new(vec![start, goal]);
		}
		let corridors = &self.config.corridors;
		let (start_node, goal_node) = match (corridors.nearest(start), corridors.nearest(goal)) {
			(Some(s), Some(g)) => (s, g),
			_ => return Path::new(vec![start, goal]),
		};
		let threshold = self.config.snap_threshold;

		let mut points = Vec::with_capacity(4);
		points.push(start);

		if distance(start, start_node) > threshold {
			points.push(start_node);
		}

		if start_node != goal_node {
			points.push(goal_node);
		}

		// `goal` is skipped only when the last waypoint already is `goal`
		if distance(goal_node, goal) > threshold || points.last() != Some(&goal) {
			points.push(goal);
		}

		Path::new(points)
	}

	/// The length of `path` in meters, not rounded
	pub fn total_distance_meters(&self, path: &Path) -> f64 {
		path.segments()
			.map(|(a, b)| self.config.to_meters(distance(a, b)))
			.sum()
	}

	/// How many seconds it takes to walk `path`, rounded up
	pub fn estimated_time_secs(&self, path: &Path) -> u32 {
		self.config
			.walking_time_secs(self.total_distance_meters(path))
	}

	/// Turn-by-turn directions for `path`. (See [`generate_directions`])
	pub fn directions(&self, path: &Path, from_name: &str, to_name: &str) -> Vec<DirectionStep> {
		generate_directions(&self.config, path, from_name, to_name)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::corridor::{CorridorNetwork, MALL_CORRIDORS};
	use nanorand::{Rng, WyRand};

	fn p(x: f64, y: f64) -> Point {
		Point::new(x, y)
	}

	#[test]
	fn across_the_mall() {
		let synthesizer = RouteSynthesizer::default();
		let path = synthesizer.synthesize(p(0.1, 0.5), p(0.9, 0.5));

		assert_eq!(path, vec![p(0.1, 0.5), p(0.25, 0.5), p(0.85, 0.5), p(0.9, 0.5)]);
		let meters = synthesizer.total_distance_meters(&path);
		assert!((meters - 80.0).abs() < 1e-9);
		assert_eq!(synthesizer.estimated_time_secs(&path), 58);
	}

	#[test]
	fn between_two_corridor_nodes() {
		let synthesizer = RouteSynthesizer::default();
		let path = synthesizer.synthesize(p(0.25, 0.5), p(0.85, 0.5));

		assert_eq!(path, vec![p(0.25, 0.5), p(0.85, 0.5)]);
		assert!((synthesizer.total_distance_meters(&path) - 60.0).abs() < 1e-9);
	}

	#[test]
	fn doubling_back_to_the_corridor() {
		let synthesizer = RouteSynthesizer::default();
		let path = synthesizer.synthesize(p(0.35, 0.5), p(0.9, 0.5));

		assert_eq!(path, vec![p(0.35, 0.5), p(0.25, 0.5), p(0.85, 0.5), p(0.9, 0.5)]);
		let steps = synthesizer.directions(&path, "A", "B");
		assert_eq!(steps[1].direction, crate::geometry::Direction::SharpLeft);
	}

	#[test]
	fn close_to_corridor_still_ends_at_goal() {
		let synthesizer = RouteSynthesizer::default();
		// both endpoints are within 0.05 of their corridor node
		let start = p(0.26, 0.51);
		let goal = p(0.84, 0.49);
		let path = synthesizer.synthesize(start, goal);

		assert_eq!(path, vec![start, p(0.85, 0.5), goal]);
	}

	#[test]
	fn same_corridor_node() {
		let synthesizer = RouteSynthesizer::default();
		let start = p(0.2, 0.6);
		let goal = p(0.15, 0.45);
		let path = synthesizer.synthesize(start, goal);

		assert_eq!(path, vec![start, p(0.25, 0.5), goal]);
	}

	#[test]
	fn same_point() {
		let synthesizer = RouteSynthesizer::default();
		for point in [p(0.25, 0.5), p(0.1, 0.1), p(0.5, 0.72)] {
			let path = synthesizer.synthesize(point, point);

			assert_eq!(path.start(), Some(point));
			assert_eq!(path.end(), Some(point));
			assert_eq!(path.len(), 2);
			assert_eq!(synthesizer.total_distance_meters(&path), 0.0);
			assert_eq!(synthesizer.estimated_time_secs(&path), 0);
		}
	}

	#[test]
	fn empty_network() {
		let synthesizer = RouteSynthesizer::new(RouteConfig::with_corridors(
			CorridorNetwork::new(vec![]),
		));
		let path = synthesizer.synthesize(p(0.1, 0.1), p(0.9, 0.9));
		assert_eq!(path, vec![p(0.1, 0.1), p(0.9, 0.9)]);
	}

	#[test]
	fn custom_network() {
		let synthesizer = RouteSynthesizer::new(RouteConfig::with_corridors(
			CorridorNetwork::new(vec![p(0.5, 0.1), p(0.5, 0.9)]),
		));
		let path = synthesizer.synthesize(p(0.1, 0.1), p(0.9, 0.9));
		assert_eq!(path, vec![p(0.1, 0.1), p(0.5, 0.1), p(0.5, 0.9), p(0.9, 0.9)]);
	}

	#[test]
	fn endpoints_and_length_hold_for_random_points() {
		let synthesizer = RouteSynthesizer::default();
		let mut rng = WyRand::new_seed(1234);
		let mut coord = || rng.generate_range(0u32..=1000) as f64 / 1000.0;

		for _ in 0..1000 {
			let start = p(coord(), coord());
			let goal = p(coord(), coord());
			let path = synthesizer.synthesize(start, goal);

			assert_eq!(path.start(), Some(start));
			assert_eq!(path.end(), Some(goal));
			assert!((2..=4).contains(&path.len()), "{}", path);
			for inner in path.iter().skip(1).take(path.len() - 2) {
				assert!(MALL_CORRIDORS.contains(&inner));
			}
			// deterministic
			assert_eq!(synthesizer.synthesize(start, goal), path);
		}
	}
}
