//! Turn-by-turn directions derived from the geometry of a [`Path`]

use crate::{
	config::RouteConfig,
	geometry::{classify_turn, distance, Direction, Point},
	path::Path,
};

/// One instruction in a turn-by-turn route description, tied to a vertex of the Path.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DirectionStep {
	/// Human readable instruction, e.g. `"Turn left at the intersection"`
	pub instruction: String,
	/// Length of the segment leading up to this vertex in whole meters
	pub distance: f64,
	/// Seconds it takes to walk that segment, rounded up
	pub duration: u32,
	/// The turn made at this vertex
	pub direction: Direction,
	/// The vertex this step belongs to
	pub coordinates: Point,
}

/// The instruction used for an intermediate turn.
///
/// Sharp turns share their copy with regular left and right turns.
pub fn turn_instruction(direction: Direction) -> &'static str {
	match direction {
		Direction::Straight => "Continue straight",
		Direction::Left | Direction::SharpLeft => "Turn left at the intersection",
		Direction::Right | Direction::SharpRight => "Turn right at the intersection",
		Direction::SlightLeft => "Bear left",
		Direction::SlightRight => "Bear right",
	}
}

/// Generates one [`DirectionStep`] per Point of `path`.
///
/// The first step starts at `from_name`, the last arrives at `to_name`. Every step in between
/// describes the turn at an interior vertex together with the segment walked to reach it.
/// Paths with fewer than 2 Points have no directions.
///
/// ```
/// use floorplan_routing::{RouteConfig, directions::generate_directions, geometry::{Direction, Point}, Path};
///
/// let path = Path::new(vec![
/// 	Point::new(0.1, 0.5),
/// 	Point::new(0.25, 0.5),
/// 	Point::new(0.85, 0.5),
/// 	Point::new(0.9, 0.5),
/// ]);
/// let steps = generate_directions(&RouteConfig::default(), &path, "Main Entrance", "Restrooms");
///
/// assert_eq!(steps.len(), 4);
/// assert_eq!(steps[0].instruction, "Start at Main Entrance");
/// assert_eq!(steps[1].instruction, "Head towards the main corridor");
/// assert_eq!(steps[1].distance, 15.0);
/// assert_eq!(steps[2].instruction, "Turn towards your destination");
/// assert_eq!(steps[2].direction, Direction::Straight);
/// assert_eq!(steps[3].instruction, "Arrive at Restrooms");
/// assert_eq!(steps[3].distance, 5.0);
/// assert_eq!(steps[3].duration, 4);
/// ```
pub fn generate_directions(
	config: &RouteConfig,
	path: &Path,
	from_name: &str,
	to_name: &str,
) -> Vec<DirectionStep> {
	let len = path.len();
	if len < 2 {
		return vec![];
	}

	let mut steps = Vec::with_capacity(len);

	steps.push(DirectionStep {
		instruction: format!("Start at {}", from_name),
		distance: 0.0,
		duration: 0,
		direction: Direction::Straight,
		coordinates: path[0],
	});

	for i in 1..len - 1 {
		let (prev, current, next) = (path[i - 1], path[i], path[i + 1]);

		let direction = classify_turn(prev, current, next);
		let meters = config.to_meters(distance(prev, current)).round();

		let instruction = if i == 1 {
			"Head towards the main corridor"
		} else if i == len - 2 {
			"Turn towards your destination"
		} else {
			turn_instruction(direction)
		};

		steps.push(DirectionStep {
			instruction: instruction.to_owned(),
			distance: meters,
			duration: config.walking_time_secs(meters),
			direction,
			coordinates: current,
		});
	}

	let (last, goal) = (path[len - 2], path[len - 1]);
	let meters = config.to_meters(distance(last, goal)).round();
	steps.push(DirectionStep {
		instruction: format!("Arrive at {}", to_name),
		distance: meters,
		duration: config.walking_time_secs(meters),
		direction: Direction::Straight,
		coordinates: goal,
	});

	steps
}

#[cfg(test)]
mod tests {
	use super::*;

	fn p(x: f64, y: f64) -> Point {
		Point::new(x, y)
	}

	fn directions(points: Vec<Point>) -> Vec<DirectionStep> {
		generate_directions(&RouteConfig::default(), &Path::new(points), "A", "B")
	}

	#[test]
	fn too_short() {
		assert!(directions(vec![]).is_empty());
		assert!(directions(vec![p(0.5, 0.5)]).is_empty());
	}

	#[test]
	fn direct_path() {
		let steps = directions(vec![p(0.25, 0.5), p(0.85, 0.5)]);

		assert_eq!(steps.len(), 2);
		assert_eq!(
			steps[0],
			DirectionStep {
				instruction: "Start at A".to_owned(),
				distance: 0.0,
				duration: 0,
				direction: Direction::Straight,
				coordinates: p(0.25, 0.5),
			}
		);
		assert_eq!(steps[1].instruction, "Arrive at B");
		assert_eq!(steps[1].distance, 60.0);
		assert_eq!(steps[1].duration, 43);
		assert_eq!(steps[1].coordinates, p(0.85, 0.5));
	}

	#[test]
	fn one_count_per_vertex() {
		for len in 2..=6 {
			let points: Vec<_> = (0..len).map(|i| p(i as f64 * 0.1, 0.5)).collect();
			assert_eq!(directions(points).len(), len);
		}
	}

	#[test]
	fn first_interior_vertex_heads_to_corridor() {
		// right angle at the first interior vertex
		let steps = directions(vec![p(0.5, 0.1), p(0.5, 0.3), p(0.75, 0.3)]);

		assert_eq!(steps.len(), 3);
		assert_eq!(steps[1].instruction, "Head towards the main corridor");
		assert_eq!(steps[1].direction, Direction::Right);
		assert_eq!(steps[1].coordinates, p(0.5, 0.3));
		assert_eq!(steps[1].distance, 20.0);
		assert_eq!(steps[1].duration, 15);
		assert_eq!(steps[2].distance, 25.0);
	}

	#[test]
	fn intermediate_turn_copy() {
		// 0 -> 1 -> 2 -> 3 -> 4, the turn at vertex 2 picks its copy from the direction
		let cases = [
			(p(0.75, 0.5), Direction::Straight, "Continue straight"),
			(p(0.5, 0.75), Direction::Left, "Turn left at the intersection"),
			(p(0.5, 0.25), Direction::Right, "Turn right at the intersection"),
			(p(0.75, 0.625), Direction::SlightLeft, "Bear left"),
			(p(0.75, 0.375), Direction::SlightRight, "Bear right"),
			(p(0.25, 0.5625), Direction::SharpLeft, "Turn left at the intersection"),
			(p(0.25, 0.4375), Direction::SharpRight, "Turn right at the intersection"),
		];
		for (next, direction, instruction) in cases {
			let steps = directions(vec![
				p(0.0, 0.5),
				p(0.25, 0.5),
				p(0.5, 0.5),
				next,
				p(1.0, 1.0),
			]);

			assert_eq!(steps.len(), 5);
			assert_eq!(steps[2].direction, direction, "{:?}", next);
			assert_eq!(steps[2].instruction, instruction);
			assert_eq!(steps[3].instruction, "Turn towards your destination");
		}
	}

	#[test]
	fn duration_of_the_reported_distance() {
		// 14.3m is reported as 14m, which takes 10s rather than the 11s of 14.3m
		let steps = directions(vec![p(0.0, 0.5), p(0.143, 0.5), p(0.5, 0.5)]);

		assert_eq!(steps[1].distance, 14.0);
		assert_eq!(steps[1].duration, 10);
		assert_eq!(steps[2].distance, 36.0);
		assert_eq!(steps[2].duration, 26);
	}

	#[test]
	fn turn_instruction_covers_every_direction() {
		for direction in Direction::all() {
			assert!(!turn_instruction(direction).is_empty());
		}
	}

	#[test]
	fn restartable() {
		let path = Path::new(vec![p(0.1, 0.5), p(0.25, 0.5), p(0.5, 0.3), p(0.55, 0.2)]);
		let config = RouteConfig::default();
		let first = generate_directions(&config, &path, "A", "B");
		let second = generate_directions(&config, &path, "A", "B");
		assert_eq!(first, second);
	}
}
