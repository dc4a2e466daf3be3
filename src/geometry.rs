//! Points on a Floor Plan and the small amount of vector math needed for routing

use std::fmt;

/// How many meters one normalized unit spans. The full width of a Floor Plan counts as 100m.
pub const METERS_PER_UNIT: f64 = 100.0;

/// Average adult walking speed in m/s
pub const WALKING_SPEED: f64 = 1.4;

/// A Position on a Floor Plan.
///
/// Both coordinates are normalized to `[0, 1]` relative to the width and height of the plan,
/// so the same Point stays valid no matter what resolution the plan is rendered at.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
	/// horizontal position, `0.0` = left edge
	pub x: f64,
	/// vertical position, `0.0` = top edge
	pub y: f64,
}

impl Point {
	/// Creates a new Point
	pub const fn new(x: f64, y: f64) -> Point {
		Point { x, y }
	}

	/// The vector pointing from `other` to `self`
	pub fn sub(self, other: Point) -> Point {
		Point::new(self.x - other.x, self.y - other.y)
	}

	/// Dot product when treating both Points as vectors
	pub fn dot(self, other: Point) -> f64 {
		self.x * other.x + self.y * other.y
	}

	/// z-component of the cross product when treating both Points as vectors
	pub fn cross(self, other: Point) -> f64 {
		self.x * other.y - self.y * other.x
	}
}

impl From<(f64, f64)> for Point {
	fn from((x, y): (f64, f64)) -> Point {
		Point::new(x, y)
	}
}

impl fmt::Display for Point {
	fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
		write!(fmt, "({}, {})", self.x, self.y)
	}
}

/// The Euclidean distance between two Points in normalized units
pub fn distance(p1: Point, p2: Point) -> f64 {
	((p2.x - p1.x).powi(2) + (p2.y - p1.y).powi(2)).sqrt()
}

/// Converts a normalized distance to meters using [`METERS_PER_UNIT`]
pub fn to_meters(normalized_distance: f64) -> f64 {
	normalized_distance * METERS_PER_UNIT
}

/// Seconds it takes to walk `meters` at [`WALKING_SPEED`], rounded up
pub fn walking_time_secs(meters: f64) -> u32 {
	seconds_at(meters, WALKING_SPEED)
}

pub(crate) fn seconds_at(meters: f64, speed: f64) -> u32 {
	(meters / speed).ceil().max(0.0) as u32
}

/// The kind of turn a walker makes at a vertex of a Path
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Direction {
	/// less than 15° off the current heading
	Straight,
	/// 45° to 135° counter-clockwise
	Left,
	/// 45° to 135° clockwise
	Right,
	/// 15° to 45° counter-clockwise
	SlightLeft,
	/// 15° to 45° clockwise
	SlightRight,
	/// 135° or more counter-clockwise
	SharpLeft,
	/// 135° or more clockwise
	SharpRight,
}

impl Direction {
	/// All Directions in declaration order
	pub fn all() -> std::iter::Copied<std::slice::Iter<'static, Direction>> {
		use Direction::*;
		[
			Straight,
			Left,
			Right,
			SlightLeft,
			SlightRight,
			SharpLeft,
			SharpRight,
		]
		.iter()
		.copied()
	}

	/// The snake_case name of this Direction
	pub fn as_str(self) -> &'static str {
		match self {
			Direction::Straight => "straight",
			Direction::Left => "left",
			Direction::Right => "right",
			Direction::SlightLeft => "slight_left",
			Direction::SlightRight => "slight_right",
			Direction::SharpLeft => "sharp_left",
			Direction::SharpRight => "sharp_right",
		}
	}
}

impl fmt::Display for Direction {
	fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
		fmt.write_str(self.as_str())
	}
}

/// The signed angle in degrees between the heading `prev -> current` and `current -> next`.
///
/// Positive angles turn counter-clockwise in the x/y frame of the plan. The result lies in
/// `(-180, 180]`, so a U-turn is always `180` no matter the heading.
pub fn turn_angle(prev: Point, current: Point, next: Point) -> f64 {
	let incoming = current.sub(prev);
	let outgoing = next.sub(current);
	let angle = incoming
		.cross(outgoing)
		.atan2(incoming.dot(outgoing))
		.to_degrees();
	if angle <= -180.0 {
		180.0
	} else {
		angle
	}
}

/// Classifies the turn at `current` when walking from `prev` to `next`.
///
/// | angle `a`          | result       |
/// |--------------------|--------------|
/// | `\|a\| < 15`       | Straight     |
/// | `15 <= a < 45`     | SlightLeft   |
/// | `45 <= a < 135`    | Left         |
/// | `a >= 135`         | SharpLeft    |
/// | `-45 < a <= -15`   | SlightRight  |
/// | `-135 < a <= -45`  | Right        |
/// | `a <= -135`        | SharpRight   |
///
/// ```
/// use floorplan_routing::geometry::{classify_turn, Direction, Point};
///
/// let prev = Point::new(0.0, 0.0);
/// let current = Point::new(1.0, 0.0);
///
/// assert_eq!(classify_turn(prev, current, Point::new(2.0, 0.0)), Direction::Straight);
/// assert_eq!(classify_turn(prev, current, Point::new(1.0, 1.0)), Direction::Left);
/// assert_eq!(classify_turn(prev, current, Point::new(1.0, -1.0)), Direction::Right);
/// ```
pub fn classify_turn(prev: Point, current: Point, next: Point) -> Direction {
	match turn_angle(prev, current, next) {
		a if a.abs() < 15.0 => Direction::Straight,
		a if a >= 135.0 => Direction::SharpLeft,
		a if a >= 45.0 => Direction::Left,
		a if a >= 15.0 => Direction::SlightLeft,
		a if a <= -135.0 => Direction::SharpRight,
		a if a <= -45.0 => Direction::Right,
		a if a <= -15.0 => Direction::SlightRight,
		// only NaN gets here
		_ => Direction::Straight,
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use nanorand::{Rng, WyRand};

	/// Builds a corner at (1, 0) where the outgoing leg leaves at `degrees` from the x axis
	fn corner(degrees: f64) -> (Point, Point, Point) {
		let rad = degrees.to_radians();
		(
			Point::new(0.0, 0.0),
			Point::new(1.0, 0.0),
			Point::new(1.0 + rad.cos(), rad.sin()),
		)
	}

	fn expected(a: f64) -> Direction {
		if a.abs() < 15.0 {
			Direction::Straight
		} else if a >= 135.0 {
			Direction::SharpLeft
		} else if a >= 45.0 {
			Direction::Left
		} else if a >= 15.0 {
			Direction::SlightLeft
		} else if a <= -135.0 {
			Direction::SharpRight
		} else if a <= -45.0 {
			Direction::Right
		} else {
			Direction::SlightRight
		}
	}

	#[test]
	fn distance_to_self() {
		let p = Point::new(0.37, 0.81);
		assert_eq!(distance(p, p), 0.0);
	}

	#[test]
	fn distance_symmetry() {
		let mut rng = WyRand::new_seed(7);
		let mut coord = || rng.generate_range(0u32..=10_000) as f64 / 10_000.0;
		for _ in 0..100 {
			let a = Point::new(coord(), coord());
			let b = Point::new(coord(), coord());
			assert_eq!(distance(a, b), distance(b, a));
		}
	}

	#[test]
	fn distance_pythagoras() {
		let d = distance(Point::new(0.0, 0.0), Point::new(0.3, 0.4));
		assert!((d - 0.5).abs() < 1e-12);
	}

	#[test]
	fn meters_and_time() {
		assert!((to_meters(0.8) - 80.0).abs() < 1e-9);
		assert_eq!(walking_time_secs(0.0), 0);
		assert_eq!(walking_time_secs(1.4), 1);
		assert_eq!(walking_time_secs(1.5), 2);
		assert_eq!(walking_time_secs(80.0), 58);
	}

	#[test]
	fn classify_each_branch() {
		let cases = [
			(0.0, Direction::Straight),
			(14.0, Direction::Straight),
			(-14.0, Direction::Straight),
			(30.0, Direction::SlightLeft),
			(90.0, Direction::Left),
			(150.0, Direction::SharpLeft),
			(180.0, Direction::SharpLeft),
			(-30.0, Direction::SlightRight),
			(-90.0, Direction::Right),
			(-150.0, Direction::SharpRight),
		];
		for (degrees, direction) in cases {
			let (prev, current, next) = corner(degrees);
			assert_eq!(
				classify_turn(prev, current, next),
				direction,
				"angle {}",
				degrees
			);
		}
	}

	#[test]
	fn classify_grid_corners() {
		let prev = Point::new(0.0, 0.0);
		let current = Point::new(1.0, 0.0);
		assert_eq!(
			classify_turn(prev, current, Point::new(2.0, 2.0)),
			Direction::Left
		);
		assert_eq!(
			classify_turn(prev, current, Point::new(0.0, 0.2)),
			Direction::SharpLeft
		);
		assert_eq!(
			classify_turn(prev, current, Point::new(2.0, -2.0)),
			Direction::Right
		);
		assert_eq!(
			classify_turn(prev, current, Point::new(0.0, -0.2)),
			Direction::SharpRight
		);
		assert_eq!(
			classify_turn(prev, current, Point::new(2.0, 0.5)),
			Direction::SlightLeft
		);
	}

	#[test]
	fn classify_u_turn() {
		let prev = Point::new(0.0, 0.0);
		let current = Point::new(1.0, 0.0);
		assert_eq!(
			classify_turn(prev, current, Point::new(0.5, 0.0)),
			Direction::SharpLeft
		);
	}

	#[test]
	fn classify_u_turn_heading_west() {
		// the cross product is -0.0 here, which atan2 maps to -180
		let prev = Point::new(0.35, 0.5);
		let current = Point::new(0.25, 0.5);
		let next = Point::new(0.85, 0.5);
		assert_eq!(turn_angle(prev, current, next), 180.0);
		assert_eq!(classify_turn(prev, current, next), Direction::SharpLeft);
	}

	#[test]
	fn classify_degenerate_legs() {
		let p = Point::new(0.5, 0.5);
		assert_eq!(classify_turn(p, p, p), Direction::Straight);
	}

	#[test]
	fn classify_random_angles() {
		let mut rng = WyRand::new_seed(42);
		for _ in 0..1000 {
			// uniform over (-180, 180] in steps of 0.001°
			let step = rng.generate_range(1u32..=360_000);
			let degrees = -180.0 + step as f64 / 1000.0;
			let (prev, current, next) = corner(degrees);

			let direction = classify_turn(prev, current, next);
			assert!(Direction::all().any(|d| d == direction));

			let boundaries = [15.0, 45.0, 135.0, 180.0];
			if boundaries.iter().all(|b| (degrees.abs() - b).abs() > 1e-6) {
				assert_eq!(direction, expected(degrees), "angle {}", degrees);
			}
		}
	}

	#[test]
	fn direction_names() {
		let names: Vec<_> = Direction::all().map(|d| d.to_string()).collect();
		assert_eq!(
			names,
			vec![
				"straight",
				"left",
				"right",
				"slight_left",
				"slight_right",
				"sharp_left",
				"sharp_right"
			]
		);
	}

	#[test]
	fn display_point() {
		assert_eq!(Point::new(0.25, 0.5).to_string(), "(0.25, 0.5)");
	}
}
