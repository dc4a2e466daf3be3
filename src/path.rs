use crate::geometry::{distance, Point};

#[cfg(not(target_arch = "wasm32"))]
use std::sync::Arc;

#[cfg(target_arch = "wasm32")]
use std::rc::Rc as Arc;

/// An ordered sequence of Points to walk along, from the start to the goal.
///
/// Paths are cheap to clone, the Points are shared.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
	points: Arc<[Point]>,
}

impl Path {
	/// Creates a Path visiting `points` in order
	pub fn new(points: Vec<Point>) -> Path {
		Path {
			points: points.into(),
		}
	}

	/// The number of Points (vertices) in the Path
	pub fn len(&self) -> usize {
		self.points.len()
	}

	/// `true` if the Path has no Points
	pub fn is_empty(&self) -> bool {
		self.points.is_empty()
	}

	/// The first Point, if any
	pub fn start(&self) -> Option<Point> {
		self.points.first().copied()
	}

	/// The last Point, if any
	pub fn end(&self) -> Option<Point> {
		self.points.last().copied()
	}

	/// The Points as a slice
	pub fn as_slice(&self) -> &[Point] {
		&self.points
	}

	/// Copies the Points into a new Vec
	pub fn to_vec(&self) -> Vec<Point> {
		self.points.to_vec()
	}

	/// Returns an Iterator over the Points of the Path
	pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, Point>> {
		self.points.iter().copied()
	}

	/// Returns an Iterator over consecutive `(from, to)` pairs
	pub fn segments(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
		self.points.windows(2).map(|w| (w[0], w[1]))
	}

	/// The summed length of all segments in normalized units
	pub fn length(&self) -> f64 {
		self.segments().map(|(a, b)| distance(a, b)).sum()
	}
}

impl From<Vec<Point>> for Path {
	fn from(points: Vec<Point>) -> Path {
		Path::new(points)
	}
}

impl<'a> IntoIterator for &'a Path {
	type Item = Point;
	type IntoIter = std::iter::Copied<std::slice::Iter<'a, Point>>;
	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

use std::ops::Index;

impl Index<usize> for Path {
	type Output = Point;
	fn index(&self, index: usize) -> &Point {
		&self.points[index]
	}
}

impl PartialEq<Vec<Point>> for Path {
	fn eq(&self, rhs: &Vec<Point>) -> bool {
		self.points[..] == rhs[..]
	}
}

impl<'a> PartialEq<&'a [Point]> for Path {
	fn eq(&self, rhs: &&'a [Point]) -> bool {
		&self.points[..] == *rhs
	}
}

use std::fmt;
impl fmt::Display for Path {
	fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
		write!(fmt, "Path[Length = {}]: ", self.points.len())?;
		if self.points.is_empty() {
			write!(fmt, "<empty>")
		} else {
			write!(fmt, "{}", self.points[0])?;
			for p in self.points.iter().skip(1) {
				write!(fmt, " -> {}", p)?;
			}
			Ok(())
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn sample() -> Path {
		Path::new(vec![
			Point::new(0.0, 0.0),
			Point::new(0.3, 0.4),
			Point::new(0.3, 1.0),
		])
	}

	#[test]
	fn index() {
		let path = sample();

		assert_eq!(path[0], Point::new(0.0, 0.0));
		assert_eq!(path[1], Point::new(0.3, 0.4));
		assert_eq!(path[2], Point::new(0.3, 1.0));
		assert_eq!(path.start(), Some(Point::new(0.0, 0.0)));
		assert_eq!(path.end(), Some(Point::new(0.3, 1.0)));
	}

	#[test]
	fn segments_and_length() {
		let path = sample();
		let segments: Vec<_> = path.segments().collect();
		assert_eq!(segments.len(), 2);
		assert_eq!(segments[1], (Point::new(0.3, 0.4), Point::new(0.3, 1.0)));
		assert!((path.length() - 1.1).abs() < 1e-9);
	}

	#[test]
	fn single_point_has_no_segments() {
		let path = Path::new(vec![Point::new(0.5, 0.5)]);
		assert_eq!(path.segments().count(), 0);
		assert_eq!(path.length(), 0.0);
	}

	#[test]
	fn display() {
		let path = Path::new(vec![Point::new(0.25, 0.5), Point::new(0.85, 0.5)]);

		assert_eq!(
			&format!("{}", path),
			"Path[Length = 2]: (0.25, 0.5) -> (0.85, 0.5)"
		);
	}

	#[test]
	fn display_empty() {
		let path = Path::new(Vec::new());

		assert_eq!(&format!("{}", path), "Path[Length = 0]: <empty>");
	}
}
