use glam::{dvec2, DVec2};

/// A drawn line between two pixel positions.
///
/// Endpoints are rewritten in place while the segment is being dragged and while it collapses.
#[derive(Debug, Clone, Copy, PartialEq, Default, derive_more::Display)]
#[display("({x_start}, {y_start})-({x_end}, {y_end})")]
pub struct Segment {
	pub x_start: f64,
	pub y_start: f64,
	pub x_end: f64,
	pub y_end: f64,
}

impl Segment {
	pub fn new(start: DVec2, end: DVec2) -> Self {
		Self {
			x_start: start.x,
			y_start: start.y,
			x_end: end.x,
			y_end: end.y,
		}
	}

	/// A segment of length zero, which is how every drawn segment begins.
	pub fn point(position: DVec2) -> Self {
		Self::new(position, position)
	}

	pub fn start(&self) -> DVec2 {
		dvec2(self.x_start, self.y_start)
	}

	pub fn end(&self) -> DVec2 {
		dvec2(self.x_end, self.y_end)
	}

	pub fn set_end(&mut self, end: DVec2) {
		self.x_end = end.x;
		self.y_end = end.y;
	}

	pub fn direction(&self) -> DVec2 {
		self.end() - self.start()
	}

	/// Finds where two finite segments cross using the parametric form.
	///
	/// With `self` as `p1 + ua * d1` and `other` as `p3 + ub * d2`, the segments cross iff both
	/// parameters lie in `[0, 1]`. Parallel, collinear and zero-length segments all have a zero
	/// denominator and never cross, even when they overlap.
	pub fn intersection(&self, other: &Segment) -> Option<DVec2> {
		let d1 = self.direction();
		let d2 = other.direction();
		let denominator = d1.perp_dot(d2);
		if denominator == 0.0 {
			return None;
		}
		let offset = self.start() - other.start();
		let ua = d2.perp_dot(offset) / denominator;
		let ub = d1.perp_dot(offset) / denominator;
		let unit = 0.0..=1.0;
		if !unit.contains(&ua) || !unit.contains(&ub) {
			return None;
		}
		Some(self.start() + ua * d1)
	}
}
