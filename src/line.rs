use crate::point2d::Point2D;

/// Which side of a line a point falls on.
///
/// `Over` means the line's value at the point's x is at or below the point's y.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Side {
    Over,
    Under,
}

/// Infinite 2D line through two points in slope/intercept form.
///
/// A vertical line has `slope == f32::INFINITY`, `y_intercept == 0` and
/// `x_intercept` equal to the shared x of its defining points.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Line {
    pub slope: f32,
    pub y_intercept: f32,
    pub x_intercept: f32,
}

impl Line {
    pub fn through(a: Point2D, b: Point2D) -> Self {
        if a.x == b.x {
            return Line { slope: f32::INFINITY, y_intercept: 0.0, x_intercept: a.x };
        }
        let slope = (a.y - b.y) / (a.x - b.x);
        let y_intercept = a.y - slope * a.x;
        // Horizontal lines divide by zero here and yield an infinite or NaN intercept
        let x_intercept = -y_intercept / slope;
        Line { slope, y_intercept, x_intercept }
    }

    #[inline(always)]
    pub fn is_vertical(&self) -> bool {
        self.slope == f32::INFINITY
    }

    /// y of the line at `x`. For a vertical line this is `x * inf`: +inf for
    /// positive x, -inf for negative x and NaN at zero.
    #[inline(always)]
    pub fn value_at(&self, x: f32) -> f32 {
        x * self.slope + self.y_intercept
    }

    /// Vertical lines go through the same comparison, so their split is at
    /// x = 0 (NaN compares false and lands on `Under`), not at the line's x.
    #[inline(always)]
    pub fn relation(&self, point: Point2D) -> Side {
        if self.value_at(point.x) <= point.y { Side::Over } else { Side::Under }
    }

    /// Crossing point of two lines, `None` when they are parallel
    pub fn intersect(&self, other: &Line) -> Option<Point2D> {
        match (self.is_vertical(), other.is_vertical()) {
            (true, true) => None,
            (true, false) => Some(Point2D { x: self.x_intercept, y: other.value_at(self.x_intercept) }),
            (false, true) => Some(Point2D { x: other.x_intercept, y: self.value_at(other.x_intercept) }),
            (false, false) => {
                let denominator = self.slope - other.slope;
                if denominator == 0.0 {
                    return None;
                }
                let x = (other.y_intercept - self.y_intercept) / denominator;
                Some(Point2D { x, y: self.value_at(x) })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f32, y: f32) -> Point2D {
        Point2D::new(x, y)
    }

    #[test]
    fn slope_and_intercepts() {
        let line = Line::through(p(0.0, 2.0), p(2.0, 6.0));
        assert_eq!(line.slope, 2.0);
        assert_eq!(line.y_intercept, 2.0);
        assert_eq!(line.x_intercept, -1.0);
    }

    #[test]
    fn vertical_line_encoding() {
        let line = Line::through(p(3.0, 1.0), p(3.0, 9.0));
        assert!(line.is_vertical());
        assert_eq!(line.y_intercept, 0.0);
        assert_eq!(line.x_intercept, 3.0);
    }

    #[test]
    fn horizontal_line_has_non_finite_x_intercept() {
        let line = Line::through(p(0.0, 5.0), p(4.0, 5.0));
        assert_eq!(line.slope, 0.0);
        assert!(!line.x_intercept.is_finite());
    }

    #[test]
    fn relation_boundary_is_over() {
        let line = Line::through(p(0.0, 0.0), p(10.0, 10.0));
        assert_eq!(line.relation(p(5.0, 5.0)), Side::Over);
        assert_eq!(line.relation(p(5.0, 6.0)), Side::Over);
        assert_eq!(line.relation(p(5.0, 4.0)), Side::Under);
    }

    #[test]
    fn vertical_relation_follows_sign_of_x() {
        let line = Line::through(p(3.0, 0.0), p(3.0, 9.0));
        assert_eq!(line.relation(p(2.0, 100.0)), Side::Under);
        assert_eq!(line.relation(p(5.0, -100.0)), Side::Under);
        assert_eq!(line.relation(p(0.0, 100.0)), Side::Under);
        assert_eq!(line.relation(p(-1.0, -100.0)), Side::Over);
    }

    #[test]
    fn intersect_crossing_lines() {
        let a = Line::through(p(0.0, 0.0), p(10.0, 10.0));
        let b = Line::through(p(0.0, 10.0), p(10.0, 0.0));
        let hit = a.intersect(&b).unwrap();
        assert!((hit.x - 5.0).abs() < 1e-5);
        assert!((hit.y - 5.0).abs() < 1e-5);
    }

    #[test]
    fn intersect_with_vertical() {
        let vertical = Line::through(p(5.0, 10.0), p(5.0, 9.0));
        let base = Line::through(p(0.0, 0.0), p(10.0, 0.0));
        assert_eq!(vertical.intersect(&base), Some(p(5.0, 0.0)));
        assert_eq!(base.intersect(&vertical), Some(p(5.0, 0.0)));
    }

    #[test]
    fn parallel_lines_do_not_intersect() {
        let a = Line::through(p(0.0, 0.0), p(1.0, 1.0));
        let b = Line::through(p(0.0, 3.0), p(1.0, 4.0));
        assert_eq!(a.intersect(&b), None);
        let v1 = Line::through(p(1.0, 0.0), p(1.0, 1.0));
        let v2 = Line::through(p(2.0, 0.0), p(2.0, 1.0));
        assert_eq!(v1.intersect(&v2), None);
    }
}
