use crate::line::Line;
use crate::point2d::Point2D;
use crate::point3d::Point3D;

/// Fixed eye position the perspective converges toward.
///
/// The scene's y axis is the viewing axis for both screen dimensions.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewpoint(pub Point3D);

impl Default for Viewpoint {
    fn default() -> Self {
        Viewpoint(Point3D { x: 0.0, y: -200.0, z: 0.0 })
    }
}

/// Screen position plus Euclidean distance from the viewpoint.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ProjectedPoint {
    pub x: f32,
    pub y: f32,
    pub depth: f32,
}

impl ProjectedPoint {
    pub fn screen(&self) -> Point2D {
        Point2D { x: self.x, y: self.y }
    }

    pub fn is_finite(&self) -> bool {
        self.screen().is_finite() && self.depth.is_finite()
    }
}

/// Project a transformed scene point onto the screen.
///
/// Each screen axis is the x-intercept of the line joining the point and the
/// viewpoint in the (x, y) and (z, y) planes respectively. A point level with
/// the viewpoint (same y) projects to a non-finite coordinate.
pub fn project(point: Point3D, viewpoint: &Viewpoint) -> ProjectedPoint {
    let eye = viewpoint.0;
    let screen_x = Line::through(Point2D { x: point.x, y: point.y }, Point2D { x: eye.x, y: eye.y }).x_intercept;
    let screen_y = Line::through(Point2D { x: point.z, y: point.y }, Point2D { x: eye.z, y: eye.y }).x_intercept;
    ProjectedPoint { x: screen_x, y: screen_y, depth: point.distance(eye) }
}
