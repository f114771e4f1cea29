use image::Rgb;

use crate::line::{Line, Side};
use crate::point2d::Point2D;
use crate::projection::ProjectedPoint;

/// Scene triangle: three indices into the scene's point list plus a flat color.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Triangle {
    pub a: usize,
    pub b: usize,
    pub c: usize,
    pub color: Rgb<u8>,
}

impl Triangle {
    pub fn new(a: usize, b: usize, c: usize, color: Rgb<u8>) -> Self {
        Self { a, b, c, color }
    }

    pub fn indices(&self) -> [usize; 3] {
        [self.a, self.b, self.c]
    }
}

/// Per-render edge setup for one projected triangle.
///
/// The apex is the vertex with the greatest screen y; the two "over" lines join
/// it to the base vertices and the "under" line joins the base vertices.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PreprocessedTriangle {
    pub apex: ProjectedPoint,
    pub base: [ProjectedPoint; 2],
    pub over_lines: [Line; 2],
    pub under_line: Line,
    pub color: Rgb<u8>,
}

impl PreprocessedTriangle {
    /// `points` must be in the triangle's original winding order.
    pub fn new(points: [ProjectedPoint; 3], color: Rgb<u8>) -> Self {
        // Strict comparison: an exact tie keeps the earlier vertex
        let mut apex_index = 0;
        for index in 1..3 {
            if points[index].y > points[apex_index].y {
                apex_index = index;
            }
        }
        let apex = points[apex_index];
        let base = match apex_index {
            0 => [points[1], points[2]],
            1 => [points[0], points[2]],
            _ => [points[0], points[1]],
        };

        let over_lines = [
            Line::through(apex.screen(), base[0].screen()),
            Line::through(apex.screen(), base[1].screen()),
        ];
        let under_line = Line::through(base[0].screen(), base[1].screen());

        Self { apex, base, over_lines, under_line, color }
    }

    /// Half-plane containment: under both over lines and over the under line.
    #[inline(always)]
    pub fn contains(&self, g: Point2D) -> bool {
        self.over_lines[0].relation(g) == Side::Under
            && self.over_lines[1].relation(g) == Side::Under
            && self.under_line.relation(g) == Side::Over
    }

    /// Interpolated depth at `g`.
    ///
    /// Casts a ray from the apex through `g` onto the base edge at `p`, splits
    /// the base depth by where `p` falls between the base vertices and blends
    /// with the apex depth by how far `g` sits from `p` toward the apex.
    /// Returns `None` when the construction is undefined (ray parallel to the
    /// base edge, collapsed edges) or produces a non-finite value.
    pub fn depth_at(&self, g: Point2D) -> Option<f32> {
        let apex = self.apex.screen();
        let [a, b] = self.base;

        let ray = Line::through(apex, g);
        let p = ray.intersect(&self.under_line)?;

        let pre_beta = p.distance(a.screen()) / b.screen().distance(a.screen());
        let pre_alfa = 1.0 - pre_beta;
        let gamma = g.distance(p) / apex.distance(p);

        let alfa = pre_alfa * (1.0 - gamma);
        let beta = pre_beta * (1.0 - gamma);
        let depth = self.apex.depth * gamma + a.depth * alfa + b.depth * beta;
        depth.is_finite().then_some(depth)
    }
}
