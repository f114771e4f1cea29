use rayon::prelude::*;

use crate::point2d::Point2D;
use crate::projection::{project, ProjectedPoint, Viewpoint};
use crate::rectangle::{compute_subdivisions, subdivide};
use crate::scene::Scene;
use crate::screen::ScreenSpace;
use crate::transform::AffineState;
use crate::triangle::PreprocessedTriangle;

/// Transform and project every scene point, keeping scene order.
pub fn project_scene(scene: &Scene, viewpoint: &Viewpoint, state: &AffineState) -> Vec<ProjectedPoint> {
    scene
        .points
        .iter()
        .map(|&point| project(state.apply(point), viewpoint))
        .collect()
}

/// Edge setup for every scene triangle, in scene order.
///
/// Triangles with a vertex that projects to a non-finite position cannot be
/// rasterized and are left out.
pub fn preprocess(scene: &Scene, projected: &[ProjectedPoint]) -> Vec<PreprocessedTriangle> {
    scene
        .triangles
        .iter()
        .enumerate()
        .filter_map(|(i, tri)| {
            let [a, b, c] = tri.indices().map(|index| projected.get(index).copied());
            let (Some(a), Some(b), Some(c)) = (a, b, c) else {
                log::warn!("triangle {i} references a missing vertex, skipped");
                return None;
            };
            if !(a.is_finite() && b.is_finite() && c.is_finite()) {
                log::debug!("triangle {i} has a degenerate projection, skipped");
                return None;
            }
            Some(PreprocessedTriangle::new([a, b, c], tri.color))
        })
        .collect()
}

/// Nearest-depth-wins compositing of `triangles` into `tile`.
///
/// Every pixel of the tile is tested against every triangle. A later triangle
/// only replaces the winner when strictly nearer, so equal depths keep the
/// earlier one. Uncovered pixels are left untouched.
pub fn composite_tile(tile: &mut ScreenSpace, triangles: &[PreprocessedTriangle]) {
    let rect = tile.rect;
    for y in rect.min_y..rect.max_y {
        for x in rect.min_x..rect.max_x {
            let g = Point2D { x: x as f32, y: y as f32 };
            let mut min_depth = f32::INFINITY;
            let mut winner = None;

            for triangle in triangles {
                if !triangle.contains(g) {
                    continue;
                }
                let Some(depth) = triangle.depth_at(g) else {
                    continue;
                };
                if depth < min_depth {
                    min_depth = depth;
                    winner = Some(triangle.color);
                }
            }

            if let Some(color) = winner {
                let [red, green, blue] = color.0;
                tile.set_pixel(x - rect.min_x, y - rect.min_y, red, green, blue, 255);
            }
        }
    }
}

pub fn composite(width: u32, height: u32, triangles: &[PreprocessedTriangle]) -> ScreenSpace {
    let mut screen = ScreenSpace::new(width, height);
    composite_tile(&mut screen, triangles);
    screen
}

/// Render one frame on the calling thread.
pub fn render(scene: &Scene, viewpoint: &Viewpoint, state: &AffineState, width: u32, height: u32) -> ScreenSpace {
    if width == 0 || height == 0 {
        return ScreenSpace::new(0, 0);
    }
    let projected = project_scene(scene, viewpoint, state);
    let triangles = preprocess(scene, &projected);
    composite(width, height, &triangles)
}

/// Render one frame split into tiles across the rayon pool.
///
/// Produces the same pixels as [`render`]. The surface is cut into enough
/// tiles for `workers` plus one extra level so idle threads can steal work.
pub fn render_parallel(
    scene: &Scene,
    viewpoint: &Viewpoint,
    state: &AffineState,
    width: u32,
    height: u32,
    workers: usize,
) -> ScreenSpace {
    if width == 0 || height == 0 {
        return ScreenSpace::new(0, 0);
    }
    let projected = project_scene(scene, viewpoint, state);
    let triangles = preprocess(scene, &projected);

    let depth = compute_subdivisions(workers.max(1));
    let mut tiles: Vec<ScreenSpace> = subdivide(width, height, depth + 1)
        .into_iter()
        .map(ScreenSpace::tile)
        .collect();

    tiles.par_iter_mut().for_each(|tile| composite_tile(tile, &triangles));

    let mut screen = ScreenSpace::new(width, height);
    for tile in &tiles {
        screen.merge_tile(tile);
    }
    screen
}
