// Whole-pipeline tests against the public API.

use image::Rgb;
use trirender::render::composite;
use trirender::{
    render, render_parallel, AffineState, Command, PreprocessedTriangle, ProjectedPoint, Scene, Session, Viewpoint,
};

const RED: Rgb<u8> = Rgb([255, 0, 0]);
const BLUE: Rgb<u8> = Rgb([0, 0, 255]);

fn pp(x: f32, y: f32, depth: f32) -> ProjectedPoint {
    ProjectedPoint { x, y, depth }
}

fn flat(offset: f32, depth: f32, color: Rgb<u8>) -> PreprocessedTriangle {
    PreprocessedTriangle::new(
        [pp(offset, 0.0, depth), pp(offset + 10.0, 0.0, depth), pp(offset + 5.0, 10.0, depth)],
        color,
    )
}

fn opaque(color: Rgb<u8>) -> Option<(u8, u8, u8, u8)> {
    Some((color.0[0], color.0[1], color.0[2], 255))
}

#[test]
fn no_triangles_leaves_surface_transparent() {
    let frame = composite(12, 7, &[]);
    assert_eq!(frame.rgba, vec![0; 12 * 7 * 4]);

    let empty = Scene { points: Scene::demo().points, triangles: Vec::new() };
    let frame = render(&empty, &Viewpoint::default(), &AffineState::default(), 12, 7);
    assert!(frame.rgba.iter().all(|&b| b == 0));
}

#[test]
fn single_flat_triangle_paints_interior_red() {
    let tri = flat(0.0, 10.0, RED);
    let frame = composite(10, 10, &[tri]);

    let mut painted = 0;
    for y in 0..10u32 {
        for x in 0..10u32 {
            let (fx, fy) = (x as f32, y as f32);
            // under both over lines, over the base line
            let inside = fy < 2.0 * fx && fy < 20.0 - 2.0 * fx;
            if inside {
                painted += 1;
                assert_eq!(frame.get_pixel(x, y), opaque(RED), "pixel ({x}, {y})");
                let depth = tri.depth_at(trirender::Point2D::new(fx, fy)).unwrap();
                assert!((depth - 10.0).abs() < 1e-3, "depth {depth} at ({x}, {y})");
            } else {
                assert_eq!(frame.get_pixel(x, y), Some((0, 0, 0, 0)), "pixel ({x}, {y})");
            }
        }
    }
    assert!(painted > 0);
}

#[test]
fn vertical_edge_right_of_interior_paints_interior() {
    // edge from the apex (10,10) straight down to (10,0)
    let tri = PreprocessedTriangle::new([pp(0.0, 0.0, 10.0), pp(10.0, 0.0, 10.0), pp(10.0, 10.0, 10.0)], RED);
    assert!(tri.contains(trirender::Point2D::new(5.0, 2.0)));

    let frame = composite(20, 12, &[tri]);
    assert_eq!(frame.get_pixel(5, 2), opaque(RED));
    for y in 0..12u32 {
        for x in 0..=10u32 {
            let expected = if y < x { opaque(RED) } else { Some((0, 0, 0, 0)) };
            assert_eq!(frame.get_pixel(x, y), expected, "pixel ({x}, {y})");
        }
    }
}

#[test]
fn vertical_edge_left_of_interior_keeps_first_column() {
    // edge from the apex (0,10) straight down to (0,0)
    let tri = PreprocessedTriangle::new([pp(0.0, 0.0, 10.0), pp(10.0, 0.0, 10.0), pp(0.0, 10.0, 10.0)], BLUE);

    let frame = composite(12, 12, &[tri]);
    assert_eq!(frame.get_pixel(0, 5), opaque(BLUE));
    assert_eq!(frame.get_pixel(5, 2), opaque(BLUE));
    for y in 0..12u32 {
        for x in 0..12u32 {
            let expected = if x + y < 10 { opaque(BLUE) } else { Some((0, 0, 0, 0)) };
            assert_eq!(frame.get_pixel(x, y), expected, "pixel ({x}, {y})");
        }
    }
}

#[test]
fn nearer_triangle_wins_in_either_order() {
    let near = flat(0.0, 5.0, RED);
    let far = flat(2.0, 50.0, BLUE);

    for triangles in [[near, far], [far, near]] {
        let frame = composite(14, 10, &triangles);
        // covered by both
        assert_eq!(frame.get_pixel(5, 4), opaque(RED));
        assert_eq!(frame.get_pixel(6, 2), opaque(RED));
        // only the far one
        assert_eq!(frame.get_pixel(11, 1), opaque(BLUE));
    }
}

#[test]
fn equal_depth_keeps_earlier_triangle() {
    let first = flat(0.0, 10.0, RED);
    let second = flat(0.0, 10.0, BLUE);

    let frame = composite(10, 10, &[first, second]);
    assert_eq!(frame.get_pixel(5, 5), opaque(RED));

    let frame = composite(10, 10, &[second, first]);
    assert_eq!(frame.get_pixel(5, 5), opaque(BLUE));
}

#[test]
fn demo_scene_front_triangle_hides_back_one() {
    let frame = render(&Scene::demo(), &Viewpoint::default(), &AffineState::default(), 300, 150);
    assert_eq!((frame.width, frame.height), (300, 150));
    // inside both projected triangles: the red one is nearer
    assert_eq!(frame.get_pixel(10, 70), Some((255, 0, 0, 255)));
    assert_eq!(frame.get_pixel(5, 100), Some((255, 0, 0, 255)));
    // only the orange one
    assert_eq!(frame.get_pixel(20, 50), Some((255, 127, 0, 255)));
    assert_eq!(frame.get_pixel(200, 10), Some((0, 0, 0, 0)));
    assert_eq!(frame.get_pixel(0, 0), Some((0, 0, 0, 0)));
}

#[test]
fn parallel_render_matches_sequential() {
    let scene = Scene::demo();
    let viewpoint = Viewpoint::default();
    let mut state = AffineState::default();
    state.rotate(0.3, -0.2);
    state.translate(trirender::Point3D::new(40.0, 0.0, 10.0));

    for state in [AffineState::default(), state] {
        let expected = render(&scene, &viewpoint, &state, 97, 61);
        for workers in [1, 2, 3, 8] {
            let frame = render_parallel(&scene, &viewpoint, &state, 97, 61, workers);
            assert_eq!(frame, expected, "{workers} workers");
        }
    }
}

#[test]
fn repeated_rotation_matches_single_larger_rotation() {
    let mut stepped = Session::new(Scene::demo(), Viewpoint::default(), 60, 40, 1);
    stepped.apply(Command::rotate_xy(0.1));
    stepped.apply(Command::rotate_xy(0.1));

    let mut direct = Session::new(Scene::demo(), Viewpoint::default(), 60, 40, 1);
    direct.apply(Command::rotate_xy(0.2));

    assert_eq!(stepped.state(), direct.state());
    assert_eq!(stepped.frame(), direct.frame());
}

#[test]
fn inverse_moves_restore_the_first_frame() {
    let mut session = Session::new(Scene::demo(), Viewpoint::default(), 80, 60, 2);
    let initial = session.frame().clone();
    session.apply(Command::up(10.0));
    assert_ne!(session.frame(), &initial);
    session.apply(Command::down(10.0));
    assert_eq!(session.frame(), &initial);
}
