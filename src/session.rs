//! Owner of the mutable view state.
//!
//! A [`Session`] accumulates move/rotate commands into an [`AffineState`] and
//! re-renders exactly once after each command, so any front end (window loop,
//! headless driver, tests) only has to translate its input into [`Command`]s.

use std::time::Instant;

use crate::point3d::Point3D;
use crate::projection::Viewpoint;
use crate::render::{render, render_parallel};
use crate::scene::Scene;
use crate::screen::ScreenSpace;
use crate::transform::AffineState;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Command {
    Move(Point3D),
    Rotate { xy: f32, yz: f32 },
}

impl Command {
    pub fn up(step: f32) -> Self {
        Command::Move(Point3D::new(0.0, 0.0, step))
    }
    pub fn down(step: f32) -> Self {
        Command::Move(Point3D::new(0.0, 0.0, -step))
    }
    pub fn left(step: f32) -> Self {
        Command::Move(Point3D::new(-step, 0.0, 0.0))
    }
    pub fn right(step: f32) -> Self {
        Command::Move(Point3D::new(step, 0.0, 0.0))
    }
    pub fn rotate_xy(angle: f32) -> Self {
        Command::Rotate { xy: angle, yz: 0.0 }
    }
    pub fn rotate_yz(angle: f32) -> Self {
        Command::Rotate { xy: 0.0, yz: angle }
    }
}

pub struct Session {
    scene: Scene,
    viewpoint: Viewpoint,
    state: AffineState,
    width: u32,
    height: u32,
    workers: usize,
    frame: ScreenSpace,
    renders: u64,
}

impl Session {
    /// Takes ownership of the scene and renders the initial frame.
    /// `workers <= 1` renders on the calling thread.
    pub fn new(scene: Scene, viewpoint: Viewpoint, width: u32, height: u32, workers: usize) -> Self {
        let mut session = Self {
            scene,
            viewpoint,
            state: AffineState::default(),
            width,
            height,
            workers,
            frame: ScreenSpace::new(0, 0),
            renders: 0,
        };
        session.rerender();
        session
    }

    pub fn state(&self) -> &AffineState {
        &self.state
    }

    pub fn frame(&self) -> &ScreenSpace {
        &self.frame
    }

    /// Number of render passes so far, including the initial one
    pub fn renders(&self) -> u64 {
        self.renders
    }

    pub fn apply(&mut self, command: Command) -> &ScreenSpace {
        match command {
            Command::Move(delta) => self.state.translate(delta),
            Command::Rotate { xy, yz } => self.state.rotate(xy, yz),
        }
        log::debug!("applied {command:?}, state now {:?}", self.state);
        self.rerender();
        &self.frame
    }

    /// Follow a display surface size change with one render pass.
    /// Re-rendering at an unchanged size is skipped.
    pub fn resize(&mut self, width: u32, height: u32) -> &ScreenSpace {
        if (width, height) != (self.width, self.height) {
            log::debug!("surface resized to {width}x{height}");
            self.width = width;
            self.height = height;
            self.rerender();
        }
        &self.frame
    }

    fn rerender(&mut self) {
        let start = Instant::now();
        self.frame = if self.workers > 1 {
            render_parallel(&self.scene, &self.viewpoint, &self.state, self.width, self.height, self.workers)
        } else {
            render(&self.scene, &self.viewpoint, &self.state, self.width, self.height)
        };
        self.renders += 1;
        log::trace!("render #{} {}x{} took {:.2?}", self.renders, self.width, self.height, start.elapsed());
    }
}
