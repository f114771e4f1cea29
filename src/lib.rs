//! Minimal software rasterizer for a small fixed scene of flat colored triangles.
//!
//! Points go through a rigid transform ([`transform`]), a line-intercept
//! perspective projection ([`projection`]) and a per-triangle edge setup
//! ([`triangle`]) before every pixel is tested against every triangle and the
//! nearest one wins ([`render`]).

pub mod point2d;
pub mod point3d;
pub mod line;
pub mod transform;
pub mod projection;
pub mod triangle;
pub mod rectangle;
pub mod screen;
pub mod render;
pub mod scene;
pub mod session;
pub mod config;
#[cfg(feature = "viewer")]
pub mod viewer;

pub use point2d::Point2D;
pub use point3d::Point3D;
pub use projection::{ProjectedPoint, Viewpoint};
pub use render::{render, render_parallel};
pub use scene::{Scene, SceneError};
pub use screen::ScreenSpace;
pub use session::{Command, Session};
pub use transform::{AffineState, Rotation};
pub use triangle::{PreprocessedTriangle, Triangle};
