use crate::point3d::Point3D;

/// Accumulated rotation angles in radians.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Rotation {
    pub xy: f32,
    pub yz: f32,
}

/// Rigid transform applied to every scene point before projection.
///
/// Both fields only ever accumulate; nothing resets them.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct AffineState {
    pub translation: Point3D,
    pub rotation: Rotation,
}

#[inline(always)]
fn rotate_pair(a: f32, b: f32, angle: f32) -> (f32, f32) {
    let (sin, cos) = angle.sin_cos();
    (a * cos - b * sin, a * sin + b * cos)
}

impl AffineState {
    /// Move command: adds `delta` to the accumulated translation
    pub fn translate(&mut self, delta: Point3D) {
        self.translation += delta;
    }

    /// Rotate command: adds both deltas to the accumulated angles
    pub fn rotate(&mut self, delta_xy: f32, delta_yz: f32) {
        self.rotation.xy += delta_xy;
        self.rotation.yz += delta_yz;
    }

    /// Rotate in the xy plane, then in the yz plane, then translate.
    pub fn apply(&self, point: Point3D) -> Point3D {
        let (x, y) = rotate_pair(point.x, point.y, self.rotation.xy);
        let (y, z) = rotate_pair(y, point.z, self.rotation.yz);
        Point3D { x, y, z } + self.translation
    }
}
