//! Initial camera placement for a freshly generated terrain.

use glam::Vec3;

/// Where the renderer should put its orbit camera for a new terrain.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraFraming {
    /// Camera position.
    pub eye: Vec3,
    /// Orbit target, the centre of the terrain volume.
    pub target: Vec3,
}

impl CameraFraming {
    /// Frame a `size × size` terrain of nominal height `max_height`.
    ///
    /// The eye sits on the +X/+Z diagonal, 1.5 sizes out, and high enough to
    /// see the whole grid.
    pub fn for_terrain(size: u32, max_height: u32) -> Self {
        let size = size as f32;
        let max_height = max_height as f32;
        let distance = size * 1.5;
        Self {
            eye: Vec3::new(
                distance * 0.7,
                max_height + size * 0.8,
                distance * 0.7,
            ),
            target: Vec3::new(size / 2.0, max_height / 2.0, size / 2.0),
        }
    }
}
