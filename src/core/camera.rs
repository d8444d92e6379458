use crate::core::prelude::*;
use std::fmt::{Display, Formatter};

/// A 2D camera that can pan, zoom and rotate around the centre of the viewport.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Camera {
    viewport: Vec2,
    pub position: Vec2,
    /// Scale is `CAMERA_ZOOM_BASE.powf(zoom_factor)`; zero means no zoom.
    pub zoom_factor: f64,
    pub rotation_degrees: f64,
}

impl Camera {
    pub fn new(viewport: Vec2) -> Self {
        Self {
            viewport,
            position: Vec2::zero(),
            zoom_factor: 0.,
            rotation_degrees: 0.,
        }
    }

    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }
    fn viewport_centre(&self) -> Vec2 {
        self.viewport * 0.5
    }
    pub fn scale(&self) -> f64 {
        CAMERA_ZOOM_BASE.powf(self.zoom_factor)
    }

    /// Maps world coordinates to screen coordinates.
    pub fn world_matrix(&self) -> Mat3x3 {
        let centre = self.viewport_centre();
        Mat3x3::translation_vec2(centre)
            * Mat3x3::rotation(self.rotation_degrees.to_radians())
            * Mat3x3::scale(self.scale(), self.scale())
            * Mat3x3::translation_vec2(-centre)
            * Mat3x3::translation_vec2(-self.position)
    }

    pub fn world_to_screen(&self, world: Vec2) -> Vec2 {
        self.world_matrix() * world
    }

    /// Maps screen coordinates back to world coordinates.
    ///
    /// When the world matrix is singular (e.g. the zoom has underflowed to zero) there is no
    /// answer, and both components are NaN.
    pub fn screen_to_world(&self, screen: Vec2) -> Vec2 {
        match self.world_matrix().inverse() {
            Some(inverse) => inverse * screen,
            None => Vec2::splat(f64::NAN),
        }
    }

    /// Centres the view on `target`.
    pub fn follow(&mut self, target: Vec2) {
        self.position = target - self.viewport_centre();
    }
}

impl Display for Camera {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "T: {:.1}, R: {:.2}, S: {:.2}",
            self.position, self.rotation_degrees, self.zoom_factor
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> Camera {
        Camera::new(Vec2 {
            x: SCREEN_WIDTH,
            y: SCREEN_HEIGHT,
        })
    }

    #[test]
    fn followed_target_is_at_screen_centre() {
        let mut camera = camera();
        let target = Vec2 { x: 300.0, y: -120.0 };
        camera.follow(target);
        assert!(camera
            .world_to_screen(target)
            .almost_eq(Vec2 { x: SCREEN_WIDTH / 2.0, y: SCREEN_HEIGHT / 2.0 }));
    }

    #[test]
    fn screen_to_world_inverts_world_to_screen() {
        let mut camera = camera();
        camera.position = Vec2 { x: 40.0, y: 25.0 };
        camera.zoom_factor = 30.0;
        camera.rotation_degrees = 17.0;
        for p in [Vec2::zero(), Vec2 { x: 123.0, y: -45.5 }, Vec2 { x: -900.0, y: 600.0 }] {
            let screen = camera.world_to_screen(p);
            let back = camera.screen_to_world(screen);
            assert!((back - p).len() < 1e-6, "{p} -> {screen} -> {back}");
        }
    }

    #[test]
    fn identity_camera_maps_directly() {
        let camera = camera();
        let p = Vec2 { x: 5.0, y: 7.0 };
        assert!(camera.world_to_screen(p).almost_eq(p));
        assert!(camera.screen_to_world(p).almost_eq(p));
    }

    #[test]
    fn singular_camera_yields_nan() {
        let mut camera = camera();
        camera.zoom_factor = -1e6;
        assert_eq!(camera.scale(), 0.0);
        let world = camera.screen_to_world(Vec2 { x: 1.0, y: 1.0 });
        assert!(world.x.is_nan() && world.y.is_nan());
        assert!(!world.is_finite());
    }

    #[test]
    fn display() {
        let camera = camera();
        assert_eq!(camera.to_string(), "T: vec(0.0, 0.0), R: 0.00, S: 0.00");
    }
}
