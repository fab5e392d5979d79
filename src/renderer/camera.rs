use glam::{Mat4, Vec2, Vec3};

/// Flat camera mapping scene units onto the surface in physical pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    /// Surface size in physical pixels.
    pub viewport: Vec2,
    /// Where the scene origin lands, in physical pixels from the top-left corner.
    pub focus: Vec2,
    /// Physical pixels per scene unit.
    pub zoom: f32,
}

impl Camera {
    pub fn new(width: u32, height: u32) -> Self {
        let viewport = Vec2::new(width.max(1) as f32, height.max(1) as f32);
        Self {
            viewport,
            focus: viewport * 0.5,
            zoom: 1.0,
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        let centered = self.focus == self.viewport * 0.5;
        self.viewport = Vec2::new(width.max(1) as f32, height.max(1) as f32);
        if centered {
            self.focus = self.viewport * 0.5;
        }
    }

    pub fn build_view_projection_matrix(&self) -> Mat4 {
        // Pixel space with y pointing down, depth range [0, 1].
        let proj = Mat4::orthographic_rh(0.0, self.viewport.x, self.viewport.y, 0.0, -1.0, 1.0);
        let view = Mat4::from_translation(self.focus.extend(0.0))
            * Mat4::from_scale(Vec3::new(self.zoom, self.zoom, 1.0));
        proj * view
    }
}

// This is the data we'll send to the GPU.
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    view_proj: Mat4,
}

impl CameraUniform {
    pub fn new() -> Self {
        Self {
            view_proj: Mat4::IDENTITY,
        }
    }

    pub fn update_view_proj(&mut self, camera: &Camera) {
        self.view_proj = camera.build_view_projection_matrix();
    }
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vec2, b: Vec2) -> bool {
        (a - b).length() < 1e-5
    }

    fn project(camera: &Camera, point: Vec2) -> Vec2 {
        let clip = camera.build_view_projection_matrix() * point.extend(0.0).extend(1.0);
        clip.truncate().truncate()
    }

    #[test]
    fn origin_projects_onto_focus() {
        let camera = Camera::new(400, 200);
        assert!(close(project(&camera, Vec2::ZERO), Vec2::ZERO));

        let corner = Camera {
            focus: Vec2::ZERO,
            ..camera
        };
        assert!(close(project(&corner, Vec2::ZERO), Vec2::new(-1.0, 1.0)));
    }

    #[test]
    fn zoom_scales_and_y_points_down() {
        let camera = Camera {
            zoom: 2.0,
            ..Camera::new(400, 200)
        };
        assert!(close(project(&camera, Vec2::new(10.0, 0.0)), Vec2::new(0.1, 0.0)));
        assert!(close(project(&camera, Vec2::new(0.0, 10.0)), Vec2::new(0.0, -0.2)));
    }

    #[test]
    fn resize_keeps_a_centered_focus_centered() {
        let mut camera = Camera::new(400, 200);
        camera.resize(800, 600);
        assert_eq!(camera.focus, Vec2::new(400.0, 300.0));

        camera.focus = Vec2::new(10.0, 10.0);
        camera.resize(100, 100);
        assert_eq!(camera.focus, Vec2::new(10.0, 10.0));
    }

    #[test]
    fn uniform_uploads_column_major_matrix() {
        let camera = Camera::new(640, 480);
        let mut uniform = CameraUniform::default();
        assert_eq!(bytemuck::bytes_of(&uniform).len(), 64);

        uniform.update_view_proj(&camera);
        let floats: &[f32] = bytemuck::cast_slice(std::slice::from_ref(&uniform));
        assert_eq!(floats, camera.build_view_projection_matrix().to_cols_array());
    }
}
