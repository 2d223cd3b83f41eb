use glam::Mat4;

/// Orthographic window onto the plot plane with equal axis scaling.
///
/// The shorter window side always spans `-half_extent..half_extent`; the longer
/// side shows extra room instead of stretching the circles.
pub struct View {
    pub half_extent: f32,
    pub aspect: f32,
}

impl View {
    pub fn new(half_extent: f32, width: u32, height: u32) -> Self {
        let mut view = Self {
            half_extent,
            aspect: 1.0,
        };
        view.set_size(width, height);
        view
    }

    pub fn set_size(&mut self, width: u32, height: u32) {
        self.aspect = width.max(1) as f32 / height.max(1) as f32;
    }

    pub fn build_projection_matrix(&self) -> Mat4 {
        let (half_w, half_h) = if self.aspect >= 1.0 {
            (self.half_extent * self.aspect, self.half_extent)
        } else {
            (self.half_extent, self.half_extent / self.aspect)
        };
        Mat4::orthographic_rh(-half_w, half_w, -half_h, half_h, -1.0, 1.0)
    }
}

// This is the data we'll send to the GPU.
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ViewUniform {
    projection: [[f32; 4]; 4],
}

impl ViewUniform {
    pub fn new() -> Self {
        Self {
            projection: Mat4::IDENTITY.to_cols_array_2d(),
        }
    }

    pub fn update_projection(&mut self, view: &View) {
        self.projection = view.build_projection_matrix().to_cols_array_2d();
    }
}

impl Default for ViewUniform {
    fn default() -> Self {
        Self::new()
    }
}
