use winit::dpi::PhysicalSize;

/// Window and context settings for the demo.
///
/// The defaults are the fixed values the demo is defined by; nothing reads
/// them from the command line or a file.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub title: String,
    pub size: PhysicalSize<u32>,
    /// Color the framebuffer is cleared to before each draw.
    pub clear_color: [f32; 4],
    /// Requested depth buffer bits. Depth testing is never enabled.
    pub depth_bits: u8,
    pub vsync: bool,
}

impl AppConfig {
    /// Value written once to the `u_resolution` uniform.
    pub fn resolution(&self) -> [f32; 2] {
        [self.size.width as f32, self.size.height as f32]
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "OpenGL ES test".to_string(),
            size: PhysicalSize::new(600, 600),
            clear_color: crate::quad::CLEAR_COLOR,
            depth_bits: 24,
            vsync: false,
        }
    }
}
