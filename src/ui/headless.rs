use particles_core::Renderer;

/// Renderer that draws nothing and only counts what it was asked to draw.
#[derive(Debug, Default)]
pub struct HeadlessRenderer {
    frames_presented: u64,
    squares_in_frame: usize,
    squares_in_last_frame: usize,
}

impl HeadlessRenderer {
    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    pub fn squares_in_last_frame(&self) -> usize {
        self.squares_in_last_frame
    }
}

impl Renderer for HeadlessRenderer {
    fn clear(&mut self, _background: &str) {
        self.squares_in_frame = 0;
    }

    fn draw_square(&mut self, _color: &str, _x: i32, _y: i32, _size: u32) {
        self.squares_in_frame += 1;
    }

    fn present(&mut self) -> anyhow::Result<()> {
        self.frames_presented += 1;
        self.squares_in_last_frame = self.squares_in_frame;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_squares_per_frame() {
        let mut renderer = HeadlessRenderer::default();
        renderer.clear("#000");
        renderer.draw_square("red", 1, 2, 6);
        renderer.draw_square("red", 3, 4, 6);
        renderer.present().unwrap();
        renderer.clear("#000");
        renderer.present().unwrap();
        assert_eq!(renderer.frames_presented(), 2);
        assert_eq!(renderer.squares_in_last_frame(), 0);
    }
}
