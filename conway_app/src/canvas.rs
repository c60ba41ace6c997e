// canvas.rs - Pixel canvas the simulator paints into, uploaded as an egui texture

use conway::{Color, Surface};
use egui::{Color32, ColorImage};

pub struct PixelCanvas {
    image: ColorImage,
    fill: Color32,
    dirty: bool,
}

impl PixelCanvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            image: ColorImage::new([width, height], Color32::WHITE),
            fill: Color32::BLACK,
            dirty: true,
        }
    }

    pub fn image(&self) -> &ColorImage {
        &self.image
    }

    /// True once after any paint since the last call.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }

    fn span(start: f32, len: f32, limit: usize) -> std::ops::Range<usize> {
        let lo = (start.max(0.0) as usize).min(limit);
        let hi = ((start + len).max(0.0) as usize).min(limit);
        lo..hi
    }
}

impl Surface for PixelCanvas {
    fn set_fill(&mut self, color: Color) {
        self.fill = Color32::from_rgb(color.r, color.g, color.b);
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        let [w, h] = self.image.size;
        let cols = Self::span(x, width, w);
        for row in Self::span(y, height, h) {
            let line = row * w;
            self.image.pixels[line + cols.start..line + cols.end].fill(self.fill);
        }
        self.dirty = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_rect_paints_only_its_square() {
        let mut canvas = PixelCanvas::new(4, 4);
        canvas.set_fill(Color::BLACK);
        canvas.fill_rect(2.0, 1.0, 2.0, 2.0);

        let px = |x: usize, y: usize| canvas.image().pixels[y * 4 + x];
        assert_eq!(px(2, 1), Color32::BLACK);
        assert_eq!(px(3, 2), Color32::BLACK);
        assert_eq!(px(1, 1), Color32::WHITE);
        assert_eq!(px(2, 3), Color32::WHITE);
    }

    #[test]
    fn fill_rect_clips_to_the_canvas() {
        let mut canvas = PixelCanvas::new(3, 3);
        canvas.set_fill(Color::rgb(1, 2, 3));
        canvas.fill_rect(-5.0, 2.0, 100.0, 100.0);

        let painted = canvas.image().pixels.iter().filter(|&&p| p == Color32::from_rgb(1, 2, 3)).count();
        assert_eq!(painted, 3);
    }

    #[test]
    fn dirty_flag_resets_after_take() {
        let mut canvas = PixelCanvas::new(2, 2);
        assert!(canvas.take_dirty());
        assert!(!canvas.take_dirty());
        canvas.fill_rect(0.0, 0.0, 1.0, 1.0);
        assert!(canvas.take_dirty());
    }
}
