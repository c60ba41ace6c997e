// surface.rs - The paint target the simulator draws onto

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// A 2D surface with a current fill color and a filled-rectangle primitive.
///
/// Coordinates are in pixels with the origin at the top-left corner. The
/// simulator never owns more than this; sizing and display are up to the caller.
/// Two simulators painting onto one surface will overwrite each other.
pub trait Surface {
    fn set_fill(&mut self, color: Color);
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32);
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn set_fill(&mut self, color: Color) {
        (**self).set_fill(color);
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        (**self).fill_rect(x, y, width, height);
    }
}
