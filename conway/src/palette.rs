// palette.rs - Fill colors for alive and dead cells

use rand::Rng;

use crate::surface::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub alive: Color,
    pub dead: Color,
    /// Pick a fresh alive color every time the board is seeded.
    pub randomize_alive: bool,
}

impl Default for Palette {
    fn default() -> Self {
        Self::classic()
    }
}

impl Palette {
    /// Black cells on white.
    pub fn classic() -> Self {
        Self { alive: Color::BLACK, dead: Color::WHITE, randomize_alive: false }
    }

    pub fn fixed(alive: Color, dead: Color) -> Self {
        Self { alive, dead, randomize_alive: false }
    }

    /// Random alive color per seed, drawn over `dead`.
    pub fn random_alive(dead: Color) -> Self {
        Self { alive: Color::BLACK, dead, randomize_alive: true }
    }

    /// Called whenever a new board is seeded.
    pub fn reseed<R: Rng>(&mut self, rng: &mut R) {
        if self.randomize_alive {
            self.alive = Color::rgb(
                rng.gen_range(0..=255),
                rng.gen_range(0..=255),
                rng.gen_range(0..=255),
            );
        }
    }

    pub fn fill_for(&self, alive: bool) -> Color {
        if alive { self.alive } else { self.dead }
    }
}
