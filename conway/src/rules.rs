// rules.rs - Next-state rules

/// Which rule decides a cell's next state from its live-neighbor count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Rule {
    /// Classic B3/S23 Life.
    #[default]
    Standard,
    /// Experimental inversion: crowded cells live on, isolated dead cells are born.
    Inverted,
}

impl Rule {
    pub const ALL: [Rule; 2] = [Rule::Standard, Rule::Inverted];

    pub fn next_state(self, alive: bool, live_neighbors: u8) -> bool {
        match self {
            Rule::Standard => match (alive, live_neighbors) {
                (true, 2) | (true, 3) => true,  // Survival
                (false, 3)            => true,  // Birth
                _                     => false, // Death or stays dead
            },
            Rule::Inverted => match (alive, live_neighbors) {
                (true, n)  => n > 3,
                (false, n) => n == 0,
            },
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Rule::Standard => "Standard",
            Rule::Inverted => "Inverted",
        }
    }
}
