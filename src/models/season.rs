use std::fmt;

use serde::{Deserialize, Serialize};

/// Meteorological season, grouped by whole calendar months.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Season {
    Winter = 0,
    Spring = 1,
    Summer = 2,
    Fall = 3,
}

impl Season {
    /// Fixed order used for iteration and for the panel layout.
    pub const ALL: [Season; 4] = [Season::Winter, Season::Spring, Season::Summer, Season::Fall];

    pub fn name(&self) -> &'static str {
        match self {
            Season::Winter => "WINTER",
            Season::Spring => "SPRING",
            Season::Summer => "SUMMER",
            Season::Fall => "FALL",
        }
    }

    pub fn index(&self) -> usize {
        *self as usize
    }

    /// The season `steps` places later in the yearly cycle.
    pub fn rotated(self, steps: usize) -> Season {
        Season::ALL[(self.index() + steps) % Season::ALL.len()]
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Hemisphere {
    #[default]
    Northern,
    Southern,
}

impl Hemisphere {
    pub fn from_southern(southern: bool) -> Self {
        if southern {
            Hemisphere::Southern
        } else {
            Hemisphere::Northern
        }
    }
}
