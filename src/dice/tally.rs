use std::fmt;

use super::die::Die;

// ---------------------------------------------------------------------------
// Total label
// ---------------------------------------------------------------------------

/// What the total label shows after a roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TotalDisplay {
    /// Nothing rolled since start-up or the last reset.
    #[default]
    Empty,
    Sum { die: Die, total: u32 },
    /// Fixed indicator for dice that do not keep a total.
    Rolling(Die),
}

impl fmt::Display for TotalDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TotalDisplay::Empty => write!(f, "Total:"),
            TotalDisplay::Sum { die, total } => write!(f, "{die} Total: {total}"),
            TotalDisplay::Rolling(die) => write!(f, "Rolling {}'s", die.name().to_lowercase()),
        }
    }
}

// ---------------------------------------------------------------------------
// Running total across consecutive rolls of one die
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct Tally {
    last_die: Option<Die>,
    running_total: u32,
    display: TotalDisplay,
}

impl Tally {
    /// Fold a roll into the running total and return the new label.
    pub fn record(&mut self, die: Die, value: u32) -> TotalDisplay {
        let same_die = self.last_die == Some(die);
        self.last_die = Some(die);

        self.display = if !die.keeps_total() {
            self.running_total = 0;
            TotalDisplay::Rolling(die)
        } else {
            self.running_total = if same_die {
                self.running_total + value
            } else {
                value
            };
            TotalDisplay::Sum {
                die,
                total: self.running_total,
            }
        };
        self.display
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn display(&self) -> TotalDisplay {
        self.display
    }

    #[cfg(test)]
    pub fn last_die(&self) -> Option<Die> {
        self.last_die
    }
}
