use std::fmt;

use eframe::egui::Key;
use rand::Rng;

use crate::error::DiceError;

// ---------------------------------------------------------------------------
// Die – the fixed set of polyhedral dice
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Die {
    D4,
    D6,
    D8,
    D10,
    D12,
    D20,
}

impl Die {
    /// Every die, in button order.
    pub const ALL: [Die; 6] = [Die::D4, Die::D6, Die::D8, Die::D10, Die::D12, Die::D20];

    pub fn sides(self) -> u32 {
        match self {
            Die::D4 => 4,
            Die::D6 => 6,
            Die::D8 => 8,
            Die::D10 => 10,
            Die::D12 => 12,
            Die::D20 => 20,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Die::D4 => "D4",
            Die::D6 => "D6",
            Die::D8 => "D8",
            Die::D10 => "D10",
            Die::D12 => "D12",
            Die::D20 => "D20",
        }
    }

    /// Home-row key bound to this die.
    pub fn hotkey(self) -> Key {
        match self {
            Die::D4 => Key::A,
            Die::D6 => Key::S,
            Die::D8 => Key::D,
            Die::D10 => Key::F,
            Die::D12 => Key::G,
            Die::D20 => Key::H,
        }
    }

    /// Whether rolls of this die keep a running total.
    ///
    /// The d20 only shows a "rolling" indicator: each d20 roll stands on its own.
    pub fn keeps_total(self) -> bool {
        self != Die::D20
    }
}

impl fmt::Display for Die {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Rolling
// ---------------------------------------------------------------------------

/// One roll of one die.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RollOutcome {
    pub die: Die,
    pub value: u32,
}

impl RollOutcome {
    pub fn is_natural_max(&self) -> bool {
        self.value == self.die.sides()
    }

    pub fn is_natural_one(&self) -> bool {
        self.value == 1
    }
}

/// Draw a value uniformly from `1..=sides`.
pub fn roll<R: Rng + ?Sized>(rng: &mut R, sides: u32) -> Result<u32, DiceError> {
    if sides < 1 {
        return Err(DiceError::InvalidDieSize(sides));
    }
    Ok(rng.gen_range(1..=sides))
}

impl Die {
    pub fn roll<R: Rng + ?Sized>(self, rng: &mut R) -> Result<RollOutcome, DiceError> {
        let value = roll(rng, self.sides())?;
        Ok(RollOutcome { die: self, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn zero_sided_die_is_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(roll(&mut rng, 0), Err(DiceError::InvalidDieSize(0)));
    }

    #[test]
    fn one_sided_die_always_rolls_one() {
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..50 {
            assert_eq!(roll(&mut rng, 1), Ok(1));
        }
    }

    #[test]
    fn rolls_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(3);
        for die in Die::ALL {
            for _ in 0..1_000 {
                let outcome = die.roll(&mut rng).unwrap();
                assert!((1..=die.sides()).contains(&outcome.value), "{die}: {}", outcome.value);
            }
        }
    }

    #[test]
    fn rolls_are_uniform() {
        let mut rng = StdRng::seed_from_u64(0xD1CE);
        for die in Die::ALL {
            let sides = die.sides() as usize;
            let samples = 2_000 * sides;
            let mut counts = vec![0usize; sides];
            for _ in 0..samples {
                counts[roll(&mut rng, die.sides()).unwrap() as usize - 1] += 1;
            }

            let expected = samples as f64 / sides as f64;
            let chi_square: f64 = counts
                .iter()
                .map(|&c| (c as f64 - expected).powi(2) / expected)
                .sum();

            // Mean of chi-square is df, variance 2·df; six standard deviations is far in the tail.
            let df = (sides - 1) as f64;
            let bound = df + 6.0 * (2.0 * df).sqrt();
            assert!(chi_square < bound, "{die}: chi² = {chi_square:.2}, bound {bound:.2}");
        }
    }

    #[test]
    fn only_the_d20_skips_running_totals() {
        let exempt: Vec<Die> = Die::ALL.into_iter().filter(|d| !d.keeps_total()).collect();
        assert_eq!(exempt, vec![Die::D20]);
    }

    #[test]
    fn hotkeys_follow_the_home_row() {
        let bound: Vec<(Die, Key)> = Die::ALL.into_iter().map(|d| (d, d.hotkey())).collect();
        assert_eq!(
            bound,
            vec![
                (Die::D4, Key::A),
                (Die::D6, Key::S),
                (Die::D8, Key::D),
                (Die::D10, Key::F),
                (Die::D12, Key::G),
                (Die::D20, Key::H),
            ]
        );

        let distinct: std::collections::HashSet<Key> = bound.iter().map(|(_, k)| *k).collect();
        assert_eq!(distinct.len(), Die::ALL.len());
        assert!(!distinct.contains(&Key::Escape));
    }

    #[test]
    fn names_match_sides() {
        for die in Die::ALL {
            assert_eq!(die.name(), format!("D{}", die.sides()));
            assert_eq!(die.to_string(), die.name());
        }
    }
}
