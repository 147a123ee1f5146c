use rand::Rng;

use super::die::{Die, RollOutcome};
use super::history::RollLog;
use super::tally::{Tally, TotalDisplay};
use crate::error::DiceError;

// ---------------------------------------------------------------------------
// Reactions to critical rolls
// ---------------------------------------------------------------------------

/// Animation to play after a roll, as an index into its reaction set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reaction {
    /// Natural 20 on the d20.
    Celebrate(usize),
    /// Natural 1 on the d20.
    Commiserate(usize),
}

/// Everything a single roll changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RollReport {
    pub outcome: RollOutcome,
    pub total: TotalDisplay,
    pub reaction: Option<Reaction>,
}

// ---------------------------------------------------------------------------
// DieController
// ---------------------------------------------------------------------------

/// Rolls dice and keeps the total and log in step with each roll.
pub struct DieController<R> {
    rng: R,
    tally: Tally,
    log: RollLog,
    celebrations: usize,
    commiserations: usize,
}

impl<R: Rng> DieController<R> {
    /// `celebrations` / `commiserations` are the sizes of the two reaction sets.
    pub fn new(rng: R, celebrations: usize, commiserations: usize) -> Self {
        Self {
            rng,
            tally: Tally::default(),
            log: RollLog::default(),
            celebrations,
            commiserations,
        }
    }

    pub fn trigger(&mut self, die: Die) -> Result<RollReport, DiceError> {
        let outcome = die.roll(&mut self.rng)?;
        let total = self.tally.record(die, outcome.value);
        self.log.append(die, outcome.value);
        let reaction = self.pick_reaction(&outcome);

        log::debug!("{die} rolled {} ({total}), reaction {reaction:?}", outcome.value);

        Ok(RollReport {
            outcome,
            total,
            reaction,
        })
    }

    fn pick_reaction(&mut self, outcome: &RollOutcome) -> Option<Reaction> {
        if outcome.die != Die::D20 {
            return None;
        }
        if outcome.is_natural_max() && self.celebrations > 0 {
            Some(Reaction::Celebrate(self.rng.gen_range(0..self.celebrations)))
        } else if outcome.is_natural_one() && self.commiserations > 0 {
            Some(Reaction::Commiserate(self.rng.gen_range(0..self.commiserations)))
        } else {
            None
        }
    }

    /// Clear the log and the total label.
    pub fn reset(&mut self) {
        self.log.reset();
        self.tally.reset();
    }

    pub fn total(&self) -> TotalDisplay {
        self.tally.display()
    }

    pub fn log(&self) -> &RollLog {
        &self.log
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn controller(seed: u64) -> DieController<StdRng> {
        DieController::new(StdRng::seed_from_u64(seed), 5, 4)
    }

    #[test]
    fn trigger_updates_total_and_log_together() {
        let mut ctl = controller(7);
        let first = ctl.trigger(Die::D6).unwrap();
        let second = ctl.trigger(Die::D6).unwrap();

        let sum = first.outcome.value + second.outcome.value;
        assert_eq!(second.total, TotalDisplay::Sum { die: Die::D6, total: sum });
        assert_eq!(ctl.total(), second.total);
        assert_eq!(ctl.log().entries().len(), 2);

        let third = ctl.trigger(Die::D10).unwrap();
        assert_eq!(
            third.total,
            TotalDisplay::Sum { die: Die::D10, total: third.outcome.value }
        );
        assert_eq!(ctl.log().entries().len(), 1);
    }

    #[test]
    fn reset_clears_everything() {
        let mut ctl = controller(8);
        for die in Die::ALL {
            ctl.trigger(die).unwrap();
        }
        ctl.reset();
        assert!(ctl.log().is_empty());
        assert_eq!(ctl.total(), TotalDisplay::Empty);
    }

    #[test]
    fn only_d20_extremes_react() {
        let mut ctl = controller(9);
        for _ in 0..2_000 {
            for die in [Die::D4, Die::D6, Die::D8, Die::D10, Die::D12] {
                assert_eq!(ctl.trigger(die).unwrap().reaction, None);
            }
            let report = ctl.trigger(Die::D20).unwrap();
            match (report.outcome.value, report.reaction) {
                (20, Some(Reaction::Celebrate(i))) => assert!(i < 5),
                (1, Some(Reaction::Commiserate(i))) => assert!(i < 4),
                (2..=19, None) => {}
                other => panic!("unexpected reaction {other:?}"),
            }
        }
    }

    #[test]
    fn critical_rates_and_choices_are_uniform() {
        let mut ctl = controller(0x20);
        let rolls = 10_000;
        let mut celebrate = [0usize; 5];
        let mut commiserate = [0usize; 4];

        for _ in 0..rolls {
            match ctl.trigger(Die::D20).unwrap().reaction {
                Some(Reaction::Celebrate(i)) => celebrate[i] += 1,
                Some(Reaction::Commiserate(i)) => commiserate[i] += 1,
                None => {}
            }
        }

        // Expect 500 of each; binomial sd ≈ 22.
        let crits: usize = celebrate.iter().sum();
        let fumbles: usize = commiserate.iter().sum();
        assert!((380..=620).contains(&crits), "crits: {crits}");
        assert!((380..=620).contains(&fumbles), "fumbles: {fumbles}");

        for (i, &n) in celebrate.iter().enumerate() {
            let expected = crits as f64 / 5.0;
            assert!((n as f64 - expected).abs() < expected * 0.45, "celebration {i}: {n}");
        }
        for (i, &n) in commiserate.iter().enumerate() {
            let expected = fumbles as f64 / 4.0;
            assert!((n as f64 - expected).abs() < expected * 0.45, "commiseration {i}: {n}");
        }
    }

    #[test]
    fn empty_reaction_sets_never_react() {
        let mut ctl = DieController::new(StdRng::seed_from_u64(11), 0, 0);
        for _ in 0..2_000 {
            assert_eq!(ctl.trigger(Die::D20).unwrap().reaction, None);
        }
    }
}
