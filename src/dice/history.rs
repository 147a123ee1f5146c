use std::fmt;

use super::die::Die;

/// One line of the roll log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogEntry {
    pub die: Die,
    pub value: u32,
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} result: {}", self.die, self.value)
    }
}

// ---------------------------------------------------------------------------
// RollLog – results of the current streak of one die
// ---------------------------------------------------------------------------

/// Log of roll results. Grows without bound while the same die is rolled.
#[derive(Debug, Clone, Default)]
pub struct RollLog {
    entries: Vec<LogEntry>,
    die: Option<Die>,
}

impl RollLog {
    pub const HEADER: &'static str = "Log:";

    /// Append a result, first clearing entries that belong to another die.
    pub fn append(&mut self, die: Die, value: u32) {
        if !self.entries.is_empty() && self.die != Some(die) {
            self.entries.clear();
        }
        self.die = Some(die);
        self.entries.push(LogEntry { die, value });
    }

    pub fn reset(&mut self) {
        self.entries.clear();
        self.die = None;
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[cfg(test)]
    pub fn current_die(&self) -> Option<Die> {
        self.die
    }
}

impl fmt::Display for RollLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(Self::HEADER)?;
        for entry in &self.entries {
            write!(f, "\n{entry}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn same_die_lines_accumulate() {
        let mut log = RollLog::default();
        log.append(Die::D8, 3);
        log.append(Die::D8, 8);
        assert_eq!(log.to_string(), "Log:\nD8 result: 3\nD8 result: 8");
    }

    #[test]
    fn switching_dice_clears_previous_lines() {
        let mut log = RollLog::default();
        log.append(Die::D8, 3);
        log.append(Die::D8, 8);
        log.append(Die::D10, 10);
        assert_eq!(log.entries(), &[LogEntry { die: Die::D10, value: 10 }]);
        assert_eq!(log.current_die(), Some(Die::D10));
    }

    #[test]
    fn reset_empties_the_log() {
        let mut log = RollLog::default();
        log.append(Die::D4, 1);
        log.reset();
        assert!(log.is_empty());
        assert_eq!(log.current_die(), None);
        assert_eq!(log.to_string(), "Log:");

        log.reset();
        assert_eq!(log.to_string(), "Log:");
    }

    #[test]
    fn log_is_not_capped() {
        let mut log = RollLog::default();
        for i in 0..5_000 {
            log.append(Die::D20, i % 20 + 1);
        }
        assert_eq!(log.entries().len(), 5_000);
    }
}
