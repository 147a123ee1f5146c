/// Dice layer: dice, rolls, running totals and the roll log.
///
/// Architecture:
/// ```text
///   button / key
///        │
///        ▼
///   ┌────────────┐
///   │ controller  │  roll → tally → history → reaction?
///   └────────────┘
///     │     │     │
///     ▼     ▼     ▼
///   die   tally  history
/// ```

pub mod controller;
pub mod die;
pub mod history;
pub mod tally;
