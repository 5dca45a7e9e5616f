// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::roster::Roster;

/// The result of a successful roster transition.
///
/// Transitions are atomic: they either succeed completely or fail without side effects.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionResult {
    /// The roster after the transition.
    pub new_roster: Roster,
    /// The name of the command that was applied.
    pub action: &'static str,
    /// A human-readable description of what changed.
    pub details: String,
}

/// One line that could not be loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadFailure {
    /// 1-based line number in the input.
    pub line: usize,
    /// Why the line was rejected.
    pub reason: String,
}

/// Outcome of a bulk roster load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Player records loaded.
    pub loaded: usize,
    /// Player records skipped.
    pub skipped: usize,
    /// Every rejected line, header included, in input order.
    pub failures: Vec<LoadFailure>,
}

impl LoadReport {
    /// Returns true if nothing was rejected.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}
