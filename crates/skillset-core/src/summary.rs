//! End-of-run tally

use crate::executor::Applied;
use crate::mode::OperatingMode;

/// Final state of one package.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Installed,
    Updated,
    /// Declined at the prompt
    Skipped,
    /// An I/O error stopped the package
    Failed,
}

impl From<Applied> for Outcome {
    fn from(applied: Applied) -> Self {
        match applied {
            Applied::Installed => Self::Installed,
            Applied::Updated => Self::Updated,
        }
    }
}

/// Counts of package outcomes across a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub installed: usize,
    pub updated: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl RunSummary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one package outcome.
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Installed => self.installed += 1,
            Outcome::Updated => self.updated += 1,
            Outcome::Skipped => self.skipped += 1,
            Outcome::Failed => self.failed += 1,
        }
    }

    /// Number of packages processed.
    pub fn total(&self) -> usize {
        self.installed + self.updated + self.skipped + self.failed
    }

    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }

    /// One line per count, phrased for a dry run or a real run.
    ///
    /// The failed line only appears when something failed.
    pub fn render(&self, mode: &OperatingMode) -> String {
        let (installed, updated, skipped) = if mode.dry_run {
            ("would install", "would update", "would skip")
        } else {
            ("installed", "updated", "skipped")
        };

        let mut text = format!(
            "{installed}: {}\n{updated}: {}\n{skipped}: {}\n",
            self.installed, self.updated, self.skipped
        );
        if self.failed > 0 {
            text.push_str(&format!("failed: {}\n", self.failed));
        }
        text
    }
}
