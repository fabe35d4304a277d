//! Run counters reported at the end of a safety analysis.

use serde::Serialize;

use super::safety::SafetyVerdict;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SafetySummary {
    /// Reports that parsed and were judged.
    pub analyzed: usize,
    /// Safe as written.
    pub safe: usize,
    /// Safe only after one removal.
    pub dampened: usize,
    #[serde(rename = "unsafe")]
    pub unsafe_count: usize,
    /// Lines skipped because they did not parse. Not part of the rate base.
    pub parse_errors: usize,
}

impl SafetySummary {
    pub const fn record(&mut self, verdict: SafetyVerdict) {
        self.analyzed += 1;
        match verdict {
            SafetyVerdict::Safe => self.safe += 1,
            SafetyVerdict::SafeWithRemoval { .. } => self.dampened += 1,
            SafetyVerdict::Unsafe => self.unsafe_count += 1,
        }
    }

    /// Reports judged safe, dampened or not.
    #[must_use]
    pub const fn passing(&self) -> usize {
        self.safe + self.dampened
    }

    /// Percentage of analyzed reports that pass; `None` when nothing was
    /// analyzed.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn safety_rate(&self) -> Option<f64> {
        if self.analyzed == 0 {
            None
        } else {
            Some(self.passing() as f64 / self.analyzed as f64 * 100.0)
        }
    }
}
