use crate::dashboards::d400_line_tracking::TrackingCounters;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Display metadata
// ---------------------------------------------------------------------------

/// How to format the numeric value on the frontend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum ValueFormat {
    Number { decimals: u8 },
    Percent { decimals: u8 },
    Integer,
}

/// Visual status of a card (drives colour).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IndicatorStatus {
    Good,
    Bad,
    Neutral,
    Warning,
}

/// Efficiency at or above this is shown as good
pub const EFFICIENCY_GOOD: f64 = 90.0;
/// Efficiency below this is shown as bad
pub const EFFICIENCY_BAD: f64 = 60.0;
/// Reject share (% of QC total) above this is shown as bad
pub const REJECT_RATE_BAD: f64 = 5.0;

impl IndicatorStatus {
    pub fn for_efficiency(efficiency: Option<f64>) -> Self {
        match efficiency {
            None => IndicatorStatus::Neutral,
            Some(e) if e >= EFFICIENCY_GOOD => IndicatorStatus::Good,
            Some(e) if e < EFFICIENCY_BAD => IndicatorStatus::Bad,
            Some(_) => IndicatorStatus::Warning,
        }
    }

    /// Colour for a reject counter given the stage total
    pub fn for_rejects(rejects: u64, stage_total: u64) -> Self {
        if stage_total == 0 || rejects == 0 {
            return IndicatorStatus::Neutral;
        }
        let rate = rejects as f64 * 100.0 / stage_total as f64;
        if rate > REJECT_RATE_BAD {
            IndicatorStatus::Bad
        } else {
            IndicatorStatus::Warning
        }
    }
}

// ---------------------------------------------------------------------------
// Card definitions for the line tracking dashboard
// ---------------------------------------------------------------------------

/// Counter shown as a card on the tracking dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CounterKind {
    Good,
    Rework,
    Reject,
    Wira,
}

impl CounterKind {
    pub const ALL: [CounterKind; 4] = [
        CounterKind::Good,
        CounterKind::Rework,
        CounterKind::Reject,
        CounterKind::Wira,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CounterKind::Good => "Good",
            CounterKind::Rework => "Rework",
            CounterKind::Reject => "Reject",
            CounterKind::Wira => "WIRA",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            CounterKind::Good => "check-circle",
            CounterKind::Rework => "refresh",
            CounterKind::Reject => "x-circle",
            CounterKind::Wira => "alert-triangle",
        }
    }

    /// CSS colour variable used by cards and the pie chart
    pub fn color(&self) -> &'static str {
        match self {
            CounterKind::Good => "var(--color-success, #2e9d4b)",
            CounterKind::Rework => "var(--color-warning, #e0a100)",
            CounterKind::Reject => "var(--color-error, #d13438)",
            CounterKind::Wira => "var(--color-info, #2f6fdf)",
        }
    }
}

/// Inspection stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Qc,
    Pqc,
}

impl Stage {
    pub fn label(&self) -> &'static str {
        match self {
            Stage::Qc => "QC",
            Stage::Pqc => "PQC",
        }
    }

    pub fn value(&self, counters: &TrackingCounters, kind: CounterKind) -> u64 {
        let stage = match self {
            Stage::Qc => counters.qc(),
            Stage::Pqc => counters.pqc(),
        };
        match kind {
            CounterKind::Good => stage.good,
            CounterKind::Rework => stage.rework,
            CounterKind::Reject => stage.reject,
            CounterKind::Wira => stage.wira,
        }
    }

    pub fn status(&self, counters: &TrackingCounters, kind: CounterKind) -> IndicatorStatus {
        let total = match self {
            Stage::Qc => counters.qc().total(),
            Stage::Pqc => counters.pqc().total(),
        };
        match kind {
            CounterKind::Good if self.value(counters, kind) > 0 => IndicatorStatus::Good,
            CounterKind::Reject => IndicatorStatus::for_rejects(self.value(counters, kind), total),
            _ => IndicatorStatus::Neutral,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_efficiency_status() {
        assert_eq!(IndicatorStatus::for_efficiency(None), IndicatorStatus::Neutral);
        assert_eq!(IndicatorStatus::for_efficiency(Some(95.0)), IndicatorStatus::Good);
        assert_eq!(IndicatorStatus::for_efficiency(Some(75.0)), IndicatorStatus::Warning);
        assert_eq!(IndicatorStatus::for_efficiency(Some(10.0)), IndicatorStatus::Bad);
    }

    #[test]
    fn test_reject_status() {
        assert_eq!(IndicatorStatus::for_rejects(0, 100), IndicatorStatus::Neutral);
        assert_eq!(IndicatorStatus::for_rejects(3, 100), IndicatorStatus::Warning);
        assert_eq!(IndicatorStatus::for_rejects(10, 100), IndicatorStatus::Bad);
        assert_eq!(IndicatorStatus::for_rejects(1, 0), IndicatorStatus::Neutral);
    }

    #[test]
    fn test_stage_values() {
        let c = TrackingCounters {
            qc_good: 50,
            qc_reject: 10,
            pqc_wira: 4,
            ..Default::default()
        };
        assert_eq!(Stage::Qc.value(&c, CounterKind::Good), 50);
        assert_eq!(Stage::Pqc.value(&c, CounterKind::Wira), 4);
        assert_eq!(Stage::Qc.status(&c, CounterKind::Reject), IndicatorStatus::Bad);
        assert_eq!(Stage::Pqc.status(&c, CounterKind::Good), IndicatorStatus::Neutral);
    }
}
