//! Progress Simulator — the fixed four-step cosmetic progress sequence shown
//! while a submitted analysis is in flight.
//!
//! The simulator is a pure state machine (`Idle → Running(cursor) → Complete`)
//! driven by tick count, not wall-clock time. The async pipeline owns the
//! timers; this module owns WHAT each tick displays. That split keeps the
//! display sequence deterministically testable.

use serde::Serialize;

/// One entry of the fixed progress sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressStep {
    /// Displayed percentage, 0–100.
    pub percentage: u8,
    /// Status message shown under the ring.
    pub label: &'static str,
    /// Which of the three step indicators is active (1-based).
    pub stage: u8,
}

/// The fixed sequence applied one step per tick. Never mutated.
///
/// The last two entries share stage 3: the indicator stays on the final stage
/// while the ring closes from 90% to 100%.
pub static PROGRESS_STEPS: [ProgressStep; 4] = [
    ProgressStep {
        percentage: 30,
        label: "Parsing resume content...",
        stage: 1,
    },
    ProgressStep {
        percentage: 60,
        label: "Analyzing skills and experience...",
        stage: 2,
    },
    ProgressStep {
        percentage: 90,
        label: "Generating insights and recommendations...",
        stage: 3,
    },
    ProgressStep {
        percentage: 100,
        label: "Analysis complete!",
        stage: 3,
    },
];

/// Number of step indicator dots rendered on the overlay.
pub const INDICATOR_COUNT: u8 = 3;

/// Circumference of the overlay progress ring (2π × r45).
pub const PROGRESS_RING_CIRCUMFERENCE: f64 = 2.0 * std::f64::consts::PI * 45.0;

/// Circumference of the results-page score ring (2π × r50).
pub const SCORE_RING_CIRCUMFERENCE: f64 = 2.0 * std::f64::consts::PI * 50.0;

/// Rendering state of a single step indicator dot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IndicatorState {
    Pending,
    Active,
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    Running(usize),
    Complete,
}

/// Cursor into [`PROGRESS_STEPS`]. Advances forward only, one step per tick;
/// terminal once the sequence is exhausted.
#[derive(Debug, Clone)]
pub struct ProgressSimulator {
    phase: Phase,
}

impl ProgressSimulator {
    pub fn new() -> Self {
        Self { phase: Phase::Idle }
    }

    /// Enters `Running` with the cursor at the first step.
    pub fn start(&mut self) {
        if matches!(self.phase, Phase::Idle) {
            self.phase = Phase::Running(0);
        }
    }

    /// Applies one tick: returns the step at the cursor and advances it.
    /// Returns `None` once the sequence is exhausted (or before `start`),
    /// after which every further call returns `None`.
    pub fn advance(&mut self) -> Option<&'static ProgressStep> {
        match self.phase {
            Phase::Idle | Phase::Complete => None,
            Phase::Running(cursor) => {
                let step = &PROGRESS_STEPS[cursor];
                self.phase = if cursor + 1 == PROGRESS_STEPS.len() {
                    Phase::Complete
                } else {
                    Phase::Running(cursor + 1)
                };
                Some(step)
            }
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self.phase, Phase::Complete)
    }
}

impl Default for ProgressSimulator {
    fn default() -> Self {
        Self::new()
    }
}

/// Maps a displayed percentage onto a stroke-dashoffset for a ring of the
/// given circumference: 0% draws a full gap, 100% draws zero gap.
pub fn ring_offset(percentage: f64, circumference: f64) -> f64 {
    circumference - (percentage / 100.0) * circumference
}

/// Derives the rendering state of each indicator dot for an active stage:
/// dots before the stage are completed, the stage's dot is active, the rest
/// are pending.
pub fn indicator_states(active_stage: u8) -> Vec<IndicatorState> {
    (1..=INDICATOR_COUNT)
        .map(|dot| {
            if dot < active_stage {
                IndicatorState::Completed
            } else if dot == active_stage {
                IndicatorState::Active
            } else {
                IndicatorState::Pending
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_before_start_yields_nothing() {
        let mut sim = ProgressSimulator::new();
        assert!(sim.advance().is_none());
        assert!(!sim.is_complete());
    }

    #[test]
    fn test_percentage_sequence_is_exact() {
        let mut sim = ProgressSimulator::new();
        sim.start();

        let mut seen = Vec::new();
        while let Some(step) = sim.advance() {
            seen.push(step.percentage);
        }
        assert_eq!(seen, vec![30, 60, 90, 100]);
    }

    #[test]
    fn test_cursor_is_terminal_after_four_ticks() {
        let mut sim = ProgressSimulator::new();
        sim.start();
        for _ in 0..4 {
            assert!(sim.advance().is_some());
        }
        assert!(sim.is_complete());
        // No further ticks, ever.
        for _ in 0..10 {
            assert!(sim.advance().is_none());
        }
    }

    #[test]
    fn test_start_is_idempotent() {
        let mut sim = ProgressSimulator::new();
        sim.start();
        assert_eq!(sim.advance().unwrap().percentage, 30);
        sim.start(); // does not rewind the cursor
        assert_eq!(sim.advance().unwrap().percentage, 60);
    }

    #[test]
    fn test_stage_sequence_never_decreases() {
        let mut sim = ProgressSimulator::new();
        sim.start();
        let mut last_stage = 0;
        while let Some(step) = sim.advance() {
            assert!(step.stage >= last_stage);
            last_stage = step.stage;
        }
        assert_eq!(last_stage, 3);
    }

    #[test]
    fn test_ring_offset_half_of_reference_circumference() {
        // 2π×45 ≈ 282.74; at 50% the drawn offset is half of it.
        let offset = ring_offset(50.0, 282.74);
        assert!((offset - 141.37).abs() < 1e-9);
    }

    #[test]
    fn test_ring_offset_extremes() {
        assert!((ring_offset(0.0, PROGRESS_RING_CIRCUMFERENCE) - PROGRESS_RING_CIRCUMFERENCE).abs() < 1e-9);
        assert!(ring_offset(100.0, PROGRESS_RING_CIRCUMFERENCE).abs() < 1e-9);
    }

    #[test]
    fn test_indicator_states_stage_two() {
        assert_eq!(
            indicator_states(2),
            vec![
                IndicatorState::Completed,
                IndicatorState::Active,
                IndicatorState::Pending
            ]
        );
    }

    #[test]
    fn test_indicator_states_final_stage() {
        assert_eq!(
            indicator_states(3),
            vec![
                IndicatorState::Completed,
                IndicatorState::Completed,
                IndicatorState::Active
            ]
        );
    }
}
