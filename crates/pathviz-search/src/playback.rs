//! Playback plan for animating a search.
//!
//! A [`Timeline`] schedules when each traced cell and then each path cell
//! should be revealed. It is plain data computed from finished search
//! output; the caller drives the clock.

use pathviz_core::Point;

use crate::algorithm::SearchResult;

/// Reveal intervals for the two phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlaybackConfig {
    /// Delay between consecutive visited cells.
    pub visit_step_ms: u64,
    /// Delay between consecutive path cells.
    pub path_step_ms: u64,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            visit_step_ms: 10,
            path_step_ms: 50,
        }
    }
}

/// Which phase a step belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StepKind {
    Visited,
    Path,
}

/// One cell reveal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Step {
    pub at_ms: u64,
    pub pos: Point,
    pub kind: StepKind,
}

/// Ordered reveal schedule: the whole trace first, then the path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Timeline {
    steps: Vec<Step>,
}

impl Timeline {
    /// Schedule `trace[i]` at `i * visit_step_ms`, then `path[j]` at
    /// `trace.len() * visit_step_ms + j * path_step_ms`. Times saturate at
    /// `u64::MAX`, so steps stay in order for any interval.
    pub fn new(trace: &[Point], path: &[Point], config: PlaybackConfig) -> Self {
        let mut steps = Vec::with_capacity(trace.len() + path.len());
        steps.extend(trace.iter().enumerate().map(|(i, &pos)| Step {
            at_ms: (i as u64).saturating_mul(config.visit_step_ms),
            pos,
            kind: StepKind::Visited,
        }));
        let path_start = (trace.len() as u64).saturating_mul(config.visit_step_ms);
        steps.extend(path.iter().enumerate().map(|(j, &pos)| Step {
            at_ms: path_start.saturating_add((j as u64).saturating_mul(config.path_step_ms)),
            pos,
            kind: StepKind::Path,
        }));
        Self { steps }
    }

    /// Schedule a search result. The path phase is left out when no path
    /// was found.
    pub fn from_result(result: &SearchResult, config: PlaybackConfig) -> Self {
        let path: &[Point] = if result.found { &result.path } else { &[] };
        Self::new(&result.trace, path, config)
    }

    /// Every step, in reveal order.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// The steps due at or before `ms`.
    pub fn revealed(&self, ms: u64) -> &[Step] {
        let n = self.steps.partition_point(|s| s.at_ms <= ms);
        &self.steps[..n]
    }

    /// Time of the last step, or 0 for an empty timeline.
    pub fn duration_ms(&self) -> u64 {
        self.steps.last().map_or(0, |s| s.at_ms)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}
