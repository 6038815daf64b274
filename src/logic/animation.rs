//! Menu animation logic
//!
//! Pure functions for the open/close state machine and slide offsets. All
//! timing is frame-driven: progress advances by `dt / duration` per tick and
//! a transition completes exactly when progress reaches 1.0, so completion
//! can never desync from the rendered animation.

use crate::MenuPhase;

/// Automatic transition produced by a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseChange {
    /// Opening animation finished
    Opened,
    /// Closing animation finished
    Closed,
}

/// Result of stepping the menu phase by one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseStep {
    pub phase: MenuPhase,
    pub progress: f32,
    pub completed: Option<PhaseChange>,
}

/// Begin opening, honoring the re-entrancy guard.
///
/// Returns the new `(phase, progress)` pair, or `None` when the request is
/// a no-op (already Opening or Open). A request that lands mid-close flips
/// the animation, keeping the remaining distance.
pub fn begin_open(phase: MenuPhase, progress: f32) -> Option<(MenuPhase, f32)> {
    match phase {
        MenuPhase::Closed => Some((MenuPhase::Opening, 0.0)),
        MenuPhase::Closing => Some((MenuPhase::Opening, 1.0 - progress.clamp(0.0, 1.0))),
        MenuPhase::Opening | MenuPhase::Open => None,
    }
}

/// Begin closing, honoring the re-entrancy guard.
///
/// Returns `None` when the request is a no-op (already Closing or Closed).
/// A request that lands mid-open flips the animation.
pub fn begin_close(phase: MenuPhase, progress: f32) -> Option<(MenuPhase, f32)> {
    match phase {
        MenuPhase::Open => Some((MenuPhase::Closing, 0.0)),
        MenuPhase::Opening => Some((MenuPhase::Closing, 1.0 - progress.clamp(0.0, 1.0))),
        MenuPhase::Closing | MenuPhase::Closed => None,
    }
}

/// Advance an animation progress value by one frame.
///
/// Returns the new progress and whether it reached completion this frame.
/// A zero duration completes immediately.
pub fn step_progress(progress: f32, dt_ms: u64, duration_ms: u64) -> (f32, bool) {
    if duration_ms == 0 {
        return (1.0, true);
    }
    let next = progress + dt_ms as f32 / duration_ms as f32;
    if next >= 1.0 {
        (1.0, true)
    } else {
        (next, false)
    }
}

/// Step the menu phase by one frame of `dt_ms` milliseconds
pub fn step_phase(phase: MenuPhase, progress: f32, dt_ms: u64, duration_ms: u64) -> PhaseStep {
    match phase {
        MenuPhase::Opening => {
            let (progress, done) = step_progress(progress, dt_ms, duration_ms);
            if done {
                PhaseStep {
                    phase: MenuPhase::Open,
                    progress: 1.0,
                    completed: Some(PhaseChange::Opened),
                }
            } else {
                PhaseStep {
                    phase,
                    progress,
                    completed: None,
                }
            }
        }
        MenuPhase::Closing => {
            let (progress, done) = step_progress(progress, dt_ms, duration_ms);
            if done {
                PhaseStep {
                    phase: MenuPhase::Closed,
                    progress: 0.0,
                    completed: Some(PhaseChange::Closed),
                }
            } else {
                PhaseStep {
                    phase,
                    progress,
                    completed: None,
                }
            }
        }
        MenuPhase::Open | MenuPhase::Closed => PhaseStep {
            phase,
            progress,
            completed: None,
        },
    }
}

/// Horizontal offset of a card sliding in from the right edge
/// (full width at progress 0.0, flush at 1.0)
pub fn slide_in_offset(width: u16, progress: f32) -> u16 {
    let remaining = (1.0 - progress.clamp(0.0, 1.0)) * width as f32;
    remaining.round() as u16
}

/// Horizontal offset of a card sliding out to the right edge
/// (flush at progress 0.0, full width at 1.0)
pub fn slide_out_offset(width: u16, progress: f32) -> u16 {
    let gone = progress.clamp(0.0, 1.0) * width as f32;
    gone.round() as u16
}
