//! Stripe offset animation.
//!
//! The offset runs linearly from 0 to `line_width * color_count` and restarts
//! at 0, never bouncing back. The host clock feeds it either elapsed time
//! ([`OffsetAnimator::tick`]) or a normalized progress value from its own
//! timer primitive ([`OffsetAnimator::set_progress`]).

use std::time::Duration;

/// Animator lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnimatorState {
    /// Not started, or torn down. Visibility changes never leave this state.
    #[default]
    Stopped,
    /// Advancing and requesting redraws.
    Running,
    /// Holding the current offset until resumed.
    Paused,
}

/// Drives the stripe offset over a repeating period.
#[derive(Debug, Clone)]
pub struct OffsetAnimator {
    /// Lifecycle state.
    state: AnimatorState,
    /// Value the offset reaches at the end of a cycle.
    end_value: f32,
    /// Length of one cycle.
    duration: Duration,
    /// Time into the current cycle.
    elapsed: Duration,
    /// Current offset.
    offset: f32,
}

impl OffsetAnimator {
    /// Creates a stopped animator for a cycle of `end_value` pixels over
    /// `duration`.
    #[must_use]
    pub fn new(end_value: f32, duration: Duration) -> Self {
        Self {
            state: AnimatorState::Stopped,
            end_value,
            duration,
            elapsed: Duration::ZERO,
            offset: 0.0,
        }
    }

    /// Returns the current offset.
    #[must_use]
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Returns the lifecycle state.
    #[must_use]
    pub fn state(&self) -> AnimatorState {
        self.state
    }

    /// Returns true while running.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state == AnimatorState::Running
    }

    /// Returns the value the offset wraps at.
    #[must_use]
    pub fn end_value(&self) -> f32 {
        self.end_value
    }

    /// Returns the cycle length.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Starts from the beginning of the cycle. No-op unless stopped.
    pub fn start(&mut self) {
        if self.state != AnimatorState::Stopped {
            return;
        }
        self.elapsed = Duration::ZERO;
        self.offset = 0.0;
        self.state = AnimatorState::Running;
        tracing::debug!(
            "Offset animator started: end={} duration={:?}",
            self.end_value,
            self.duration
        );
    }

    /// Holds the current offset. Ticks are ignored until [`Self::resume`].
    pub fn pause(&mut self) {
        if self.state == AnimatorState::Running {
            self.state = AnimatorState::Paused;
            tracing::debug!("Offset animator paused at {}", self.offset);
        }
    }

    /// Continues from the held offset. A stopped animator stays stopped.
    pub fn resume(&mut self) {
        if self.state == AnimatorState::Paused {
            self.state = AnimatorState::Running;
            tracing::debug!("Offset animator resumed at {}", self.offset);
        }
    }

    /// Stops for good, releasing the host timer.
    pub fn stop(&mut self) {
        if self.state != AnimatorState::Stopped {
            self.state = AnimatorState::Stopped;
            tracing::debug!("Offset animator stopped");
        }
    }

    /// Advances by `dt`. Returns the new offset while running, `None`
    /// otherwise (no redraw wanted).
    pub fn tick(&mut self, dt: Duration) -> Option<f32> {
        if !self.is_running() {
            return None;
        }

        let cycle = self.duration.as_nanos();
        if cycle == 0 {
            self.elapsed = Duration::ZERO;
        } else {
            let nanos = self.elapsed.saturating_add(dt).as_nanos() % cycle;
            self.elapsed = Duration::from_nanos(nanos as u64);
        }
        self.offset = self.end_value * self.phase();
        Some(self.offset)
    }

    /// Jumps to a normalized progress value. `1.0` is the same as `0.0`.
    /// Returns the new offset while running, `None` otherwise.
    pub fn set_progress(&mut self, progress: f32) -> Option<f32> {
        if !self.is_running() {
            return None;
        }

        let progress = match progress.rem_euclid(1.0) {
            p if p.is_finite() && p < 1.0 => p,
            _ => 0.0,
        };
        self.elapsed = self.duration.mul_f32(progress);
        self.offset = self.end_value * progress;
        Some(self.offset)
    }

    /// Changes the cycle, keeping the current phase so the stripes do not
    /// jump. The state is unchanged.
    pub fn reconfigure(&mut self, end_value: f32, duration: Duration) {
        let phase = self.phase();
        self.end_value = end_value;
        self.duration = duration;
        self.elapsed = duration.mul_f32(phase);
        self.offset = end_value * phase;
    }

    /// Fraction of the current cycle that has elapsed, in `[0, 1)`.
    fn phase(&self) -> f32 {
        if self.duration.is_zero() {
            return 0.0;
        }
        let phase = (self.elapsed.as_secs_f64() / self.duration.as_secs_f64()) as f32;
        if phase >= 1.0 {
            0.0
        } else {
            phase
        }
    }
}
