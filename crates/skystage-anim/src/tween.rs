//! Scale-in tween — an explicit state machine advanced once per tick.
//!
//! A "delay, then eased scale-up" modeled as states the tick loop
//! drives: Delaying -> Animating -> Done. Retriggering an animation on
//! the same target replaces the whole tween, so there is never more
//! than one writer per transform.

use skystage_core::constants::DT;

use crate::ease;

/// Where the tween is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TweenState {
    /// Waiting out the stagger delay; value holds at `from`.
    Delaying { until_tick: u64 },
    /// Easing from `from` to `to`.
    Animating { start_tick: u64 },
    /// Finished; value holds at `to`.
    Done,
}

/// A single-value eased transition with an optional leading delay.
#[derive(Debug, Clone, Copy)]
pub struct ScaleTween {
    pub from: f32,
    pub to: f32,
    pub duration_secs: f32,
    pub state: TweenState,
}

impl ScaleTween {
    /// Tween that starts after `delay_ticks` ticks from `now`.
    pub fn delayed(now: u64, delay_ticks: u64, from: f32, to: f32, duration_secs: f32) -> Self {
        let state = if delay_ticks == 0 {
            TweenState::Animating { start_tick: now }
        } else {
            TweenState::Delaying {
                until_tick: now + delay_ticks,
            }
        };
        Self {
            from,
            to,
            duration_secs,
            state,
        }
    }

    /// Tween already at its end value (instant appearance).
    pub fn completed(value: f32) -> Self {
        Self {
            from: value,
            to: value,
            duration_secs: 0.0,
            state: TweenState::Done,
        }
    }

    pub fn is_done(&self) -> bool {
        self.state == TweenState::Done
    }

    /// Advance to `tick` and return the current value.
    pub fn advance(&mut self, tick: u64) -> f32 {
        if let TweenState::Delaying { until_tick } = self.state {
            if tick < until_tick {
                return self.from;
            }
            self.state = TweenState::Animating { start_tick: tick };
        }

        match self.state {
            TweenState::Animating { start_tick } => {
                if self.duration_secs <= 0.0 {
                    self.state = TweenState::Done;
                    return self.to;
                }
                let elapsed = tick.saturating_sub(start_tick) as f32 * DT;
                let t = elapsed / self.duration_secs;
                if t >= 1.0 {
                    self.state = TweenState::Done;
                    self.to
                } else {
                    self.from + (self.to - self.from) * ease::out_quad(t)
                }
            }
            TweenState::Done => self.to,
            TweenState::Delaying { .. } => self.from,
        }
    }
}
