use std::time::{Duration, Instant};

use winit::event_loop::ControlFlow;

/// Animation ticks per second used for spinning.
pub const TICK_RATE: f32 = 60.0;

/// Upper bound on ticks replayed after a long stall (window drag, breakpoint).
const MAX_CATCH_UP_TICKS: u32 = 8;

/// Turns wall-clock time into a whole number of fixed animation steps,
/// so spin speed does not depend on how often the window redraws.
#[derive(Debug, Clone)]
pub struct FixedStep {
    step: f32,
    accumulator: f32,
    last_tick: Instant,
}

impl FixedStep {
    pub fn new(rate: f32) -> Self {
        Self {
            step: 1.0 / rate.max(1.0),
            accumulator: 0.0,
            last_tick: Instant::now(),
        }
    }

    /// Steps due since the previous call (or the last reset)
    pub fn tick(&mut self) -> u32 {
        let now = Instant::now();
        let delta = now.duration_since(self.last_tick).as_secs_f32();
        self.last_tick = now;
        self.advance(delta)
    }

    /// Forget elapsed time and any partial step, e.g. when spinning starts
    pub fn reset(&mut self) {
        self.last_tick = Instant::now();
        self.accumulator = 0.0;
    }

    /// Feed elapsed seconds, get the number of steps to run now.
    pub fn advance(&mut self, delta: f32) -> u32 {
        if !delta.is_finite() || delta <= 0.0 {
            return 0;
        }

        self.accumulator += delta;
        let steps = (self.accumulator / self.step).floor();
        self.accumulator -= steps * self.step;

        let steps = steps as u32;
        if steps > MAX_CATCH_UP_TICKS {
            self.accumulator = 0.0;
            MAX_CATCH_UP_TICKS
        } else {
            steps
        }
    }

    pub fn step(&self) -> f32 {
        self.step
    }

    /// When the next step falls due
    pub fn next_deadline(&self) -> Instant {
        let remaining = (self.step - self.accumulator).max(0.0);
        self.last_tick + Duration::from_secs_f32(remaining)
    }

    pub fn is_due(&self) -> bool {
        Instant::now() >= self.next_deadline()
    }
}

impl Default for FixedStep {
    fn default() -> Self {
        Self::new(TICK_RATE)
    }
}

/// Sleep until input while idle; wake for the next step while spinning.
pub fn control_flow(spinning: bool, steps: &FixedStep) -> ControlFlow {
    if spinning {
        ControlFlow::WaitUntil(steps.next_deadline())
    } else {
        ControlFlow::Wait
    }
}
