//! How the detail overlay moves when the selection changes.

use std::time::Duration;

use super::animation::{EffectTimer, ease_out_cubic};

/// Which way the selection stepped through the catalog while the overlay was open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapDirection {
    Backward,
    Forward,
}

impl SwapDirection {
    /// Direction of a signed catalog step; zero counts as forward.
    #[must_use]
    pub const fn from_step(step: isize) -> Self {
        if step < 0 {
            Self::Backward
        } else {
            Self::Forward
        }
    }

    /// Side the incoming content enters from: `1` for the right, `-1` for the left.
    #[must_use]
    pub const fn sign(self) -> i32 {
        match self {
            Self::Backward => -1,
            Self::Forward => 1,
        }
    }
}

/// Overlay transition triggered by a selection change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayTransition {
    /// Empty to Selected: the panel unfolds.
    Open,
    /// Selected to another Selected: the content slides in from `direction`.
    Swap { direction: SwapDirection },
}

impl OverlayTransition {
    #[must_use]
    pub const fn duration(self) -> Duration {
        match self {
            Self::Open => Duration::from_millis(250),
            Self::Swap { .. } => Duration::from_millis(200),
        }
    }
}

/// An overlay transition in flight.
#[derive(Debug, Clone)]
pub struct OverlayMotion {
    transition: OverlayTransition,
    timer: EffectTimer,
}

impl OverlayMotion {
    #[must_use]
    pub fn new(transition: OverlayTransition) -> Self {
        Self {
            transition,
            timer: EffectTimer::new(transition.duration()),
        }
    }

    #[must_use]
    pub fn transition(&self) -> OverlayTransition {
        self.transition
    }

    /// Eased completion, `0.0` when the change happened and `1.0` at rest.
    #[must_use]
    pub fn eased(&self) -> f32 {
        ease_out_cubic(self.timer.progress())
    }

    pub fn advance(&mut self, delta: Duration) {
        self.timer.advance(delta);
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.timer.is_finished()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::{OverlayMotion, OverlayTransition, SwapDirection};

    #[test]
    fn step_sign_picks_the_side() {
        assert_eq!(SwapDirection::from_step(1), SwapDirection::Forward);
        assert_eq!(SwapDirection::from_step(-3), SwapDirection::Backward);
        assert_eq!(SwapDirection::Forward.sign(), 1);
        assert_eq!(SwapDirection::Backward.sign(), -1);
    }

    #[test]
    fn swapping_is_quicker_than_opening() {
        let swap = OverlayTransition::Swap {
            direction: SwapDirection::Backward,
        };
        assert!(swap.duration() < OverlayTransition::Open.duration());
    }

    #[test]
    fn motion_runs_for_its_transition() {
        let mut motion = OverlayMotion::new(OverlayTransition::Open);
        assert!(motion.eased() < 0.01);

        motion.advance(Duration::from_millis(200));
        assert!(!motion.is_finished());
        assert!(motion.eased() > 0.9);

        motion.advance(Duration::from_millis(50));
        assert!(motion.is_finished());
        assert!((motion.eased() - 1.0).abs() < f32::EPSILON);
    }
}
