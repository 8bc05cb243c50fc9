//! Document scroll position with optional smooth gliding.

use std::time::Duration;

use super::animation::{EffectTimer, ease_out_cubic};

#[derive(Debug, Clone)]
struct Glide {
    from: u16,
    to: u16,
    timer: EffectTimer,
}

/// Vertical scroll offset of the page, in rows.
#[derive(Debug, Clone, Default)]
pub struct ScrollState {
    offset: u16,
    max: u16,
    glide: Option<Glide>,
}

impl ScrollState {
    #[must_use]
    pub fn offset(&self) -> u16 {
        self.offset
    }

    #[must_use]
    pub fn max(&self) -> u16 {
        self.max
    }

    /// Where the page will rest once any glide completes.
    #[must_use]
    pub fn target(&self) -> u16 {
        self.glide.as_ref().map_or(self.offset, |glide| glide.to)
    }

    /// Update the scrollable extent; offsets past the new end are clamped.
    pub fn set_max(&mut self, max: u16) {
        self.max = max;
        self.offset = self.offset.min(max);
        if let Some(glide) = &mut self.glide {
            glide.to = glide.to.min(max);
        }
    }

    pub fn scroll_by(&mut self, delta: i32) {
        let next = (i32::from(self.target()) + delta).clamp(0, i32::from(self.max));
        self.jump_to(next as u16);
    }

    pub fn jump_to(&mut self, target: u16) {
        self.glide = None;
        self.offset = target.min(self.max);
    }

    /// Glide from the current offset to `target`; a zero duration jumps.
    pub fn glide_to(&mut self, target: u16, duration: Duration) {
        let to = target.min(self.max);
        if duration.is_zero() || to == self.offset {
            self.jump_to(to);
            return;
        }
        self.glide = Some(Glide {
            from: self.offset,
            to,
            timer: EffectTimer::new(duration),
        });
    }

    pub fn advance(&mut self, delta: Duration) {
        let Some(glide) = &mut self.glide else {
            return;
        };
        glide.timer.advance(delta);
        let t = ease_out_cubic(glide.timer.progress());
        let from = f32::from(glide.from);
        let to = f32::from(glide.to);
        self.offset = (from + (to - from) * t).round() as u16;
        if glide.timer.is_finished() {
            self.offset = glide.to;
            self.glide = None;
        }
    }
}
