use std::time::Duration;

pub(crate) fn normalized_progress(elapsed: Duration, duration: Duration) -> f32 {
    if duration.is_zero() {
        return 1.0;
    }

    let elapsed = elapsed.as_secs_f32();
    let total = duration.as_secs_f32();
    (elapsed / total).clamp(0.0, 1.0)
}

/// Ease-out cubic curve, the terminal stand-in for CSS `ease-out`.
#[must_use]
pub fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}

#[derive(Debug, Clone)]
pub(crate) struct EffectTimer {
    elapsed: Duration,
    duration: Duration,
}

impl EffectTimer {
    #[must_use]
    pub(crate) fn new(duration: Duration) -> Self {
        Self {
            elapsed: Duration::ZERO,
            duration,
        }
    }

    pub(crate) fn advance(&mut self, delta: Duration) {
        self.elapsed = self.elapsed.saturating_add(delta);
    }

    #[must_use]
    pub(crate) fn progress(&self) -> f32 {
        normalized_progress(self.elapsed, self.duration)
    }

    #[must_use]
    pub(crate) fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}

/// A group of items entering one after another.
///
/// Item `i` starts `i * stagger` after the group and runs for `duration`.
#[derive(Debug, Clone)]
pub struct Stagger {
    items: usize,
    stagger: Duration,
    duration: Duration,
    elapsed: Duration,
}

impl Stagger {
    #[must_use]
    pub fn new(items: usize, stagger: Duration, duration: Duration) -> Self {
        Self {
            items,
            stagger,
            duration,
            elapsed: Duration::ZERO,
        }
    }

    /// A stagger that has already played out (reduced motion).
    #[must_use]
    pub fn finished(items: usize) -> Self {
        let mut stagger = Self::new(items, Duration::ZERO, Duration::ZERO);
        stagger.finish();
        stagger
    }

    pub fn advance(&mut self, delta: Duration) {
        self.elapsed = self.elapsed.saturating_add(delta);
    }

    pub fn finish(&mut self) {
        self.elapsed = self.elapsed.max(self.total());
    }

    /// Raw progress of item `index` in `0.0..=1.0`. Out-of-range items are complete.
    #[must_use]
    pub fn item_progress(&self, index: usize) -> f32 {
        if index >= self.items {
            return 1.0;
        }
        let start = self.stagger.saturating_mul(index as u32);
        if self.elapsed < start {
            return 0.0;
        }
        normalized_progress(self.elapsed - start, self.duration)
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.total()
    }

    fn total(&self) -> Duration {
        let last = self.items.saturating_sub(1) as u32;
        self.stagger.saturating_mul(last).saturating_add(self.duration)
    }
}

/// Endless cycle used for idle motion such as the hero's scroll cue.
#[derive(Debug, Clone)]
pub struct Pulse {
    period: Duration,
    elapsed: Duration,
}

impl Pulse {
    #[must_use]
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            elapsed: Duration::ZERO,
        }
    }

    pub fn advance(&mut self, delta: Duration) {
        if self.period.is_zero() {
            return;
        }
        let period = self.period.as_nanos();
        let wrapped = (self.elapsed.as_nanos() + delta.as_nanos()) % period;
        self.elapsed = Duration::from_nanos(wrapped as u64);
    }

    /// Position within the current cycle, `0.0..1.0`.
    #[must_use]
    pub fn phase(&self) -> f32 {
        if self.period.is_zero() {
            return 0.0;
        }
        self.elapsed.as_secs_f32() / self.period.as_secs_f32()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::{Pulse, Stagger, ease_out_cubic};

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn ease_out_endpoints() {
        assert!(ease_out_cubic(0.0).abs() < f32::EPSILON);
        assert!((ease_out_cubic(1.0) - 1.0).abs() < f32::EPSILON);
        assert!(ease_out_cubic(0.5) > 0.5, "ease-out front-loads motion");
    }

    #[test]
    fn stagger_delays_later_items() {
        let mut stagger = Stagger::new(3, ms(300), ms(800));
        stagger.advance(ms(400));
        assert!((stagger.item_progress(0) - 0.5).abs() < 1e-4);
        assert!((stagger.item_progress(1) - 0.125).abs() < 1e-4);
        assert!(stagger.item_progress(2).abs() < f32::EPSILON);
        assert!(!stagger.is_finished());
    }

    #[test]
    fn stagger_finishes_after_last_item() {
        let mut stagger = Stagger::new(3, ms(300), ms(800));
        stagger.advance(ms(1399));
        assert!(!stagger.is_finished());
        stagger.advance(ms(1));
        assert!(stagger.is_finished());
        assert!((stagger.item_progress(2) - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn finished_stagger_shows_everything() {
        let stagger = Stagger::finished(5);
        assert!(stagger.is_finished());
        for i in 0..5 {
            assert!((stagger.item_progress(i) - 1.0).abs() < f32::EPSILON);
        }
    }

    #[test]
    fn empty_stagger_is_trivially_done_after_duration() {
        let stagger = Stagger::new(0, ms(200), ms(0));
        assert!(stagger.is_finished());
    }

    #[test]
    fn pulse_wraps_around() {
        let mut pulse = Pulse::new(ms(2000));
        pulse.advance(ms(500));
        assert!((pulse.phase() - 0.25).abs() < 1e-4);
        pulse.advance(ms(2000));
        assert!((pulse.phase() - 0.25).abs() < 1e-4);
    }

    #[test]
    fn zero_period_pulse_stays_still() {
        let mut pulse = Pulse::new(Duration::ZERO);
        pulse.advance(ms(10));
        assert!(pulse.phase().abs() < f32::EPSILON);
    }
}
