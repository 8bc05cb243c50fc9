//! Motion effects: the overlay transition and entrance offsets.

use std::f32::consts::PI;

use ratatui::layout::Rect;

use showcase_engine::{OverlayMotion, OverlayTransition};
use showcase_types::ui::ease_out_cubic;

/// Rows of the panel showing when it starts to unfold.
const FOLDED_ROWS: u16 = 3;
/// Columns a swapped-in panel travels before it settles.
const SWAP_TRAVEL: u16 = 6;

/// Where the overlay panel sits this frame, given where it rests.
///
/// Opening unfolds the panel vertically around its middle row. A swap slides
/// it in sideways from the side the selection moved towards. The result never
/// leaves `viewport`.
#[must_use]
pub fn overlay_panel_rect(motion: &OverlayMotion, rest: Rect, viewport: Rect) -> Rect {
    let remaining = 1.0 - motion.eased();
    match motion.transition() {
        OverlayTransition::Open => {
            let folded = FOLDED_ROWS.min(rest.height);
            let hidden = f32::from(rest.height - folded) * remaining;
            let height = rest.height - hidden.round() as u16;
            Rect {
                y: rest.y + (rest.height - height) / 2,
                height,
                ..rest
            }
        }
        OverlayTransition::Swap { direction } => {
            let travel = (remaining * f32::from(SWAP_TRAVEL)).round() as i32;
            let x = i32::from(rest.x) + travel * direction.sign();
            let min_x = i32::from(viewport.x);
            let max_x = i32::from(viewport.right().saturating_sub(rest.width)).max(min_x);
            Rect {
                x: x.clamp(min_x, max_x) as u16,
                ..rest
            }
        }
    }
}

/// Rows an entering element still sits below its resting place.
#[must_use]
pub fn rise_offset(progress: f32, distance: u16) -> u16 {
    let t = ease_out_cubic(progress);
    ((1.0 - t) * f32::from(distance)).round() as u16
}

/// Whether an entering element is still faint.
#[must_use]
pub fn is_faint(progress: f32) -> bool {
    ease_out_cubic(progress) < 0.6
}

/// Vertical bob of the scroll cue: 0, 1, 0 over one phase.
#[must_use]
pub fn bob_offset(phase: f32) -> u16 {
    let wave = (phase.clamp(0.0, 1.0) * PI).sin();
    wave.round() as u16
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use ratatui::layout::Rect;

    use showcase_engine::{OverlayMotion, OverlayTransition, SwapDirection};

    use super::{bob_offset, is_faint, overlay_panel_rect, rise_offset};

    const VIEWPORT: Rect = Rect::new(0, 0, 80, 30);

    fn swap(direction: SwapDirection) -> OverlayMotion {
        OverlayMotion::new(OverlayTransition::Swap { direction })
    }

    #[test]
    fn open_unfolds_around_the_middle() {
        let rest = Rect::new(10, 5, 60, 20);
        let mut motion = OverlayMotion::new(OverlayTransition::Open);

        let start = overlay_panel_rect(&motion, rest, VIEWPORT);
        assert_eq!(start.height, 3);
        assert_eq!(start.width, rest.width);
        assert_eq!(start.y, 5 + 17 / 2);

        motion.advance(Duration::from_secs(1));
        assert_eq!(overlay_panel_rect(&motion, rest, VIEWPORT), rest);
    }

    #[test]
    fn swaps_enter_from_the_side_travelled_to() {
        let rest = Rect::new(10, 5, 60, 20);

        let forward = overlay_panel_rect(&swap(SwapDirection::Forward), rest, VIEWPORT);
        assert_eq!(forward.x, rest.x + 6);
        assert_eq!(forward.y, rest.y);

        let backward = overlay_panel_rect(&swap(SwapDirection::Backward), rest, VIEWPORT);
        assert_eq!(backward.x, rest.x - 6);

        let mut settled = swap(SwapDirection::Forward);
        settled.advance(Duration::from_secs(1));
        assert_eq!(overlay_panel_rect(&settled, rest, VIEWPORT), rest);
    }

    #[test]
    fn swaps_stay_on_screen() {
        let wide = Rect::new(2, 5, 76, 20);
        let forward = overlay_panel_rect(&swap(SwapDirection::Forward), wide, VIEWPORT);
        assert_eq!(forward.right(), VIEWPORT.right());
        let backward = overlay_panel_rect(&swap(SwapDirection::Backward), wide, VIEWPORT);
        assert_eq!(backward.x, 0);
    }

    #[test]
    fn entrance_offsets() {
        assert_eq!(rise_offset(0.0, 2), 2);
        assert_eq!(rise_offset(1.0, 2), 0);
        assert!(is_faint(0.1));
        assert!(!is_faint(1.0));
        assert_eq!(bob_offset(0.0), 0);
        assert_eq!(bob_offset(0.5), 1);
    }
}
