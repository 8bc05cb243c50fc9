//! UI state types for the TUI layer.
//!
//! Pure data types with no IO, no async, no ratatui dependency.
//! Used by both the engine (state ownership) and tui (rendering/input).

mod animation;
mod layout;
mod options;
mod scroll;
mod transition;

pub use animation::{Pulse, Stagger, ease_out_cubic};
pub use layout::{CardSpan, HitMap, HitTarget, NavItem, PageMetrics, Region};
pub use options::{ThemeName, UiOptions};
pub use scroll::ScrollState;
pub use transition::{OverlayMotion, OverlayTransition, SwapDirection};
