/// Colour theme. Orthogonal to content: every theme renders the same catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeName {
    /// Warm yellow-on-white look of the landing page.
    #[default]
    Gold,
    /// Dark professional navy variant.
    Navy,
}

impl ThemeName {
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "gold" | "yellow" => Some(Self::Gold),
            "navy" | "blue" | "professional" => Some(Self::Navy),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Gold => "gold",
            Self::Navy => "navy",
        }
    }
}

/// UI configuration options derived from config/environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UiOptions {
    pub theme: ThemeName,
    pub ascii_only: bool,
    pub high_contrast: bool,
    /// Play every animation as already finished and jump instead of gliding.
    pub reduced_motion: bool,
}
