//! Core domain logic for the portfolio showcase.
//!
//! Three pieces make up all interactive behaviour:
//!
//! - [`Catalog`]: the immutable, ordered list of ventures, loaded once.
//! - [`ShowcaseView`]: summary cards plus the single selection reference.
//! - [`DetailOverlay`]: the expanded view of the selected entry, derived from
//!   the selection on demand so it can never outlive it.
//!
//! Nothing here performs IO after startup; opening a URL and resolving an
//! image go through the [`Navigator`] and [`AssetResolver`] collaborators.

mod catalog;
mod collab;
mod overlay;
mod showcase;

pub use catalog::{BUILTIN_CATALOG, Catalog, CatalogError};
pub use collab::{AssetResolver, AssetStatus, NavigateError, Navigator};
pub use overlay::{DetailOverlay, DetailSection, OverlayAction, SectionBody};
pub use showcase::{
    CARD_FEATURE_LIMIT, CardAction, FeaturePreview, Selection, SelectionChange, ShowcaseView,
    SummaryCard,
};
