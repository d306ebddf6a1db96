//! User interface layer.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → ANSI Output
//! ```
//!
//! # Modules
//!
//! - [`projection`]: Pure page and detail projections of catalog records
//! - [`viewmodel`]: Display-ready types
//! - [`renderer`]: Top-level rendering entry point
//! - [`components`]: ANSI component renderers
//! - [`helpers`]: Truncation, wrapping and cursor utilities
//! - [`theme`]: Day/night theme controller and palettes

pub mod components;
pub mod helpers;
pub mod projection;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use projection::{render_detail, render_page};
pub use renderer::render;
pub use theme::{apply_theme, ColorPair, Rgb, Theme, ThemeSetting};
pub use viewmodel::{
    DetailView, DisplayItem, EmptyState, FooterInfo, HeaderInfo, OverlayView, PageView,
    ShowMoreInfo, UIViewModel,
};
