//! Dark and light theming for desktop GUI applications.
//!
//! A fixed dark palette and a bundled dark style sheet form the single
//! source of truth; the light variant is derived by inverting every color
//! literal in the dark sheet. Applications plug in through two traits:
//!
//! - [`StyleTarget`]: widget style engine, palette, and style sheet
//! - [`PlotTarget`]: base style and color parameters of a plotting backend
//!
//! ```rust
//! use gloam::{apply_theme, Palette, StyleSheetStore, StyleTarget, Theme};
//!
//! struct Console;
//!
//! impl StyleTarget for Console {
//!     fn set_widget_style(&mut self, _name: &str) {}
//!     fn set_palette(&mut self, _palette: &Palette) {}
//!     fn set_style_sheet(&mut self, _css: &str) {}
//! }
//!
//! let store = StyleSheetStore::bundled();
//! apply_theme(&mut Console, &store, Theme::Dark);
//! ```

pub mod color;
pub mod config;
pub mod error;
pub mod logging;
pub mod palette;
pub mod plot;
pub mod stylesheet;
pub mod theme;

pub use color::{invert_color, ColorError, ColorLiteral, ColorResult};
pub use config::{load_theme_preference, save_theme_preference, ConfigError, ConfigResult};
pub use error::{AppError, AppResult};
pub use palette::{Palette, PaletteColor, PaletteRole};
pub use plot::{apply_dark_plot_style, PlotRgb, PlotTarget, DARK_PLOT_STYLE};
pub use stylesheet::{invert_style_sheet, StyleSheetStore};
pub use theme::{apply_theme, StyleTarget, Theme, DARK_WIDGET_STYLE};

/// Restyle `target` with the persisted theme preference and report which
/// theme was applied. Entrypoint used by application startup code.
pub fn apply_saved_theme(
    target: &mut impl StyleTarget,
    store: &StyleSheetStore,
) -> AppResult<Theme> {
    let theme = load_theme_preference()?;
    apply_theme(target, store, theme);
    Ok(theme)
}
