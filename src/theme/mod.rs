use serde::{Deserialize, Serialize};
use tracing::info;

use crate::palette::Palette;
use crate::stylesheet::{invert_style_sheet, StyleSheetStore};

/// Widget style engine requested alongside the dark palette.
pub const DARK_WIDGET_STYLE: &str = "Fusion";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Dark,
    Light,
    #[default]
    Default,
}

impl Theme {
    /// Match a theme by name, ignoring case and surrounding whitespace.
    /// Unrecognised names fall back to [`Theme::Default`].
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "dark" => Self::Dark,
            "light" => Self::Light,
            _ => Self::Default,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
            Self::Default => "default",
        }
    }
}

/// Surface a themable application exposes: a widget style engine, a
/// role-based palette, and a global style sheet.
pub trait StyleTarget {
    fn set_widget_style(&mut self, name: &str);
    fn set_palette(&mut self, palette: &Palette);
    fn set_style_sheet(&mut self, css: &str);
}

/// Restyle `target` for `theme`.
///
/// Dark applies the fixed dark palette plus the bundled dark sheet. Light
/// reuses the dark sheet with every color literal inverted and resets the
/// palette; the widget style engine is left as-is so a light setup keeps
/// whatever the platform chose. Default clears all three surfaces.
pub fn apply_theme(target: &mut impl StyleTarget, store: &StyleSheetStore, theme: Theme) {
    match theme {
        Theme::Dark => {
            target.set_widget_style(DARK_WIDGET_STYLE);
            target.set_palette(&Palette::dark());
            target.set_style_sheet(&store.load(Theme::Dark.as_str()));
        }
        Theme::Light => {
            target.set_style_sheet(&invert_style_sheet(&store.load(Theme::Dark.as_str())));
            target.set_palette(&Palette::empty());
        }
        Theme::Default => {
            target.set_widget_style("");
            target.set_palette(&Palette::empty());
            target.set_style_sheet("");
        }
    }
    info!(theme = theme.as_str(), "applied application theme");
}
