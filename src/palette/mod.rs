/// Color roles an application palette can assign.
///
/// Covers exactly the roles the built-in dark palette sets; toolkits map
/// them onto their own palette slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteRole {
    Window,
    WindowText,
    Base,
    AlternateBase,
    ToolTipBase,
    ToolTipText,
    Text,
    Button,
    ButtonText,
    BrightText,
    Link,
    Highlight,
}

impl PaletteRole {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Window => "window",
            Self::WindowText => "window-text",
            Self::Base => "base",
            Self::AlternateBase => "alternate-base",
            Self::ToolTipBase => "tooltip-base",
            Self::ToolTipText => "tooltip-text",
            Self::Text => "text",
            Self::Button => "button",
            Self::ButtonText => "button-text",
            Self::BrightText => "bright-text",
            Self::Link => "link",
            Self::Highlight => "highlight",
        }
    }
}

/// A palette entry color. Alpha follows the palette convention of 0-255
/// and defaults to fully opaque.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteColor {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

impl PaletteColor {
    pub const fn opaque(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha: 255,
        }
    }

    pub const fn with_alpha(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }
}

/// An ordered set of role assignments handed to the GUI toolkit.
///
/// An empty palette means "reset to toolkit defaults"; nothing in this
/// crate interprets it further.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Palette {
    entries: Vec<(PaletteRole, PaletteColor)>,
}

impl Palette {
    pub const fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// The fixed dark palette.
    pub fn dark() -> Self {
        Self {
            entries: vec![
                (PaletteRole::Window, PaletteColor::opaque(44, 44, 44)),
                (PaletteRole::WindowText, PaletteColor::opaque(246, 246, 246)),
                (PaletteRole::Base, PaletteColor::opaque(29, 29, 29)),
                (PaletteRole::AlternateBase, PaletteColor::opaque(53, 53, 53)),
                (PaletteRole::ToolTipBase, PaletteColor::opaque(0, 0, 0)),
                (PaletteRole::ToolTipText, PaletteColor::opaque(210, 210, 210)),
                (PaletteRole::Text, PaletteColor::opaque(210, 218, 218)),
                (PaletteRole::Button, PaletteColor::opaque(44, 44, 44)),
                (PaletteRole::ButtonText, PaletteColor::opaque(210, 210, 210)),
                (PaletteRole::BrightText, PaletteColor::opaque(246, 0, 0)),
                (PaletteRole::Link, PaletteColor::opaque(42, 130, 218)),
                (
                    PaletteRole::Highlight,
                    PaletteColor::with_alpha(110, 120, 125, 127),
                ),
            ],
        }
    }

    /// Assign `color` to `role`, replacing any previous assignment.
    pub fn set_color(&mut self, role: PaletteRole, color: PaletteColor) {
        if let Some(entry) = self.entries.iter_mut().find(|(slot, _)| *slot == role) {
            entry.1 = color;
        } else {
            self.entries.push((role, color));
        }
    }

    pub fn color_of(&self, role: PaletteRole) -> Option<PaletteColor> {
        self.entries
            .iter()
            .find(|(slot, _)| *slot == role)
            .map(|(_, color)| *color)
    }

    pub fn entries(&self) -> &[(PaletteRole, PaletteColor)] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dark_palette_assigns_all_twelve_roles() {
        let palette = Palette::dark();
        assert_eq!(palette.len(), 12);
        assert_eq!(
            palette.color_of(PaletteRole::Window),
            Some(PaletteColor::opaque(44, 44, 44))
        );
        assert_eq!(
            palette.color_of(PaletteRole::WindowText),
            Some(PaletteColor::opaque(246, 246, 246))
        );
        assert_eq!(
            palette.color_of(PaletteRole::Base),
            Some(PaletteColor::opaque(29, 29, 29))
        );
        assert_eq!(
            palette.color_of(PaletteRole::Link),
            Some(PaletteColor::opaque(42, 130, 218))
        );
        assert_eq!(
            palette.color_of(PaletteRole::BrightText),
            Some(PaletteColor::opaque(246, 0, 0))
        );
    }

    #[test]
    fn dark_palette_highlight_keeps_translucent_alpha() {
        let highlight = Palette::dark()
            .color_of(PaletteRole::Highlight)
            .expect("dark palette should assign highlight");
        assert_eq!(highlight, PaletteColor::with_alpha(110, 120, 125, 127));
    }

    #[test]
    fn opaque_colors_default_to_full_alpha() {
        assert_eq!(PaletteColor::opaque(1, 2, 3).alpha, 255);
    }

    #[test]
    fn empty_palette_has_no_entries() {
        let palette = Palette::empty();
        assert!(palette.is_empty());
        assert_eq!(palette.color_of(PaletteRole::Window), None);
        assert_eq!(palette, Palette::default());
    }

    #[test]
    fn set_color_replaces_existing_role_assignment() {
        let mut palette = Palette::empty();
        palette.set_color(PaletteRole::Window, PaletteColor::opaque(1, 1, 1));
        palette.set_color(PaletteRole::Text, PaletteColor::opaque(2, 2, 2));
        palette.set_color(PaletteRole::Window, PaletteColor::opaque(9, 9, 9));

        assert_eq!(palette.len(), 2);
        assert_eq!(
            palette.color_of(PaletteRole::Window),
            Some(PaletteColor::opaque(9, 9, 9))
        );
    }

    #[test]
    fn role_names_are_stable_for_logging() {
        assert_eq!(PaletteRole::AlternateBase.as_str(), "alternate-base");
        assert_eq!(PaletteRole::ToolTipBase.as_str(), "tooltip-base");
        assert_eq!(PaletteRole::Highlight.as_str(), "highlight");
    }
}
