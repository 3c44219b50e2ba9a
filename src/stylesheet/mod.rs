use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::{Captures, Regex};

use crate::color::ColorLiteral;

const STYLE_SHEET_EXTENSION: &str = "css";
const ICON_DIRECTORY: &str = "icons";

/// Rewrite stylesheet text by inverting every embedded color literal.
///
/// Two passes run in sequence: all `rgb(r, g, b)` matches are replaced
/// first, then all `rgba(r, g, b, a)` matches over the result. Only the
/// strict comma-space form is recognized; everything else, including
/// colors with other spacing, passes through byte-for-byte.
pub fn invert_style_sheet(css: &str) -> String {
    let after_rgb = rgb_literal_pattern().replace_all(css, |captures: &Captures<'_>| {
        // Inner component list sits between "rgb(" and the closing paren.
        inverted_or_original(&captures[0], 4)
    });
    let after_rgba = rgba_literal_pattern()
        .replace_all(after_rgb.as_ref(), |captures: &Captures<'_>| {
            inverted_or_original(&captures[0], 5)
        });
    after_rgba.into_owned()
}

fn inverted_or_original(literal: &str, prefix_len: usize) -> String {
    let components = &literal[prefix_len..literal.len() - 1];
    match ColorLiteral::parse(components) {
        Ok(color) => color.inverted().to_string(),
        Err(err) => {
            tracing::warn!(literal, %err, "color literal left unmodified");
            literal.to_string()
        }
    }
}

fn rgb_literal_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"rgb\((\d+), (\d+), (\d+)\)").expect("hard-coded rgb pattern compiles")
    })
}

fn rgba_literal_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"rgba\((\d+), (\d+), (\d+), (\d+\.?\d*)\)")
            .expect("hard-coded rgba pattern compiles")
    })
}

/// Directory of `<theme_name>.css` resources plus their icon assets.
///
/// The store is an explicit handle; nothing in the crate assumes a
/// package-global resource root.
#[derive(Debug, Clone)]
pub struct StyleSheetStore {
    root: PathBuf,
}

impl StyleSheetStore {
    pub const fn with_root(root: PathBuf) -> Self {
        Self { root }
    }

    /// Store over the stylesheet assets shipped with the crate.
    pub fn bundled() -> Self {
        Self::with_root(Path::new(env!("CARGO_MANIFEST_DIR")).join("assets"))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn style_sheet_path(&self, theme_name: &str) -> PathBuf {
        self.root
            .join(format!("{theme_name}.{STYLE_SHEET_EXTENSION}"))
    }

    /// Absolute path of the icon asset directory under the store root.
    pub fn icon_dir(&self) -> PathBuf {
        let dir = self.root.join(ICON_DIRECTORY);
        std::path::absolute(&dir).unwrap_or(dir)
    }

    /// Load the stylesheet resource for `theme_name`.
    ///
    /// A missing resource resolves to empty text, not an error. Every
    /// occurrence of the relative icon-directory token in the loaded text
    /// is replaced with the absolute path of [`Self::icon_dir`] so asset
    /// URLs resolve regardless of the working directory.
    pub fn load(&self, theme_name: &str) -> String {
        let path = self.style_sheet_path(theme_name);
        if !path.exists() {
            tracing::debug!(theme_name, ?path, "stylesheet resource absent; using empty text");
            return String::new();
        }

        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(err) => {
                tracing::warn!(?err, ?path, "failed to read stylesheet resource; using empty text");
                return String::new();
            }
        };

        text.replace(ICON_DIRECTORY, &posix_path(&self.icon_dir()))
    }
}

fn posix_path(path: &Path) -> String {
    let text = path.to_string_lossy();
    if std::path::MAIN_SEPARATOR == '/' {
        text.into_owned()
    } else {
        text.replace(std::path::MAIN_SEPARATOR, "/")
    }
}
