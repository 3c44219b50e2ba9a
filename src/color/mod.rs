use std::fmt;

use thiserror::Error;

pub type ColorResult<T> = std::result::Result<T, ColorError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ColorError {
    #[error("expected 3 or 4 color components, got {count}")]
    InvalidComponentCount { count: usize },
    #[error("invalid color component: {component:?}")]
    InvalidComponent { component: String },
}

/// A parsed `rgb(...)` / `rgba(...)` component list.
///
/// The red, green, and blue channels are integers in 0-255. The alpha
/// component is kept as the original trimmed text so it survives an
/// invert round trip byte-for-byte; it is never inverted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorLiteral {
    red: u8,
    green: u8,
    blue: u8,
    alpha: Option<String>,
}

impl ColorLiteral {
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha: None,
        }
    }

    pub fn rgba(red: u8, green: u8, blue: u8, alpha: impl Into<String>) -> Self {
        Self {
            red,
            green,
            blue,
            alpha: Some(alpha.into()),
        }
    }

    /// Parse a comma-separated component list, e.g. `"10, 20, 30"` or
    /// `"10,20,30,0.5"`. The surrounding function name and parentheses
    /// must already be stripped by the caller.
    pub fn parse(text: &str) -> ColorResult<Self> {
        let components: Vec<&str> = text.split(',').map(str::trim).collect();
        match components.as_slice() {
            [red, green, blue] => Ok(Self::rgb(
                parse_channel(red)?,
                parse_channel(green)?,
                parse_channel(blue)?,
            )),
            [red, green, blue, alpha] => {
                if !is_decimal_text(alpha) {
                    return Err(ColorError::InvalidComponent {
                        component: (*alpha).to_string(),
                    });
                }
                Ok(Self::rgba(
                    parse_channel(red)?,
                    parse_channel(green)?,
                    parse_channel(blue)?,
                    *alpha,
                ))
            }
            other => Err(ColorError::InvalidComponentCount { count: other.len() }),
        }
    }

    /// Brightness-inverted copy: every channel becomes `255 - channel`,
    /// alpha is carried over unchanged.
    pub fn inverted(&self) -> Self {
        Self {
            red: 255 - self.red,
            green: 255 - self.green,
            blue: 255 - self.blue,
            alpha: self.alpha.clone(),
        }
    }

    pub fn channels(&self) -> (u8, u8, u8) {
        (self.red, self.green, self.blue)
    }

    pub fn alpha(&self) -> Option<&str> {
        self.alpha.as_deref()
    }
}

impl fmt::Display for ColorLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.alpha {
            Some(alpha) => write!(
                f,
                "rgba({}, {}, {}, {})",
                self.red, self.green, self.blue, alpha
            ),
            None => write!(f, "rgb({}, {}, {})", self.red, self.green, self.blue),
        }
    }
}

/// Invert a color component list in one call: `"10,20,30"` becomes
/// `"rgb(245, 235, 225)"`, `"10,20,30,0.5"` becomes
/// `"rgba(245, 235, 225, 0.5)"`.
pub fn invert_color(text: &str) -> ColorResult<String> {
    ColorLiteral::parse(text).map(|color| color.inverted().to_string())
}

fn parse_channel(component: &str) -> ColorResult<u8> {
    component
        .parse::<u8>()
        .map_err(|_| ColorError::InvalidComponent {
            component: component.to_string(),
        })
}

/// Accepts digit text with an optional fractional part: `127`, `0.5`, `1.`.
fn is_decimal_text(text: &str) -> bool {
    let (integral, fraction) = match text.split_once('.') {
        Some((integral, fraction)) => (integral, Some(fraction)),
        None => (text, None),
    };
    if integral.is_empty() || !integral.bytes().all(|byte| byte.is_ascii_digit()) {
        return false;
    }
    fraction.map_or(true, |fraction| {
        fraction.bytes().all(|byte| byte.is_ascii_digit())
    })
}
