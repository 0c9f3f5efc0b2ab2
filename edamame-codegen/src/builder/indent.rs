//! Indentation configuration for code generation.

use serde::Deserialize;
use serde::de::{Error as DeError, Visitor};

/// Indentation style for generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// Spaces with the specified width (2, 4, or 8).
    Spaces(u8),
    /// Tab character.
    Tab,
}

impl Indent {
    /// Tab indentation (the host IDE's Java default).
    pub const JAVA: Self = Self::Tab;

    /// Convert to the string representation for one indent level.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Spaces(2) => "  ",
            Self::Spaces(4) => "    ",
            Self::Spaces(8) => "        ",
            // Fallback to 4 whitespaces
            Self::Spaces(_) => "    ",
            Self::Tab => "\t",
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::JAVA
    }
}

// Accepts either the string "tab" or a space width, so a style document can
// say `indent = "tab"` or `indent = 4`.
impl<'de> Deserialize<'de> for Indent {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct IndentVisitor;

        impl Visitor<'_> for IndentVisitor {
            type Value = Indent;

            fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                f.write_str("\"tab\" or a space width (2, 4, or 8)")
            }

            fn visit_str<E: DeError>(self, value: &str) -> Result<Indent, E> {
                match value {
                    "tab" => Ok(Indent::Tab),
                    other => Err(E::custom(format!("unknown indent style '{other}'"))),
                }
            }

            fn visit_i64<E: DeError>(self, value: i64) -> Result<Indent, E> {
                match value {
                    2 | 4 | 8 => Ok(Indent::Spaces(value as u8)),
                    other => Err(E::custom(format!("unsupported indent width {other}"))),
                }
            }

            fn visit_u64<E: DeError>(self, value: u64) -> Result<Indent, E> {
                self.visit_i64(value as i64)
            }
        }

        deserializer.deserialize_any(IndentVisitor)
    }
}
