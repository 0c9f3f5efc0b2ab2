//! Naming and style configuration for generated classes.

use std::str::FromStr;

use serde::Deserialize;

use crate::builder::Indent;
use crate::error::{Error, Result};
use crate::naming::strip_affixes;

/// Naming conventions and style switches applied to a generated class.
///
/// The same configuration applies uniformly to every parameter in a single
/// render. All fields default to the bare convention: no affixes, no
/// `final` parameters, tab indentation.
///
/// A style document can be loaded from TOML:
///
/// ```
/// use std::str::FromStr;
/// use edamame_codegen::CodeStyle;
///
/// let style = CodeStyle::from_str(
///     r#"
///     field_name_prefix = "m_"
///     parameter_name_prefix = "p_"
///     generate_final_parameters = true
///     "#,
/// )
/// .unwrap();
/// assert_eq!(style.field_name_prefix, "m_");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CodeStyle {
    /// Prefix applied to instance field names.
    pub field_name_prefix: String,
    /// Suffix applied to instance field names.
    pub field_name_suffix: String,
    /// Prefix applied to fields backing a `static` parameter.
    pub static_field_name_prefix: String,
    /// Suffix applied to fields backing a `static` parameter.
    pub static_field_name_suffix: String,
    /// Prefix applied to constructor/setter parameter names.
    pub parameter_name_prefix: String,
    /// Suffix applied to constructor/setter parameter names.
    pub parameter_name_suffix: String,
    /// Whether constructor/setter parameters are declared `final`.
    pub generate_final_parameters: bool,
    /// Indentation unit for generated members.
    pub indent: Indent,
}

impl CodeStyle {
    /// Parse a style document, naming the source for diagnostics.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::parse(e, content, filename))
    }

    /// Recover a parameter's semantic base name by stripping the parameter
    /// naming convention from its raw source name.
    pub fn base_name<'a>(&self, raw: &'a str) -> &'a str {
        strip_affixes(raw, &self.parameter_name_prefix, &self.parameter_name_suffix)
    }

    /// Field affixes for an instance or static field.
    pub fn field_affixes(&self, is_static: bool) -> (&str, &str) {
        if is_static {
            (
                &self.static_field_name_prefix,
                &self.static_field_name_suffix,
            )
        } else {
            (&self.field_name_prefix, &self.field_name_suffix)
        }
    }

    /// Generated field name for a base name.
    pub fn field_name(&self, base: &str, is_static: bool) -> String {
        let (prefix, suffix) = self.field_affixes(is_static);
        format!("{prefix}{base}{suffix}")
    }

    /// Generated constructor/setter parameter name for a base name.
    pub fn parameter_name(&self, base: &str) -> String {
        format!(
            "{}{base}{}",
            self.parameter_name_prefix, self.parameter_name_suffix
        )
    }
}

impl FromStr for CodeStyle {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, "style.toml")
    }
}
