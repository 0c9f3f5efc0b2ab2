//! Usage-tagged Java type rendering.
//!
//! A variable-arity parameter is syntactically legal only as a trailing
//! declaration parameter; once stored in a field or returned from an
//! accessor it must be an ordinary array type. The usage tag selects which
//! rendering a call site gets, so the varargs branch lives in exactly one
//! place.

use edamame_ir::JavaType;

use crate::error::{Error, Result};

/// Where a type's source text will appear.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeUsage {
    /// Constructor or setter parameter declaration: varargs render as
    /// `X...`.
    Declaration,
    /// Field declaration or getter return type: varargs render as `X[]`.
    Storage,
}

impl TypeUsage {
    fn varargs_suffix(&self) -> &'static str {
        match self {
            Self::Declaration => "...",
            Self::Storage => "[]",
        }
    }
}

/// Render a parameter's type as source text for the given usage site.
///
/// Non-varargs types render as their canonical text at every site. A
/// varargs type must be an array; its component type carries the
/// site-specific suffix.
pub fn render_type(ty: &JavaType, varargs: bool, usage: TypeUsage) -> Result<String> {
    if !varargs {
        return Ok(ty.canonical_text());
    }
    match ty.component() {
        Some(component) => Ok(format!(
            "{}{}",
            component.canonical_text(),
            usage.varargs_suffix()
        )),
        None => Err(Error::varargs_component(ty.canonical_text())),
    }
}
