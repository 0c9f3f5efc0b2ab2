//! Parameter and annotation snapshots.

use serde::{Deserialize, Serialize};

use crate::types::{JavaType, Modifier};

/// A read-only snapshot of one method parameter to be extracted.
///
/// Built once by the refactoring front-end, handed to the renderer, and
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    /// Raw parameter name as it appears in the original source.
    pub name: String,
    /// Declared type. For a variable-arity parameter this is the array
    /// type, with the component recoverable from it.
    pub ty: JavaType,
    /// Whether the parameter is variable-arity (`X...` in the source).
    #[serde(default)]
    pub varargs: bool,
    /// Declaration modifiers carried by the parameter.
    #[serde(default)]
    pub modifiers: Vec<Modifier>,
    /// Annotations attached to the parameter.
    #[serde(default)]
    pub annotations: Vec<Annotation>,
    /// Documentation comment text, verbatim, if the parameter had one.
    #[serde(default)]
    pub doc: Option<String>,
}

impl Parameter {
    /// Create a snapshot with the given name and declared type.
    pub fn new(name: impl Into<String>, ty: JavaType) -> Self {
        Self {
            name: name.into(),
            ty,
            varargs: false,
            modifiers: Vec::new(),
            annotations: Vec::new(),
            doc: None,
        }
    }

    /// Mark the parameter as variable-arity.
    pub fn varargs(mut self) -> Self {
        self.varargs = true;
        self
    }

    /// Add a declaration modifier.
    pub fn modifier(mut self, modifier: Modifier) -> Self {
        self.modifiers.push(modifier);
        self
    }

    /// Add an attached annotation.
    pub fn annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    /// Set the documentation comment text.
    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Check whether the parameter carries the given modifier.
    pub fn has_modifier(&self, modifier: Modifier) -> bool {
        self.modifiers.contains(&modifier)
    }

    /// Check whether the parameter is declared `static`.
    pub fn is_static(&self) -> bool {
        self.has_modifier(Modifier::Static)
    }
}

/// An annotation attached to a parameter.
///
/// The front-end resolves the annotation's declaring type to a
/// fully-qualified name where it can; an unresolved annotation keeps
/// `qualified_name` empty and is silently dropped at render time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    /// Fully-qualified name of the annotation type, if resolved.
    pub qualified_name: Option<String>,
    /// Original argument-list text, parentheses included, verbatim.
    /// Empty when the annotation had no arguments.
    #[serde(default)]
    pub args: String,
}

impl Annotation {
    /// Create a resolved annotation.
    pub fn resolved(qualified_name: impl Into<String>, args: impl Into<String>) -> Self {
        Self {
            qualified_name: Some(qualified_name.into()),
            args: args.into(),
        }
    }

    /// Create an annotation whose declaring type could not be resolved.
    pub fn unresolved() -> Self {
        Self {
            qualified_name: None,
            args: String::new(),
        }
    }
}
