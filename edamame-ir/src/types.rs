//! Java type and modifier definitions.

use serde::{Deserialize, Serialize};

/// A Java type as it appears in a parameter declaration.
///
/// Reference types carry their canonical source text, so a snapshot like
/// `java.util.List<java.lang.String>` renders back exactly as resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JavaType {
    /// One of the eight primitive types.
    Primitive(JavaPrimitive),
    /// A class, interface, or type-variable reference by canonical text.
    Named(String),
    /// An array of a component type.
    Array(Box<JavaType>),
}

impl JavaType {
    /// Create a named type reference from canonical source text.
    pub fn named(text: impl Into<String>) -> Self {
        Self::Named(text.into())
    }

    /// Create an array of the given component type.
    pub fn array(component: JavaType) -> Self {
        Self::Array(Box::new(component))
    }

    /// Convenience: the `boolean` primitive.
    pub fn boolean() -> Self {
        Self::Primitive(JavaPrimitive::Boolean)
    }

    /// Convenience: the `int` primitive.
    pub fn int() -> Self {
        Self::Primitive(JavaPrimitive::Int)
    }

    /// Convenience: the `long` primitive.
    pub fn long() -> Self {
        Self::Primitive(JavaPrimitive::Long)
    }

    /// Convenience: the `double` primitive.
    pub fn double() -> Self {
        Self::Primitive(JavaPrimitive::Double)
    }

    /// Canonical source text of this type.
    pub fn canonical_text(&self) -> String {
        match self {
            Self::Primitive(primitive) => primitive.as_str().to_string(),
            Self::Named(text) => text.clone(),
            Self::Array(component) => format!("{}[]", component.canonical_text()),
        }
    }

    /// The component type for arrays.
    ///
    /// Returns `None` for non-array types.
    pub fn component(&self) -> Option<&JavaType> {
        match self {
            Self::Array(component) => Some(component),
            _ => None,
        }
    }

    /// Check if this is exactly the `boolean` primitive.
    ///
    /// `java.lang.Boolean` and `boolean[]` do not qualify.
    pub fn is_boolean(&self) -> bool {
        matches!(self, Self::Primitive(JavaPrimitive::Boolean))
    }
}

/// The eight Java primitive types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JavaPrimitive {
    Boolean,
    Byte,
    Short,
    Int,
    Long,
    Char,
    Float,
    Double,
}

impl JavaPrimitive {
    /// Get the Java keyword for this primitive.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Byte => "byte",
            Self::Short => "short",
            Self::Int => "int",
            Self::Long => "long",
            Self::Char => "char",
            Self::Float => "float",
            Self::Double => "double",
        }
    }
}

/// Declaration modifiers a parameter snapshot can carry.
///
/// Only `Static` influences generated naming; the rest ride along for
/// fidelity of the snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modifier {
    Static,
    Final,
    Transient,
    Volatile,
}
