//! Parameter snapshot types for the Edamame parameter object generator.
//!
//! This crate provides the type definitions shared across the Edamame
//! rendering pipeline. A refactoring front-end resolves everything it knows
//! about an extracted method parameter (name, declared type, modifiers,
//! annotations, documentation) into these plain records, decoupling the
//! renderer from any live analysis engine.
//!
//! # Architecture
//!
//! ```text
//! host analysis → Parameter snapshots (this crate) → edamame-java (rendering)
//! ```
//!
//! The snapshot types are designed to be:
//! - Read-only once handed to the renderer
//! - Self-contained (no dependencies beyond serde)
//! - Faithful to Java's surface syntax (primitives, arrays, annotations)

mod param;
mod types;

pub use param::{Annotation, Parameter};
pub use types::{JavaPrimitive, JavaType, Modifier};
