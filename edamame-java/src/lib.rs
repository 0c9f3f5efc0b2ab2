//! Java parameter object class rendering.
//!
//! This crate is the backend of an Introduce Parameter Object refactoring:
//! given resolved parameter snapshots, a target class identity, and a
//! [`CodeStyle`](edamame_codegen::CodeStyle), [`BeanClassBuilder`] renders
//! the complete source text of the new bean-like class - fields,
//! constructor, accessors - in one deterministic pass.
//!
//! Upstream analysis (choosing parameters, rewriting call sites) and
//! persistence of the generated text are the caller's concerns; no file or
//! process interface exists at this layer.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod bean_builder;
mod error;

pub use bean_builder::BeanClassBuilder;
pub use error::{Error, Result};
