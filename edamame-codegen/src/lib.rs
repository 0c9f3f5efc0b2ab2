//! Shared code generation building blocks for the Edamame parameter object
//! generator.
//!
//! This crate provides the language-agnostic pieces the class renderer is
//! assembled from:
//!
//! - [`CodeBuilder`] / [`Indent`] - indented text accumulation
//! - [`strip_affixes`] / [`capitalize`] - identifier helpers
//! - [`CodeStyle`] - naming and style configuration, loadable from TOML
//! - [`TypeUsage`] / [`render_type`] - usage-tagged Java type rendering

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

pub mod builder;
mod error;
mod naming;
mod style;
mod types;

pub use builder::{CodeBuilder, Indent};
pub use error::{Error, Result};
pub use naming::{capitalize, strip_affixes};
pub use style::CodeStyle;
pub use types::{TypeUsage, render_type};
