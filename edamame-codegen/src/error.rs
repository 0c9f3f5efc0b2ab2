use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for edamame-codegen operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to parse code style")]
    #[diagnostic(code(edamame::style_parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("variable-arity type '{type_text}' has no component type")]
    #[diagnostic(
        code(edamame::varargs_component),
        help("a variable-arity parameter must snapshot its declared type as an array")
    )]
    VarargsComponent { type_text: String },
}

impl Error {
    /// Create a parse error from a toml error with source context
    pub fn parse(source: toml::de::Error, src: &str, filename: &str) -> Box<Self> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
        })
    }

    /// Create a varargs component error for the given type text
    pub fn varargs_component(type_text: impl Into<String>) -> Box<Self> {
        Box::new(Error::VarargsComponent {
            type_text: type_text.into(),
        })
    }
}
