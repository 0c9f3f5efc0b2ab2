use miette::Diagnostic;
use thiserror::Error;

/// Result type for edamame-java operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("class name is not set")]
    #[diagnostic(
        code(edamame::class_name_not_set),
        help("call set_class_name before render")
    )]
    ClassNameNotSet,

    #[error("package name is not set")]
    #[diagnostic(
        code(edamame::package_name_not_set),
        help("call set_package_name before render; pass an empty string for the default package")
    )]
    PackageNameNotSet,

    #[error("code style is not set")]
    #[diagnostic(code(edamame::style_not_set), help("call set_style before render"))]
    StyleNotSet,

    #[error("parameter at position {index} has an empty name")]
    #[diagnostic(code(edamame::empty_parameter_name))]
    EmptyParameterName { index: usize },

    #[error("parameter '{name}' cannot be rendered")]
    #[diagnostic(code(edamame::malformed_parameter))]
    MalformedParameter {
        name: String,
        #[source]
        source: Box<edamame_codegen::Error>,
    },
}

impl Error {
    /// Create an empty-name error for the parameter at the given position
    pub fn empty_parameter_name(index: usize) -> Box<Self> {
        Box::new(Error::EmptyParameterName { index })
    }

    /// Wrap a codegen error with the offending parameter's name
    pub fn malformed_parameter(name: impl Into<String>, source: Box<edamame_codegen::Error>) -> Box<Self> {
        Box::new(Error::MalformedParameter {
            name: name.into(),
            source,
        })
    }
}
