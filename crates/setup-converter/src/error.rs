//! Error taxonomy for the conversion pipeline.
//!
//! Every failure aborts the whole conversion; there is no partial output and
//! no fallback to the original source. Callers treat an error as "this
//! component was not converted".

use thiserror::Error;

/// Result type for conversion operations.
pub type ConvertResult<T> = Result<T, ConvertError>;

/// An error from converting a component.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConvertError {
    /// No call expression exists in the script, or the first call is not a
    /// plain `defineComponent(...)` call. Both cases are the same failure:
    /// without a definition call there is nothing to convert.
    #[error("defineComponent is not found")]
    DefinitionNotFound,

    /// The configuration object is missing, or has no `props` member among
    /// its direct properties.
    #[error("props is not found")]
    PropsNotFound,

    /// No method-shaped member resolves to a setup function, or the setup
    /// function has no body block.
    #[error("setup is not found")]
    SetupNotFound,

    /// The `props` member has a recognized shape that the requested output
    /// style cannot express. Distinct from [`ConvertError::PropsNotFound`]
    /// so callers can tell "nothing there" from "there, but unconvertible".
    #[error("unsupported props shape: {0}")]
    UnsupportedPropsShape(String),

    /// The component container or its script block could not be parsed.
    #[error("failed to parse component: {0}")]
    Parse(String),

    /// The assembled output is not valid source for the target mode.
    #[error("formatting failed: {0}")]
    FormatFailure(String),
}
