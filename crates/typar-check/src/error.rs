use miette::{Diagnostic, SourceSpan};
use thiserror::Error;
use typar_infer::TypeError;

use crate::annotation::AnnotationError;

pub type CheckResult<T> = Result<T, CheckError>;

/// Errors reported by the call checker.
#[derive(Debug, Error, Diagnostic, Clone, PartialEq, Eq)]
pub enum CheckError {
    /// The callee is not a registered function.
    #[error("unknown function `{name}`")]
    #[diagnostic(code(typar_check::unknown_function))]
    UnknownFunction {
        name: String,
        #[label("not defined")]
        span: SourceSpan,
    },

    /// Resolving the call against the callee's signature failed.
    #[error("invalid call to `{callee}`")]
    #[diagnostic(code(typar_check::invalid_call))]
    InvalidCall {
        callee: String,
        #[label("in this call")]
        span: SourceSpan,
        #[source]
        #[diagnostic_source]
        error: TypeError,
    },

    /// A parameter or return annotation could not be parsed.
    #[error("invalid annotation `{text}`")]
    #[diagnostic(code(typar_check::invalid_annotation))]
    InvalidAnnotation {
        text: String,
        #[source]
        #[diagnostic_source]
        source: AnnotationError,
    },

    /// The annotations parsed but do not form a valid signature.
    #[error(transparent)]
    #[diagnostic(transparent)]
    Signature(#[from] TypeError),
}

/// A non-fatal finding attached to one call.
#[derive(Debug, Error, Diagnostic, Clone, PartialEq, Eq)]
#[error("in call to `{callee}`: {warning}")]
#[diagnostic(code(typar_check::call_warning), severity(Warning))]
pub struct CallWarning {
    pub callee: String,
    #[label("here")]
    pub span: SourceSpan,
    pub warning: TypeError,
}
