//! Call-site checking on top of `typar-infer`.
//!
//! Signatures are written as annotation text, call arguments as literal
//! expressions; the checker types the arguments, resolves each call and
//! collects diagnostics without stopping at the first failure.

pub mod annotation;
pub mod checker;
pub mod error;
pub mod literal;
pub mod settings;

pub use annotation::{parse_annotation, parse_signature, AnnotationError};
pub use checker::{Call, CallChecker, CheckedCall, Report};
pub use error::{CallWarning, CheckError, CheckResult};
pub use literal::{Expr, LiteralTyper};
pub use settings::{CheckSettings, CheckSettingsError};
