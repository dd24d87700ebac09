use miette::Diagnostic;
use thiserror::Error;

use crate::types::{TypeExpr, TypeParameter};

/// Result type for inference operations
pub type TypeResult<T> = Result<T, TypeError>;

/// Errors produced while building signatures or resolving a generic call.
#[derive(Debug, Error, Diagnostic, Clone, PartialEq, Eq)]
pub enum TypeError {
    /// The call supplies a different number of arguments than the signature declares.
    #[error("wrong number of arguments: expected {expected}, found {found}")]
    #[diagnostic(code(typar_infer::arity_mismatch))]
    ArityMismatch { expected: usize, found: usize },

    /// A generic parameter type was matched against an argument of another shape,
    /// another base or another number of type arguments.
    #[error("structural mismatch: parameter `{expected}` cannot accept argument `{found}`")]
    #[diagnostic(code(typar_infer::structural_mismatch))]
    StructuralMismatch { expected: TypeExpr, found: TypeExpr },

    /// A concrete parameter type does not accept the argument type.
    #[error("type mismatch: expected `{expected}`, found `{found}`")]
    #[diagnostic(code(typar_infer::concrete_mismatch))]
    ConcreteMismatch { expected: TypeExpr, found: TypeExpr },

    /// Argument types must not mention type parameters.
    #[error("argument {index} has non-concrete type `{ty}`")]
    #[diagnostic(
        code(typar_infer::non_concrete_argument),
        help("argument types are inferred at the call site and cannot reference type parameters")
    )]
    NonConcreteArgument { index: usize, ty: TypeExpr },

    /// A type parameter was bound to two different types by different arguments.
    #[error("type parameter `{param}` bound to `{first}` and to `{second}`")]
    #[diagnostic(code(typar_infer::conflicting_binding))]
    ConflictingBinding {
        param: TypeParameter,
        first: TypeExpr,
        second: TypeExpr,
    },

    /// No argument determined this type parameter; it resolves to `Unknown`.
    #[error("type parameter `{param}` could not be inferred")]
    #[diagnostic(code(typar_infer::unresolved_type_parameter), severity(Warning))]
    UnresolvedTypeParameter { param: TypeParameter },

    /// A signature references a type parameter it does not declare.
    #[error("type parameter `{param}` is not declared by `{function}`")]
    #[diagnostic(code(typar_infer::undeclared_type_parameter))]
    UndeclaredTypeParameter {
        function: String,
        param: TypeParameter,
    },

    /// A signature declares the same type parameter twice.
    #[error("type parameter `{param}` is declared more than once by `{function}`")]
    #[diagnostic(code(typar_infer::duplicate_type_parameter))]
    DuplicateTypeParameter {
        function: String,
        param: TypeParameter,
    },
}

impl TypeError {
    /// Returns `true` for errors that are reported but never abort resolution.
    pub fn is_informational(&self) -> bool {
        matches!(self, TypeError::UnresolvedTypeParameter { .. })
    }
}
