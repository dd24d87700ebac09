// Typar inference crate
//
// Binds the type parameters of a generic function from the argument types at a
// call site and instantiates the function's return type.

//! # Typar inference
//!
//! The entry point is [`infer_and_instantiate`], or [`GenericCallResolver`]
//! when settings, a subtyping hook or the informational warnings are needed.
//!
//! ```
//! use typar_infer::{infer_and_instantiate, FunctionSignature, TypeExpr, TypeParameter};
//!
//! let first = FunctionSignature::new(
//!     "first",
//!     vec![TypeParameter::new("T")],
//!     vec![TypeExpr::generic("Sequence", vec![TypeExpr::param("T")])],
//!     TypeExpr::param("T"),
//! )
//! .unwrap();
//! let arg = TypeExpr::generic("Sequence", vec![TypeExpr::concrete("int")]);
//! assert_eq!(infer_and_instantiate(&first, &[arg]).unwrap().to_string(), "int");
//! ```

pub mod error;
pub mod resolve;
pub mod settings;
pub mod signature;
pub mod substitution;
pub mod types;
pub mod unify;

#[cfg(test)]
mod tests;

pub use error::{TypeError, TypeResult};
pub use resolve::{infer_and_instantiate, GenericCallResolver, Instantiation};
pub use settings::{ConflictPolicy, Settings, SettingsError};
pub use signature::FunctionSignature;
pub use substitution::Substitution;
pub use types::{TypeExpr, TypeParameter};
pub use unify::{Compatibility, ExactMatch, Unifier};
