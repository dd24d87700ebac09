//! Resolution of calls to generic functions.
//!
//! Given a signature such as `first(l: Sequence[T]) -> T` and the argument
//! types of a call (`Sequence[int]`), the resolver binds each type parameter
//! from the arguments and instantiates the return type (`int`).

use log::debug;

use crate::{
    error::{TypeError, TypeResult},
    settings::Settings,
    signature::FunctionSignature,
    substitution::Substitution,
    types::TypeExpr,
    unify::{Compatibility, ExactMatch, Unifier},
};

/// The result of resolving one call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instantiation {
    /// The return type with every type parameter replaced.
    pub ret: TypeExpr,
    /// The bindings inferred from the arguments.
    pub subst: Substitution,
    /// Informational findings: unresolved type parameters and ignored conflicting bindings.
    pub warnings: Vec<TypeError>,
}

/// Resolves calls to generic functions under a fixed set of settings.
pub struct GenericCallResolver<'a> {
    settings: &'a Settings,
    compat: &'a dyn Compatibility,
}

impl<'a> GenericCallResolver<'a> {
    pub fn new(settings: &'a Settings) -> Self {
        Self { settings, compat: &ExactMatch }
    }

    /// Use `compat` to decide whether a concrete argument fits a concrete parameter
    pub fn with_compatibility(mut self, compat: &'a dyn Compatibility) -> Self {
        self.compat = compat;
        self
    }

    pub fn resolve(
        &self,
        signature: &FunctionSignature,
        arg_types: &[TypeExpr],
    ) -> TypeResult<Instantiation> {
        if arg_types.len() != signature.params().len() {
            return Err(TypeError::ArityMismatch {
                expected: signature.params().len(),
                found: arg_types.len(),
            });
        }

        if let Some((index, ty)) = arg_types.iter().enumerate().find(|(_, ty)| ty.contains_params()) {
            return Err(TypeError::NonConcreteArgument { index, ty: ty.clone() });
        }

        let mut unifier = Unifier::new(self.settings.conflict_policy, self.compat);
        for (param, arg) in signature.params().iter().zip(arg_types) {
            unifier.unify(param, arg)?;
        }
        let (subst, mut warnings) = unifier.finish();

        for tp in signature.type_params() {
            if subst.get(tp).is_none() {
                warnings.push(TypeError::UnresolvedTypeParameter { param: tp.clone() });
            }
        }

        let ret = subst.apply(signature.ret());
        debug!("resolved call to {} with {}: {}", signature.name(), subst, ret);

        Ok(Instantiation { ret, subst, warnings })
    }
}

/// Infers the type parameters of `signature` from `arg_types` and returns the
/// instantiated return type, using default settings and exact name matching.
pub fn infer_and_instantiate(
    signature: &FunctionSignature,
    arg_types: &[TypeExpr],
) -> TypeResult<TypeExpr> {
    let settings = Settings::default();
    GenericCallResolver::new(&settings)
        .resolve(signature, arg_types)
        .map(|inst| inst.ret)
}
