use log::{trace, warn};

use crate::{
    error::{TypeError, TypeResult},
    settings::ConflictPolicy,
    substitution::{Binding, Substitution},
    types::{TypeExpr, TypeParameter},
};

/// Decides whether an argument of one concrete type may be passed where another is expected.
///
/// Subtyping rules live outside the resolver; implement this to plug them in.
pub trait Compatibility {
    fn accepts(&self, expected: &str, found: &str) -> bool;
}

/// Only identical names are compatible.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactMatch;

impl Compatibility for ExactMatch {
    fn accepts(&self, expected: &str, found: &str) -> bool {
        expected == found
    }
}

/// Matches parameter types against argument types, accumulating type parameter bindings.
pub struct Unifier<'a> {
    subst: Substitution,
    policy: ConflictPolicy,
    compat: &'a dyn Compatibility,
    /// Conflicts ignored under [`ConflictPolicy::FirstWins`]
    conflicts: Vec<TypeError>,
}

impl<'a> Unifier<'a> {
    pub fn new(policy: ConflictPolicy, compat: &'a dyn Compatibility) -> Self {
        Self {
            subst: Substitution::new(),
            policy,
            compat,
            conflicts: Vec::new(),
        }
    }

    /// Unify a parameter type with the type of the argument passed for it
    pub fn unify(&mut self, param: &TypeExpr, arg: &TypeExpr) -> TypeResult<()> {
        match (param, arg) {
            // Nothing is learned from an argument of unknown type
            (_, TypeExpr::Unknown) => Ok(()),

            (TypeExpr::Param(tp), _) => self.bind(tp, arg),

            (
                TypeExpr::Generic { base: pb, args: pargs },
                TypeExpr::Generic { base: ab, args: aargs },
            ) if pb == ab && pargs.len() == aargs.len() => {
                for (p, a) in pargs.iter().zip(aargs.iter()) {
                    self.unify(p, a)?;
                }
                Ok(())
            }
            (TypeExpr::Generic { .. }, _) => Err(TypeError::StructuralMismatch {
                expected: param.clone(),
                found: arg.clone(),
            }),

            (TypeExpr::Concrete { name: expected }, TypeExpr::Concrete { name: found })
                if self.compat.accepts(expected, found) =>
            {
                Ok(())
            }
            (TypeExpr::Concrete { .. }, _) => Err(TypeError::ConcreteMismatch {
                expected: param.clone(),
                found: arg.clone(),
            }),

            // A parameter declared as `Unknown` accepts anything
            (TypeExpr::Unknown, _) => Ok(()),
        }
    }

    fn bind(&mut self, tp: &TypeParameter, ty: &TypeExpr) -> TypeResult<()> {
        match self.subst.bind(tp, ty) {
            Binding::New => {
                trace!("bound {} -> {}", tp, ty);
                Ok(())
            }
            Binding::Same => Ok(()),
            Binding::Refined => {
                trace!("refined {} with {}", tp, ty);
                Ok(())
            }
            Binding::Conflict(first) => {
                let conflict = TypeError::ConflictingBinding {
                    param: tp.clone(),
                    first,
                    second: ty.clone(),
                };
                match self.policy {
                    ConflictPolicy::Strict => Err(conflict),
                    ConflictPolicy::FirstWins => {
                        warn!("{}; keeping the first binding", conflict);
                        self.conflicts.push(conflict);
                        Ok(())
                    }
                }
            }
        }
    }

    pub fn substitution(&self) -> &Substitution {
        &self.subst
    }

    /// Consumes the unifier, returning the bindings and any ignored conflicts.
    pub fn finish(self) -> (Substitution, Vec<TypeError>) {
        (self.subst, self.conflicts)
    }
}
