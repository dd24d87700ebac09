use std::fmt;

use rustc_hash::FxHashMap;

use crate::types::{TypeExpr, TypeParameter};

/// Outcome of binding a type parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Binding {
    /// The parameter was unbound and now maps to the given type.
    New,
    /// The parameter was already bound to an equal or more precise type.
    Same,
    /// The parameter was bound to a type with `Unknown` parts, which the new
    /// type filled in.
    Refined,
    /// The parameter was already bound to a different type, which was kept.
    Conflict(TypeExpr),
}

/// A mapping from type parameters to the types inferred for them at one call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Substitution {
    map: FxHashMap<TypeParameter, TypeExpr>,
}

impl Substitution {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, param: &TypeParameter) -> Option<&TypeExpr> {
        self.map.get(param)
    }

    /// Bind `param` to `ty`.
    ///
    /// An existing binding only changes where it has `Unknown` parts that `ty`
    /// knows; a binding that disagrees with `ty` anywhere else is kept and
    /// reported as a conflict.
    pub fn bind(&mut self, param: &TypeParameter, ty: &TypeExpr) -> Binding {
        let Some(existing) = self.map.get_mut(param) else {
            self.map.insert(param.clone(), ty.clone());
            return Binding::New;
        };
        if existing == ty {
            return Binding::Same;
        }
        match merge(existing, ty) {
            Some(merged) if merged == *existing => Binding::Same,
            Some(merged) => {
                *existing = merged;
                Binding::Refined
            }
            None => Binding::Conflict(existing.clone()),
        }
    }

    /// Replace every type parameter in `ty` by its binding, or by `Unknown` when unbound.
    pub fn apply(&self, ty: &TypeExpr) -> TypeExpr {
        match ty {
            TypeExpr::Param(param) => self.map.get(param).cloned().unwrap_or(TypeExpr::Unknown),
            TypeExpr::Generic { base, args } => TypeExpr::Generic {
                base: base.clone(),
                args: args.iter().map(|arg| self.apply(arg)).collect(),
            },
            TypeExpr::Concrete { .. } | TypeExpr::Unknown => ty.clone(),
        }
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// Combines two types that agree wherever both are known, taking the known side
/// of every `Unknown`. Returns `None` when they disagree.
fn merge(a: &TypeExpr, b: &TypeExpr) -> Option<TypeExpr> {
    match (a, b) {
        (TypeExpr::Unknown, other) | (other, TypeExpr::Unknown) => Some(other.clone()),
        (
            TypeExpr::Generic { base: ab, args: aargs },
            TypeExpr::Generic { base: bb, args: bargs },
        ) if ab == bb && aargs.len() == bargs.len() => {
            let args = aargs
                .iter()
                .zip(bargs)
                .map(|(x, y)| merge(x, y))
                .collect::<Option<Vec<_>>>()?;
            Some(TypeExpr::Generic { base: ab.clone(), args })
        }
        _ if a == b => Some(a.clone()),
        _ => None,
    }
}

impl fmt::Display for Substitution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut entries: Vec<_> = self.map.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        let entries = entries
            .into_iter()
            .map(|(param, ty)| format!("{} -> {}", param, ty))
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "{{{}}}", entries)
    }
}
