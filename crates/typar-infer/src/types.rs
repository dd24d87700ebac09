use std::fmt;

use serde::{Deserialize, Serialize};

/// A type parameter declared by one function signature (e.g. `T`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeParameter(pub String);

impl TypeParameter {
    pub fn new(name: impl Into<String>) -> Self {
        TypeParameter(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TypeParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A type expression as it appears in a signature or as the type of an argument.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeExpr {
    /// A nominal type with no arguments, e.g. `int`.
    Concrete { name: String },
    /// An applied generic type, e.g. `Sequence[int]`.
    Generic { base: String, args: Vec<TypeExpr> },
    /// A reference to one of the signature's type parameters.
    Param(TypeParameter),
    /// Placeholder for a type that could not be determined.
    Unknown,
}

impl TypeExpr {
    pub fn concrete(name: impl Into<String>) -> Self {
        TypeExpr::Concrete { name: name.into() }
    }

    pub fn generic(base: impl Into<String>, args: Vec<TypeExpr>) -> Self {
        TypeExpr::Generic { base: base.into(), args }
    }

    pub fn param(name: impl Into<String>) -> Self {
        TypeExpr::Param(TypeParameter::new(name))
    }

    /// Check if this type mentions any type parameter
    pub fn contains_params(&self) -> bool {
        match self {
            TypeExpr::Param(_) => true,
            TypeExpr::Generic { args, .. } => args.iter().any(TypeExpr::contains_params),
            TypeExpr::Concrete { .. } | TypeExpr::Unknown => false,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, TypeExpr::Unknown)
    }

    /// Collects every type parameter referenced by this type, in first-seen order.
    pub fn params(&self) -> Vec<&TypeParameter> {
        let mut found = Vec::new();
        self.collect_params(&mut found);
        found
    }

    fn collect_params<'a>(&'a self, found: &mut Vec<&'a TypeParameter>) {
        match self {
            TypeExpr::Param(param) => {
                if !found.contains(&param) {
                    found.push(param);
                }
            }
            TypeExpr::Generic { args, .. } => {
                for arg in args {
                    arg.collect_params(found);
                }
            }
            TypeExpr::Concrete { .. } | TypeExpr::Unknown => {}
        }
    }
}

impl fmt::Display for TypeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeExpr::Concrete { name } => f.write_str(name),
            TypeExpr::Generic { base, args } => {
                let args = args
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "{}[{}]", base, args)
            }
            TypeExpr::Param(param) => write!(f, "{}", param),
            TypeExpr::Unknown => f.write_str("Unknown"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_nested_generic() {
        let ty = TypeExpr::generic(
            "Mapping",
            vec![
                TypeExpr::concrete("str"),
                TypeExpr::generic("Sequence", vec![TypeExpr::param("T")]),
            ],
        );
        assert_eq!(ty.to_string(), "Mapping[str, Sequence[T]]");
    }

    #[test]
    fn params_are_deduplicated_in_order() {
        let ty = TypeExpr::generic(
            "Pair",
            vec![TypeExpr::param("U"), TypeExpr::param("T"), TypeExpr::param("U")],
        );
        let names: Vec<_> = ty.params().into_iter().map(TypeParameter::name).collect();
        assert_eq!(names, vec!["U", "T"]);
        assert!(ty.contains_params());
        assert!(!TypeExpr::concrete("int").contains_params());
    }
}
