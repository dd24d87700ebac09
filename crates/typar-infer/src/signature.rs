use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{TypeError, TypeResult};
use crate::types::{TypeExpr, TypeParameter};

/// The signature of a (possibly generic) function.
///
/// Every `TypeExpr::Param` in `params` or `ret` refers to a member of
/// `type_params`; [`FunctionSignature::new`] enforces this.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawSignature")]
pub struct FunctionSignature {
    name: String,
    type_params: Vec<TypeParameter>,
    params: Vec<TypeExpr>,
    ret: TypeExpr,
}

/// Unchecked form of a signature; deserialized signatures are validated through it.
#[derive(Deserialize)]
struct RawSignature {
    name: String,
    type_params: Vec<TypeParameter>,
    params: Vec<TypeExpr>,
    ret: TypeExpr,
}

impl TryFrom<RawSignature> for FunctionSignature {
    type Error = TypeError;

    fn try_from(raw: RawSignature) -> TypeResult<Self> {
        FunctionSignature::new(raw.name, raw.type_params, raw.params, raw.ret)
    }
}

impl FunctionSignature {
    /// Builds a signature, checking that its type parameters are unique and that
    /// no parameter or return type mentions an undeclared one.
    pub fn new(
        name: impl Into<String>,
        type_params: Vec<TypeParameter>,
        params: Vec<TypeExpr>,
        ret: TypeExpr,
    ) -> TypeResult<Self> {
        let name = name.into();

        for (i, param) in type_params.iter().enumerate() {
            if type_params[..i].contains(param) {
                return Err(TypeError::DuplicateTypeParameter {
                    function: name,
                    param: param.clone(),
                });
            }
        }

        for ty in params.iter().chain(std::iter::once(&ret)) {
            if let Some(undeclared) = ty.params().into_iter().find(|p| !type_params.contains(*p)) {
                return Err(TypeError::UndeclaredTypeParameter {
                    function: name,
                    param: undeclared.clone(),
                });
            }
        }

        Ok(Self { name, type_params, params, ret })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn type_params(&self) -> &[TypeParameter] {
        &self.type_params
    }

    pub fn params(&self) -> &[TypeExpr] {
        &self.params
    }

    pub fn ret(&self) -> &TypeExpr {
        &self.ret
    }

    pub fn is_generic(&self) -> bool {
        !self.type_params.is_empty()
    }
}

impl fmt::Display for FunctionSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "def {}", self.name)?;
        if self.is_generic() {
            let tps = self
                .type_params
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            write!(f, "[{}]", tps)?;
        }
        let params = self
            .params
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "({}) -> {}", params, self.ret)
    }
}
