//! Resolver tests

pub mod test_properties;
pub mod test_resolve;

use crate::{FunctionSignature, TypeExpr, TypeParameter};

pub(crate) fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub(crate) fn int() -> TypeExpr {
    TypeExpr::concrete("int")
}

pub(crate) fn str_() -> TypeExpr {
    TypeExpr::concrete("str")
}

pub(crate) fn t() -> TypeExpr {
    TypeExpr::param("T")
}

pub(crate) fn seq(elem: TypeExpr) -> TypeExpr {
    TypeExpr::generic("Sequence", vec![elem])
}

/// Builds a signature, panicking on an invalid one.
pub(crate) fn sig(name: &str, type_params: &[&str], params: Vec<TypeExpr>, ret: TypeExpr) -> FunctionSignature {
    let type_params = type_params.iter().map(|n| TypeParameter::new(*n)).collect();
    FunctionSignature::new(name, type_params, params, ret).expect("valid signature")
}

/// `def first(l: Sequence[T]) -> T`
pub(crate) fn first_sig() -> FunctionSignature {
    sig("first", &["T"], vec![seq(t())], t())
}

/// A handful of argument types covering every shape.
pub(crate) fn sample_types() -> Vec<TypeExpr> {
    vec![
        int(),
        str_(),
        TypeExpr::concrete("None"),
        seq(int()),
        seq(seq(str_())),
        TypeExpr::generic("Mapping", vec![str_(), seq(TypeExpr::concrete("float"))]),
        TypeExpr::Unknown,
    ]
}
