//! Call resolution scenarios

use super::*;
use crate::{
    infer_and_instantiate, ConflictPolicy, GenericCallResolver, Settings, TypeError,
};

#[test]
fn first_of_int_sequence_is_int() {
    init_logging();
    let ret = infer_and_instantiate(&first_sig(), &[seq(int())]).unwrap();
    assert_eq!(ret, int());
    assert_eq!(ret.to_string(), "int");
}

#[test]
fn unused_type_parameter_is_unknown() {
    let make = sig("make", &["T"], vec![], t());
    let settings = Settings::default();

    let inst = GenericCallResolver::new(&settings).resolve(&make, &[]).unwrap();
    assert_eq!(inst.ret, TypeExpr::Unknown);
    assert_eq!(
        inst.warnings,
        vec![TypeError::UnresolvedTypeParameter { param: TypeParameter::new("T") }]
    );
    assert!(inst.warnings[0].is_informational());
}

#[test]
fn different_generic_base_is_structural_mismatch() {
    let keys = sig("keys", &["T"], vec![TypeExpr::generic("Mapping", vec![t()])], t());
    let err = infer_and_instantiate(&keys, &[seq(int())]).unwrap_err();
    assert_eq!(
        err,
        TypeError::StructuralMismatch {
            expected: TypeExpr::generic("Mapping", vec![t()]),
            found: seq(int()),
        }
    );
}

#[test]
fn concrete_parameter_mismatch() {
    let repeat = sig("repeat", &["T"], vec![t(), int()], seq(t()));
    let err = infer_and_instantiate(&repeat, &[str_(), str_()]).unwrap_err();
    assert_eq!(
        err,
        TypeError::ConcreteMismatch { expected: int(), found: str_() }
    );

    let ret = infer_and_instantiate(&repeat, &[str_(), int()]).unwrap();
    assert_eq!(ret, seq(str_()));
}

#[test]
fn conflicting_binding_keeps_first_by_default() {
    let pick = sig("pick", &["T"], vec![t(), t()], t());
    let settings = Settings::default();

    let inst = GenericCallResolver::new(&settings)
        .resolve(&pick, &[int(), str_()])
        .unwrap();
    assert_eq!(inst.ret, int());
    assert_eq!(
        inst.warnings,
        vec![TypeError::ConflictingBinding {
            param: TypeParameter::new("T"),
            first: int(),
            second: str_(),
        }]
    );
}

#[test]
fn conflicting_binding_is_an_error_when_strict() {
    let pick = sig("pick", &["T"], vec![t(), t()], t());
    let settings = Settings { conflict_policy: ConflictPolicy::Strict };

    let err = GenericCallResolver::new(&settings)
        .resolve(&pick, &[seq(int()), seq(str_())])
        .unwrap_err();
    assert!(matches!(err, TypeError::ConflictingBinding { .. }));

    // Equal bindings are not conflicts
    let inst = GenericCallResolver::new(&settings)
        .resolve(&pick, &[seq(int()), seq(int())])
        .unwrap();
    assert_eq!(inst.ret, seq(int()));
    assert!(inst.warnings.is_empty());
}

#[test]
fn unknown_elements_are_refined_by_later_arguments() {
    init_logging();
    let pick = sig("pick", &["T"], vec![t(), t()], t());
    let empty = seq(TypeExpr::Unknown);

    for policy in [ConflictPolicy::FirstWins, ConflictPolicy::Strict] {
        let settings = Settings { conflict_policy: policy };
        for args in [[empty.clone(), seq(int())], [seq(int()), empty.clone()]] {
            let inst = GenericCallResolver::new(&settings).resolve(&pick, &args).unwrap();
            assert_eq!(inst.ret, seq(int()), "{:?} with {}, {}", policy, args[0], args[1]);
            assert!(inst.warnings.is_empty(), "{:?}: {:?}", policy, inst.warnings);
        }
    }
}

#[test]
fn refined_binding_still_conflicts_with_a_different_type() {
    let pick3 = sig("pick3", &["T"], vec![t(), t(), t()], t());
    let settings = Settings::default();

    let inst = GenericCallResolver::new(&settings)
        .resolve(&pick3, &[seq(TypeExpr::Unknown), seq(int()), seq(str_())])
        .unwrap();
    assert_eq!(inst.ret, seq(int()));
    assert_eq!(
        inst.warnings,
        vec![TypeError::ConflictingBinding {
            param: TypeParameter::new("T"),
            first: seq(int()),
            second: seq(str_()),
        }]
    );
}

#[test]
fn argument_with_type_parameter_is_rejected() {
    let err = infer_and_instantiate(&first_sig(), &[seq(t())]).unwrap_err();
    assert_eq!(err, TypeError::NonConcreteArgument { index: 0, ty: seq(t()) });
}

#[test]
fn binding_through_nested_generics() {
    let flatten = sig("flatten", &["T"], vec![seq(seq(t()))], seq(t()));
    let ret = infer_and_instantiate(&flatten, &[seq(seq(str_()))]).unwrap();
    assert_eq!(ret.to_string(), "Sequence[str]");
}

#[test]
fn substitution_is_reported() {
    let settings = Settings::default();
    let inst = GenericCallResolver::new(&settings)
        .resolve(&first_sig(), &[seq(int())])
        .unwrap();
    assert_eq!(inst.subst.get(&TypeParameter::new("T")), Some(&int()));
    assert!(inst.warnings.is_empty());
}
