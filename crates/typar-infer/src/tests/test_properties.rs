//! Properties that hold for every argument type

use super::*;
use crate::{infer_and_instantiate, TypeError};

#[test]
fn identity_returns_argument_type() {
    init_logging();
    let identity = sig("identity", &["T"], vec![t()], t());

    for x in sample_types() {
        let ret = infer_and_instantiate(&identity, &[x.clone()]).unwrap();
        assert_eq!(ret, x);
    }
}

#[test]
fn arity_mismatch_never_panics() {
    let signatures = vec![
        sig("none", &[], vec![], TypeExpr::concrete("None")),
        first_sig(),
        sig("pair", &["T"], vec![t(), seq(t())], seq(t())),
    ];

    for signature in &signatures {
        for count in 0..5 {
            if count == signature.params().len() {
                continue;
            }
            let args = vec![int(); count];
            let err = infer_and_instantiate(signature, &args).unwrap_err();
            assert_eq!(
                err,
                TypeError::ArityMismatch {
                    expected: signature.params().len(),
                    found: count,
                }
            );
        }
    }
}

#[test]
fn resolution_is_idempotent() {
    let signature = sig(
        "zip",
        &["K", "V"],
        vec![seq(TypeExpr::param("K")), seq(TypeExpr::param("V"))],
        TypeExpr::generic("Mapping", vec![TypeExpr::param("K"), TypeExpr::param("V")]),
    );
    let args = [seq(str_()), seq(seq(int()))];

    let once = infer_and_instantiate(&signature, &args).unwrap();
    let twice = infer_and_instantiate(&signature, &args).unwrap();
    assert_eq!(once, twice);
    assert_eq!(once.to_string(), "Mapping[str, Sequence[int]]");
}

#[test]
fn result_never_mentions_type_parameters() {
    let signature = sig(
        "wrap",
        &["T", "U"],
        vec![t()],
        TypeExpr::generic("Pair", vec![t(), TypeExpr::param("U")]),
    );

    for x in sample_types() {
        let ret = infer_and_instantiate(&signature, &[x]).unwrap();
        assert!(!ret.contains_params(), "{} still has type parameters", ret);
    }
}
