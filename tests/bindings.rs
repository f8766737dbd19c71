use infix_eval::{
    assign,
    binding::{self, Binding, BindingKind},
    error::{BindingError, Error, ParseError},
    evaluate_with,
};

fn assert_binding_error(result: Result<f64, Error>, expected: BindingError) {
    assert_eq!(result, Err(Error::Binding(expected)));
}

#[test]
fn variables_and_constants_resolve() {
    let mut x = 4.0;
    let bindings = [Binding::variable("x", &mut x), Binding::constant("y", 9.0)];

    assert_eq!(evaluate_with("x+1", &bindings), Ok(5.0));
    assert_eq!(evaluate_with("y", &bindings), Ok(9.0));
    assert_eq!(evaluate_with("x(y - 7)", &bindings), Ok(8.0));
    assert_eq!(evaluate_with("-2 * x", &bindings), Ok(-8.0));
}

#[test]
fn identifiers_match_longest_run_and_case() {
    let bindings = [Binding::constant("x", 1.0),
                    Binding::constant("xy", 10.0),
                    Binding::constant("X", 100.0)];

    assert_eq!(evaluate_with("xy+x", &bindings), Ok(11.0));
    assert_eq!(evaluate_with("X-x", &bindings), Ok(99.0));
    assert_binding_error(evaluate_with("xyz", &bindings),
                         BindingError::UnknownIdentifier { name:  "xyz".to_string(),
                                                           index: 0, });
}

#[test]
fn first_duplicate_wins() {
    let bindings = [Binding::constant("a", 1.0), Binding::constant("a", 2.0)];
    assert_eq!(evaluate_with("a", &bindings), Ok(1.0));
}

#[test]
fn unknown_identifier_is_error() {
    let bindings = [Binding::constant("a", 1.0)];
    assert_binding_error(evaluate_with("a * (z + 1)", &bindings),
                         BindingError::UnknownIdentifier { name:  "z".to_string(),
                                                           index: 5, });
}

#[test]
fn value_after_identifier_needs_operator() {
    let bindings = [Binding::constant("x", 1.0)];
    assert_eq!(evaluate_with("2x", &bindings),
               Err(Error::Parse(ParseError::MissingOperator { index: 1 })));
}

#[test]
fn invalid_binding_names_are_rejected() {
    let bindings = [Binding::constant("ok", 1.0),
                    Binding::constant("bad name", 2.0),
                    Binding::constant("9lives", 3.0)];

    assert_binding_error(evaluate_with("ok", &bindings),
                         BindingError::InvalidBindingName { name: "bad name".to_string() });
    assert_eq!(binding::validate(&[Binding::constant("", 0.0)]),
               Err(BindingError::InvalidBindingName { name: String::new() }));
    assert_eq!(binding::validate(&[Binding::constant("_under_score9", 0.0)]), Ok(()));
}

#[test]
fn resolve_reads_current_slot() {
    let mut slot = 1.5;
    let mut bindings = [Binding::variable("v", &mut slot), Binding::constant("c", 2.0)];

    let v = binding::resolve("v", &bindings).unwrap();
    assert_eq!(v.kind(), BindingKind::Variable);
    assert_eq!(v.value(), 1.5);
    assert!(binding::resolve("vv", &bindings).is_none());

    binding::resolve_mutable("v", &mut bindings).unwrap().store(7.0).unwrap();
    assert_eq!(binding::resolve("v", &bindings).unwrap().value(), 7.0);
    assert_eq!(binding::resolve_mutable("c", &mut bindings).unwrap_err(),
               BindingError::ImmutableTarget { name: "c".to_string() });
    assert_eq!(binding::resolve_mutable("w", &mut bindings).unwrap_err(),
               BindingError::UnknownTarget { name: "w".to_string() });
}

#[test]
fn assignment_writes_through_variable() {
    let mut x = 0.0;
    assert_eq!(assign("x = 3*4", &mut [Binding::variable("x", &mut x)]), Ok(12.0));
    assert_eq!(x, 12.0);

    assert_eq!(assign("  x=x+1  ", &mut [Binding::variable("x", &mut x)]), Ok(13.0));
    assert_eq!(x, 13.0);
}

#[test]
fn assignment_uses_other_bindings() {
    let mut total = 0.0;
    let mut count = 4.0;
    let mut bindings = [Binding::variable("total", &mut total),
                        Binding::variable("count", &mut count),
                        Binding::constant("price", 2.5)];

    assign("total = count * price", &mut bindings).unwrap();
    assign("count = count - 1", &mut bindings).unwrap();
    assert_eq!(evaluate_with("total / count", &bindings), Ok(10.0 / 3.0));

    assert_eq!(total, 10.0);
    assert_eq!(count, 3.0);
}

#[test]
fn assignment_to_constant_fails() {
    assert_binding_error(assign("x = 1", &mut [Binding::constant("x", 1.0)]),
                         BindingError::ImmutableTarget { name: "x".to_string() });
}

#[test]
fn assignment_to_unknown_target_fails() {
    let mut x = 0.0;
    assert_binding_error(assign("w = 1", &mut [Binding::variable("x", &mut x)]),
                         BindingError::UnknownTarget { name: "w".to_string() });
}

#[test]
fn malformed_assignments_fail() {
    let mut x = 5.0;
    let mut y = 6.0;
    let mut bindings = [Binding::variable("x", &mut x), Binding::variable("y", &mut y)];

    let cases = [("x 3*4", ParseError::NoAssignmentOperator),
                 ("x = 1 = 2", ParseError::MultipleAssignmentOperators { index: 6 }),
                 (" = 4", ParseError::MissingAssignmentTarget),
                 ("x y = 1", ParseError::MultipleAssignmentTargets { index: 2 }),
                 ("3 = 4", ParseError::InvalidCharacter { character: '3',
                                                          index:     0, }),
                 ("x+ = 1", ParseError::InvalidCharacter { character: '+',
                                                           index:     1, }),
                 ("x = 1 +", ParseError::MissingOperand { index: 7 }),
                 ("x = 2 $ 3", ParseError::InvalidCharacter { character: '$',
                                                              index:     6, })];

    for (src, expected) in cases {
        assert_eq!(assign(src, &mut bindings),
                   Err(Error::Parse(expected)),
                   "Assignment {src:?}");
    }

    assert_eq!(x, 5.0);
    assert_eq!(y, 6.0);
}

#[test]
fn assignment_validates_bindings() {
    let mut x = 0.0;
    let mut bindings = [Binding::variable("x", &mut x), Binding::constant("not valid", 1.0)];

    assert_binding_error(assign("x = 1", &mut bindings),
                         BindingError::InvalidBindingName { name: "not valid".to_string() });
}

#[test]
fn failed_right_hand_side_leaves_slot_untouched() {
    let mut x = 1.0;
    let result = assign("x = x + missing", &mut [Binding::variable("x", &mut x)]);

    assert_binding_error(result,
                         BindingError::UnknownIdentifier { name:  "missing".to_string(),
                                                           index: 8, });
    assert_eq!(x, 1.0);
}
