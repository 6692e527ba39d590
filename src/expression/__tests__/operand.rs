use crate::expression::{Expression, Literal, Operand};

#[test]
fn from_impls_pick_the_right_literal() {
    assert_eq!(Operand::from("a").resolve(), Literal::Str("a".into()));
    assert_eq!(Operand::from(String::from("b")).resolve(), Literal::Str("b".into()));
    assert_eq!(Operand::from(3i32).resolve(), Literal::Int(3));
    assert_eq!(Operand::from(4u32).resolve(), Literal::Int(4));
    assert_eq!(Operand::from(1.5f32).resolve(), Literal::Float(1.5));
    assert_eq!(Operand::from(0.1f32).resolve(), Literal::Float(0.1));
    assert_eq!(Operand::from(true).resolve(), Literal::Bool(true));
}

#[test]
fn option_none_becomes_null() {
    let none: Option<i64> = None;
    assert_eq!(Literal::from(none), Literal::Null);
    assert_eq!(Literal::from(Some(5i64)), Literal::Int(5));
}

#[test]
fn debug_hides_thunk_body() {
    let e = Expression::new(crate::expression::deferred(|| 1));
    assert!(e.operand().is_deferred());
    assert_eq!(format!("{:?}", e.operand()), "Deferred(<fn>)");
}

#[test]
fn expression_clone_shares_thunk() {
    let e = Expression::new(crate::expression::deferred(|| "v"));
    let c = e.clone();
    assert_eq!(e.operand().resolve(), c.operand().resolve());
}
