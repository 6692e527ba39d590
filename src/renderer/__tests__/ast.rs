use sqlparser::ast::{BinaryOperator as BO, Expr as SqlExpr, Value};

use crate::error::Error;
use crate::expression::{deferred, null, placeholder};
use crate::predicate::{Operator, Predicate};
use crate::renderer::{Lowering, RenderCfg, cfg_postgres};
use crate::where_clause::WhereClause;

fn value_of(e: &SqlExpr) -> &Value {
    match e {
        SqlExpr::Value(v) => &v.value,
        other => panic!("expected Value, got {:?}", other),
    }
}

#[test]
fn comparison_lowers_to_binary_op() {
    let e = Predicate::standalone("a").gte(5).to_sql_expr().unwrap();
    match e {
        SqlExpr::BinaryOp { left, op, right } => {
            assert_eq!(op, BO::GtEq);
            assert_eq!(value_of(&left), &Value::DoubleQuotedString("a".into()));
            assert_eq!(value_of(&right), &Value::Number("5".into(), false));
        }
        other => panic!("expected BinaryOp, got {:?}", other),
    }
}

#[test]
fn in_and_like_use_dedicated_nodes() {
    let e = Predicate::standalone("a").not_in("x").to_sql_expr().unwrap();
    assert!(matches!(e, SqlExpr::InList { negated: true, ref list, .. } if list.len() == 1));

    let e = Predicate::standalone("a").like("%x%").to_sql_expr().unwrap();
    assert!(matches!(e, SqlExpr::Like { negated: false, .. }));
}

#[test]
fn is_variants() {
    let lower = |p: Predicate| p.to_sql_expr().unwrap();
    assert!(matches!(lower(Predicate::standalone("a").is(null())), SqlExpr::IsNull(_)));
    assert!(matches!(lower(Predicate::standalone("a").is_not(null())), SqlExpr::IsNotNull(_)));
    assert!(matches!(lower(Predicate::standalone("a").is(true)), SqlExpr::IsTrue(_)));
    assert!(matches!(lower(Predicate::standalone("a").is_not(false)), SqlExpr::IsNotFalse(_)));
    assert!(matches!(
        lower(Predicate::standalone("a").is(1)),
        SqlExpr::IsNotDistinctFrom(_, _)
    ));
    assert!(matches!(
        lower(Predicate::standalone("a").is_not("b")),
        SqlExpr::IsDistinctFrom(_, _)
    ));
}

#[test]
fn clause_folds_left_to_right() {
    // ((a = 1 AND b = 2) OR c = 3)
    let w = WhereClause::start("a")
        .eq(1)
        .and("b")
        .eq(2)
        .or("c")
        .eq(3);
    match w.to_sql_expr().unwrap() {
        SqlExpr::BinaryOp { left, op, right } => {
            assert_eq!(op, BO::Or);
            assert!(matches!(*left, SqlExpr::BinaryOp { op: BO::And, .. }));
            assert!(matches!(*right, SqlExpr::BinaryOp { op: BO::Eq, .. }));
        }
        other => panic!("expected OR at top, got {:?}", other),
    }
}

#[test]
fn single_entry_clause_is_the_predicate() {
    let w = WhereClause::start("a").lt(deferred(|| 3));
    assert!(matches!(w.to_sql_expr().unwrap(), SqlExpr::BinaryOp { op: BO::Lt, .. }));
}

#[test]
fn postgres_cfg_numbers_placeholders_and_single_quotes() {
    let w = WhereClause::start("a")
        .eq(placeholder())
        .and("b")
        .eq(placeholder());
    let mut lowering = Lowering::new(&cfg_postgres());
    let e = lowering.clause(&w).unwrap();
    assert_eq!(e.to_string(), "'a' = $1 AND 'b' = $2");
}

#[test]
fn open_predicate_and_nan_fail() {
    assert_eq!(
        Predicate::open("a").to_sql_expr().unwrap_err(),
        Error::IncompletePredicate { position: 0 }
    );

    let w = WhereClause::start("a").eq(f64::INFINITY);
    assert!(matches!(
        w.to_sql_expr_with(&RenderCfg::default()),
        Err(Error::UnsupportedOperand { .. })
    ));

    let mut p = Predicate::open("a");
    p.complete(Operator::Eq, f64::NAN).unwrap();
    assert!(p.to_sql_expr().is_err());
}

#[test]
fn float_lowering_matches_text_rendering() {
    let e = Predicate::standalone("p").eq(-0.0).to_sql_expr().unwrap();
    assert_eq!(e.to_string(), "\"p\" = 0");

    let e = Predicate::standalone("p").eq(0.1f32).to_sql_expr().unwrap();
    assert_eq!(e.to_string(), "\"p\" = 0.1");
}
