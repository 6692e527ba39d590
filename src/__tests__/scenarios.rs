use crate::{Error, Predicate, WhereClause, deferred};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn single_comparison_round_trip() {
    init_tracing();
    assert_eq!(
        WhereClause::start("title").eq("shirt").render().unwrap(),
        "\nWHERE \"title\" = \"shirt\""
    );
}

#[test]
fn three_entry_round_trip() {
    init_tracing();
    let sql = WhereClause::start("foo")
        .eq("bar")
        .and("baz")
        .lte(42)
        .or("qux")
        .not_like("corge")
        .render()
        .unwrap();

    let lines: Vec<&str> = sql.lines().collect();
    assert_eq!(
        lines,
        vec![
            "",
            r#"WHERE "foo" = "bar""#,
            r#"  AND "baz" <= 42"#,
            r#"  OR "qux" NOT LIKE "corge""#,
        ]
    );
}

#[test]
fn open_chain_fails_at_render() {
    // start("a").and("b") без сравнения: собираем вручную
    let mut w = WhereClause::from_predicate(Predicate::open("a"));
    assert!(matches!(
        w.push(crate::Conjunction::And, Predicate::open("b")),
        Err(Error::IncompletePredicate { position: 0 })
    ));
    assert!(matches!(
        w.render(),
        Err(Error::IncompletePredicate { .. })
    ));
}

#[test]
fn ownerless_predicate_renders_on_its_own() {
    let p = Predicate::standalone("shirt").eq(deferred(|| "x"));
    assert_eq!(p.render().unwrap(), r#""shirt" = "x""#);
}

#[test]
fn literal_formatting() {
    let p = |r: crate::Operand| Predicate::standalone(1).eq(r).render().unwrap();
    assert_eq!(p("shirt".into()), r#"1 = "shirt""#);
    assert_eq!(p(42.into()), "1 = 42");
    assert_eq!(p(deferred(|| "x")), r#"1 = "x""#);
}
