use super::operand::{Literal, Operand};
use std::sync::Arc;

/// Явный литерал: lit("shirt"), lit(42)
pub fn lit<T: Into<Literal>>(v: T) -> Operand {
    Operand::Literal(v.into())
}

/// Отложенный операнд: значение берётся в момент рендера.
///
/// ```
/// use knux_where::{WhereClause, deferred};
///
/// let sql = WhereClause::start("stock").gt(deferred(|| 10)).render().unwrap();
/// assert_eq!(sql, "\nWHERE \"stock\" > 10");
/// ```
pub fn deferred<F, T>(f: F) -> Operand
where
    F: Fn() -> T + Send + Sync + 'static,
    T: Into<Literal>,
{
    Operand::Deferred(Arc::new(move || f().into()))
}

/// Плейсхолдер `?` / `$n` для значения из `values`
pub fn placeholder() -> Operand {
    Operand::Literal(Literal::Placeholder)
}

pub fn null() -> Operand {
    Operand::Literal(Literal::Null)
}
