use std::{fmt, sync::Arc};

use crate::error::{Error, Result};
use crate::renderer::writer::SqlWriter;

/// Литерал, который умеет печатать рендерер.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Null,
    /// Ссылка на внешнее значение из `WhereClause::values`
    Placeholder,
}

impl Literal {
    pub(crate) fn write(&self, w: &mut SqlWriter) -> Result<()> {
        match self {
            Literal::Str(s) => w.push_quoted(s),
            Literal::Int(n) => w.push_i64(*n),
            Literal::Float(f) => {
                if !f.is_finite() {
                    return Err(Error::unsupported(format!(
                        "non-finite number `{f}` has no SQL literal form"
                    )));
                }
                w.push(float_text(*f));
            }
            Literal::Bool(true) => w.push("TRUE"),
            Literal::Bool(false) => w.push("FALSE"),
            Literal::Null => w.push("NULL"),
            Literal::Placeholder => w.push_placeholder(),
        }
        Ok(())
    }
}

/// Десятичная запись без экспоненты и разделителей; `-0` печатается как `0`.
#[inline]
pub(crate) fn float_text(f: f64) -> String {
    if f == 0.0 { "0".to_string() } else { f.to_string() }
}

pub type Thunk = Arc<dyn Fn() -> Literal + Send + Sync>;

/// Операнд сравнения: литерал или отложенное значение.
#[derive(Clone)]
pub enum Operand {
    Literal(Literal),
    /// Вычисляется при каждом рендере, результат форматируется как литерал
    Deferred(Thunk),
}

impl Operand {
    /// Литерал операнда; отложенный операнд вызывается.
    pub fn resolve(&self) -> Literal {
        match self {
            Operand::Literal(lit) => lit.clone(),
            Operand::Deferred(f) => f(),
        }
    }

    #[inline]
    pub fn is_deferred(&self) -> bool {
        matches!(self, Operand::Deferred(_))
    }
}

impl fmt::Debug for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Literal(lit) => f.debug_tuple("Literal").field(lit).finish(),
            Operand::Deferred(_) => f.write_str("Deferred(<fn>)"),
        }
    }
}

// ---- From impls ----
impl From<Literal> for Operand {
    fn from(v: Literal) -> Self {
        Operand::Literal(v)
    }
}

impl From<&str> for Literal {
    fn from(v: &str) -> Self {
        Literal::Str(v.to_string())
    }
}
impl From<String> for Literal {
    fn from(v: String) -> Self {
        Literal::Str(v)
    }
}
impl From<&String> for Literal {
    fn from(v: &String) -> Self {
        Literal::Str(v.clone())
    }
}
impl From<i32> for Literal {
    fn from(v: i32) -> Self {
        Literal::Int(v.into())
    }
}
impl From<i64> for Literal {
    fn from(v: i64) -> Self {
        Literal::Int(v)
    }
}
impl From<u32> for Literal {
    fn from(v: u32) -> Self {
        Literal::Int(v.into())
    }
}
impl From<f32> for Literal {
    /// Через кратчайшую запись f32: 0.1f32 остаётся 0.1, а не 0.10000000149011612.
    fn from(v: f32) -> Self {
        Literal::Float(v.to_string().parse().unwrap_or_else(|_| v.into()))
    }
}
impl From<f64> for Literal {
    fn from(v: f64) -> Self {
        Literal::Float(v)
    }
}
impl From<bool> for Literal {
    fn from(v: bool) -> Self {
        Literal::Bool(v)
    }
}
impl<T: Into<Literal>> From<Option<T>> for Literal {
    fn from(v: Option<T>) -> Self {
        v.map_or(Literal::Null, Into::into)
    }
}

macro_rules! operand_from_literal {
    ($($t:ty),* $(,)?) => {
        $(
            impl From<$t> for Operand {
                #[inline]
                fn from(v: $t) -> Self {
                    Operand::Literal(v.into())
                }
            }
        )*
    };
}

operand_from_literal!(&str, String, &String, i32, i64, u32, f32, f64, bool);
