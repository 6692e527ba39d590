use std::borrow::Cow;

use crate::predicate::Operator;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Операнд не может быть напечатан как SQL-литерал (NaN, inf и т.п.)
    #[error("Unsupported operand: {reason}")]
    UnsupportedOperand { reason: Cow<'static, str> },

    /// Повторное завершение уже закрытого предиката
    #[error("Predicate already completed with `{operator}`; no further comparison may be appended")]
    AlreadyCompleted { operator: Operator },

    /// Предикат без оператора и правой части
    #[error("Incomplete predicate at entry {position}: missing operator and right expression")]
    IncompletePredicate { position: usize },
}

impl Error {
    #[inline]
    pub(crate) fn unsupported<R: Into<Cow<'static, str>>>(reason: R) -> Self {
        Error::UnsupportedOperand {
            reason: reason.into(),
        }
    }

    /// Проставляет в `IncompletePredicate` номер звена, где он найден.
    #[inline]
    pub(crate) fn at_position(self, position: usize) -> Self {
        match self {
            Error::IncompletePredicate { .. } => Error::IncompletePredicate { position },
            other => other,
        }
    }
}
