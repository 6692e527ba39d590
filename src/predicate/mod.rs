mod cmp;
mod open;
pub mod operator;

pub use open::{OpenPredicate, PredicateOwner, Standalone};
pub use operator::Operator;

use crate::error::{Error, Result};
use crate::expression::{Expression, Operand};
use crate::renderer::{RenderCfg, writer::SqlWriter};

/// Завершённое сравнение `left op right`.
#[derive(Clone, Debug)]
pub struct Comparison {
    pub left: Expression,
    pub operator: Operator,
    pub right: Expression,
}

impl Comparison {
    pub fn new(left: Expression, operator: Operator, right: Expression) -> Self {
        Self {
            left,
            operator,
            right,
        }
    }

    pub(crate) fn write(&self, w: &mut SqlWriter) -> Result<()> {
        self.left.write(w)?;
        w.push_char(' ');
        w.push(self.operator.as_str());
        w.push_char(' ');
        self.right.write(w)
    }
}

#[derive(Clone, Debug)]
pub enum PredicateState {
    /// Есть только левая часть, ждём оператор и правую
    Open { left: Expression },
    Done(Comparison),
}

/// Предикат с проверкой состояния во время выполнения.
///
/// Чейнящийся API (`WhereClause::start`, `Predicate::standalone`) открытый
/// предикат наружу не выпускает; этот тип — для ручной сборки клауз.
#[derive(Clone, Debug)]
pub struct Predicate {
    state: PredicateState,
}

impl Predicate {
    /// Открытый предикат, только левая часть.
    pub fn open<L: Into<Operand>>(left: L) -> Self {
        Self {
            state: PredicateState::Open {
                left: Expression::new(left),
            },
        }
    }

    /// Предикат без владельца: сравнение возвращает готовый `Predicate`.
    pub fn standalone<L: Into<Operand>>(left: L) -> OpenPredicate<Standalone> {
        OpenPredicate::new(Expression::new(left), Standalone)
    }

    #[inline]
    pub fn state(&self) -> &PredicateState {
        &self.state
    }

    #[inline]
    pub fn is_done(&self) -> bool {
        matches!(self.state, PredicateState::Done(_))
    }

    pub fn comparison(&self) -> Option<&Comparison> {
        match &self.state {
            PredicateState::Done(c) => Some(c),
            PredicateState::Open { .. } => None,
        }
    }

    pub fn left(&self) -> &Expression {
        match &self.state {
            PredicateState::Open { left } => left,
            PredicateState::Done(c) => &c.left,
        }
    }

    /// Закрывает предикат. Второй вызов — `AlreadyCompleted`.
    pub fn complete<R: Into<Operand>>(&mut self, operator: Operator, right: R) -> Result<()> {
        let left = match &self.state {
            PredicateState::Open { left } => left.clone(),
            PredicateState::Done(c) => {
                return Err(Error::AlreadyCompleted {
                    operator: c.operator,
                });
            }
        };
        tracing::trace!(%operator, "predicate completed");
        self.state = PredicateState::Done(Comparison::new(left, operator, Expression::new(right)));
        Ok(())
    }

    pub fn render(&self) -> Result<String> {
        self.render_with(&RenderCfg::default())
    }

    /// Печатает `left op right` без ключевого слова.
    pub fn render_with(&self, cfg: &RenderCfg) -> Result<String> {
        let mut w = SqlWriter::new(64, cfg);
        self.write(&mut w)?;
        Ok(w.finish())
    }

    pub(crate) fn write(&self, w: &mut SqlWriter) -> Result<()> {
        match &self.state {
            PredicateState::Done(c) => c.write(w),
            PredicateState::Open { .. } => Err(Error::IncompletePredicate { position: 0 }),
        }
    }
}

impl From<Comparison> for Predicate {
    fn from(c: Comparison) -> Self {
        Self {
            state: PredicateState::Done(c),
        }
    }
}
