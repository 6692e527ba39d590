use super::{Comparison, Operator, Predicate};
use crate::expression::{Expression, Operand};

/// Кому отдать управление после того, как сравнение завершено.
pub trait PredicateOwner {
    type Output;

    fn accept(self, comparison: Comparison) -> Self::Output;
}

/// Владельца нет: сравнение возвращает готовый `Predicate`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Standalone;

impl PredicateOwner for Standalone {
    type Output = Predicate;

    #[inline]
    fn accept(self, comparison: Comparison) -> Predicate {
        Predicate::from(comparison)
    }
}

/// Открытый предикат в цепочке.
///
/// Поглощается ровно одним методом сравнения: дважды его не завершить
/// и незавершённым в клаузе не оставить.
#[must_use = "an open predicate does nothing until a comparison completes it"]
#[derive(Debug)]
pub struct OpenPredicate<O> {
    left: Expression,
    owner: O,
}

impl<O: PredicateOwner> OpenPredicate<O> {
    pub(crate) fn new(left: Expression, owner: O) -> Self {
        Self { left, owner }
    }

    #[inline]
    pub fn left(&self) -> &Expression {
        &self.left
    }

    /// Общий путь для всех двенадцати операторов.
    pub fn compare<R: Into<Operand>>(self, operator: Operator, right: R) -> O::Output {
        let OpenPredicate { left, owner } = self;
        tracing::trace!(%operator, "predicate completed");
        owner.accept(Comparison::new(left, operator, Expression::new(right)))
    }
}
