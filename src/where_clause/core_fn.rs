use smallvec::SmallVec;

use super::{ClauseAnchor, ClauseEntry, Conjunction, WhereClause};
use crate::error::{Error, Result};
use crate::expression::{Expression, Operand};
use crate::param::Param;
use crate::predicate::{OpenPredicate, Predicate};

impl WhereClause {
    /// Клауза из одного (возможно, ещё открытого) предиката.
    pub fn from_predicate(predicate: Predicate) -> Self {
        Self {
            head: predicate,
            tail: SmallVec::new(),
            values: SmallVec::new(),
        }
    }

    #[inline]
    pub(crate) fn chain<L: Into<Operand>>(
        self,
        conjunction: Conjunction,
        left: L,
    ) -> OpenPredicate<ClauseAnchor> {
        tracing::trace!(%conjunction, position = self.entry_count(), "chained predicate opened");
        OpenPredicate::new(Expression::new(left), ClauseAnchor::chain(self, conjunction))
    }

    /// Низкоуровневое добавление звена.
    ///
    /// Текущий предикат обязан быть завершён, иначе `IncompletePredicate`.
    /// Добавляемый предикат может быть открытым — тогда упадёт рендер.
    pub fn push(&mut self, conjunction: Conjunction, predicate: Predicate) -> Result<()> {
        if !self.current().is_done() {
            return Err(Error::IncompletePredicate {
                position: self.entry_count() - 1,
            });
        }
        tracing::trace!(%conjunction, position = self.entry_count(), "predicate pushed");
        self.tail.push((conjunction, predicate));
        Ok(())
    }

    /// Звенья в порядке добавления.
    pub fn entries(&self) -> impl Iterator<Item = ClauseEntry<'_>> + '_ {
        std::iter::once(ClauseEntry::First(&self.head)).chain(
            self.tail
                .iter()
                .map(|(conjunction, p)| ClauseEntry::Chained(*conjunction, p)),
        )
    }

    /// Последний добавленный предикат — точка продолжения цепочки.
    pub fn current(&self) -> &Predicate {
        self.tail.last().map_or(&self.head, |(_, p)| p)
    }

    #[inline]
    pub fn entry_count(&self) -> usize {
        1 + self.tail.len()
    }

    // ---- bound values ----

    /// Добавляет внешнее значение; возвращает новую длину списка.
    pub fn push_value<V: Into<Param>>(&mut self, value: V) -> usize {
        self.values.push(value.into());
        self.values.len()
    }

    #[inline]
    pub fn values(&self) -> &[Param] {
        &self.values
    }
}
