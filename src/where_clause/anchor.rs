use super::{Conjunction, WhereClause};
use crate::predicate::{Comparison, Predicate, PredicateOwner};

#[derive(Debug)]
enum Anchor {
    Start,
    Chain(Box<WhereClause>, Conjunction),
}

/// Владелец предиката внутри `WhereClause`: после сравнения
/// управление возвращается клаузе, а не предикату.
#[derive(Debug)]
pub struct ClauseAnchor(Anchor);

impl ClauseAnchor {
    #[inline]
    pub(crate) fn start() -> Self {
        Self(Anchor::Start)
    }

    #[inline]
    pub(crate) fn chain(clause: WhereClause, conjunction: Conjunction) -> Self {
        Self(Anchor::Chain(Box::new(clause), conjunction))
    }
}

impl PredicateOwner for ClauseAnchor {
    type Output = WhereClause;

    fn accept(self, comparison: Comparison) -> WhereClause {
        match self.0 {
            Anchor::Start => WhereClause::from_predicate(Predicate::from(comparison)),
            Anchor::Chain(mut clause, conjunction) => {
                clause.tail.push((conjunction, Predicate::from(comparison)));
                *clause
            }
        }
    }
}
