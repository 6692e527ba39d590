use super::{OpenPredicate, Operator, PredicateOwner};
use crate::expression::Operand;

impl<O: PredicateOwner> OpenPredicate<O> {
    pub fn eq<R: Into<Operand>>(self, right: R) -> O::Output {
        self.compare(Operator::Eq, right)
    }
    pub fn not_eq<R: Into<Operand>>(self, right: R) -> O::Output {
        self.compare(Operator::NotEq, right)
    }
    pub fn gt<R: Into<Operand>>(self, right: R) -> O::Output {
        self.compare(Operator::Gt, right)
    }
    pub fn gte<R: Into<Operand>>(self, right: R) -> O::Output {
        self.compare(Operator::Gte, right)
    }
    pub fn lt<R: Into<Operand>>(self, right: R) -> O::Output {
        self.compare(Operator::Lt, right)
    }
    pub fn lte<R: Into<Operand>>(self, right: R) -> O::Output {
        self.compare(Operator::Lte, right)
    }

    /// `IS` — обычно с `null()` или булевым значением
    pub fn is<R: Into<Operand>>(self, right: R) -> O::Output {
        self.compare(Operator::Is, right)
    }
    pub fn is_not<R: Into<Operand>>(self, right: R) -> O::Output {
        self.compare(Operator::IsNot, right)
    }

    /// `IN` — правая часть печатается как один литерал, без скобок
    pub fn r#in<R: Into<Operand>>(self, right: R) -> O::Output {
        self.compare(Operator::In, right)
    }

    #[inline]
    pub fn in_<R: Into<Operand>>(self, right: R) -> O::Output {
        self.r#in(right)
    }

    pub fn not_in<R: Into<Operand>>(self, right: R) -> O::Output {
        self.compare(Operator::NotIn, right)
    }
    pub fn like<R: Into<Operand>>(self, right: R) -> O::Output {
        self.compare(Operator::Like, right)
    }
    pub fn not_like<R: Into<Operand>>(self, right: R) -> O::Output {
        self.compare(Operator::NotLike, right)
    }
}
