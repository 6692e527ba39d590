mod __tests__;
use crate::error::Result;
use crate::renderer::writer::SqlWriter;

pub mod helpers;
pub mod operand;

pub use helpers::{deferred, lit, null, placeholder};
pub use operand::{Literal, Operand, Thunk};

/// Одна сторона сравнения. Неизменяема после создания.
#[derive(Clone, Debug)]
pub struct Expression {
    pub(crate) operand: Operand,
}

impl Expression {
    pub fn new<T: Into<Operand>>(operand: T) -> Self {
        Self {
            operand: operand.into(),
        }
    }

    #[inline]
    pub fn operand(&self) -> &Operand {
        &self.operand
    }

    /// Печатает операнд в writer. Отложенный операнд вызывается здесь,
    /// и его результат проходит через то же правило форматирования.
    pub(crate) fn write(&self, w: &mut SqlWriter) -> Result<()> {
        match &self.operand {
            Operand::Literal(lit) => lit.write(w),
            Operand::Deferred(f) => f().write(w),
        }
    }
}
