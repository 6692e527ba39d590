//! Перевод построенных клауз в AST `sqlparser`.
//!
//! Звенья цепочки сворачиваются слева направо в `AND`/`OR`, ровно в порядке
//! построения; перегруппировки нет.

use sqlparser::ast::{BinaryOperator as BO, Expr as SqlExpr, Value};

use super::config::{PlaceholderStyle, QuoteStyle, RenderCfg};
use crate::error::{Error, Result};
use crate::expression::operand::float_text;
use crate::expression::{Expression, Literal};
use crate::predicate::{Comparison, Operator, Predicate};
use crate::where_clause::{ClauseEntry, Conjunction, WhereClause};

#[inline]
fn bin(left: Box<SqlExpr>, op: BO, right: Box<SqlExpr>) -> SqlExpr {
    SqlExpr::BinaryOp { left, op, right }
}

/// Состояние одного прохода: стиль литералов и счётчик `$n`.
pub struct Lowering {
    quote: QuoteStyle,
    placeholders: PlaceholderStyle,
    next_param_idx: usize,
}

impl Lowering {
    pub fn new(cfg: &RenderCfg) -> Self {
        Self {
            quote: cfg.quote,
            placeholders: cfg.placeholders,
            next_param_idx: 1,
        }
    }

    pub fn literal(&mut self, lit: Literal) -> Result<SqlExpr> {
        let value = match lit {
            Literal::Str(s) => match self.quote {
                QuoteStyle::Double => Value::DoubleQuotedString(s),
                QuoteStyle::Single => Value::SingleQuotedString(s),
            },
            Literal::Int(n) => Value::Number(n.to_string(), false),
            Literal::Float(f) if f.is_finite() => Value::Number(float_text(f), false),
            Literal::Float(f) => {
                return Err(Error::unsupported(format!(
                    "non-finite number `{f}` has no SQL literal form"
                )));
            }
            Literal::Bool(b) => Value::Boolean(b),
            Literal::Null => Value::Null,
            Literal::Placeholder => match self.placeholders {
                PlaceholderStyle::Question => Value::Placeholder("?".into()),
                PlaceholderStyle::Numbered => {
                    let i = self.next_param_idx;
                    self.next_param_idx += 1;
                    Value::Placeholder(format!("${i}"))
                }
            },
        };
        Ok(SqlExpr::Value(value.into()))
    }

    #[inline]
    pub fn expression(&mut self, e: &Expression) -> Result<SqlExpr> {
        self.literal(e.operand().resolve())
    }

    pub fn comparison(&mut self, c: &Comparison) -> Result<SqlExpr> {
        let left = Box::new(self.expression(&c.left)?);

        // IS / IS NOT смотрят на правый литерал до его печати
        if matches!(c.operator, Operator::Is | Operator::IsNot) {
            let negated = c.operator == Operator::IsNot;
            return Ok(match (c.right.operand().resolve(), negated) {
                (Literal::Null, false) => SqlExpr::IsNull(left),
                (Literal::Null, true) => SqlExpr::IsNotNull(left),
                (Literal::Bool(true), false) => SqlExpr::IsTrue(left),
                (Literal::Bool(true), true) => SqlExpr::IsNotTrue(left),
                (Literal::Bool(false), false) => SqlExpr::IsFalse(left),
                (Literal::Bool(false), true) => SqlExpr::IsNotFalse(left),
                (other, false) => SqlExpr::IsNotDistinctFrom(left, Box::new(self.literal(other)?)),
                (other, true) => SqlExpr::IsDistinctFrom(left, Box::new(self.literal(other)?)),
            });
        }

        let right = Box::new(self.expression(&c.right)?);
        Ok(match c.operator {
            Operator::Eq => bin(left, BO::Eq, right),
            Operator::NotEq => bin(left, BO::NotEq, right),
            Operator::Gt => bin(left, BO::Gt, right),
            Operator::Lt => bin(left, BO::Lt, right),
            Operator::Gte => bin(left, BO::GtEq, right),
            Operator::Lte => bin(left, BO::LtEq, right),
            Operator::In | Operator::NotIn => SqlExpr::InList {
                expr: left,
                list: vec![*right],
                negated: c.operator == Operator::NotIn,
            },
            Operator::Like | Operator::NotLike => SqlExpr::Like {
                negated: c.operator == Operator::NotLike,
                any: false,
                expr: left,
                pattern: right,
                escape_char: None,
            },
            // IS / IS NOT уже обработаны выше
            Operator::Is => SqlExpr::IsNotDistinctFrom(left, right),
            Operator::IsNot => SqlExpr::IsDistinctFrom(left, right),
        })
    }

    pub fn predicate(&mut self, p: &Predicate) -> Result<SqlExpr> {
        match p.comparison() {
            Some(c) => self.comparison(c),
            None => Err(Error::IncompletePredicate { position: 0 }),
        }
    }

    pub fn clause(&mut self, clause: &WhereClause) -> Result<SqlExpr> {
        let mut combined: Option<SqlExpr> = None;
        for (i, entry) in clause.entries().enumerate() {
            let expr = self
                .predicate(entry.predicate())
                .map_err(|e| e.at_position(i))?;
            combined = Some(match (combined.take(), entry) {
                (Some(acc), ClauseEntry::Chained(conjunction, _)) => SqlExpr::BinaryOp {
                    left: Box::new(acc),
                    op: match conjunction {
                        Conjunction::And => BO::And,
                        Conjunction::Or => BO::Or,
                    },
                    right: Box::new(expr),
                },
                (_, _) => expr,
            });
        }
        // entries() всегда отдаёт хотя бы первый предикат
        combined.ok_or(Error::IncompletePredicate { position: 0 })
    }
}

impl Predicate {
    pub fn to_sql_expr(&self) -> Result<SqlExpr> {
        Lowering::new(&RenderCfg::default()).predicate(self)
    }
}

impl WhereClause {
    pub fn to_sql_expr(&self) -> Result<SqlExpr> {
        self.to_sql_expr_with(&RenderCfg::default())
    }

    pub fn to_sql_expr_with(&self, cfg: &RenderCfg) -> Result<SqlExpr> {
        Lowering::new(cfg).clause(self)
    }
}
