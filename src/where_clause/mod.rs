mod anchor;
mod core_fn;
mod entry;

pub use anchor::ClauseAnchor;
pub use entry::{ClauseEntry, Conjunction};

use smallvec::SmallVec;

use crate::error::Result;
use crate::expression::{Expression, Operand};
use crate::param::Param;
use crate::predicate::{OpenPredicate, Predicate};
use crate::renderer::{RenderCfg, writer::SqlWriter};

/// WHERE <pred> [AND|OR <pred> ...]
///
/// Плоская цепочка без скобок и приоритетов: порядок звеньев сохраняется
/// ровно таким, каким его построил вызывающий.
#[derive(Clone, Debug)]
pub struct WhereClause {
    pub(crate) head: Predicate,
    pub(crate) tail: SmallVec<[(Conjunction, Predicate); 4]>,
    pub(crate) values: SmallVec<[Param; 8]>,
}

impl WhereClause {
    /// Открывает первый предикат; после сравнения возвращается клауза.
    ///
    /// ```
    /// use knux_where::WhereClause;
    ///
    /// let sql = WhereClause::start("title").eq("shirt").render().unwrap();
    /// assert_eq!(sql, "\nWHERE \"title\" = \"shirt\"");
    /// ```
    pub fn start<L: Into<Operand>>(left: L) -> OpenPredicate<ClauseAnchor> {
        OpenPredicate::new(Expression::new(left), ClauseAnchor::start())
    }

    /// AND <pred>
    pub fn and<L: Into<Operand>>(self, left: L) -> OpenPredicate<ClauseAnchor> {
        self.chain(Conjunction::And, left)
    }

    /// OR <pred>
    pub fn or<L: Into<Operand>>(self, left: L) -> OpenPredicate<ClauseAnchor> {
        self.chain(Conjunction::Or, left)
    }

    pub fn render(&self) -> Result<String> {
        self.render_with(&RenderCfg::default())
    }

    /// Печатает `WHERE` и все звенья по порядку. Первый незавершённый
    /// предикат даёт `IncompletePredicate` с его позицией.
    pub fn render_with(&self, cfg: &RenderCfg) -> Result<String> {
        let mut w = SqlWriter::new(32 + 48 * self.entry_count(), cfg);
        if cfg.leading_newline {
            w.push_char('\n');
        }
        w.push(cfg.keyword.as_str());
        w.push_char(' ');

        for (i, entry) in self.entries().enumerate() {
            if let ClauseEntry::Chained(conjunction, _) = entry {
                w.push_break(cfg.layout);
                w.push(conjunction.as_str());
                w.push_char(' ');
            }
            entry
                .predicate()
                .write(&mut w)
                .map_err(|e| e.at_position(i))?;
        }

        let out = w.finish();
        tracing::debug!(
            entries = self.entry_count(),
            bytes = out.len(),
            "where clause rendered"
        );
        Ok(out)
    }

    /// Фрагмент и привязанные значения — для того, кто исполняет запрос.
    pub fn into_parts(self) -> Result<(String, Vec<Param>)> {
        let sql = self.render()?;
        Ok((sql, self.values.into_vec()))
    }
}
