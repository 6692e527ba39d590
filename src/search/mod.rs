
use crate::error::Result;
use crate::expression::placeholder;
use crate::param::Param;
use crate::where_clause::WhereClause;

/// Расширение поиска: получает текущий фильтр, возвращает новый.
pub trait SearchExtension {
    fn search(&self, filter: WhereClause) -> WhereClause;
}

impl<F> SearchExtension for F
where
    F: Fn(WhereClause) -> WhereClause,
{
    #[inline]
    fn search(&self, filter: WhereClause) -> WhereClause {
        self(filter)
    }
}

/// Поисковый фильтр: расширяется плагинами, термы кладутся в `values`.
#[derive(Clone, Debug)]
pub struct Search {
    filter: WhereClause,
}

impl Default for Search {
    /// `WHERE "title" = ?`
    fn default() -> Self {
        Self {
            filter: WhereClause::start("title").eq(placeholder()),
        }
    }
}

impl Search {
    pub fn new(filter: WhereClause) -> Self {
        Self { filter }
    }

    /// Заменяет фильтр результатом расширения. Значения переезжают вместе
    /// с клаузой, если расширение их не сбросило.
    pub fn extend<E: SearchExtension>(self, extension: E) -> Self {
        let filter = extension.search(self.filter);
        tracing::debug!(entries = filter.entry_count(), "search filter extended");
        Self { filter }
    }

    /// Кладёт поисковый терм в `values`; возвращает их количество.
    pub fn search<Q: Into<Param>>(&mut self, query: Q) -> usize {
        self.filter.push_value(query)
    }

    #[inline]
    pub fn filter(&self) -> &WhereClause {
        &self.filter
    }

    /// Отрендеренный фильтр и накопленные значения.
    pub fn bound(&self) -> Result<(String, Vec<Param>)> {
        let sql = self.filter.render()?;
        Ok((sql, self.filter.values().to_vec()))
    }
}
