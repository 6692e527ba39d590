//! Чейнящийся билдер плоских `WHERE`-условий.
//!
//! ```
//! use knux_where::WhereClause;
//!
//! let sql = WhereClause::start("foo")
//!     .eq("bar")
//!     .and("baz")
//!     .lte(42)
//!     .or("qux")
//!     .not_like("corge")
//!     .render()
//!     .unwrap();
//!
//! assert_eq!(
//!     sql,
//!     "\nWHERE \"foo\" = \"bar\"\n  AND \"baz\" <= 42\n  OR \"qux\" NOT LIKE \"corge\""
//! );
//! ```

mod __tests__;
pub mod error;
pub mod expression;
pub mod param;
pub mod predicate;
pub mod renderer;
pub mod search;
pub mod where_clause;

pub use error::{Error, Result};
pub use expression::{Expression, Literal, Operand, deferred, lit, null, placeholder};
pub use param::Param;
pub use predicate::{Comparison, OpenPredicate, Operator, Predicate, PredicateState, Standalone};
pub use renderer::RenderCfg;
pub use search::{Search, SearchExtension};
pub use where_clause::{ClauseAnchor, ClauseEntry, Conjunction, WhereClause};
