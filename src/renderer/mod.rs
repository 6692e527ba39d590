mod __tests__;
pub mod ast;
mod config;
pub(crate) mod writer;

pub use ast::Lowering;
pub use config::{EscapeMode, Keyword, Layout, PlaceholderStyle, QuoteStyle, RenderCfg};

/// Удобные пресеты
pub fn cfg_default() -> RenderCfg {
    RenderCfg::default()
}

/// `WHERE a = 1 AND b = 2` одной строкой, без ведущего перевода строки
pub fn cfg_single_line() -> RenderCfg {
    RenderCfg {
        leading_newline: false,
        layout: Layout::SingleLine,
        ..RenderCfg::default()
    }
}

/// Строки в одинарных кавычках с удвоением, плейсхолдеры $1, $2...
pub fn cfg_postgres() -> RenderCfg {
    RenderCfg {
        leading_newline: false,
        keyword: Keyword::Where,
        layout: Layout::Multiline { indent: 2 },
        quote: QuoteStyle::Single,
        escape: EscapeMode::Double,
        placeholders: PlaceholderStyle::Numbered,
    }
}
