use std::fmt::Display;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Keyword {
    #[default]
    Where,
    Having,
}

impl Keyword {
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Keyword::Where => "WHERE",
            Keyword::Having => "HAVING",
        }
    }
}

impl Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layout {
    /// Каждое звено цепочки на своей строке с отступом в `indent` пробелов
    Multiline { indent: usize },
    /// Всё в одну строку через пробел
    SingleLine,
}

impl Default for Layout {
    fn default() -> Self {
        Layout::Multiline { indent: 2 }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuoteStyle {
    /// "shirt"
    #[default]
    Double,
    /// 'shirt'
    Single,
}

impl QuoteStyle {
    #[inline]
    pub fn delimiter(&self) -> char {
        match self {
            QuoteStyle::Double => '"',
            QuoteStyle::Single => '\'',
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EscapeMode {
    /// Строка печатается как есть, кавычки внутри не экранируются
    #[default]
    Verbatim,
    /// Кавычка-разделитель внутри строки удваивается: a"b → "a""b"
    Double,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaceholderStyle {
    /// $1, $2, $3... (Postgres)
    Numbered,
    /// ? (SQLite/MySQL)
    #[default]
    Question,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderCfg {
    /// Перевод строки перед ключевым словом
    pub leading_newline: bool,
    pub keyword: Keyword,
    pub layout: Layout,
    pub quote: QuoteStyle,
    pub escape: EscapeMode,
    pub placeholders: PlaceholderStyle,
}

impl Default for RenderCfg {
    fn default() -> Self {
        Self {
            leading_newline: true,
            keyword: Keyword::Where,
            layout: Layout::default(),
            quote: QuoteStyle::Double,
            escape: EscapeMode::Verbatim,
            placeholders: PlaceholderStyle::Question,
        }
    }
}
