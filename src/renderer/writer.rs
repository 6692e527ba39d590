use super::config::{EscapeMode, Layout, PlaceholderStyle, QuoteStyle, RenderCfg};

pub struct SqlWriter {
    pub buf: String,
    pub next_param_idx: usize, // 1-based для $1/$2..., игнорится при '?'
    pub placeholders: PlaceholderStyle,
    quote: QuoteStyle,
    escape: EscapeMode,
}

impl SqlWriter {
    pub fn new(cap: usize, cfg: &RenderCfg) -> Self {
        Self {
            buf: String::with_capacity(cap),
            next_param_idx: 1,
            placeholders: cfg.placeholders,
            quote: cfg.quote,
            escape: cfg.escape,
        }
    }

    #[inline]
    pub fn push<S: AsRef<str>>(&mut self, s: S) {
        self.buf.push_str(s.as_ref());
    }

    #[inline]
    pub fn push_char(&mut self, c: char) {
        self.buf.push(c);
    }

    /// Вставляет плейсхолдер (увеличивая счётчик при Numbered)
    pub fn push_placeholder(&mut self) {
        match self.placeholders {
            PlaceholderStyle::Question => self.push("?"),
            PlaceholderStyle::Numbered => {
                let i = self.next_param_idx;
                self.next_param_idx += 1;
                // $1, $2...
                self.buf.push('$');
                self.push_u64(i as u64);
            }
        }
    }

    /// Строковый литерал в кавычках текущего стиля.
    pub fn push_quoted(&mut self, s: &str) {
        let q = self.quote.delimiter();
        self.buf.push(q);
        match self.escape {
            EscapeMode::Verbatim => self.buf.push_str(s),
            EscapeMode::Double => {
                for c in s.chars() {
                    if c == q {
                        self.buf.push(q);
                    }
                    self.buf.push(c);
                }
            }
        }
        self.buf.push(q);
    }

    #[inline]
    pub fn push_u64(&mut self, v: u64) {
        use itoa::Buffer;
        let mut buf = Buffer::new();
        self.buf.push_str(buf.format(v));
    }

    #[inline]
    pub fn push_i64(&mut self, v: i64) {
        use itoa::Buffer;
        let mut buf = Buffer::new();
        self.buf.push_str(buf.format(v));
    }

    /// Разделитель между звеньями цепочки условий.
    pub fn push_break(&mut self, layout: Layout) {
        match layout {
            Layout::Multiline { indent } => {
                self.buf.push('\n');
                self.buf.extend(std::iter::repeat_n(' ', indent));
            }
            Layout::SingleLine => self.buf.push(' '),
        }
    }

    pub fn finish(self) -> String {
        self.buf
    }
}
