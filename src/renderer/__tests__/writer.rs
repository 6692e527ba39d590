use crate::renderer::config::{EscapeMode, Layout, PlaceholderStyle, QuoteStyle, RenderCfg};
use crate::renderer::writer::SqlWriter;

fn cfg(placeholders: PlaceholderStyle) -> RenderCfg {
    RenderCfg {
        placeholders,
        ..RenderCfg::default()
    }
}

#[test]
fn push_and_finish_basic() {
    let mut w = SqlWriter::new(16, &RenderCfg::default());
    w.push("WHERE ");
    w.push_char('a');
    w.push(" = ");
    let tbl = String::from("1");
    w.push(tbl); // проверяем, что принимает String (AsRef<str>)
    assert_eq!(w.finish(), "WHERE a = 1");
}

#[test]
fn question_placeholders_do_not_increment_index() {
    let mut w = SqlWriter::new(8, &cfg(PlaceholderStyle::Question));
    assert_eq!(w.next_param_idx, 1);
    w.push_placeholder();
    w.push_placeholder();
    w.push_placeholder();
    assert_eq!(w.next_param_idx, 1);
    assert_eq!(w.finish(), "???");
}

#[test]
fn numbered_placeholders_increment_index() {
    let mut w = SqlWriter::new(8, &cfg(PlaceholderStyle::Numbered));
    w.push_placeholder(); // $1
    w.push_placeholder(); // $2
    w.push_placeholder(); // $3
    assert_eq!(w.next_param_idx, 4);
    assert_eq!(w.finish(), "$1$2$3");
}

#[test]
fn integers_via_itoa() {
    let mut w = SqlWriter::new(8, &RenderCfg::default());
    w.push_i64(-42);
    w.push_char(' ');
    w.push_u64(18_446_744_073_709_551_615);
    assert_eq!(w.finish(), "-42 18446744073709551615");
}

#[test]
fn quoted_respects_style_and_escape() {
    let mut w = SqlWriter::new(8, &RenderCfg::default());
    w.push_quoted(r#"a"b"#);
    assert_eq!(w.finish(), r#""a"b""#);

    let single = RenderCfg {
        quote: QuoteStyle::Single,
        escape: EscapeMode::Double,
        ..RenderCfg::default()
    };
    let mut w = SqlWriter::new(8, &single);
    w.push_quoted("it's");
    assert_eq!(w.finish(), "'it''s'");
}

#[test]
fn breaks_follow_layout() {
    let mut w = SqlWriter::new(8, &RenderCfg::default());
    w.push("a");
    w.push_break(Layout::Multiline { indent: 3 });
    w.push("b");
    w.push_break(Layout::SingleLine);
    w.push("c");
    assert_eq!(w.finish(), "a\n   b c");
}

#[test]
fn unicode_strings_ok() {
    let mut w = SqlWriter::new(4, &RenderCfg::default());
    w.push_quoted("テスト");
    w.push_char('λ');
    assert_eq!(w.finish(), "\"テスト\"λ");
}
