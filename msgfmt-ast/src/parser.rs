//! Hand-written recursive-descent pattern parser (`spec.md` §4.1).
//!
//! Single-pass and index-driven: every character of the input pattern is
//! visited exactly once across the whole call tree, since child patterns
//! (plural/select case bodies, tag bodies) are extracted as disjoint
//! substrings via a balanced-brace scan and then parsed by a recursive call
//! into this same machinery, each with spans rebased onto the original
//! pattern's byte offsets and line/column.

use crate::ast::{
    Case, CaseKey, DateTimeStyle, DateTimeStyleKind, DurationStyle, DurationStyleKind,
    ListStyleKind, ListWidth, Message, MessageElement, NumberStyle, PluralBlock,
};
use crate::error::ParseError;
use crate::span::Span;

#[derive(Debug, Clone, Copy)]
struct Tok {
    ch: char,
    byte: usize,
    line: u32,
    col: u32,
}

fn tokenize(text: &str, base_byte: usize, base_line: u32, base_col: u32) -> Vec<Tok> {
    let mut toks = Vec::with_capacity(text.len());
    let mut line = base_line;
    let mut col = base_col;
    for (rel, ch) in text.char_indices() {
        toks.push(Tok {
            ch,
            byte: base_byte + rel,
            line,
            col,
        });
        if ch == '\n' {
            line += 1;
            col = 1;
        } else {
            col += 1;
        }
    }
    toks
}

fn end_span(toks: &[Tok], text_end_byte: usize, line: u32, col: u32) -> Span {
    Span {
        start: text_end_byte,
        end: text_end_byte,
        line: toks.last().map(|t| t.line).unwrap_or(line),
        column: toks.last().map(|t| t.col + 1).unwrap_or(col),
    }
}

fn tok_span(toks: &[Tok], start: usize, end: usize, text_end_byte: usize) -> Span {
    let (sb, sl, sc) = toks
        .get(start)
        .map(|t| (t.byte, t.line, t.col))
        .unwrap_or((text_end_byte, 0, 0));
    let eb = toks.get(end).map(|t| t.byte).unwrap_or(text_end_byte);
    Span::new(sb, eb, sl, sc)
}

fn is_name_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '-' || c == '.'
}

fn skip_ws(toks: &[Tok], mut i: usize) -> usize {
    while i < toks.len() && toks[i].ch.is_whitespace() {
        i += 1;
    }
    i
}

/// Consumes one `'`-led construct starting at `toks[i]` (`toks[i].ch == '\''`),
/// per `spec.md` §4.1's escape rules, optionally appending the literal text it
/// represents to `out`. Returns the index just past the construct.
fn consume_quote(toks: &[Tok], i: usize, mut out: Option<&mut String>) -> usize {
    debug_assert_eq!(toks[i].ch, '\'');
    if let Some(next) = toks.get(i + 1) {
        if next.ch == '\'' {
            if let Some(o) = out.as_deref_mut() {
                o.push('\'');
            }
            return i + 2;
        }
        if matches!(next.ch, '{' | '}' | '#') {
            let mut j = i + 1;
            while j < toks.len() && toks[j].ch != '\'' {
                if let Some(o) = out.as_deref_mut() {
                    o.push(toks[j].ch);
                }
                j += 1;
            }
            // missing closing quote is reported by the caller via a second pass;
            // here we simply stop at end of input.
            return if j < toks.len() { j + 1 } else { j };
        }
    }
    if let Some(o) = out.as_deref_mut() {
        o.push('\'');
    }
    i + 1
}

/// Scans forward from `start` (the index just after an already-consumed
/// opening `{`) for the matching `}`, skipping quoted spans and nested
/// `{...}` pairs (`spec.md` §4.1 "STYLE-OR-ARGS ... balanced against nested
/// `{…}`").
fn find_matching_close(toks: &[Tok], start: usize, open_span: Span) -> Result<usize, ParseError> {
    let mut depth = 0i32;
    let mut i = start;
    while i < toks.len() {
        match toks[i].ch {
            '\'' => {
                i = consume_quote(toks, i, None);
                continue;
            }
            '{' => depth += 1,
            '}' => {
                if depth == 0 {
                    return Ok(i);
                }
                depth -= 1;
            }
            _ => {}
        }
        i += 1;
    }
    Err(ParseError::UnmatchedOpenBrace { span: open_span })
}

/// Parses a complete pattern (`spec.md` §4.1). `ignore_tag` disables `<...>`
/// rich-text tag recognition (used by HTML-mode formatting).
pub fn parse(input: &str, ignore_tag: bool) -> Result<Message, ParseError> {
    log::trace!("parsing pattern ({} bytes, ignore_tag={ignore_tag})", input.len());
    let result = parse_message(input, 0, 1, 1, ignore_tag);
    match &result {
        Ok(msg) => log::trace!("parsed pattern into {} element(s)", msg.0.len()),
        Err(e) => log::debug!("pattern parse failed: {e}"),
    }
    result
}

fn parse_message(
    text: &str,
    base_byte: usize,
    base_line: u32,
    base_col: u32,
    ignore_tag: bool,
) -> Result<Message, ParseError> {
    let toks = tokenize(text, base_byte, base_line, base_col);
    let text_end_byte = base_byte + text.len();
    let mut elements = Vec::new();
    let mut lit_buf = String::new();
    let mut lit_start = 0usize;
    let mut i = 0usize;

    macro_rules! flush_literal {
        ($end:expr) => {
            if !lit_buf.is_empty() {
                let span = tok_span(&toks, lit_start, $end, text_end_byte);
                elements.push(MessageElement::Literal(std::mem::take(&mut lit_buf), span));
            }
        };
    }

    while i < toks.len() {
        let c = toks[i].ch;
        match c {
            '\'' => {
                if lit_buf.is_empty() {
                    lit_start = i;
                }
                i = consume_quote(&toks, i, Some(&mut lit_buf));
            }
            '#' => {
                flush_literal!(i);
                elements.push(MessageElement::PluralHash(tok_span(&toks, i, i + 1, text_end_byte)));
                i += 1;
            }
            '{' => {
                flush_literal!(i);
                let open_idx = i;
                let (element, next_i) = parse_placeholder(&toks, i, text_end_byte, ignore_tag)?;
                elements.push(element);
                i = next_i;
                let _ = open_idx;
            }
            '<' if !ignore_tag && toks.get(i + 1).map(|t| t.ch.is_alphabetic()).unwrap_or(false) => {
                flush_literal!(i);
                let (element, next_i) = parse_tag(&toks, i, text_end_byte, ignore_tag)?;
                elements.push(element);
                i = next_i;
            }
            _ => {
                if lit_buf.is_empty() {
                    lit_start = i;
                }
                lit_buf.push(c);
                i += 1;
            }
        }
    }
    flush_literal!(toks.len());

    Ok(Message(elements))
}

fn parse_tag(
    toks: &[Tok],
    start: usize,
    text_end_byte: usize,
    ignore_tag: bool,
) -> Result<(MessageElement, usize), ParseError> {
    let open_span = tok_span(toks, start, start + 1, text_end_byte);
    let mut i = start + 1;
    let name_start = i;
    while i < toks.len() && is_name_char(toks[i].ch) {
        i += 1;
    }
    let name: String = toks[name_start..i].iter().map(|t| t.ch).collect();
    if i >= toks.len() || toks[i].ch != '>' {
        return Err(ParseError::UnterminatedTag {
            name,
            span: open_span,
        });
    }
    i += 1; // past '>'
    let body_start = i;

    let mut depth = 0u32;
    loop {
        if i >= toks.len() {
            return Err(ParseError::UnterminatedTag {
                name,
                span: open_span,
            });
        }
        if toks[i].ch == '<' && toks.get(i + 1).map(|t| t.ch) == Some('/') {
            let close_name_start = i + 2;
            let mut j = close_name_start;
            while j < toks.len() && is_name_char(toks[j].ch) {
                j += 1;
            }
            let close_name: String = toks[close_name_start..j].iter().map(|t| t.ch).collect();
            if close_name == name && j < toks.len() && toks[j].ch == '>' {
                if depth == 0 {
                    let body_text: String = toks[body_start..i].iter().map(|t| t.ch).collect();
                    let (bb, bl, bc) = toks
                        .get(body_start)
                        .map(|t| (t.byte, t.line, t.col))
                        .unwrap_or((text_end_byte, 1, 1));
                    let body = parse_message(&body_text, bb, bl, bc, ignore_tag)?;
                    let span = tok_span(toks, start, j + 1, text_end_byte);
                    return Ok((MessageElement::Tag { name, body, span }, j + 1));
                }
                depth -= 1;
                i = j + 1;
                continue;
            }
        }
        if toks[i].ch == '<'
            && toks.get(i + 1).map(|t| t.ch.is_alphabetic()).unwrap_or(false)
        {
            let open_name_start = i + 1;
            let mut j = open_name_start;
            while j < toks.len() && is_name_char(toks[j].ch) {
                j += 1;
            }
            if toks.get(j).map(|t| t.ch) == Some('>')
                && toks[open_name_start..j].iter().map(|t| t.ch).collect::<String>() == name
            {
                depth += 1;
                i = j + 1;
                continue;
            }
        }
        i += 1;
    }
}

fn parse_placeholder(
    toks: &[Tok],
    start: usize,
    text_end_byte: usize,
    ignore_tag: bool,
) -> Result<(MessageElement, usize), ParseError> {
    let open_span = tok_span(toks, start, start + 1, text_end_byte);
    let mut i = skip_ws(toks, start + 1);
    let name_start = i;
    while i < toks.len() && is_name_char(toks[i].ch) {
        i += 1;
    }
    if i == name_start {
        return Err(ParseError::EmptyArgumentName {
            span: tok_span(toks, start, i, text_end_byte),
        });
    }
    let name: String = toks[name_start..i].iter().map(|t| t.ch).collect();
    i = skip_ws(toks, i);

    if i >= toks.len() {
        return Err(ParseError::UnexpectedEnd {
            context: "placeholder".into(),
            span: open_span,
        });
    }

    if toks[i].ch == '}' {
        let span = tok_span(toks, start, i + 1, text_end_byte);
        return Ok((MessageElement::Argument(name, span), i + 1));
    }
    if toks[i].ch != ',' {
        return Err(ParseError::UnmatchedOpenBrace { span: open_span });
    }
    i = skip_ws(toks, i + 1);
    let type_start = i;
    while i < toks.len() && toks[i].ch.is_alphanumeric() {
        i += 1;
    }
    let type_name: String = toks[type_start..i].iter().map(|t| t.ch).collect();
    i = skip_ws(toks, i);

    let args_start;
    let args_end;
    if i < toks.len() && toks[i].ch == ',' {
        args_start = i + 1;
        args_end = find_matching_close(toks, args_start, open_span)?;
        i = args_end;
    } else {
        args_start = i;
        args_end = i;
    }
    if i >= toks.len() || toks[i].ch != '}' {
        return Err(ParseError::UnmatchedOpenBrace { span: open_span });
    }
    let close = i;
    let whole_span = tok_span(toks, start, close + 1, text_end_byte);

    let args_text: String = toks[args_start..args_end].iter().map(|t| t.ch).collect();
    let (ab, al, ac) = toks
        .get(args_start)
        .map(|t| (t.byte, t.line, t.col))
        .unwrap_or((text_end_byte, 1, 1));
    let args_span = Span::new(ab, toks.get(args_end).map(|t| t.byte).unwrap_or(text_end_byte), al, ac);

    let element = match type_name.to_lowercase().as_str() {
        "number" => MessageElement::Number(
            name,
            parse_number_style(args_text.trim(), args_span)?,
            whole_span,
        ),
        "date" => MessageElement::Date(
            name,
            parse_datetime_style(args_text.trim(), args_span)?,
            whole_span,
        ),
        "time" => MessageElement::Time(
            name,
            parse_datetime_style(args_text.trim(), args_span)?,
            whole_span,
        ),
        "datetime" => MessageElement::DateTime(
            name,
            parse_datetime_style(args_text.trim(), args_span)?,
            whole_span,
        ),
        "daterange" => {
            let (end_name, style_text) = split_range_args(args_text.trim());
            MessageElement::DateRange(
                name,
                end_name,
                parse_datetime_style(style_text.trim(), args_span)?,
                whole_span,
            )
        }
        "numberrange" => {
            let (end_name, style_text) = split_range_args(args_text.trim());
            let style_text = style_text.trim();
            let skeleton = if style_text.is_empty() {
                None
            } else {
                let src = style_text.strip_prefix("::").unwrap_or(style_text);
                Some(msgfmt_number::parse_skeleton(src).map_err(|source| {
                    ParseError::MalformedNumberSkeleton {
                        span: args_span,
                        source,
                    }
                })?)
            };
            MessageElement::NumberRange {
                start: name,
                end: end_name,
                skeleton,
                span: whole_span,
            }
        }
        "plural" => {
            let block = parse_plural_block(name, &args_text, ab, al, ac, ignore_tag, whole_span, true)?;
            MessageElement::Plural(block)
        }
        "selectordinal" => {
            let block = parse_plural_block(name, &args_text, ab, al, ac, ignore_tag, whole_span, true)?;
            MessageElement::Ordinal(block)
        }
        "select" => {
            let block = parse_plural_block(name, &args_text, ab, al, ac, ignore_tag, whole_span, false)?;
            MessageElement::Select {
                name: block.name,
                cases: block.cases,
                span: block.span,
            }
        }
        "list" => {
            let (style, width) = parse_list_style(args_text.trim());
            MessageElement::List {
                name,
                style,
                width,
                span: whole_span,
            }
        }
        "relativetime" => {
            let mut parts = args_text.trim().split_whitespace();
            let field = parts.next().unwrap_or("").to_string();
            let width = parts.next().unwrap_or("long").to_string();
            let numeric_mode = parts.next().unwrap_or("auto").to_string();
            MessageElement::RelativeTime {
                name,
                field,
                width,
                numeric_mode,
                span: whole_span,
            }
        }
        "duration" => MessageElement::Duration {
            name,
            style: parse_duration_style(args_text.trim()),
            span: whole_span,
        },
        _ => MessageElement::Custom {
            name,
            type_name,
            style: if args_text.trim().is_empty() {
                None
            } else {
                Some(args_text.trim().to_string())
            },
            span: whole_span,
        },
    };
    Ok((element, close + 1))
}

fn split_range_args(text: &str) -> (String, String) {
    let mut end_name = String::new();
    let mut rest = text;
    let bytes_iter = text.char_indices();
    let mut split_at = text.len();
    for (idx, ch) in bytes_iter {
        if !is_name_char(ch) {
            split_at = idx;
            break;
        }
        end_name.push(ch);
    }
    rest = &rest[split_at.min(rest.len())..];
    let rest = rest.trim_start();
    let rest = rest.strip_prefix(',').unwrap_or(rest);
    (end_name, rest.to_string())
}

fn parse_number_style(text: &str, span: Span) -> Result<NumberStyle, ParseError> {
    if text.is_empty() {
        return Ok(NumberStyle::Skeleton(msgfmt_number::NumberFormatOptions::default()));
    }
    match text {
        "integer" => Ok(NumberStyle::Integer),
        "currency" => Ok(NumberStyle::Currency),
        "percent" => Ok(NumberStyle::Percent),
        _ => {
            if let Some(skeleton) = text.strip_prefix("::") {
                let opts = msgfmt_number::parse_skeleton(skeleton)
                    .map_err(|source| ParseError::MalformedNumberSkeleton { span, source })?;
                Ok(NumberStyle::Skeleton(opts))
            } else {
                Ok(NumberStyle::Custom(msgfmt_number::parse_decimal_pattern(text)))
            }
        }
    }
}

fn parse_datetime_style(text: &str, span: Span) -> Result<DateTimeStyle, ParseError> {
    if text.is_empty() {
        return Ok(DateTimeStyle::Named(DateTimeStyleKind::Medium));
    }
    match text.to_lowercase().as_str() {
        "short" => Ok(DateTimeStyle::Named(DateTimeStyleKind::Short)),
        "medium" => Ok(DateTimeStyle::Named(DateTimeStyleKind::Medium)),
        "long" => Ok(DateTimeStyle::Named(DateTimeStyleKind::Long)),
        "full" => Ok(DateTimeStyle::Named(DateTimeStyleKind::Full)),
        _ => {
            let src = text.strip_prefix("::").unwrap_or(text);
            let tokens = msgfmt_datetime::parse_skeleton(src)
                .map_err(|source| ParseError::MalformedDateTimeSkeleton { span, source })?;
            Ok(DateTimeStyle::Pattern(tokens))
        }
    }
}

fn parse_list_style(text: &str) -> (ListStyleKind, ListWidth) {
    let mut style = ListStyleKind::Conjunction;
    let mut width = ListWidth::Long;
    for tok in text.split_whitespace() {
        match tok.to_lowercase().as_str() {
            "conjunction" => style = ListStyleKind::Conjunction,
            "disjunction" => style = ListStyleKind::Disjunction,
            "unit" => style = ListStyleKind::Unit,
            "long" => width = ListWidth::Long,
            "short" => width = ListWidth::Short,
            "narrow" => width = ListWidth::Narrow,
            _ => {}
        }
    }
    (style, width)
}

fn parse_duration_style(text: &str) -> DurationStyle {
    match text.to_lowercase().as_str() {
        "" | "long" => DurationStyle::Named(DurationStyleKind::Long),
        "short" => DurationStyle::Named(DurationStyleKind::Short),
        "narrow" => DurationStyle::Named(DurationStyleKind::Narrow),
        "timer" => DurationStyle::Named(DurationStyleKind::Timer),
        _ => DurationStyle::Template(text.to_string()),
    }
}

#[allow(clippy::too_many_arguments)]
fn parse_plural_block(
    name: String,
    args_text: &str,
    base_byte: usize,
    base_line: u32,
    base_col: u32,
    ignore_tag: bool,
    whole_span: Span,
    allow_offset_and_exact: bool,
) -> Result<PluralBlock, ParseError> {
    let toks = tokenize(args_text, base_byte, base_line, base_col);
    let text_end_byte = base_byte + args_text.len();
    let mut i = skip_ws(&toks, 0);
    let mut offset = 0.0f64;

    if allow_offset_and_exact && matches_keyword(&toks, i, "offset:") {
        let kw_start = i;
        i += "offset:".chars().count();
        i = skip_ws(&toks, i);
        let num_start = i;
        while i < toks.len() && (toks[i].ch.is_ascii_digit() || toks[i].ch == '-' || toks[i].ch == '.') {
            i += 1;
        }
        let num_text: String = toks[num_start..i].iter().map(|t| t.ch).collect();
        offset = num_text.parse().map_err(|_| ParseError::MalformedOffset {
            text: num_text.clone(),
            span: tok_span(&toks, kw_start, i, text_end_byte),
        })?;
        i = skip_ws(&toks, i);
    }

    let mut cases = Vec::new();
    let mut saw_other = false;

    while i < toks.len() {
        let key_start = i;
        let key = if allow_offset_and_exact && toks[i].ch == '=' {
            i += 1;
            let num_start = i;
            while i < toks.len() && (toks[i].ch.is_ascii_digit() || toks[i].ch == '-' || toks[i].ch == '.') {
                i += 1;
            }
            let num_text: String = toks[num_start..i].iter().map(|t| t.ch).collect();
            let value: f64 = num_text.parse().map_err(|_| ParseError::MalformedCaseKey {
                text: num_text.clone(),
                span: tok_span(&toks, key_start, i, text_end_byte),
            })?;
            CaseKey::Exact(value)
        } else {
            let id_start = i;
            while i < toks.len() && is_name_char(toks[i].ch) {
                i += 1;
            }
            if i == id_start {
                return Err(ParseError::MalformedCaseKey {
                    text: String::new(),
                    span: tok_span(&toks, key_start, i, text_end_byte),
                });
            }
            let label: String = toks[id_start..i].iter().map(|t| t.ch).collect();
            if label == "other" {
                saw_other = true;
            }
            CaseKey::Category(label)
        };

        i = skip_ws(&toks, i);
        if i >= toks.len() || toks[i].ch != '{' {
            return Err(ParseError::MalformedCaseKey {
                text: String::new(),
                span: tok_span(&toks, key_start, i, text_end_byte),
            });
        }
        let body_start = i + 1;
        let body_end = find_matching_close(&toks, body_start, tok_span(&toks, i, i + 1, text_end_byte))?;
        let body_text: String = toks[body_start..body_end].iter().map(|t| t.ch).collect();
        let (bb, bl, bc) = toks
            .get(body_start)
            .map(|t| (t.byte, t.line, t.col))
            .unwrap_or((text_end_byte, base_line, base_col));
        let body = parse_message(&body_text, bb, bl, bc, ignore_tag)?;
        let case_span = tok_span(&toks, key_start, body_end + 1, text_end_byte);
        cases.push(Case {
            key,
            body,
            span: case_span,
        });
        i = skip_ws(&toks, body_end + 1);
    }

    if !saw_other {
        return Err(ParseError::MissingOtherCase { span: whole_span });
    }

    Ok(PluralBlock {
        name,
        offset,
        cases,
        span: whole_span,
    })
}

fn matches_keyword(toks: &[Tok], i: usize, kw: &str) -> bool {
    kw.chars()
        .enumerate()
        .all(|(k, c)| toks.get(i + k).map(|t| t.ch) == Some(c))
}

#[cfg(test)]
mod test {
    use super::*;

    fn parse_ok(input: &str) -> Message {
        parse(input, false).unwrap_or_else(|e| panic!("parse error on {input:?}: {e}"))
    }

    #[test]
    fn simple_substitution() {
        let msg = parse_ok("Hello, {name}!");
        assert_eq!(
            msg.0,
            vec![
                MessageElement::Literal("Hello, ".into(), Span::new(0, 7, 1, 1)),
                MessageElement::Argument("name".into(), Span::new(7, 13, 1, 8)),
                MessageElement::Literal("!".into(), Span::new(13, 14, 1, 14)),
            ]
        );
    }

    #[test]
    fn quote_escapes() {
        let msg = parse_ok("It''s");
        assert_eq!(msg.0, vec![MessageElement::Literal("It's".into(), Span::new(0, 5, 1, 1))]);

        let msg = parse_ok("Use '{' and '}'");
        match &msg.0[0] {
            MessageElement::Literal(text, _) => assert_eq!(text, "Use { and }"),
            other => panic!("expected literal, got {other:?}"),
        }
    }

    #[test]
    fn plural_requires_other() {
        let err = parse("{count, plural, one {# thing}}", false).unwrap_err();
        assert!(matches!(err, ParseError::MissingOtherCase { .. }));
    }

    #[test]
    fn plural_with_pound_and_offset() {
        let msg = parse_ok(
            "{count, plural, offset:1 =0 {Nobody} =1 {Only {host}} other {{host} and # more}}",
        );
        match &msg.0[0] {
            MessageElement::Plural(block) => {
                assert_eq!(block.name, "count");
                assert_eq!(block.offset, 1.0);
                assert_eq!(block.cases.len(), 3);
                assert_eq!(block.cases[0].key, CaseKey::Exact(0.0));
                assert_eq!(block.cases[2].key, CaseKey::Category("other".into()));
            }
            other => panic!("expected plural, got {other:?}"),
        }
    }

    #[test]
    fn select_with_boolean_keys() {
        let msg = parse_ok("{active, select, true {Active} false {Inactive} other {Unknown}}");
        match &msg.0[0] {
            MessageElement::Select { name, cases, .. } => {
                assert_eq!(name, "active");
                assert_eq!(cases.len(), 3);
            }
            other => panic!("expected select, got {other:?}"),
        }
    }

    #[test]
    fn number_skeleton_style() {
        let msg = parse_ok("{price, number, ::currency/USD}");
        match &msg.0[0] {
            MessageElement::Number(name, NumberStyle::Skeleton(opts), _) => {
                assert_eq!(name, "price");
                assert_eq!(opts.currency.as_deref(), Some("USD"));
            }
            other => panic!("expected number/skeleton, got {other:?}"),
        }
    }

    #[test]
    fn date_skeleton_style() {
        let msg = parse_ok("{d, date, ::QQQQ}");
        assert!(matches!(
            &msg.0[0],
            MessageElement::Date(name, DateTimeStyle::Pattern(_), _) if name == "d"
        ));
    }

    #[test]
    fn tag_round_trip() {
        let msg = parse_ok("<b>Hello {name}</b>");
        match &msg.0[0] {
            MessageElement::Tag { name, body, .. } => {
                assert_eq!(name, "b");
                assert_eq!(body.0.len(), 2);
            }
            other => panic!("expected tag, got {other:?}"),
        }
    }

    #[test]
    fn ignore_tag_flag_passes_through_literally() {
        let msg = parse("<b>Hello {name}</b>", true).unwrap();
        assert!(matches!(&msg.0[0], MessageElement::Literal(text, _) if text.starts_with("<b>")));
    }

    #[test]
    fn malformed_number_skeleton_reports_span() {
        let err = parse("{n, number, ::nonsense!!token}", false).unwrap_err();
        assert!(matches!(err, ParseError::MalformedNumberSkeleton { .. }));
    }
}
