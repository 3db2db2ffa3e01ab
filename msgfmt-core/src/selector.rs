//! Plural/ordinal/select dispatch (`spec.md` §4.5): offset semantics,
//! exact-match-before-category, and the `#` substitution.

use crate::context::FormatContext;
use crate::element::format_message;
use crate::error::FormatError;
use msgfmt_ast::{Case, CaseKey, PluralBlock};
use msgfmt_locale::PluralOperands;

pub fn format_plural_block(
    block: &PluralBlock,
    ordinal: bool,
    ctx: &FormatContext,
    out: &mut String,
) -> Result<(), FormatError> {
    let value = ctx.require(&block.name, block.span)?;
    let v = value.as_f64().unwrap_or(0.0);

    if let Some(case) = find_exact(&block.cases, v) {
        return format_message(&case.body, &ctx.with_pound(v - block.offset), out);
    }

    let ops = apply_offset(
        value.plural_operands().unwrap_or_else(|| PluralOperands::from_f64(v)),
        block.offset,
    );
    let category = if ordinal {
        ctx.locale.ordinal_category(&ops)
    } else {
        ctx.locale.plural_category(&ops)
    };

    let case = find_category(&block.cases, category.as_str()).or_else(|| {
        if category != msgfmt_locale::PluralCategory::Other {
            log::warn!("plural/ordinal block at {:?} has no {category:?} case, falling back to `other`", block.span);
        }
        find_category(&block.cases, "other")
    });
    let case = case.ok_or(FormatError::SelectMissingOther { span: block.span })?;
    format_message(&case.body, &ctx.with_pound(ops.n), out)
}

/// Shifts operands by `offset` (`spec.md` §4.5 step 3, V′ = V − offset). Offsets
/// are whole numbers in practice, so only `n`/`i` move; fraction digits stay as
/// derived from the argument's own lexical representation.
fn apply_offset(ops: PluralOperands, offset: f64) -> PluralOperands {
    if offset == 0.0 {
        return ops;
    }
    PluralOperands {
        n: ops.n - offset,
        i: (ops.i as f64 - offset).max(0.0) as u64,
        ..ops
    }
}

pub fn format_select(
    name: &str,
    cases: &[Case],
    span: msgfmt_ast::Span,
    ctx: &FormatContext,
    out: &mut String,
) -> Result<(), FormatError> {
    let value = ctx.require(name, span)?;
    let key = value.select_key(ctx.locale);

    let case = find_category(cases, &key).or_else(|| {
        if key != "other" {
            log::warn!("select block at {span:?} has no {key:?} case, falling back to `other`");
        }
        find_category(cases, "other")
    });
    let case = case.ok_or(FormatError::SelectMissingOther { span })?;
    format_message(&case.body, ctx, out)
}

fn find_exact(cases: &[Case], v: f64) -> Option<&Case> {
    cases.iter().find(|c| matches!(c.key, CaseKey::Exact(n) if n == v))
}

fn find_category<'a>(cases: &'a [Case], label: &str) -> Option<&'a Case> {
    cases
        .iter()
        .find(|c| matches!(&c.key, CaseKey::Category(s) if s == label))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::context::Handlers;
    use crate::value::{Args, Value};
    use msgfmt_ast::Message;
    use msgfmt_ast::MessageElement;
    use msgfmt_ast::Span;
    use msgfmt_locale::InMemoryProvider;
    use msgfmt_locale::LocaleDataProvider;
    use pretty_assertions::assert_eq;
    use std::sync::Arc;

    fn en() -> Arc<msgfmt_locale::LocaleData> {
        InMemoryProvider::builtin().try_get_locale("en").unwrap()
    }

    fn sp(n: usize) -> Span {
        Span::new(0, n, 1, 1)
    }

    fn lit(s: &str) -> Message {
        Message(vec![MessageElement::Literal(s.to_string(), sp(s.len()))])
    }

    #[test]
    fn exact_match_beats_category() {
        let block = PluralBlock {
            name: "count".into(),
            offset: 1.0,
            cases: vec![
                Case {
                    key: CaseKey::Exact(0.0),
                    body: lit("none"),
                    span: sp(0),
                },
                Case {
                    key: CaseKey::Category("other".into()),
                    body: lit("many"),
                    span: sp(0),
                },
            ],
            span: sp(0),
        };
        let locale = en();
        let mut args = Args::default();
        args.insert("count".into(), Value::Integer(0));
        let handlers = Handlers::default();
        let ctx = FormatContext::new(&locale, &args, &handlers, false);
        let mut out = String::new();
        format_plural_block(&block, false, &ctx, &mut out).unwrap();
        assert_eq!(out, "none");
    }

    #[test]
    fn category_uses_post_offset_value() {
        let block = PluralBlock {
            name: "count".into(),
            offset: 1.0,
            cases: vec![Case {
                key: CaseKey::Category("other".into()),
                body: Message(vec![MessageElement::PluralHash(sp(0))]),
                span: sp(0),
            }],
            span: sp(0),
        };
        let locale = en();
        let mut args = Args::default();
        args.insert("count".into(), Value::Integer(5));
        let handlers = Handlers::default();
        let ctx = FormatContext::new(&locale, &args, &handlers, false);
        let mut out = String::new();
        format_plural_block(&block, false, &ctx, &mut out).unwrap();
        assert_eq!(out, "4");
    }

    #[test]
    fn decimal_operands_drive_category_lexically() {
        // "1.0" has v=1, so en_cardinal must say `other`, not `one` (which a
        // binary-float round-trip through `as_f64` would wrongly produce).
        let block = PluralBlock {
            name: "count".into(),
            offset: 0.0,
            cases: vec![
                Case {
                    key: CaseKey::Category("one".into()),
                    body: lit("one"),
                    span: sp(0),
                },
                Case {
                    key: CaseKey::Category("other".into()),
                    body: lit("other"),
                    span: sp(0),
                },
            ],
            span: sp(0),
        };
        let locale = en();
        let mut args = Args::default();
        args.insert("count".into(), Value::Decimal("1.0".into()));
        let handlers = Handlers::default();
        let ctx = FormatContext::new(&locale, &args, &handlers, false);
        let mut out = String::new();
        format_plural_block(&block, false, &ctx, &mut out).unwrap();
        assert_eq!(out, "other");
    }

    #[test]
    fn exact_match_pound_uses_post_offset_value() {
        let block = PluralBlock {
            name: "count".into(),
            offset: 1.0,
            cases: vec![
                Case {
                    key: CaseKey::Exact(2.0),
                    body: Message(vec![MessageElement::PluralHash(sp(0))]),
                    span: sp(0),
                },
                Case {
                    key: CaseKey::Category("other".into()),
                    body: Message(vec![MessageElement::PluralHash(sp(0))]),
                    span: sp(0),
                },
            ],
            span: sp(0),
        };
        let locale = en();
        let mut args = Args::default();
        args.insert("count".into(), Value::Integer(2));
        let handlers = Handlers::default();
        let ctx = FormatContext::new(&locale, &args, &handlers, false);
        let mut out = String::new();
        format_plural_block(&block, false, &ctx, &mut out).unwrap();
        assert_eq!(out, "1");
    }
}
