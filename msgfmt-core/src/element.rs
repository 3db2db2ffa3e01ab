//! Central format dispatch (`spec.md` §4, §5 "Ordering"): walks a `Message`'s
//! elements in order, appending each one's rendering to a shared output
//! buffer threaded by reference (`spec.md` §9).

use crate::context::FormatContext;
use crate::datetime_support::{render_datetime_style, FieldKind};
use crate::duration;
use crate::error::FormatError;
use crate::list;
use crate::range;
use crate::relative;
use crate::selector;
use msgfmt_ast::{Message, MessageElement, NumberStyle};
use msgfmt_number::NumberFormatOptions;
use std::borrow::Cow;

fn resolve_number_style<'a>(
    style: &'a NumberStyle,
    ctx: &FormatContext,
) -> Cow<'a, NumberFormatOptions> {
    match style {
        NumberStyle::Skeleton(opts) | NumberStyle::Custom(opts) => Cow::Borrowed(opts),
        NumberStyle::Integer => {
            let mut opts = NumberFormatOptions::default();
            opts.precision.min_fraction = 0;
            opts.precision.max_fraction = Some(0);
            Cow::Owned(opts)
        }
        NumberStyle::Currency => {
            let mut opts = NumberFormatOptions::default();
            opts.currency = Some(ctx.locale.currency.default_currency.clone());
            opts.precision.min_fraction = 2;
            opts.precision.max_fraction = Some(2);
            Cow::Owned(opts)
        }
        NumberStyle::Percent => {
            let mut opts = NumberFormatOptions::default();
            opts.is_percent = true;
            Cow::Owned(opts)
        }
    }
}

pub fn format_message(msg: &Message, ctx: &FormatContext, out: &mut String) -> Result<(), FormatError> {
    for element in &msg.0 {
        format_element(element, ctx, out)?;
    }
    Ok(())
}

fn format_element(element: &MessageElement, ctx: &FormatContext, out: &mut String) -> Result<(), FormatError> {
    match element {
        MessageElement::Literal(s, _) => {
            out.push_str(s);
            Ok(())
        }
        MessageElement::PluralHash(_) => {
            match ctx.pound() {
                Some(v) => out.push_str(&msgfmt_number::format_default(v, ctx.locale)),
                None => out.push('#'),
            }
            Ok(())
        }
        MessageElement::Argument(name, span) => {
            out.push_str(&ctx.require(name, *span)?.display_string(ctx.locale));
            Ok(())
        }
        MessageElement::Number(name, style, span) => {
            let v = ctx.require_numeric(name, *span)?;
            let opts = resolve_number_style(style, ctx);
            let s = msgfmt_number::format(v, &opts, ctx.locale).map_err(|e| FormatError::format(e.to_string()))?;
            out.push_str(&s);
            Ok(())
        }
        MessageElement::Date(name, style, span) => {
            if let Some(instant) = ctx.require(name, *span)?.as_instant() {
                out.push_str(&render_datetime_style(style, FieldKind::Date, instant, ctx.locale));
            }
            Ok(())
        }
        MessageElement::Time(name, style, span) => {
            if let Some(instant) = ctx.require(name, *span)?.as_instant() {
                out.push_str(&render_datetime_style(style, FieldKind::Time, instant, ctx.locale));
            }
            Ok(())
        }
        MessageElement::DateTime(name, style, span) => {
            if let Some(instant) = ctx.require(name, *span)?.as_instant() {
                out.push_str(&render_datetime_style(style, FieldKind::DateTime, instant, ctx.locale));
            }
            Ok(())
        }
        MessageElement::DateRange(start, end, style, span) => {
            let s = ctx.require(start, *span)?.as_instant().copied();
            let e = ctx.require(end, *span)?.as_instant().copied();
            if let (Some(s), Some(e)) = (s, e) {
                out.push_str(&range::format_date_range(s, e, style, ctx.locale));
            }
            Ok(())
        }
        MessageElement::NumberRange { start, end, skeleton, span } => {
            let s = ctx.require_numeric(start, *span)?;
            let e = ctx.require_numeric(end, *span)?;
            let rendered = range::format_number_range(s, e, skeleton.as_ref(), ctx.locale)?;
            out.push_str(&rendered);
            Ok(())
        }
        MessageElement::Plural(block) => selector::format_plural_block(block, false, ctx, out),
        MessageElement::Ordinal(block) => selector::format_plural_block(block, true, ctx, out),
        MessageElement::Select { name, cases, span } => selector::format_select(name, cases, *span, ctx, out),
        MessageElement::List { name, style, width, span } => {
            let value = ctx.require(name, *span)?;
            let items: Vec<String> = value
                .as_list()
                .unwrap_or(&[])
                .iter()
                .map(|v| v.display_string(ctx.locale))
                .collect();
            let rendered = list::format_list(&items, list::ast_style(*style), list::ast_width(*width), ctx.locale);
            out.push_str(&rendered);
            Ok(())
        }
        MessageElement::RelativeTime { name, field, width, numeric_mode, span } => {
            let v = ctx.require_numeric(name, *span)?;
            let rendered = relative::format_relative_time(v, field, width, numeric_mode, ctx.locale)?;
            out.push_str(&rendered);
            Ok(())
        }
        MessageElement::Duration { name, style, span } => {
            let value = ctx.require(name, *span)?;
            let rendered = duration::format_duration(value, style, ctx.locale)?;
            out.push_str(&rendered);
            Ok(())
        }
        MessageElement::Tag { name, body, span: _ } => {
            let mut inner = String::new();
            format_message(body, ctx, &mut inner)?;
            match ctx.handlers.tag_handlers.get(name.as_str()) {
                Some(handler) => out.push_str(&handler(&inner)),
                None => out.push_str(&inner),
            }
            Ok(())
        }
        MessageElement::Custom { name, type_name, style, span } => {
            let value = ctx.require(name, *span)?;
            match ctx.handlers.custom_formatters.get(type_name.as_str()) {
                Some(formatter) => out.push_str(&formatter(value, style.as_deref(), ctx.locale)),
                None => out.push_str(&value.display_string(ctx.locale)),
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::context::Handlers;
    use crate::value::{Args, Value};
    use msgfmt_ast::Span;
    use msgfmt_locale::InMemoryProvider;
    use msgfmt_locale::LocaleDataProvider;
    use pretty_assertions::assert_eq;

    fn en() -> std::sync::Arc<msgfmt_locale::LocaleData> {
        InMemoryProvider::builtin().try_get_locale("en").unwrap()
    }

    fn sp() -> Span {
        Span::new(0, 1, 1, 1)
    }

    #[test]
    fn literal_and_argument_concatenate_in_order() {
        let locale = en();
        let mut args = Args::default();
        args.insert("name".into(), Value::String("Ada".into()));
        let handlers = Handlers::default();
        let ctx = FormatContext::new(&locale, &args, &handlers, false);
        let msg = Message(vec![
            MessageElement::Literal("Hello, ".into(), sp()),
            MessageElement::Argument("name".into(), sp()),
            MessageElement::Literal("!".into(), sp()),
        ]);
        let mut out = String::new();
        format_message(&msg, &ctx, &mut out).unwrap();
        assert_eq!(out, "Hello, Ada!");
    }

    #[test]
    fn bare_currency_style_uses_locale_default_code() {
        let locale = en();
        let mut args = Args::default();
        args.insert("price".into(), Value::Float(12.5));
        let handlers = Handlers::default();
        let ctx = FormatContext::new(&locale, &args, &handlers, false);
        let msg = Message(vec![MessageElement::Number("price".into(), NumberStyle::Currency, sp())]);
        let mut out = String::new();
        format_message(&msg, &ctx, &mut out).unwrap();
        assert_eq!(out, "$12.50");
    }

    #[test]
    fn missing_non_strict_argument_renders_as_empty() {
        let locale = en();
        let args = Args::default();
        let handlers = Handlers::default();
        let ctx = FormatContext::new(&locale, &args, &handlers, false);
        let msg = Message(vec![MessageElement::Argument("missing".into(), sp())]);
        let mut out = String::new();
        format_message(&msg, &ctx, &mut out).unwrap();
        assert_eq!(out, "");
    }

    #[test]
    fn missing_strict_argument_errors() {
        let locale = en();
        let args = Args::default();
        let handlers = Handlers::default();
        let ctx = FormatContext::new(&locale, &args, &handlers, true);
        let msg = Message(vec![MessageElement::Argument("missing".into(), sp())]);
        let mut out = String::new();
        assert!(format_message(&msg, &ctx, &mut out).is_err());
    }

    #[test]
    fn unregistered_tag_passes_body_through_verbatim() {
        let locale = en();
        let args = Args::default();
        let handlers = Handlers::default();
        let ctx = FormatContext::new(&locale, &args, &handlers, false);
        let msg = Message(vec![MessageElement::Tag {
            name: "b".into(),
            body: Message(vec![MessageElement::Literal("bold".into(), sp())]),
            span: sp(),
        }]);
        let mut out = String::new();
        format_message(&msg, &ctx, &mut out).unwrap();
        assert_eq!(out, "bold");
    }

    #[test]
    fn registered_tag_handler_wraps_body() {
        let locale = en();
        let args = Args::default();
        let mut handlers = Handlers::default();
        handlers
            .tag_handlers
            .insert("b".into(), Box::new(|inner: &str| format!("<b>{inner}</b>")));
        let ctx = FormatContext::new(&locale, &args, &handlers, false);
        let msg = Message(vec![MessageElement::Tag {
            name: "b".into(),
            body: Message(vec![MessageElement::Literal("bold".into(), sp())]),
            span: sp(),
        }]);
        let mut out = String::new();
        format_message(&msg, &ctx, &mut out).unwrap();
        assert_eq!(out, "<b>bold</b>");
    }

    #[test]
    fn unregistered_custom_formatter_falls_back_to_display_string() {
        let locale = en();
        let mut args = Args::default();
        args.insert("v".into(), Value::Integer(42));
        let handlers = Handlers::default();
        let ctx = FormatContext::new(&locale, &args, &handlers, false);
        let msg = Message(vec![MessageElement::Custom {
            name: "v".into(),
            type_name: "widget".into(),
            style: None,
            span: sp(),
        }]);
        let mut out = String::new();
        format_message(&msg, &ctx, &mut out).unwrap();
        assert_eq!(out, "42");
    }
}
