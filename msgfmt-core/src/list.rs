//! List formatting (`spec.md` §4.6).

use msgfmt_ast::{ListStyleKind, ListWidth};
use msgfmt_locale::{ListStyle, LocaleData, Width};

pub fn ast_style(style: ListStyleKind) -> ListStyle {
    match style {
        ListStyleKind::Conjunction => ListStyle::Conjunction,
        ListStyleKind::Disjunction => ListStyle::Disjunction,
        ListStyleKind::Unit => ListStyle::Unit,
    }
}

pub fn ast_width(width: ListWidth) -> Width {
    match width {
        ListWidth::Long => Width::Long,
        ListWidth::Short => Width::Short,
        ListWidth::Narrow => Width::Narrow,
    }
}

/// `items` are assumed already locale-formatted strings (`spec.md` §4.6).
pub fn format_list(items: &[String], style: ListStyle, width: Width, locale: &LocaleData) -> String {
    let pat = locale.list_pattern(style, width);
    match items.len() {
        0 => String::new(),
        1 => items[0].clone(),
        2 => pat.two.replace("{0}", &items[0]).replace("{1}", &items[1]),
        n => {
            let mut acc = pat.start.replace("{0}", &items[0]).replace("{1}", &items[1]);
            for item in &items[2..n - 1] {
                acc = pat.middle.replace("{0}", &acc).replace("{1}", item);
            }
            pat.end.replace("{0}", &acc).replace("{1}", &items[n - 1])
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use msgfmt_locale::InMemoryProvider;
    use msgfmt_locale::LocaleDataProvider;
    use pretty_assertions::assert_eq;

    #[test]
    fn three_items_conjunction() {
        let locale = InMemoryProvider::builtin().try_get_locale("en").unwrap();
        let items = vec!["Apple".to_string(), "Banana".to_string(), "Cherry".to_string()];
        let out = format_list(&items, ListStyle::Conjunction, Width::Long, &locale);
        assert_eq!(out, "Apple, Banana, and Cherry");
    }

    #[test]
    fn two_items_disjunction() {
        let locale = InMemoryProvider::builtin().try_get_locale("en").unwrap();
        let items = vec!["tea".to_string(), "coffee".to_string()];
        let out = format_list(&items, ListStyle::Disjunction, Width::Long, &locale);
        assert_eq!(out, "tea or coffee");
    }

    #[test]
    fn empty_list_is_empty_string() {
        let locale = InMemoryProvider::builtin().try_get_locale("en").unwrap();
        let out = format_list(&[], ListStyle::Conjunction, Width::Long, &locale);
        assert_eq!(out, "");
    }
}
