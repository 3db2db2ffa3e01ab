use smartstring::alias::String as SmartString;

/// A locale identifier, split into the pieces the Locale Resolver needs.
///
/// Only BCP-47-ish `language[-Script][-REGION]` shapes are handled; anything more
/// exotic is kept verbatim in `full` and falls back to `language` alone for
/// resolution purposes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Lang {
    full: SmartString,
    language: SmartString,
}

impl Lang {
    /// Parses a locale code like `en`, `en-US`, `zh-Hans-CN`, `de_DE`.
    pub fn parse(code: &str) -> Self {
        let full: SmartString = code.into();
        let language = code
            .split(|c| c == '-' || c == '_')
            .next()
            .unwrap_or(code)
            .to_ascii_lowercase()
            .into();
        Lang { full, language }
    }

    /// The full requested code, exactly as given.
    pub fn as_str(&self) -> &str {
        &self.full
    }

    /// The base language subtag, e.g. `en` from `en-US`.
    pub fn base(&self) -> &str {
        &self.language
    }

    /// Whether this code has no subtags beyond the base language.
    pub fn is_base(&self) -> bool {
        self.full.eq_ignore_ascii_case(&self.language)
    }
}

impl std::fmt::Display for Lang {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.full)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn splits_region() {
        let l = Lang::parse("en-US");
        assert_eq!(l.base(), "en");
        assert_eq!(l.as_str(), "en-US");
        assert!(!l.is_base());
    }

    #[test]
    fn bare_language() {
        let l = Lang::parse("de");
        assert_eq!(l.base(), "de");
        assert!(l.is_base());
    }

    #[test]
    fn underscore_separator() {
        let l = Lang::parse("zh_Hans_CN");
        assert_eq!(l.base(), "zh");
    }
}
