//! The immutable pattern AST (`spec.md` §3 Pattern AST). Every node carries a
//! [`Span`]; style tokens that name a number or datetime skeleton are
//! resolved eagerly at parse time, so a malformed skeleton surfaces as a
//! [`crate::error::ParseError`] rather than at format time.

use crate::span::Span;
use msgfmt_datetime::SkeletonToken;
use msgfmt_number::NumberFormatOptions;

/// A parsed message: an ordered sequence of elements, formatted strictly in
/// order (`spec.md` §5 "Ordering").
#[derive(Debug, Clone, PartialEq)]
pub struct Message(pub Vec<MessageElement>);

impl Message {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A `number` placeholder's style token (`spec.md` §6 "Style tokens").
#[derive(Debug, Clone, PartialEq)]
pub enum NumberStyle {
    Integer,
    Currency,
    Percent,
    /// from a `::`-prefixed skeleton, validated at parse time.
    Skeleton(NumberFormatOptions),
    /// a legacy `DecimalFormat`-style custom pattern, e.g. `#,##0.00`.
    Custom(NumberFormatOptions),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateTimeStyleKind {
    Short,
    Medium,
    Long,
    Full,
}

/// A `date`/`time`/`datetime` placeholder's style token. A `::`-prefixed
/// skeleton and a bare custom host-pattern string (`spec.md` §9 open
/// question: "treat them as host-pattern strings, passed through verbatim")
/// use the same field-letter grammar, so both resolve to the same token
/// stream; they only differ in how the style text was spelled in the
/// pattern.
#[derive(Debug, Clone, PartialEq)]
pub enum DateTimeStyle {
    Named(DateTimeStyleKind),
    Pattern(Vec<SkeletonToken>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListStyleKind {
    Conjunction,
    Disjunction,
    Unit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListWidth {
    Long,
    Short,
    Narrow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DurationStyleKind {
    Long,
    Short,
    Narrow,
    Timer,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DurationStyle {
    Named(DurationStyleKind),
    /// a template containing `{hours}`-style placeholders.
    Template(String),
}

/// A `plural`/`selectordinal`/`select` case key (`spec.md` §4.1 "KEY
/// parsing"). `Exact` compares to the pre-offset value; `Category` compares
/// the locale plural category (plural/ordinal) or the literal select value.
#[derive(Debug, Clone, PartialEq)]
pub enum CaseKey {
    Exact(f64),
    Category(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Case {
    pub key: CaseKey,
    pub body: Message,
    pub span: Span,
}

/// The shared shape of `plural` and `selectordinal` blocks (`spec.md` §3:
/// "Ordinal has the same shape").
#[derive(Debug, Clone, PartialEq)]
pub struct PluralBlock {
    pub name: String,
    pub offset: f64,
    pub cases: Vec<Case>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub enum MessageElement {
    Literal(String, Span),
    /// a bare `#` inside a plural/ordinal child, resolved at format time
    /// against the nearest enclosing plural context (`spec.md` §3).
    PluralHash(Span),
    Argument(String, Span),
    Number(String, NumberStyle, Span),
    Date(String, DateTimeStyle, Span),
    Time(String, DateTimeStyle, Span),
    DateTime(String, DateTimeStyle, Span),
    DateRange(String, String, DateTimeStyle, Span),
    Plural(PluralBlock),
    Ordinal(PluralBlock),
    Select {
        name: String,
        cases: Vec<Case>,
        span: Span,
    },
    List {
        name: String,
        style: ListStyleKind,
        width: ListWidth,
        span: Span,
    },
    RelativeTime {
        name: String,
        field: String,
        width: String,
        numeric_mode: String,
        span: Span,
    },
    Duration {
        name: String,
        style: DurationStyle,
        span: Span,
    },
    NumberRange {
        start: String,
        end: String,
        skeleton: Option<NumberFormatOptions>,
        span: Span,
    },
    Tag {
        name: String,
        body: Message,
        span: Span,
    },
    Custom {
        name: String,
        type_name: String,
        style: Option<String>,
        span: Span,
    },
}

impl MessageElement {
    pub fn span(&self) -> Span {
        match self {
            MessageElement::Literal(_, s)
            | MessageElement::PluralHash(s)
            | MessageElement::Argument(_, s)
            | MessageElement::Number(_, _, s)
            | MessageElement::Date(_, _, s)
            | MessageElement::Time(_, _, s)
            | MessageElement::DateTime(_, _, s)
            | MessageElement::DateRange(_, _, _, s)
            | MessageElement::Select { span: s, .. }
            | MessageElement::List { span: s, .. }
            | MessageElement::RelativeTime { span: s, .. }
            | MessageElement::Duration { span: s, .. }
            | MessageElement::NumberRange { span: s, .. }
            | MessageElement::Tag { span: s, .. }
            | MessageElement::Custom { span: s, .. } => *s,
            MessageElement::Plural(b) | MessageElement::Ordinal(b) => b.span,
        }
    }
}
