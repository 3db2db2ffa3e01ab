//! Argument values (`spec.md` §3 "Argument model"): an opaque `name -> value`
//! map whose values carry dynamic type.

use fnv::FnvHashMap;
use msgfmt_datetime::Instant;
use msgfmt_locale::PluralOperands;
use smartstring::alias::String as SmartString;

/// One argument value. `Decimal` carries a pre-formatted decimal string (e.g.
/// from a caller's own `BigDecimal`), so its plural operands are derived
/// lexically rather than through a float round-trip.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Integer(i64),
    Float(f64),
    Decimal(String),
    Bool(bool),
    Instant(Instant),
    List(Vec<Value>),
    String(String),
    Null,
}

impl Value {
    /// String substitution for a plain `Argument` element and for select-key
    /// comparison fallback; numeric/boolean/null conversions match the
    /// select-key rules in `spec.md` §3/§4.5.
    pub fn display_string(&self, locale: &msgfmt_locale::LocaleData) -> String {
        match self {
            Value::Integer(n) => n.to_string(),
            Value::Float(n) => msgfmt_number::format_default(*n, locale),
            Value::Decimal(s) => s.clone(),
            Value::Bool(b) => b.to_string(),
            Value::Instant(i) => i.date.to_string(),
            Value::List(items) => items
                .iter()
                .map(|v| v.display_string(locale))
                .collect::<Vec<_>>()
                .join(", "),
            Value::String(s) => s.clone(),
            Value::Null => String::new(),
        }
    }

    /// The key a `select` element compares case labels against
    /// (`spec.md` §3: "a boolean maps to the select keys `true`/`false`; a
    /// null maps to the select key `null`").
    pub fn select_key(&self, locale: &msgfmt_locale::LocaleData) -> String {
        match self {
            Value::Bool(b) => b.to_string(),
            Value::Null => "null".to_string(),
            other => other.display_string(locale),
        }
    }

    /// The numeric magnitude driving a `number`/`plural`/`selectordinal`
    /// element. Missing/unconvertible values are handled by the caller
    /// (`spec.md` §7: "numeric conversions yield 0").
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Integer(n) => Some(*n as f64),
            Value::Float(n) => Some(*n),
            Value::Decimal(s) => s.parse().ok(),
            Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            _ => None,
        }
    }

    pub fn as_instant(&self) -> Option<&Instant> {
        match self {
            Value::Instant(i) => Some(i),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// CLDR plural operands for plural/ordinal dispatch (`spec.md` §4.5).
    pub fn plural_operands(&self) -> Option<PluralOperands> {
        match self {
            Value::Integer(n) => Some(PluralOperands::from_i64(*n)),
            Value::Float(n) => Some(PluralOperands::from_f64(*n)),
            Value::Decimal(s) => Some(PluralOperands::from_decimal_str(s)),
            Value::Bool(b) => Some(PluralOperands::from_i64(if *b { 1 } else { 0 })),
            _ => None,
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

/// A flat argument map as seen by the core engine; nested-map flattening
/// (`spec.md` §9 "Nested argument flattening") happens in the facade before
/// construction.
pub type Args = FnvHashMap<SmartString, Value>;

/// A caller-supplied argument tree for `Formatter::format_complex`: either a
/// leaf value or a nested map, flattened to `__`-joined keys before the
/// engine ever sees it (`spec.md` §9 "Nested argument flattening").
#[derive(Debug, Clone, PartialEq)]
pub enum NestedValue {
    Leaf(Value),
    Map(FnvHashMap<SmartString, NestedValue>),
}

/// Flattens a `NestedValue` tree into the flat `Args` map the engine expects,
/// joining path segments with `__`.
pub fn flatten_args(tree: &FnvHashMap<SmartString, NestedValue>) -> Args {
    let mut out = Args::default();
    flatten_into(tree, "", &mut out);
    out
}

fn flatten_into(tree: &FnvHashMap<SmartString, NestedValue>, prefix: &str, out: &mut Args) {
    for (key, value) in tree {
        let full: SmartString = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}__{key}").into()
        };
        match value {
            NestedValue::Leaf(v) => {
                out.insert(full, v.clone());
            }
            NestedValue::Map(nested) => flatten_into(nested, &full, out),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use msgfmt_locale::InMemoryProvider;
    use msgfmt_locale::LocaleDataProvider;
    use pretty_assertions::assert_eq;

    fn en() -> msgfmt_locale::LocaleData {
        (*InMemoryProvider::builtin().try_get_locale("en").unwrap()).clone()
    }

    #[test]
    fn bool_select_key() {
        assert_eq!(Value::Bool(true).select_key(&en()), "true");
        assert_eq!(Value::Bool(false).select_key(&en()), "false");
    }

    #[test]
    fn null_select_key() {
        assert_eq!(Value::Null.select_key(&en()), "null");
    }

    #[test]
    fn nested_tree_flattens_with_double_underscore() {
        let mut inner = FnvHashMap::default();
        inner.insert("first".into(), NestedValue::Leaf(Value::String("Ada".into())));
        let mut tree = FnvHashMap::default();
        tree.insert("user".into(), NestedValue::Map(inner));
        tree.insert("count".into(), NestedValue::Leaf(Value::Integer(3)));
        let flat = flatten_args(&tree);
        assert_eq!(flat.get("user__first"), Some(&Value::String("Ada".into())));
        assert_eq!(flat.get("count"), Some(&Value::Integer(3)));
    }

    #[test]
    fn decimal_operands_preserve_trailing_zeros() {
        let ops = Value::Decimal("1.50".into()).plural_operands().unwrap();
        assert_eq!(ops.v, 2);
        assert_eq!(ops.w, 1);
    }
}
