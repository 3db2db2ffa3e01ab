//! A thin command-line driver over [`msgfmt_core::Formatter`]: reads a
//! pattern and a JSON argument file, prints the formatted result.

use anyhow::{bail, Context, Result};
use clap::Parser;
use fnv::FnvHashMap;
use msgfmt_core::{flatten_args, FormatterOptions, Formatter, NestedValue, Value};
use msgfmt_locale::{InMemoryProvider, LocaleDataProvider};
use smartstring::alias::String as SmartString;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "msgfmt", about = "Formats an ICU MessageFormat pattern")]
struct Cli {
    /// Pattern text. Omit to use --pattern-file instead.
    pattern: Option<String>,

    #[arg(long, value_name = "FILE")]
    pattern_file: Option<PathBuf>,

    /// BCP-47 locale code, e.g. "en" or "de-DE".
    #[arg(long, default_value = "en")]
    locale: String,

    #[arg(long, value_name = "LOCALE")]
    fallback_locale: Option<String>,

    /// JSON object of argument values; nested objects flatten with `__`.
    #[arg(long, value_name = "FILE")]
    args_file: Option<PathBuf>,

    /// Run format_html instead of format (literal `<...>` passes through untouched).
    #[arg(long)]
    html: bool,

    /// Raise an error on missing arguments instead of rendering them as empty.
    #[arg(long)]
    strict_variables: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let pattern = match (&cli.pattern, &cli.pattern_file) {
        (Some(p), None) => p.clone(),
        (None, Some(path)) => {
            fs::read_to_string(path).with_context(|| format!("reading pattern file {path:?}"))?
        }
        (Some(_), Some(_)) => bail!("pass either a pattern argument or --pattern-file, not both"),
        (None, None) => bail!("a pattern is required"),
    };

    let tree = match &cli.args_file {
        Some(path) => {
            let text = fs::read_to_string(path).with_context(|| format!("reading args file {path:?}"))?;
            let json: serde_json::Value = serde_json::from_str(&text)
                .with_context(|| format!("parsing args file {path:?} as JSON"))?;
            json_to_tree(&json)?
        }
        None => FnvHashMap::default(),
    };

    let provider: Arc<dyn LocaleDataProvider> = Arc::new(InMemoryProvider::builtin());
    let mut options = FormatterOptions::new(provider);
    options.fallback_locale = cli.fallback_locale.map(|s| s.into());
    options.strict_variables = cli.strict_variables;
    let formatter = Formatter::new(&cli.locale, options)?;

    let args = flatten_args(&tree);
    let out = if cli.html {
        formatter.format_html(&pattern, &args)?
    } else {
        formatter.format(&pattern, &args)?
    };
    println!("{out}");
    Ok(())
}

fn json_to_tree(value: &serde_json::Value) -> Result<FnvHashMap<SmartString, NestedValue>> {
    match value.as_object() {
        Some(map) => {
            let mut out = FnvHashMap::default();
            for (k, v) in map {
                out.insert(k.as_str().into(), json_to_nested(v)?);
            }
            Ok(out)
        }
        None => bail!("args file must contain a JSON object at the top level"),
    }
}

fn json_to_nested(value: &serde_json::Value) -> Result<NestedValue> {
    match value {
        serde_json::Value::Object(map) => {
            let mut out = FnvHashMap::default();
            for (k, v) in map {
                out.insert(k.as_str().into(), json_to_nested(v)?);
            }
            Ok(NestedValue::Map(out))
        }
        other => Ok(NestedValue::Leaf(json_to_value(other)?)),
    }
}

fn json_to_value(value: &serde_json::Value) -> Result<Value> {
    match value {
        serde_json::Value::Null => Ok(Value::Null),
        serde_json::Value::Bool(b) => Ok(Value::Bool(*b)),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Value::Integer(i))
            } else if let Some(f) = n.as_f64() {
                Ok(Value::Float(f))
            } else {
                bail!("unrepresentable number {n}")
            }
        }
        serde_json::Value::String(s) => Ok(Value::String(s.clone())),
        serde_json::Value::Array(items) => {
            let mut out = Vec::with_capacity(items.len());
            for item in items {
                out.push(json_to_value(item)?);
            }
            Ok(Value::List(out))
        }
        serde_json::Value::Object(_) => {
            bail!("nested objects are only allowed at argument-name boundaries")
        }
    }
}
