use anyhow::{Context, Result};
use regex::Regex;
use serde::Deserialize;
use serde_json::Value;

/// Call targets treated as class-composition helpers when no allow-list is
/// configured.
pub const DEFAULT_CALLEES: &[&str] = &["classnames", "classNames", "clsx", "ctl", "cva", "tv"];

/// Attribute names treated as class-bearing when no pattern is configured.
pub const DEFAULT_CLASS_REGEX: &str = "^class(Name)?$";

/// Object keys reserved for future filtering of composition-helper entries.
pub const DEFAULT_IGNORED_KEYS: &[&str] = &["compoundVariants", "defaultVariants"];

/// Raw lint options as configured by the host, before defaulting.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LintOptions {
  /// Allow-listed call-target names whose arguments hold class lists.
  pub callees: Option<Vec<String>>,
  /// Allow-listed tagged-template names whose templates hold class lists.
  pub tags: Option<Vec<String>>,
  /// Pattern identifying class-bearing attribute names.
  pub class_regex: Option<String>,
  /// Disables attribute-based detection entirely.
  pub skip_class_attribute: Option<bool>,
  /// Reserved; accepted but not consulted by matching.
  pub ignored_keys: Option<Vec<String>>,
  /// Theme overlay merged over the base theme: the path of a theme file,
  /// or an inline object.
  pub config: Option<Value>,
  /// Utility prefix stripped by the class parser.
  pub prefix: Option<String>,
}

/// Options after defaulting, with the attribute pattern compiled.
#[derive(Debug, Clone)]
pub struct ResolvedOptions {
  pub callees: Vec<String>,
  pub tags: Vec<String>,
  pub class_attribute: Regex,
  pub skip_class_attribute: bool,
  pub ignored_keys: Vec<String>,
  pub config: Option<Value>,
  pub prefix: Option<String>,
}

impl ResolvedOptions {
  pub fn resolve(options: LintOptions) -> Result<Self> {
    let pattern = options
      .class_regex
      .unwrap_or_else(|| DEFAULT_CLASS_REGEX.to_string());
    let class_attribute =
      Regex::new(&pattern).with_context(|| format!("invalid classRegex pattern: {pattern}"))?;

    Ok(Self {
      callees: options
        .callees
        .unwrap_or_else(|| owned(DEFAULT_CALLEES)),
      tags: options.tags.unwrap_or_default(),
      class_attribute,
      skip_class_attribute: options.skip_class_attribute.unwrap_or(false),
      ignored_keys: options
        .ignored_keys
        .unwrap_or_else(|| owned(DEFAULT_IGNORED_KEYS)),
      config: options.config,
      prefix: options.prefix,
    })
  }
}

fn owned(values: &[&str]) -> Vec<String> {
  values.iter().map(ToString::to_string).collect()
}
