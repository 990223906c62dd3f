use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

use crate::class_parser::ClassParser;
use crate::fix::TextEdit;
use crate::theme::ThemeValueIndex;

/// Bracketed arbitrary-value payload: first `[` through the last `]`,
/// inner content captured verbatim, no nesting awareness.
static ARBITRARY_VALUE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[(.*)\]").unwrap());

/// Nested default values under a named group are referenced without this
/// tail.
const DEFAULT_SUFFIX: &str = "-DEFAULT";

/// One arbitrary-value occurrence whose payload the theme already names,
/// together with the replacement that rewrites it to the canonical token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Violation {
  /// The literal payload extracted from the brackets, e.g. a hex color.
  pub arbitrary_value: String,
  /// Every canonical path producing that value, in discovery order.
  pub defined_tokens: Vec<String>,
  pub fix: TextEdit,
}

impl Violation {
  /// Comma-joined canonical path list as rendered into diagnostics.
  pub fn defined_token(&self) -> String {
    self.defined_tokens.join(", ")
  }

  pub fn message(&self) -> String {
    format!(
      "Arbitrary value: {} already defined by '{}'",
      self.arbitrary_value,
      self.defined_token()
    )
  }
}

/// Receives violations as they are discovered, in source order.
pub trait Reporter {
  fn report(&mut self, violation: Violation);
}

/// Buffers violations for callers that apply fixes themselves.
#[derive(Debug, Default)]
pub struct CollectingReporter {
  pub violations: Vec<Violation>,
}

impl Reporter for CollectingReporter {
  fn report(&mut self, violation: Violation) {
    self.violations.push(violation);
  }
}

struct ArbitraryMatch<'a> {
  payload: &'a str,
  start: usize,
  end: usize,
}

fn find_arbitrary_value(name: &str) -> Option<ArbitraryMatch<'_>> {
  let captures = ARBITRARY_VALUE.captures(name)?;
  let full = captures.get(0)?;
  let payload = captures.get(1)?;

  Some(ArbitraryMatch {
    payload: payload.as_str(),
    start: full.start(),
    end: full.end(),
  })
}

fn canonical_replacement(path: &str) -> &str {
  path.strip_suffix(DEFAULT_SUFFIX).unwrap_or(path)
}

/// Splits one located class list, parses each token and matches it against
/// the index. Every token whose bracket payload the index already names is
/// forwarded to the reporter; a failed lookup is a non-match, not an error.
///
/// `leaf_start` is the absolute byte offset of the list's first character;
/// the fix range covers the parsed `name` starting at the token offset.
pub fn scan_class_list(
  text: &str,
  leaf_start: usize,
  index: &ThemeValueIndex,
  parser: &dyn ClassParser,
  reporter: &mut dyn Reporter,
) {
  for token in parser.split(text) {
    let parsed = parser.parse(&token.text);

    let Some(found) = find_arbitrary_value(&parsed.name) else {
      continue;
    };
    let Some(paths) = index.lookup(found.payload) else {
      continue;
    };
    let Some(first) = paths.first() else {
      continue;
    };

    let replacement = canonical_replacement(first);
    let mut fixed = String::with_capacity(parsed.name.len());
    fixed.push_str(&parsed.name[..found.start]);
    fixed.push_str(replacement);
    fixed.push_str(&parsed.name[found.end..]);

    let start = leaf_start + token.offset;
    reporter.report(Violation {
      arbitrary_value: found.payload.to_string(),
      defined_tokens: paths.to_vec(),
      fix: TextEdit {
        start,
        end: start + parsed.name.len(),
        text: fixed,
      },
    });
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::class_parser::DefaultClassParser;
  use serde_json::json;

  fn scan(text: &str, leaf_start: usize, colors: &serde_json::Value) -> Vec<Violation> {
    let index = ThemeValueIndex::from_colors(colors);
    let parser = DefaultClassParser::default();
    let mut reporter = CollectingReporter::default();
    scan_class_list(text, leaf_start, &index, &parser, &mut reporter);
    reporter.violations
  }

  #[test]
  fn reports_a_defined_arbitrary_value() {
    let colors = json!({ "gray": { "layout": "#f0f2f5" } });
    let violations = scan("bg-[#f0f2f5]", 0, &colors);

    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].arbitrary_value, "#f0f2f5");
    assert_eq!(violations[0].defined_tokens, vec!["gray-layout".to_string()]);
    assert_eq!(violations[0].fix.text, "bg-gray-layout");
    assert_eq!(violations[0].fix.start, 0);
    assert_eq!(violations[0].fix.end, 12);
  }

  #[test]
  fn strips_the_default_suffix_when_replacing() {
    let colors = json!({ "gray": { "DEFAULT": "#332233" } });
    let violations = scan("text-[#332233]", 0, &colors);

    assert_eq!(violations[0].defined_tokens, vec!["gray-DEFAULT".to_string()]);
    assert_eq!(violations[0].fix.text, "text-gray");
  }

  #[test]
  fn replacement_uses_the_first_discovered_path() {
    let colors = json!({
      "gray": { "layout": "#f0f2f5", "flow": "#f0f2f5" }
    });
    let violations = scan("bg-[#f0f2f5]", 0, &colors);

    assert_eq!(
      violations[0].defined_tokens,
      vec!["gray-layout".to_string(), "gray-flow".to_string()]
    );
    assert_eq!(violations[0].fix.text, "bg-gray-layout");
    assert_eq!(
      violations[0].defined_token(),
      "gray-layout, gray-flow".to_string()
    );
  }

  #[test]
  fn offsets_account_for_the_leaf_start_and_token_position() {
    let colors = json!({ "gray": { "layout": "#f0f2f5" } });
    let violations = scan("flex bg-[#f0f2f5]", 10, &colors);

    assert_eq!(violations[0].fix.start, 15);
    assert_eq!(violations[0].fix.end, 15 + "bg-[#f0f2f5]".len());
  }

  #[test]
  fn unknown_payloads_are_not_violations() {
    let colors = json!({ "gray": { "layout": "#f0f2f5" } });
    assert!(scan("bg-[#ffffff]", 0, &colors).is_empty());
  }

  #[test]
  fn unterminated_brackets_are_not_arbitrary_values() {
    let colors = json!({ "gray": { "layout": "#f0f2f5" } });
    assert!(scan("bg-[#f0f2f5", 0, &colors).is_empty());
    assert!(scan("bg-#f0f2f5]", 0, &colors).is_empty());
  }

  #[test]
  fn tokens_without_brackets_are_skipped() {
    let colors = json!({ "gray": { "layout": "#f0f2f5" } });
    assert!(scan("flex items-center", 0, &colors).is_empty());
  }

  #[test]
  fn every_matching_token_is_reported_independently() {
    let colors = json!({
      "gray": { "layout": "#f0f2f5" },
      "flow": "#123456"
    });
    let violations = scan("bg-[#f0f2f5] text-[#123456] bg-[#f0f2f5]", 0, &colors);

    assert_eq!(violations.len(), 3);
    assert_eq!(violations[0].fix.start, 0);
    assert_eq!(violations[1].fix.start, 13);
    assert_eq!(violations[2].fix.start, 28);
  }

  #[test]
  fn an_empty_index_never_reports() {
    let violations = scan("bg-[#f0f2f5]", 0, &json!({}));
    assert!(violations.is_empty());
  }

  #[test]
  fn message_follows_the_diagnostic_template() {
    let colors = json!({ "gray": { "layout": "#f0f2f5" } });
    let violations = scan("bg-[#f0f2f5]", 0, &colors);

    assert_eq!(
      violations[0].message(),
      "Arbitrary value: #f0f2f5 already defined by 'gray-layout'"
    );
  }
}
