use serde::Serialize;

/// A single exclusive text-range replacement: `[start, end)` in absolute
/// byte offsets is replaced with `text`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextEdit {
  pub start: usize,
  pub end: usize,
  pub text: String,
}

/// Applies non-overlapping edits to `source` in one pass. Edits are applied
/// in ascending range order; an edit that starts inside an already-applied
/// range is dropped.
pub fn apply_edits(source: &str, edits: &[TextEdit]) -> String {
  let mut ordered: Vec<&TextEdit> = edits.iter().collect();
  ordered.sort_by_key(|edit| (edit.start, edit.end));

  let mut output = String::with_capacity(source.len());
  let mut cursor = 0usize;

  for edit in ordered {
    if edit.start < cursor || edit.end > source.len() {
      continue;
    }
    output.push_str(&source[cursor..edit.start]);
    output.push_str(&edit.text);
    cursor = edit.end;
  }

  output.push_str(&source[cursor..]);
  output
}
