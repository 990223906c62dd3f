use anyhow::{Context, Result, anyhow};
use indexmap::IndexMap;
use parking_lot::Mutex;
use serde_json::Value;
use serde_json5::from_str;
use std::{
  collections::HashMap,
  fs,
  path::{Path, PathBuf},
  sync::{Arc, LazyLock},
};

/// Reverse lookup from literal theme values to the canonical token paths
/// that produce them.
///
/// Built once per lint session from the nested `colors` mapping of a
/// resolved theme and read-only afterwards. A value defined at several
/// paths keeps every path in discovery order; replacement uses the first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeValueIndex {
  entries: IndexMap<String, Vec<String>>,
}

impl ThemeValueIndex {
  /// Flattens a nested mapping into the reverse index by depth-first
  /// traversal. Keys are visited in enumeration order; a value that is
  /// itself a plain object extends the path, anything else (string,
  /// number, array, null, bool) is a leaf. Path segments are joined
  /// with `-`.
  pub fn from_colors(colors: &Value) -> Self {
    let mut entries: IndexMap<String, Vec<String>> = IndexMap::new();
    let mut path: Vec<&str> = Vec::new();
    collect_values(colors, &mut path, &mut entries);
    tracing::debug!(values = entries.len(), "built theme value index");
    Self { entries }
  }

  /// All canonical paths for `value`, in discovery order.
  pub fn lookup(&self, value: &str) -> Option<&[String]> {
    self.entries.get(&normalize_value(value)).map(Vec::as_slice)
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }
}

fn collect_values<'a>(
  node: &'a Value,
  path: &mut Vec<&'a str>,
  entries: &mut IndexMap<String, Vec<String>>,
) {
  let Value::Object(map) = node else {
    return;
  };

  for (key, value) in map {
    path.push(key);
    if value.is_object() {
      collect_values(value, path, entries);
    } else {
      entries
        .entry(literal_key(value))
        .or_default()
        .push(path.join("-"));
    }
    path.pop();
  }
}

/// Map key for a leaf value. Strings are used as-is; other leaf shapes
/// (arrays never occur at color leaves in practice) fall back to their
/// JSON rendering.
fn literal_key(value: &Value) -> String {
  match value {
    Value::String(literal) => normalize_value(literal),
    other => other.to_string(),
  }
}

/// Hex color literals compare case-insensitively; every other value is
/// matched exactly.
fn normalize_value(value: &str) -> String {
  if value.starts_with('#') {
    value.to_ascii_lowercase()
  } else {
    value.to_string()
  }
}

/// Resolves the `colors` subtree of a theme. A theme without one is the
/// single fatal configuration error and aborts the lint session.
pub fn colors_of(theme: &Value) -> Result<&Value> {
  theme
    .get("colors")
    .filter(|colors| colors.is_object())
    .ok_or_else(|| anyhow!("theme does not define a `colors` mapping"))
}

/// Recursive object-wise merge of `overlay` onto `base`; overlay wins on
/// conflicts, non-object values replace wholesale.
pub fn merge_theme(base: &Value, overlay: &Value) -> Value {
  match (base, overlay) {
    (Value::Object(base_map), Value::Object(overlay_map)) => {
      let mut merged = base_map.clone();
      for (key, value) in overlay_map {
        let entry = match merged.get(key) {
          Some(existing) => merge_theme(existing, value),
          None => value.clone(),
        };
        merged.insert(key.clone(), entry);
      }
      Value::Object(merged)
    }
    _ => overlay.clone(),
  }
}

static SHARED_THEME_DATA: LazyLock<Mutex<HashMap<String, Arc<Value>>>> =
  LazyLock::new(|| Mutex::new(HashMap::new()));

/// Loads a theme file through a process-wide cache keyed by path, so
/// concurrently linted files share one parsed theme.
pub fn get_or_load_theme<P: AsRef<Path>>(path: Option<P>) -> Result<Option<Arc<Value>>> {
  match path {
    Some(path) => load_cached_theme(path.as_ref()).map(Some),
    None => Ok(None),
  }
}

fn load_cached_theme(path: &Path) -> Result<Arc<Value>> {
  let path_str = path.to_string_lossy().to_string();
  let mut cache = SHARED_THEME_DATA.lock();

  if let Some(cached) = cache.get(&path_str) {
    return Ok(cached.clone());
  }

  let theme = Arc::new(load_theme_from_json(&path.to_path_buf())?);
  cache.insert(path_str, theme.clone());
  Ok(theme)
}

/// Resolves the `config` lint option into a theme overlay: a string is the
/// path of a theme file (loaded through the cache), anything else is used
/// as an inline overlay.
pub fn config_overlay(config: &Value) -> Result<Arc<Value>> {
  match config {
    Value::String(path) => load_cached_theme(Path::new(path)),
    inline => Ok(Arc::new(inline.clone())),
  }
}

/// Reads and parses a theme file. JSON5 so trailing commas and comments in
/// hand-maintained configs are accepted.
pub fn load_theme_from_json(json_path: &PathBuf) -> Result<Value> {
  let json_content = fs::read_to_string(json_path)
    .with_context(|| format!("Failed to read {}", json_path.display()))?;

  from_str(&json_content).with_context(|| format!("Failed to parse {}", json_path.display()))
}

/// Clears the theme cache (useful for testing)
pub fn clear_theme_cache() {
  SHARED_THEME_DATA.lock().clear();
}

/// Gets cache statistics: cached themes and top-level keys across them.
pub fn theme_cache_stats() -> (usize, usize) {
  let cache = SHARED_THEME_DATA.lock();
  let total_entries = cache.len();
  let total_keys: usize = cache
    .values()
    .map(|theme| theme.as_object().map_or(0, |map| map.len()))
    .sum();
  (total_entries, total_keys)
}
