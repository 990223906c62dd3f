/// One whitespace-delimited class name within a class list, with its byte
/// offset relative to the start of the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassToken {
  pub text: String,
  pub offset: usize,
}

/// Structural decomposition of a single class token. `name` is the part
/// eligible to carry a bracketed arbitrary value, after variant, important
/// and utility-prefix stripping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedClass {
  pub name: String,
  pub variants: Vec<String>,
  pub important: bool,
}

/// Splits class lists into tokens and decomposes tokens into parts.
///
/// The matcher depends only on this contract, so the implementation can be
/// swapped for a different utility-class dialect.
pub trait ClassParser {
  fn split(&self, text: &str) -> Vec<ClassToken>;
  fn parse(&self, token: &str) -> ParsedClass;
}

/// Built-in parser for tailwind-style class lists.
#[derive(Debug, Clone, Default)]
pub struct DefaultClassParser {
  prefix: Option<String>,
}

impl DefaultClassParser {
  pub fn new(prefix: Option<String>) -> Self {
    Self { prefix }
  }
}

impl ClassParser for DefaultClassParser {
  fn split(&self, text: &str) -> Vec<ClassToken> {
    let mut tokens = Vec::new();
    let mut start: Option<usize> = None;

    for (idx, byte) in text.bytes().enumerate() {
      if byte.is_ascii_whitespace() {
        if let Some(token_start) = start.take() {
          tokens.push(ClassToken {
            text: text[token_start..idx].to_string(),
            offset: token_start,
          });
        }
      } else if start.is_none() {
        start = Some(idx);
      }
    }

    if let Some(token_start) = start {
      tokens.push(ClassToken {
        text: text[token_start..].to_string(),
        offset: token_start,
      });
    }

    tokens
  }

  fn parse(&self, token: &str) -> ParsedClass {
    let (variants, mut rest) = split_variants(token);

    let important = rest.starts_with('!');
    if important {
      rest = &rest[1..];
    }

    if let Some(prefix) = &self.prefix {
      if let Some(stripped) = rest.strip_prefix(prefix.as_str()) {
        rest = stripped;
      }
    }

    ParsedClass {
      name: rest.to_string(),
      variants,
      important,
    }
  }
}

/// Splits leading `variant:` segments off a token. Colons inside square
/// brackets do not terminate a variant (`[&:hover]:underline`).
fn split_variants(token: &str) -> (Vec<String>, &str) {
  let mut variants = Vec::new();
  let mut depth = 0usize;
  let mut segment_start = 0usize;

  for (idx, byte) in token.bytes().enumerate() {
    match byte {
      b'[' => depth += 1,
      b']' => depth = depth.saturating_sub(1),
      b':' if depth == 0 => {
        variants.push(token[segment_start..idx].to_string());
        segment_start = idx + 1;
      }
      _ => {}
    }
  }

  (variants, &token[segment_start..])
}
