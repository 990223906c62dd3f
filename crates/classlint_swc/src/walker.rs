use swc_core::common::{BytePos, Span};
use swc_core::ecma::ast::{
  ArrayLit, BinaryOp, Expr, Lit, ObjectLit, Prop, PropName, PropOrSpread, Tpl, TplElement,
};

/// A located string segment that may contain class-name tokens. Offsets are
/// absolute byte positions into the linted source; syntactic delimiters
/// (quotes, brackets) are excluded from the range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpressionLeaf {
  pub text: String,
  pub start: usize,
  pub end: usize,
}

/// Offset context threaded explicitly through every recursive call. `base`
/// is the enclosing SourceFile's start position; `object_keys` selects the
/// key side of object entries, since class-composition callees and
/// conditional-class bindings keep class names in keys and boolean
/// conditions in values.
#[derive(Debug, Clone, Copy)]
pub struct WalkContext {
  pub base: BytePos,
  pub object_keys: bool,
}

impl WalkContext {
  pub fn new(base: BytePos) -> Self {
    Self {
      base,
      object_keys: false,
    }
  }

  pub fn with_object_keys(self) -> Self {
    Self {
      object_keys: true,
      ..self
    }
  }

  fn offset(&self, pos: BytePos) -> usize {
    (pos.0 - self.base.0) as usize
  }
}

/// Leaf for a quoted string: the span covers the raw source including the
/// quote characters, the content range trims one character from each side.
pub fn quoted_leaf(ctx: WalkContext, value: &str, span: Span) -> ExpressionLeaf {
  ExpressionLeaf {
    text: value.to_string(),
    start: ctx.offset(span.lo) + 1,
    end: ctx.offset(span.hi) - 1,
  }
}

/// Leaf for text with no surrounding delimiter: template static segments
/// and plain (unquoted) attribute text from template dialects.
pub fn plain_leaf(ctx: WalkContext, value: &str, span: Span) -> ExpressionLeaf {
  ExpressionLeaf {
    text: value.to_string(),
    start: ctx.offset(span.lo),
    end: ctx.offset(span.hi),
  }
}

/// Collects every class-name candidate leaf reachable from `expr`.
///
/// Shape policy: string literals are leaves; templates recurse into every
/// interpolation and every non-empty static segment; conditionals recurse
/// into both branches but never the condition; logical expressions recurse
/// into the right operand only (the left side is a guard, not content);
/// arrays recurse per element; objects recurse into keys or values
/// depending on `ctx.object_keys`; parentheses are transparent. Bare
/// identifiers cannot be resolved statically, and every other shape is
/// silently skipped.
pub fn collect_class_leaves(ctx: WalkContext, expr: &Expr) -> Vec<ExpressionLeaf> {
  let mut leaves = Vec::new();
  walk_expr(ctx, expr, &mut leaves);
  leaves
}

/// Collects leaves from a template composite directly, for tagged-template
/// entry points where the tag is not part of the walkable expression.
pub fn collect_template_leaves(ctx: WalkContext, template: &Tpl) -> Vec<ExpressionLeaf> {
  let mut leaves = Vec::new();
  walk_template(ctx, template, &mut leaves);
  leaves
}

fn walk_expr(ctx: WalkContext, expr: &Expr, leaves: &mut Vec<ExpressionLeaf>) {
  match expr {
    Expr::Lit(Lit::Str(string)) => {
      leaves.push(quoted_leaf(ctx, string.value.as_ref(), string.span));
    }
    Expr::Tpl(template) => walk_template(ctx, template, leaves),
    Expr::Cond(conditional) => {
      walk_expr(ctx, &conditional.cons, leaves);
      walk_expr(ctx, &conditional.alt, leaves);
    }
    Expr::Bin(binary) if is_logical(binary.op) => walk_expr(ctx, &binary.right, leaves),
    Expr::Array(array) => walk_array(ctx, array, leaves),
    Expr::Object(object) => walk_object(ctx, object, leaves),
    Expr::Paren(paren) => walk_expr(ctx, &paren.expr, leaves),
    _ => {}
  }
}

fn is_logical(op: BinaryOp) -> bool {
  matches!(
    op,
    BinaryOp::LogicalAnd | BinaryOp::LogicalOr | BinaryOp::NullishCoalescing
  )
}

fn walk_template(ctx: WalkContext, template: &Tpl, leaves: &mut Vec<ExpressionLeaf>) {
  for expr in &template.exprs {
    walk_expr(ctx, expr, leaves);
  }
  for quasi in &template.quasis {
    walk_quasi(ctx, quasi, leaves);
  }
}

fn walk_quasi(ctx: WalkContext, quasi: &TplElement, leaves: &mut Vec<ExpressionLeaf>) {
  if quasi.raw.is_empty() {
    return;
  }
  // Segment boundaries are backticks or `${`/`}`, outside the span; no
  // delimiter to strip.
  leaves.push(plain_leaf(ctx, quasi.raw.as_ref(), quasi.span));
}

fn walk_array(ctx: WalkContext, array: &ArrayLit, leaves: &mut Vec<ExpressionLeaf>) {
  for element in array.elems.iter().flatten() {
    if element.spread.is_some() {
      continue;
    }
    walk_expr(ctx, &element.expr, leaves);
  }
}

fn walk_object(ctx: WalkContext, object: &ObjectLit, leaves: &mut Vec<ExpressionLeaf>) {
  for prop in &object.props {
    let PropOrSpread::Prop(prop) = prop else {
      continue;
    };
    let Prop::KeyValue(entry) = prop.as_ref() else {
      continue;
    };

    if ctx.object_keys {
      walk_prop_name(ctx, &entry.key, leaves);
    } else {
      walk_expr(ctx, &entry.value, leaves);
    }
  }
}

fn walk_prop_name(ctx: WalkContext, key: &PropName, leaves: &mut Vec<ExpressionLeaf>) {
  match key {
    PropName::Str(string) => leaves.push(quoted_leaf(ctx, string.value.as_ref(), string.span)),
    PropName::Computed(computed) => walk_expr(ctx, &computed.expr, leaves),
    _ => {}
  }
}
