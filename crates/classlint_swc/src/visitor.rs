use swc_core::common::BytePos;
use swc_core::ecma::ast::{
  CallExpr, Callee, Expr, JSXAttr, JSXAttrName, JSXAttrValue, JSXExpr, Lit, TaggedTpl,
};
use swc_core::ecma::visit::{Visit, VisitWith};

use classlint_core::arbitrary::{Reporter, scan_class_list};
use classlint_core::class_parser::ClassParser;
use classlint_core::options::ResolvedOptions;
use classlint_core::theme::ThemeValueIndex;

use crate::walker::{
  ExpressionLeaf, WalkContext, collect_class_leaves, collect_template_leaves, quoted_leaf,
};

/// Maps the syntax sites the host cares about onto the structural walker:
/// class-bearing JSX attributes, allow-listed call expressions, and
/// allow-listed tagged templates. Each discovered leaf is split into class
/// tokens and matched against the theme index.
pub struct ArbitraryValueVisitor<'a> {
  options: &'a ResolvedOptions,
  index: &'a ThemeValueIndex,
  class_parser: &'a dyn ClassParser,
  reporter: &'a mut dyn Reporter,
  base: BytePos,
}

impl<'a> ArbitraryValueVisitor<'a> {
  pub fn new(
    options: &'a ResolvedOptions,
    index: &'a ThemeValueIndex,
    class_parser: &'a dyn ClassParser,
    reporter: &'a mut dyn Reporter,
    base: BytePos,
  ) -> Self {
    Self {
      options,
      index,
      class_parser,
      reporter,
      base,
    }
  }

  fn scan_leaves(&mut self, leaves: Vec<ExpressionLeaf>) {
    for leaf in leaves {
      scan_class_list(
        &leaf.text,
        leaf.start,
        self.index,
        self.class_parser,
        self.reporter,
      );
    }
  }

  fn is_class_attribute(&self, attr: &JSXAttr) -> bool {
    let JSXAttrName::Ident(name) = &attr.name else {
      return false;
    };
    self.options.class_attribute.is_match(name.sym.as_ref())
  }

  fn callee_name(call: &CallExpr) -> Option<&str> {
    let Callee::Expr(callee) = &call.callee else {
      return None;
    };
    let Expr::Ident(ident) = callee.as_ref() else {
      return None;
    };
    Some(ident.sym.as_ref())
  }

  fn attribute_leaves(&self, attr: &JSXAttr) -> Vec<ExpressionLeaf> {
    let ctx = WalkContext::new(self.base);
    match &attr.value {
      Some(JSXAttrValue::Lit(Lit::Str(string))) => {
        vec![quoted_leaf(ctx, string.value.as_ref(), string.span)]
      }
      Some(JSXAttrValue::JSXExprContainer(container)) => match &container.expr {
        // Any object reached through a class binding is the
        // conditional-class idiom: keys hold class names, values hold
        // conditions. Key mode propagates through conditionals, arrays
        // and logical guards, as it does for composition callees.
        JSXExpr::Expr(expr) => collect_class_leaves(ctx.with_object_keys(), expr),
        JSXExpr::JSXEmptyExpr(_) => Vec::new(),
      },
      _ => Vec::new(),
    }
  }
}

impl Visit for ArbitraryValueVisitor<'_> {
  fn visit_jsx_attr(&mut self, attr: &JSXAttr) {
    if !self.options.skip_class_attribute && self.is_class_attribute(attr) {
      let leaves = self.attribute_leaves(attr);
      self.scan_leaves(leaves);
    }
    // Composition calls nested inside the attribute expression are found
    // by their own entry point below.
    attr.visit_children_with(self);
  }

  fn visit_call_expr(&mut self, call: &CallExpr) {
    if let Some(name) = Self::callee_name(call) {
      if self.options.callees.iter().any(|callee| callee == name) {
        let ctx = WalkContext::new(self.base).with_object_keys();
        for argument in &call.args {
          if argument.spread.is_some() {
            continue;
          }
          let leaves = collect_class_leaves(ctx, &argument.expr);
          self.scan_leaves(leaves);
        }
      }
    }
    call.visit_children_with(self);
  }

  fn visit_tagged_tpl(&mut self, tagged: &TaggedTpl) {
    if let Expr::Ident(tag) = tagged.tag.as_ref() {
      if self.options.tags.iter().any(|name| name == tag.sym.as_ref()) {
        let leaves = collect_template_leaves(WalkContext::new(self.base), &tagged.tpl);
        self.scan_leaves(leaves);
      }
    }
    tagged.visit_children_with(self);
  }
}
