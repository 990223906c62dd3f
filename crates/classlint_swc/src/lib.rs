pub mod runner;
pub mod visitor;
pub mod walker;

pub use runner::{LintError, apply_fixes, lint_source};
pub use visitor::ArbitraryValueVisitor;
pub use walker::{ExpressionLeaf, WalkContext, collect_class_leaves, collect_template_leaves};
