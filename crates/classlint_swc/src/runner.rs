use serde_json::Value;
use swc_core::common::input::StringInput;
use swc_core::common::sync::Lrc;
use swc_core::common::{FileName, SourceMap};
use swc_core::ecma::parser::lexer::Lexer;
use swc_core::ecma::parser::{EsSyntax, Parser, Syntax};
use swc_core::ecma::visit::VisitWith;

use classlint_core::arbitrary::{CollectingReporter, Violation};
use classlint_core::class_parser::DefaultClassParser;
use classlint_core::fix::{TextEdit, apply_edits};
use classlint_core::options::ResolvedOptions;
use classlint_core::theme::{ThemeValueIndex, colors_of, config_overlay, merge_theme};

use crate::visitor::ArbitraryValueVisitor;

/// Failures surfaced when linting a source string.
#[derive(Debug, thiserror::Error)]
pub enum LintError {
  #[error("failed to parse module")]
  Parse(swc_core::ecma::parser::error::Error),
  #[error("invalid lint configuration: {0}")]
  Config(anyhow::Error),
}

/// Lints one source string against `theme`, returning violations in
/// discovery order.
///
/// The theme's `colors` mapping (after overlaying the `config` option, if
/// any) is flattened into a [`ThemeValueIndex`] once; the module
/// is parsed with JSX enabled and visited by [`ArbitraryValueVisitor`].
pub fn lint_source(
  code: &str,
  options: &ResolvedOptions,
  theme: &Value,
) -> Result<Vec<Violation>, LintError> {
  let theme = match &options.config {
    Some(config) => {
      let overlay = config_overlay(config).map_err(LintError::Config)?;
      merge_theme(theme, &overlay)
    }
    None => theme.clone(),
  };
  let colors = colors_of(&theme).map_err(LintError::Config)?;
  let index = ThemeValueIndex::from_colors(colors);

  let source_map = Lrc::new(SourceMap::default());
  let source_file = source_map.new_source_file(Lrc::new(FileName::Anon), code.to_string());

  let lexer = Lexer::new(
    Syntax::Es(EsSyntax {
      jsx: true,
      ..Default::default()
    }),
    Default::default(),
    StringInput::from(&*source_file),
    None,
  );

  let mut parser = Parser::new_from(lexer);
  let module = parser.parse_module().map_err(LintError::Parse)?;

  let class_parser = DefaultClassParser::new(options.prefix.clone());
  let mut reporter = CollectingReporter::default();
  let mut visitor = ArbitraryValueVisitor::new(
    options,
    &index,
    &class_parser,
    &mut reporter,
    source_file.start_pos,
  );
  module.visit_with(&mut visitor);

  tracing::debug!(violations = reporter.violations.len(), "lint pass complete");
  Ok(reporter.violations)
}

/// Applies every violation's fix to `code`. Fix ranges are confined to
/// their own token's name span, so non-overlapping fixes compose in one
/// pass.
pub fn apply_fixes(code: &str, violations: &[Violation]) -> String {
  let edits: Vec<TextEdit> = violations
    .iter()
    .map(|violation| violation.fix.clone())
    .collect();
  apply_edits(code, &edits)
}
