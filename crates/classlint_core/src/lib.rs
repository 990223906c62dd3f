pub mod arbitrary;
pub mod class_parser;
pub mod diagnostic;
pub mod fix;
pub mod options;
pub mod theme;

pub use arbitrary::{CollectingReporter, Reporter, Violation};
pub use diagnostic::Diagnostic;
pub use fix::TextEdit;
pub use options::{LintOptions, ResolvedOptions};
pub use theme::ThemeValueIndex;
