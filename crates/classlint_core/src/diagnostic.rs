use std::fmt::{Display, Formatter};

use serde::Serialize;

use crate::arbitrary::Violation;
use crate::fix::TextEdit;

/// Stable identifier for the one diagnostic this lint emits.
pub const ARBITRARY_VALUE_ALREADY_DEFINED: &str = "arbitraryValueAlreadyDefined";

/// User-facing diagnostic for a single violation, shaped for a host
/// framework's reporting transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostic {
  pub id: &'static str,
  pub message: String,
  pub data: DiagnosticData,
  pub fix: TextEdit,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosticData {
  pub arbitrary_value: String,
  pub defined_token: String,
}

impl From<&Violation> for Diagnostic {
  fn from(violation: &Violation) -> Self {
    Self {
      id: ARBITRARY_VALUE_ALREADY_DEFINED,
      message: violation.message(),
      data: DiagnosticData {
        arbitrary_value: violation.arbitrary_value.clone(),
        defined_token: violation.defined_token(),
      },
      fix: violation.fix.clone(),
    }
  }
}

impl Display for Diagnostic {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    f.write_str(&self.message)
  }
}
