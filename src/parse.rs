//! Defensive parsing of model output into a `Plan`
//!
//! Models are asked for bare JSON but sometimes wrap it in prose or code
//! fences, or stop mid-object. We try the text as-is, then fall back to the
//! span from the first `{` to the last `}`. Anything else is a failure.

use crate::error::PlanError;
use crate::models::Plan;

/// Why a piece of model output could not be turned into a plan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseFailure {
  /// Nothing (or only whitespace) came back
  Empty,
  /// Neither the full text nor the brace-delimited span is a valid plan
  InvalidJson,
}

impl From<ParseFailure> for PlanError {
  fn from(failure: ParseFailure) -> Self {
    match failure {
      ParseFailure::Empty => PlanError::EmptyOutput,
      ParseFailure::InvalidJson => PlanError::MalformedOutput,
    }
  }
}

pub fn parse_plan(text: &str) -> Result<Plan, ParseFailure> {
  if text.trim().is_empty() {
    return Err(ParseFailure::Empty);
  }

  if let Ok(plan) = serde_json::from_str::<Plan>(text) {
    return Ok(plan);
  }

  let candidate = brace_span(text).ok_or(ParseFailure::InvalidJson)?;
  serde_json::from_str::<Plan>(candidate).map_err(|_| ParseFailure::InvalidJson)
}

/// Slice from the first `{` through the last `}`, if the last comes after the first
fn brace_span(text: &str) -> Option<&str> {
  let start = text.find('{')?;
  let end = text.rfind('}')?;
  if end <= start {
    return None;
  }
  Some(&text[start..=end])
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use super::*;
  use crate::test_utils::{mock_plan, mock_plan_json};

  #[test]
  fn test_direct_parse() {
    let plan = parse_plan(&mock_plan_json()).unwrap();
    assert_eq!(plan, mock_plan());
  }

  #[test]
  fn test_prose_wrapped_plan() {
    let input = format!("Sure! Here is your plan: {} Hope that helps!", mock_plan_json());
    let plan = parse_plan(&input).unwrap();
    assert_eq!(plan.phase, "Luteal");
    assert_eq!(plan, mock_plan());
  }

  #[test]
  fn test_code_fenced_plan() {
    let input = format!("Here's the plan:\n\n```json\n{}\n```\n", mock_plan_json());
    assert_eq!(parse_plan(&input), Ok(mock_plan()));
  }

  #[test]
  fn test_no_json() {
    assert_eq!(parse_plan("no json here"), Err(ParseFailure::InvalidJson));
  }

  #[test]
  fn test_empty_and_whitespace() {
    assert_eq!(parse_plan(""), Err(ParseFailure::Empty));
    assert_eq!(parse_plan("  \n\t"), Err(ParseFailure::Empty));
  }

  #[test]
  fn test_braces_in_wrong_order() {
    assert_eq!(parse_plan("} nothing here {"), Err(ParseFailure::InvalidJson));
  }

  #[test]
  fn test_only_opening_brace() {
    assert_eq!(parse_plan("{\"phase\": \"Luteal\""), Err(ParseFailure::InvalidJson));
  }

  #[test]
  fn test_truncated_output() {
    let json = mock_plan_json();
    let truncated = &json[..json.len() / 2];
    assert_eq!(parse_plan(truncated), Err(ParseFailure::InvalidJson));
  }

  #[test]
  fn test_valid_json_with_wrong_shape() {
    assert_eq!(
      parse_plan(r#"{"summary": "not a plan"}"#),
      Err(ParseFailure::InvalidJson)
    );
  }

  #[test]
  fn test_valid_json_that_is_not_a_plan_falls_back_to_brace_slice() {
    // Parses as JSON on the first pass, but as an array rather than a plan
    let input = format!("[{}]", mock_plan_json());
    assert!(serde_json::from_str::<serde_json::Value>(&input).is_ok());
    assert_eq!(parse_plan(&input), Ok(mock_plan()));
  }

  #[test]
  fn test_leading_object_widens_the_slice() {
    let input = format!("Note {{\"x\":1}} {}", mock_plan_json());
    assert_eq!(parse_plan(&input), Err(ParseFailure::InvalidJson));
  }

  #[test]
  fn test_failure_maps_to_plan_error() {
    assert_eq!(PlanError::from(ParseFailure::Empty), PlanError::EmptyOutput);
    assert_eq!(PlanError::from(ParseFailure::InvalidJson), PlanError::MalformedOutput);
  }

  #[test]
  fn test_brace_span() {
    assert_eq!(brace_span("a {x} b {y} c"), Some("{x} b {y}"));
    assert_eq!(brace_span("{}"), Some("{}"));
    assert_eq!(brace_span("no braces"), None);
    assert_eq!(brace_span("}{"), None);
  }
}
