//! Strict output schema for generated plans
//!
//! Sent alongside the prompt so the service is constrained at generation
//! time. Shape must stay in lockstep with `models::Plan`.

use serde_json::{json, Value};

use crate::models::Intensity;

/// Name the schema is registered under in the request
pub const SCHEMA_NAME: &str = "cycle_plan";

fn string_array() -> Value {
  json!({ "type": "array", "items": { "type": "string" } })
}

fn strict_object(required: &[&str], properties: Value) -> Value {
  json!({
    "type": "object",
    "additionalProperties": false,
    "required": required,
    "properties": properties,
  })
}

pub fn plan_schema() -> Value {
  let intensities: Vec<&str> = Intensity::ALL.iter().map(|i| i.as_str()).collect();

  let workout = strict_object(
    &[
      "title",
      "durationMinutes",
      "warmup",
      "mainSet",
      "cooldown",
      "intensity",
      "modifications",
    ],
    json!({
      "title": { "type": "string" },
      "durationMinutes": { "type": "number" },
      "warmup": string_array(),
      "mainSet": string_array(),
      "cooldown": string_array(),
      "intensity": { "type": "string", "enum": intensities },
      "modifications": string_array(),
    }),
  );

  let nutrition = strict_object(
    &["theme", "meals", "hydration"],
    json!({
      "theme": { "type": "string" },
      "meals": string_array(),
      "hydration": string_array(),
    }),
  );

  let recovery = strict_object(
    &["practices", "sleepTip"],
    json!({
      "practices": string_array(),
      "sleepTip": { "type": "string" },
    }),
  );

  let mindset = strict_object(
    &["fiveMinutePractice", "mantra"],
    json!({
      "fiveMinutePractice": string_array(),
      "mantra": { "type": "string" },
    }),
  );

  strict_object(
    &[
      "phase",
      "todaysFocus",
      "workout",
      "nutrition",
      "recovery",
      "mindset",
      "safetyNotes",
    ],
    json!({
      "phase": { "type": "string" },
      "todaysFocus": { "type": "string" },
      "workout": workout,
      "nutrition": nutrition,
      "recovery": recovery,
      "mindset": mindset,
      "safetyNotes": string_array(),
    }),
  )
}
