use serde::{Deserialize, Serialize};
use serde_json::Number;

/// ---------------------------------------------------------------------------
/// Daily Plan (generated)
/// ---------------------------------------------------------------------------

/// A single-day plan as produced by the generation service.
///
/// Every field is required and unknown fields are rejected at every level,
/// mirroring the strict schema sent with the request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Plan {
  pub phase: String,
  pub todays_focus: String,
  pub workout: WorkoutPlan,
  pub nutrition: NutritionPlan,
  pub recovery: RecoveryPlan,
  pub mindset: MindsetPlan,
  pub safety_notes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct WorkoutPlan {
  pub title: String,
  /// Kept as the raw JSON number so the plan round-trips unchanged
  pub duration_minutes: Number,
  pub warmup: Vec<String>,
  pub main_set: Vec<String>,
  pub cooldown: Vec<String>,
  pub intensity: Intensity,
  pub modifications: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
  Easy,
  Moderate,
  Hard,
}

impl Intensity {
  pub const ALL: [Intensity; 3] = [Intensity::Easy, Intensity::Moderate, Intensity::Hard];

  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Easy => "easy",
      Self::Moderate => "moderate",
      Self::Hard => "hard",
    }
  }
}

impl std::fmt::Display for Intensity {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NutritionPlan {
  pub theme: String,
  pub meals: Vec<String>,
  pub hydration: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RecoveryPlan {
  pub practices: Vec<String>,
  pub sleep_tip: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct MindsetPlan {
  pub five_minute_practice: Vec<String>,
  pub mantra: String,
}
