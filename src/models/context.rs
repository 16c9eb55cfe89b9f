use serde::{Deserialize, Serialize};

use crate::phase::CyclePhase;

/// Self-reported energy for the day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnergyLevel {
  Low,
  Medium,
  High,
}

impl EnergyLevel {
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Low => "low",
      Self::Medium => "medium",
      Self::High => "high",
    }
  }
}

impl std::fmt::Display for EnergyLevel {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Everything the user tells us about today, as submitted by the planner form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserContext {
  pub cycle_day: u32,
  pub energy: EnergyLevel,
  pub minutes_available: u32,
  #[serde(default)]
  pub equipment: String,
  #[serde(default)]
  pub soreness: String,
  #[serde(default)]
  pub goal: String,
  #[serde(default)]
  pub dietary_prefs: String,
  #[serde(default)]
  pub notes: String,
}

impl UserContext {
  pub fn phase(&self) -> CyclePhase {
    CyclePhase::from_cycle_day(self.cycle_day)
  }
}
