//! Test utilities and helpers for unit and router testing
//!
//! This module provides common test infrastructure including:
//! - Mock data factories
//! - A scripted generation service that records its calls

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::llm::{GenerationRequest, GenerationService, LlmError};
use crate::models::{
  EnergyLevel, Intensity, MindsetPlan, NutritionPlan, Plan, RecoveryPlan, UserContext, WorkoutPlan,
};

/// ---------------------------------------------------------------------------
/// Mock Data Factories
/// ---------------------------------------------------------------------------

/// The planner form's default values
pub fn mock_user_context() -> UserContext {
  UserContext {
    cycle_day: 18,
    energy: EnergyLevel::Medium,
    minutes_available: 45,
    equipment: "yoga mat, dumbbells".to_string(),
    soreness: "none".to_string(),
    goal: "balanced fitness + mood".to_string(),
    dietary_prefs: "vegetarian".to_string(),
    notes: String::new(),
  }
}

/// A schema-conforming plan as the model would return it.
/// Other tests patch this text with `str::replace`, so keep the spacing.
pub fn mock_plan_json() -> String {
  r#"{
  "phase": "Luteal",
  "todaysFocus": "Steady strength with extra recovery",
  "workout": {
    "title": "Lower-body dumbbell circuit",
    "durationMinutes": 40,
    "warmup": ["5 min brisk walk", "Hip circles and leg swings"],
    "mainSet": ["3x10 goblet squats", "3x10 Romanian deadlifts", "3x12 glute bridges"],
    "cooldown": ["Hamstring stretch", "Child's pose"],
    "intensity": "moderate",
    "modifications": ["Swap squats for wall sits if knees ache"]
  },
  "nutrition": {
    "theme": "Complex carbs and magnesium",
    "meals": ["Oats with pumpkin seeds", "Lentil and sweet potato bowl", "Tofu stir-fry with greens"],
    "hydration": ["2.5 L water", "Herbal tea in the evening"]
  },
  "recovery": {
    "practices": ["10 min foam rolling", "Warm bath"],
    "sleepTip": "Dim screens an hour before bed"
  },
  "mindset": {
    "fiveMinutePractice": ["Box breathing for 3 minutes", "Write one thing you did well"],
    "mantra": "Strong and steady"
  },
  "safetyNotes": ["Stop if you feel sharp pain", "Reduce load if dizzy"]
}"#
    .to_string()
}

/// Typed equivalent of `mock_plan_json`
pub fn mock_plan() -> Plan {
  fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
  }

  Plan {
    phase: "Luteal".to_string(),
    todays_focus: "Steady strength with extra recovery".to_string(),
    workout: WorkoutPlan {
      title: "Lower-body dumbbell circuit".to_string(),
      duration_minutes: serde_json::Number::from(40u32),
      warmup: strings(&["5 min brisk walk", "Hip circles and leg swings"]),
      main_set: strings(&["3x10 goblet squats", "3x10 Romanian deadlifts", "3x12 glute bridges"]),
      cooldown: strings(&["Hamstring stretch", "Child's pose"]),
      intensity: Intensity::Moderate,
      modifications: strings(&["Swap squats for wall sits if knees ache"]),
    },
    nutrition: NutritionPlan {
      theme: "Complex carbs and magnesium".to_string(),
      meals: strings(&[
        "Oats with pumpkin seeds",
        "Lentil and sweet potato bowl",
        "Tofu stir-fry with greens",
      ]),
      hydration: strings(&["2.5 L water", "Herbal tea in the evening"]),
    },
    recovery: RecoveryPlan {
      practices: strings(&["10 min foam rolling", "Warm bath"]),
      sleep_tip: "Dim screens an hour before bed".to_string(),
    },
    mindset: MindsetPlan {
      five_minute_practice: strings(&["Box breathing for 3 minutes", "Write one thing you did well"]),
      mantra: "Strong and steady".to_string(),
    },
    safety_notes: strings(&["Stop if you feel sharp pain", "Reduce load if dizzy"]),
  }
}

/// ---------------------------------------------------------------------------
/// Scripted Generation Service
/// ---------------------------------------------------------------------------

/// Replies with a fixed result and records every request it sees
pub struct ScriptedGenerator {
  reply: Result<String, LlmError>,
  calls: AtomicUsize,
  last_request: Mutex<Option<GenerationRequest>>,
}

impl ScriptedGenerator {
  pub fn replying(text: &str) -> Self {
    Self::with_reply(Ok(text.to_string()))
  }

  pub fn failing(error: LlmError) -> Self {
    Self::with_reply(Err(error))
  }

  fn with_reply(reply: Result<String, LlmError>) -> Self {
    Self {
      reply,
      calls: AtomicUsize::new(0),
      last_request: Mutex::new(None),
    }
  }

  pub fn calls(&self) -> usize {
    self.calls.load(Ordering::SeqCst)
  }

  pub fn last_request(&self) -> Option<GenerationRequest> {
    self.last_request.lock().unwrap().clone()
  }
}

#[async_trait]
impl GenerationService for ScriptedGenerator {
  async fn generate(&self, request: &GenerationRequest) -> Result<String, LlmError> {
    self.calls.fetch_add(1, Ordering::SeqCst);
    *self.last_request.lock().unwrap() = Some(request.clone());
    self.reply.clone()
  }
}

/// ---------------------------------------------------------------------------
/// Tests for Test Utilities
/// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_mock_plan_matches_mock_json() {
    let parsed: Plan = serde_json::from_str(&mock_plan_json()).unwrap();
    assert_eq!(parsed, mock_plan());
  }

  #[tokio::test]
  async fn test_scripted_generator_counts_calls() {
    let generator = ScriptedGenerator::failing(LlmError::Api("quota exceeded".to_string()));
    let request = GenerationRequest {
      system: String::new(),
      prompt: "hi".to_string(),
      schema_name: "cycle_plan".to_string(),
      schema: serde_json::Value::Null,
      max_output_tokens: 10,
    };

    assert!(generator.generate(&request).await.is_err());
    assert_eq!(generator.calls(), 1);
    assert_eq!(generator.last_request().unwrap().prompt, "hi");
  }
}
