//! Prompt construction for plan generation
//!
//! Turns a `UserContext` into the user prompt and system instruction sent to
//! the generation service. Both are deterministic so identical input always
//! produces identical text.

use crate::error::PlanError;
use crate::models::UserContext;

/// Longest prompt (in characters) we are willing to send
pub const MAX_PROMPT_CHARS: usize = 2000;

/// ---------------------------------------------------------------------------
/// Section Limits
/// ---------------------------------------------------------------------------

/// Per-section array ceilings requested from the model. These bound response
/// size (and cost); they are instructions, not post-parse validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionLimits {
  pub warmup: usize,
  pub main_set: usize,
  pub cooldown: usize,
  pub meals: usize,
  pub hydration: usize,
  pub recovery_practices: usize,
  pub mindset_practice: usize,
  pub safety_notes: usize,
}

pub const SECTION_LIMITS: SectionLimits = SectionLimits {
  warmup: 2,
  main_set: 3,
  cooldown: 2,
  meals: 3,
  hydration: 3,
  recovery_practices: 2,
  mindset_practice: 2,
  safety_notes: 3,
};

impl SectionLimits {
  /// Compact `field<=n` listing keyed by the JSON field names
  pub fn summary(&self) -> String {
    format!(
      "workout.warmup<={}, workout.mainSet<={}, workout.cooldown<={}, nutrition.meals<={}, \
       nutrition.hydration<={}, recovery.practices<={}, mindset.fiveMinutePractice<={}, safetyNotes<={}",
      self.warmup,
      self.main_set,
      self.cooldown,
      self.meals,
      self.hydration,
      self.recovery_practices,
      self.mindset_practice,
      self.safety_notes,
    )
  }
}

/// ---------------------------------------------------------------------------
/// Prompt Builders
/// ---------------------------------------------------------------------------

pub fn system_instruction() -> String {
  format!(
    "Return ONLY JSON. No markdown. No extra text. Keep arrays short: {}. Keep each item to one sentence.",
    SECTION_LIMITS.summary()
  )
}

pub fn build_prompt(ctx: &UserContext) -> String {
  let limits = SECTION_LIMITS;

  format!(
    r#"You are a cycle-aware fitness and wellness coach.

User context:
- Cycle day: {cycle_day}
- Phase: {phase}
- Energy level: {energy}
- Time available: {minutes} minutes
- Equipment: {equipment}
- Soreness or pain: {soreness}
- Goal: {goal}
- Diet: {diet}
- Notes: {notes}

Create a realistic plan for TODAY with:
1) A short workout (warmup max {warmup} items, main set max {main_set}, cooldown max {cooldown})
2) Nutrition suggestions (max {meals} meals, max {hydration} hydration tips)
3) Recovery tips (max {practices} practices, plus one sleep tip)
4) A 5-minute mindset practice (max {mindset} steps, plus a mantra)
5) Safety notes (max {safety})
"#,
    cycle_day = ctx.cycle_day,
    phase = ctx.phase(),
    energy = ctx.energy,
    minutes = ctx.minutes_available,
    equipment = ctx.equipment,
    soreness = ctx.soreness,
    goal = ctx.goal,
    diet = ctx.dietary_prefs,
    notes = ctx.notes,
    warmup = limits.warmup,
    main_set = limits.main_set,
    cooldown = limits.cooldown,
    meals = limits.meals,
    hydration = limits.hydration,
    practices = limits.recovery_practices,
    mindset = limits.mindset_practice,
    safety = limits.safety_notes,
  )
}

/// Reject prompts over `MAX_PROMPT_CHARS` before anything leaves the process
pub fn check_prompt_length(prompt: &str) -> Result<(), PlanError> {
  let length = prompt.chars().count();
  if length > MAX_PROMPT_CHARS {
    return Err(PlanError::InputTooLong {
      length,
      max: MAX_PROMPT_CHARS,
    });
  }
  Ok(())
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
