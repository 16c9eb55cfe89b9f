//! Plain-text rendering of a plan, for copy/paste out of the UI

use std::fmt::Write;

use crate::models::Plan;

fn bullets(out: &mut String, heading: &str, items: &[String]) {
  let _ = writeln!(out, "{}", heading);
  for item in items {
    let _ = writeln!(out, "- {}", item);
  }
}

impl Plan {
  pub fn to_plain_text(&self) -> String {
    let mut out = String::new();
    let w = &self.workout;

    let _ = writeln!(out, "Phase: {}", self.phase);
    let _ = writeln!(out, "Focus: {}", self.todays_focus);
    out.push('\n');

    let _ = writeln!(
      out,
      "Workout: {} ({} min, {})",
      w.title, w.duration_minutes, w.intensity
    );
    bullets(&mut out, "Warmup:", &w.warmup);
    bullets(&mut out, "Main:", &w.main_set);
    bullets(&mut out, "Cooldown:", &w.cooldown);
    if !w.modifications.is_empty() {
      bullets(&mut out, "Modifications:", &w.modifications);
    }
    out.push('\n');

    bullets(
      &mut out,
      &format!("Nutrition ({}):", self.nutrition.theme),
      &self.nutrition.meals,
    );
    bullets(&mut out, "Hydration:", &self.nutrition.hydration);
    out.push('\n');

    bullets(&mut out, "Recovery:", &self.recovery.practices);
    let _ = writeln!(out, "Sleep: {}", self.recovery.sleep_tip);
    out.push('\n');

    bullets(&mut out, "5-min practice:", &self.mindset.five_minute_practice);
    let _ = writeln!(out, "Mantra: {}", self.mindset.mantra);
    out.push('\n');

    bullets(&mut out, "Safety:", &self.safety_notes);

    out.trim_end().to_string()
  }
}
