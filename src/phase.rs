//! Cycle phase derivation
//!
//! Buckets a cycle day into one of four coaching phases using fixed
//! thresholds. Pure and total: every day maps to exactly one phase.

use serde::{Deserialize, Serialize};

const MENSTRUAL_LAST_DAY: u32 = 5;
const FOLLICULAR_LAST_DAY: u32 = 13;
const OVULATORY_LAST_DAY: u32 = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CyclePhase {
  /// Days 1-5
  Menstrual,
  /// Days 6-13
  Follicular,
  /// Days 14-16
  Ovulatory,
  /// Day 17 onward
  Luteal,
}

impl CyclePhase {
  pub fn from_cycle_day(cycle_day: u32) -> Self {
    match cycle_day {
      d if d <= MENSTRUAL_LAST_DAY => CyclePhase::Menstrual,
      d if d <= FOLLICULAR_LAST_DAY => CyclePhase::Follicular,
      d if d <= OVULATORY_LAST_DAY => CyclePhase::Ovulatory,
      _ => CyclePhase::Luteal,
    }
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Menstrual => "Menstrual",
      Self::Follicular => "Follicular",
      Self::Ovulatory => "Ovulatory",
      Self::Luteal => "Luteal",
    }
  }
}

impl std::fmt::Display for CyclePhase {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

impl std::str::FromStr for CyclePhase {
  type Err = String;
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_ascii_lowercase().as_str() {
      "menstrual" => Ok(Self::Menstrual),
      "follicular" => Ok(Self::Follicular),
      "ovulatory" => Ok(Self::Ovulatory),
      "luteal" => Ok(Self::Luteal),
      _ => Err(format!("Unknown cycle phase: {}", s)),
    }
  }
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
