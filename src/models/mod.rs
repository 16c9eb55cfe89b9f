pub mod context;
pub mod plan;

pub use context::{EnergyLevel, UserContext};
pub use plan::{Intensity, MindsetPlan, NutritionPlan, Plan, RecoveryPlan, WorkoutPlan};
