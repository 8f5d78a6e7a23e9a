// Domain layer: field kinds, issues and the exercise-planning forms they appear on.

pub mod forms;
pub mod model;
