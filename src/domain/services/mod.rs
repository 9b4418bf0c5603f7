pub mod disable_planner;

pub use disable_planner::{DisableAction, DisablePlanner};
