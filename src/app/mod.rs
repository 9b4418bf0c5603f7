pub mod bootstrap;
pub mod errors;
pub mod logging;
pub mod readiness;
