pub mod disabler;
