pub mod aggregates;
pub mod config;
pub mod entities;
pub mod services;
pub mod settings;
pub mod value_objects;
