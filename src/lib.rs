pub mod configuration;
pub mod domain;
pub mod presenter;
pub mod services;
pub mod startup;
