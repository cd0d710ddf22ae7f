pub mod health;
pub mod modules;
pub mod quiz;
pub mod scenarios;
