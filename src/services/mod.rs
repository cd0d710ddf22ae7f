pub mod scoring;
pub mod steps;
