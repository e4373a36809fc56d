pub mod config;
pub mod frequency;
pub mod report;
pub mod salary;
