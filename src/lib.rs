pub mod commands;
pub mod dates;
pub mod error;
pub mod model;
pub mod mutate;
pub mod output;
pub mod planner;
pub mod report;
pub mod stats;
pub mod store;
