pub mod config;
pub mod content;
pub mod domain;
pub mod intake;
pub mod routes;
pub mod run;
pub mod startup;
pub mod telemetry;
pub mod utils;
