pub mod dashboard;
pub mod dataset;
pub mod error;
pub mod filter;
pub mod model;
pub mod views;
