// Page Replacement Simulator Library

pub mod error;
pub mod export;
pub mod generator;
pub mod input;
pub mod models;
pub mod report;
pub mod runner;
