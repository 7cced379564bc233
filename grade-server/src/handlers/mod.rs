//! HTTP handlers

pub mod engine;
pub mod features;
pub mod health;
pub mod predict;
