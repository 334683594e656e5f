//! Symptom Scout - Symptom Triage Backend
//!
//! This crate relays user-described symptoms to an OpenAI-compatible
//! completion API through three operations (symptom suggestion, follow-up
//! questioning, full analysis) and falls back to fixed answers whenever the
//! upstream reply cannot be used.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
