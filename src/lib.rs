//! Quillstash: a small in-memory article store served over HTTP.
//!
//! Layers, outermost first: `presentation::http` (axum routes) →
//! `application` (command and query services) → `domain` (entities and the
//! repository trait) ← `infrastructure` (the in-memory repository).

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
