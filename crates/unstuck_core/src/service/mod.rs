//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store access, seeding, and mutations into use-case APIs.
//! - Keep the rendering surface decoupled from storage details.

pub mod tracker_service;
