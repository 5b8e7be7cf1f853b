//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository and summary calls into use-case level APIs.
//! - Keep external front ends decoupled from storage details.

pub mod article_service;
