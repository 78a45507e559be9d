//! Portfolio API service.
//!
//! Serves the site owner's profile, tech stack, projects and SEO metadata from
//! in-memory data and relays visitor chat messages to Gemini.

pub mod config;
pub mod dtos;
pub mod handlers;
pub mod models;
pub mod services;
pub mod startup;
