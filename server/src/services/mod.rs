//! Services used by HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! `backend` owns the outbound HTTP client so route handlers stay focused on
//! request/response translation.

pub mod backend;
