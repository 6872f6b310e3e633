//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `activity_cards` turns the fetched roster into render-ready views and
//! `board_actions` runs the board's network operations against an
//! injectable API and state sink.

pub mod activity_cards;
pub mod board_actions;
