//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `board` holds what the server last reported plus the inline message;
//! `signup` holds the form inputs. Components read both through context.

pub mod board;
pub mod signup;
