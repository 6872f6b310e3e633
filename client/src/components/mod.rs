//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the activity board while reading shared state from
//! Leptos context providers. Network work stays in the page.

pub mod activity_card;
pub mod activity_list;
pub mod message_banner;
pub mod signup_form;
