//! Activity board page: roster, sign-up form, and inline messages.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page owns the wiring between Leptos state and the board operations in
//! `util::board_actions`. It starts the initial load once mounted in the
//! browser and spawns one local task per user action. A single removal
//! callback is created here and shared by every card, so buttons created by
//! later reloads work without re-binding.

use std::time::Duration;

use leptos::prelude::*;

use crate::components::activity_list::ActivityList;
use crate::components::message_banner::MessageBanner;
use crate::components::signup_form::SignupFormPanel;
use crate::config::BoardConfig;
use crate::net::api::BoardApi;
use crate::state::board::BoardState;
use crate::state::signup::SignupForm;
use crate::util::activity_cards::ParticipantRow;
use crate::util::board_actions::{BoardSink, load_activities, remove_participant, submit_signup};

/// [`BoardSink`] backed by the page's signals.
#[derive(Clone, Copy)]
struct SignalSink {
    board: RwSignal<BoardState>,
    form: RwSignal<SignupForm>,
    hide_delay: Duration,
}

impl BoardSink for SignalSink {
    fn update_board(&self, f: impl FnOnce(&mut BoardState)) {
        self.board.update(f);
    }

    fn reset_form(&self) {
        self.form.update(SignupForm::reset);
    }

    fn alert(&self, text: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.alert_with_message(text);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = text;
        }
    }

    fn schedule_hide(&self, seq: u64) {
        #[cfg(feature = "hydrate")]
        {
            let board = self.board;
            let delay = self.hide_delay;
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(delay).await;
                board.try_update(|b| b.hide_message(seq));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (seq, self.hide_delay);
        }
    }
}

/// Spawn `op` with the page's API handle.
fn run_board_task<F, Fut>(api: StoredValue<BoardApi>, sink: SignalSink, op: F)
where
    F: FnOnce(BoardApi, SignalSink) -> Fut + 'static,
    Fut: Future<Output = ()> + 'static,
{
    leptos::task::spawn_local(op(api.get_value(), sink));
}

/// Board page. Loads activities on mount and handles sign-up and removal.
#[component]
pub fn BoardPage() -> impl IntoView {
    let board = expect_context::<RwSignal<BoardState>>();
    let form = expect_context::<RwSignal<SignupForm>>();
    let config = expect_context::<BoardConfig>();

    let sink = SignalSink { board, form, hide_delay: config.message_hide_delay };
    let api = BoardApi::from_base(&config.resolve_api_base());
    if let BoardApi::Unusable(err) = &api {
        log::error!("activities API unusable: {err}");
    }
    let api = StoredValue::new(api);

    // Effects only run in the browser, so the initial load never fires
    // during server rendering.
    Effect::new(move || {
        run_board_task(api, sink, |client, sink| async move {
            load_activities(&client, &sink).await;
        });
    });

    let on_submit = Callback::new(move |submitted: SignupForm| {
        run_board_task(api, sink, move |client, sink| async move {
            submit_signup(&client, &sink, &submitted).await;
        });
    });

    let on_remove = Callback::new(move |row: ParticipantRow| {
        run_board_task(api, sink, move |client, sink| async move {
            remove_participant(&client, &sink, &row).await;
        });
    });

    view! {
        <div class="board-page">
            <header class="board-page__header">
                <h1>"Mergington High School"</h1>
                <h2>"Extracurricular Activities"</h2>
            </header>
            <main class="board-page__main">
                <section id="activities-container">
                    <h3>"Available Activities"</h3>
                    <ActivityList on_remove=on_remove/>
                </section>
                <section id="signup-container">
                    <h3>"Sign Up for an Activity"</h3>
                    <SignupFormPanel on_submit=on_submit/>
                    <MessageBanner/>
                </section>
            </main>
        </div>
    }
}
