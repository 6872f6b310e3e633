//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::BoardConfig;
use crate::pages::board::BoardPage;
use crate::state::board::BoardState;
use crate::state::signup::SignupForm;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the board state, the sign-up form state, and the board config
/// as contexts, then routes `/` to the board page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let board = RwSignal::new(BoardState::default());
    let form = RwSignal::new(SignupForm::default());

    provide_context(board);
    provide_context(form);
    provide_context(BoardConfig::default());

    view! {
        <Stylesheet id="leptos" href="/pkg/activity-board.css"/>
        <Title text="Extracurricular Activities"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=BoardPage/>
            </Routes>
        </Router>
    }
}
