//! Sign-up form: email input, activity selector, submit button.

use leptos::prelude::*;

use crate::state::board::{BoardState, options_memo};
use crate::state::signup::SignupForm;
use crate::util::activity_cards::activity_options;

/// The `signup-form`. Both inputs are `required`, so the browser blocks
/// empty submissions before `on_submit` runs.
#[component]
pub fn SignupFormPanel(on_submit: Callback<SignupForm>) -> impl IntoView {
    let options = options_memo(expect_context::<RwSignal<BoardState>>());
    let form = expect_context::<RwSignal<SignupForm>>();

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(form.get_untracked());
    };

    view! {
        <form id="signup-form" on:submit=submit>
            <div class="form-group">
                <label for="email">"Student Email:"</label>
                <input
                    type="email"
                    id="email"
                    required=true
                    placeholder="your-email@mergington.edu"
                    prop:value=move || form.with(|f| f.email.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|f| f.email = value);
                    }
                />
            </div>
            <div class="form-group">
                <label for="activity">"Select Activity:"</label>
                <select
                    id="activity"
                    required=true
                    prop:value=move || form.with(|f| f.activity.clone())
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|f| f.activity = value);
                    }
                >
                    {move || {
                        options
                            .with(|o| activity_options(o))
                            .into_iter()
                            .map(|opt| view! { <option value=opt.value>{opt.label}</option> })
                            .collect::<Vec<_>>()
                    }}
                </select>
            </div>
            <button type="submit">"Sign Up"</button>
        </form>
    }
}
