use super::panel::{SuggestionPanel, SuggestionRow};
use crate::shared::config::use_config;
use contracts::shared::lookup::{priority_filter, ComboboxState, KeyOutcome, LookupItem, LookupKey, TextCase};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Text field with suggestions filtered from an in-memory list
/// (master data, or rows loaded once by the page).
#[component]
pub fn StaticLookupField<T>(
    #[prop(into)] options: Signal<Vec<T>>,
    #[prop(into)] label: String,
    #[prop(optional, into)] placeholder: String,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(optional, into)] on_select: Option<Callback<T>>,
    #[prop(optional)] case: TextCase,
    #[prop(optional)] trim_on_blur: bool,
    #[prop(optional, into)] error: Option<Signal<Option<String>>>,
) -> impl IntoView
where
    T: LookupItem + Send + Sync + 'static,
{
    let tuning = use_config().lookup;
    let state = RwSignal::new(ComboboxState::<T>::new(&value.get_untracked(), case));

    Effect::new(move |_| {
        let external = value.get();
        if state.with_untracked(|s| s.query() != external) {
            state.update(|s| {
                s.sync_external(&external);
            });
        }
    });

    let refilter = move |query: &str| {
        let ranked: Vec<T> = options.with_untracked(|all| {
            priority_filter(all, query.trim(), |item: &T| item.search_label())
                .into_iter()
                .take(tuning.result_limit)
                .collect()
        });
        state.update(|s| s.set_options(ranked));
    };

    let commit = move |item: T| {
        let written = state
            .try_update(|s| s.commit(item.display_value()))
            .unwrap_or_default();
        on_change.run(written);
        if let Some(callback) = on_select {
            callback.run(item);
        }
    };

    let on_input = move |ev: leptos::ev::Event| {
        let text = event_target_value(&ev);
        let written = state
            .try_update(|s| s.on_text_change(&text))
            .unwrap_or_default();
        on_change.run(written.clone());
        refilter(&written);
    };

    let on_focus = move |_| {
        state.update(|s| s.on_focus());
        refilter("");
    };

    let on_blur = move |_| {
        let Some(token) = state.try_with_untracked(|s| s.blur_token()) else {
            return;
        };
        spawn_local(async move {
            TimeoutFuture::new(tuning.blur_grace_ms).await;
            if let Some(Some(trimmed)) = state.try_update(|s| s.on_blur_elapsed(token, trim_on_blur)) {
                on_change.run(trimmed);
            }
        });
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        let key = LookupKey::from_dom(&ev.key());
        match state.try_update(|s| s.on_key(key)) {
            Some(KeyOutcome::Commit(item)) => {
                if key == LookupKey::Enter {
                    ev.prevent_default();
                }
                commit(item);
            }
            Some(KeyOutcome::Handled) if key != LookupKey::Tab => ev.prevent_default(),
            _ => {}
        }
    };

    let rows = Signal::derive(move || {
        state.with(|s| s.options().iter().map(SuggestionRow::from_item).collect::<Vec<_>>())
    });
    let error_text = move || error.and_then(|e| e.get());

    view! {
        <div class="form__group lookup-field">
            <label class="form__label">{label}</label>
            <div style="position: relative;">
                <input
                    type="text"
                    class="form__input"
                    autocomplete="off"
                    role="combobox"
                    aria-expanded=move || state.with(|s| s.is_open()).to_string()
                    placeholder=placeholder
                    prop:value=move || state.with(|s| s.query().to_string())
                    on:input=on_input
                    on:focus=on_focus
                    on:blur=on_blur
                    on:keydown=on_keydown
                />
                <SuggestionPanel
                    rows=rows
                    active=Signal::derive(move || state.with(|s| s.active_index()))
                    loading=Signal::derive(|| false)
                    visible=Signal::derive(move || state.with(|s| s.panel_visible()))
                    on_pick=Callback::new(move |index: usize| {
                        if let Some(item) = state.with_untracked(|s| s.option_at(index)) {
                            commit(item);
                        }
                    })
                    on_hover=Callback::new(move |index: usize| state.update(|s| s.highlight(index)))
                />
            </div>
            {move || error_text().map(|e| view! { <div class="form__error">{e}</div> })}
        </div>
    }
}

/// Master list of codes as lookup options.
pub fn master_options(list: &'static [&'static str]) -> Signal<Vec<&'static str>> {
    Signal::derive(move || list.to_vec())
}
