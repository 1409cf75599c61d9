use super::panel::{SuggestionPanel, SuggestionRow};
use super::source::LookupSource;
use crate::shared::config::use_config;
use contracts::shared::lookup::{
    priority_filter, ComboboxState, KeyOutcome, LookupItem, LookupKey, SearchPlan, SearchScheduler,
    TextCase,
};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Text field bound to one form value, with suggestions searched on a
/// remote endpoint.
///
/// Every keystroke writes through to `on_change` immediately; the search
/// itself waits for the debounce window and only the newest query is sent.
/// `on_select` receives the chosen row (country code, cascading port
/// country, parent state and so on).
#[component]
pub fn RemoteLookupField<S>(
    source: S,
    #[prop(into)] label: String,
    #[prop(optional, into)] placeholder: String,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(optional, into)] on_select: Option<Callback<S::Item>>,
    #[prop(optional)] case: TextCase,
    #[prop(optional)] trim_on_blur: bool,
    #[prop(optional, into)] error: Option<Signal<Option<String>>>,
) -> impl IntoView
where
    S: LookupSource,
{
    let config = use_config();
    let api_base = StoredValue::new(config.api_base.clone());
    let tuning = config.lookup;

    let state = RwSignal::new(ComboboxState::<S::Item>::new(&value.get_untracked(), case));
    let scheduler = StoredValue::new(SearchScheduler::new());

    on_cleanup(move || {
        scheduler.try_update_value(|s| s.dispose());
    });

    // Form value changed elsewhere (reset, cascade from another field)
    Effect::new(move |_| {
        let external = value.get();
        if state.with_untracked(|s| s.query() != external) {
            state.update(|s| {
                s.sync_external(&external);
            });
        }
    });

    let run_search = move |plan: SearchPlan| {
        let (search, rank_by) = match plan {
            SearchPlan::Clear => {
                scheduler.update_value(|s| s.cancel());
                state.update(|s| s.set_options(Vec::new()));
                return;
            }
            SearchPlan::Send { search, rank_by } => (search, rank_by),
        };
        let typed = !search.is_empty();
        let Some(ticket) = scheduler.try_update_value(|s| s.schedule(search)) else {
            return;
        };
        let Some(base) = api_base.try_get_value() else {
            return;
        };

        spawn_local(async move {
            TimeoutFuture::new(tuning.debounce_ms).await;
            let Some(search) = scheduler.try_update_value(|s| s.take_due(ticket)).flatten() else {
                return;
            };
            state.try_update(|s| s.set_loading(true));

            let result = source.search(&base, search).await;

            if !scheduler
                .try_with_value(|s| s.is_current(ticket))
                .unwrap_or(false)
            {
                return;
            }
            match result {
                Ok(items) => {
                    if typed {
                        if let (Some(callback), Some(item)) =
                            (on_select, source.exact_match(&rank_by, &items))
                        {
                            callback.run(item);
                        }
                    }
                    let ranked: Vec<S::Item> =
                        priority_filter(&items, &rank_by, |item: &S::Item| item.search_label())
                            .into_iter()
                            .take(tuning.result_limit)
                            .collect();
                    state.try_update(|s| s.set_options(ranked));
                }
                Err(e) => {
                    log::warn!("{} lookup failed for {:?}: {}", source.name(), rank_by, e);
                    state.try_update(|s| s.fail());
                }
            }
        });
    };

    let commit = move |item: S::Item| {
        let written = state
            .try_update(|s| s.commit(item.display_value()))
            .unwrap_or_default();
        scheduler.update_value(|s| s.cancel());
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
        run_search(SearchPlan::for_input(&written, source.min_query_len()));
    };

    let on_focus = move |_| {
        state.update(|s| s.on_focus());
        if source.fetch_on_focus() {
            let current = state.with_untracked(|s| s.query().to_string());
            run_search(SearchPlan::for_focus(&current));
        }
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
                    loading=Signal::derive(move || state.with(|s| s.loading()))
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
