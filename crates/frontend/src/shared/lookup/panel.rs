use contracts::shared::lookup::LookupItem;
use leptos::prelude::*;

/// One rendered suggestion.
#[derive(Debug, Clone, PartialEq)]
pub struct SuggestionRow {
    pub label: String,
    pub hint: Option<String>,
}

impl SuggestionRow {
    pub fn from_item<T: LookupItem>(item: &T) -> Self {
        Self {
            label: item.display_value(),
            hint: item.hint(),
        }
    }
}

/// Floating option list rendered under a lookup input.
///
/// Selection happens on mousedown so it lands before the input's blur
/// closes the panel.
#[component]
pub fn SuggestionPanel(
    #[prop(into)] rows: Signal<Vec<SuggestionRow>>,
    #[prop(into)] active: Signal<Option<usize>>,
    #[prop(into)] loading: Signal<bool>,
    #[prop(into)] visible: Signal<bool>,
    #[prop(into)] on_pick: Callback<usize>,
    #[prop(into)] on_hover: Callback<usize>,
) -> impl IntoView {
    view! {
        <Show when=move || visible.get()>
            <div
                class="lookup-panel"
                role="listbox"
                style="
                    position: absolute;
                    top: 100%;
                    left: 0;
                    right: 0;
                    max-height: 240px;
                    overflow-y: auto;
                    background: white;
                    border: 1px solid #ccc;
                    border-radius: 4px;
                    box-shadow: 0 2px 8px rgba(0,0,0,0.15);
                    z-index: 1000;
                    margin-top: 2px;
                "
            >
                {move || loading.get().then(|| view! {
                    <div style="padding: 6px 10px; color: #999; font-style: italic;">"Searching..."</div>
                })}
                {move || {
                    let current = active.get();
                    rows.get()
                        .into_iter()
                        .enumerate()
                        .map(|(index, row)| {
                            let highlighted = current == Some(index);
                            view! {
                                <div
                                    role="option"
                                    aria-selected=highlighted.to_string()
                                    on:mousedown=move |ev| {
                                        ev.prevent_default();
                                        on_pick.run(index);
                                    }
                                    on:mouseenter=move |_| on_hover.run(index)
                                    style=format!(
                                        "padding: 6px 10px; cursor: pointer; border-bottom: 1px solid #eee; display: flex; justify-content: space-between; gap: 8px; background: {};",
                                        if highlighted { "#e8f0fe" } else { "white" }
                                    )
                                >
                                    <span style="font-weight: 600;">{row.label}</span>
                                    {row.hint.map(|hint| view! {
                                        <span style="color: #666; font-size: 12px; text-align: right;">{hint}</span>
                                    })}
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </Show>
    }
}
