use leptos::prelude::*;

/// Drop-down over a fixed set of choices, bound to one form field.
/// An empty current value renders the placeholder option.
#[component]
pub fn Select(
    #[prop(optional, into)] label: MaybeProp<String>,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    /// (value, label) pairs
    options: &'static [(&'static str, &'static str)],
    #[prop(optional, into)] placeholder: Option<&'static str>,
    #[prop(optional, into)] error: Option<Signal<Option<String>>>,
) -> impl IntoView {
    let error_text = move || error.and_then(|e| e.get());

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! { <label class="form__label">{l}</label> })}
            <select
                class="form__select"
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                {placeholder.map(|p| view! {
                    <option value="" selected=move || value.get().is_empty()>{p}</option>
                })}
                {options
                    .iter()
                    .map(|&(val, text)| {
                        view! {
                            <option value=val selected=move || value.get() == val>{text}</option>
                        }
                    })
                    .collect_view()}
            </select>
            {move || error_text().map(|e| view! { <div class="form__error">{e}</div> })}
        </div>
    }
}
