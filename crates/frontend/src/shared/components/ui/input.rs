use contracts::shared::lenient::parse_number;
use leptos::prelude::*;

/// Text input bound to one field of a larger form value.
#[component]
pub fn TextInput(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
    #[prop(optional, into)] placeholder: MaybeProp<String>,
    /// Input type: "text" (default), "email", "tel", "date"
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    #[prop(optional, into)] disabled: Signal<bool>,
    #[prop(optional, into)] maxlength: MaybeProp<u32>,
    /// Inline validation message shown under the input
    #[prop(optional, into)]
    error: Option<Signal<Option<String>>>,
) -> impl IntoView {
    let input_placeholder = move || placeholder.get().unwrap_or_default();
    let input_t = move || input_type.get().unwrap_or_else(|| "text".to_string());
    let error_text = move || error.and_then(|e| e.get());

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! { <label class="form__label">{l}</label> })}
            <input
                class=move || if error_text().is_some() { "form__input form__input--error" } else { "form__input" }
                type=input_t
                prop:value=move || value.get()
                placeholder=input_placeholder
                disabled=move || disabled.get()
                maxlength=move || maxlength.get().map(|m| m.to_string())
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            {move || error_text().map(|e| view! { <div class="form__error">{e}</div> })}
        </div>
    }
}

/// Numeric input. Keeps the typed text while it parses to the bound value,
/// so intermediate states like "2." survive re-rendering.
#[component]
pub fn NumberInput(
    #[prop(optional, into)] label: MaybeProp<String>,
    #[prop(into)] value: Signal<f64>,
    #[prop(into)] on_input: Callback<f64>,
    #[prop(optional, into)] disabled: Signal<bool>,
) -> impl IntoView {
    let text = RwSignal::new(format_number(value.get_untracked()));

    Effect::new(move |_| {
        let current = value.get();
        if text.with_untracked(|t| parse_number(t)) != current {
            text.set(format_number(current));
        }
    });

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! { <label class="form__label">{l}</label> })}
            <input
                class="form__input form__input--number"
                type="text"
                inputmode="decimal"
                prop:value=move || text.get()
                disabled=move || disabled.get()
                on:input=move |ev| {
                    let typed = event_target_value(&ev);
                    let parsed = parse_number(&typed);
                    text.set(typed);
                    on_input.run(parsed);
                }
            />
        </div>
    }
}

/// Read-only figure (amount, PMV, FOB).
#[component]
pub fn ReadonlyNumber(#[prop(into)] label: String, #[prop(into)] value: Signal<f64>) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label">{label}</label>
            <input
                class="form__input form__input--readonly"
                type="text"
                readonly=true
                prop:value=move || format!("{:.2}", value.get())
            />
        </div>
    }
}

fn format_number(value: f64) -> String {
    if value == 0.0 {
        String::new()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_renders_empty() {
        assert_eq!(format_number(0.0), "");
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(110.0), "110");
    }
}
