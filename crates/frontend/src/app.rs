use crate::domain::a008_directory::ui::details::DirectoryDetails;
use crate::domain::a009_export_job::ui::details::ExportJobDetails;
use crate::shared::config::AppConfig;
use leptos::prelude::*;
use std::collections::HashMap;
use thaw::*;
use web_sys::window;

const PAGES: [(&str, &str); 2] = [("export-job", "Export job"), ("directory", "Directory")];

#[component]
pub fn App() -> impl IntoView {
    // Provide the configuration to every page via context.
    provide_context(AppConfig::from_env());

    view! { <AppShell /> }
}

/// Two-page switcher; the active page is mirrored in `?page=`.
#[component]
fn AppShell() -> impl IntoView {
    let page = RwSignal::new(initial_page());

    Effect::new(move |_| {
        let key = page.get();
        let query = serde_qs::to_string(&HashMap::from([("page".to_string(), key.to_string())]))
            .unwrap_or_default();
        let new_url = format!("?{}", query);

        let current_search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        if current_search != new_url {
            if let Some(history) = window().and_then(|w| w.history().ok()) {
                let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&new_url));
            }
        }
    });

    view! {
        <div class="app-shell">
            <nav class="app-shell__nav">
                <Flex gap=FlexGap::Small align=FlexAlign::Center>
                    {PAGES
                        .iter()
                        .map(|&(key, title)| view! {
                            <Button
                                appearance=Signal::derive(move || if page.get() == key {
                                    ButtonAppearance::Primary
                                } else {
                                    ButtonAppearance::Subtle
                                })
                                on_click=move |_| page.set(key)
                            >
                                {title}
                            </Button>
                        })
                        .collect_view()}
                </Flex>
            </nav>
            <main class="app-shell__content">
                {move || match page.get() {
                    "directory" => view! { <DirectoryDetails /> }.into_any(),
                    _ => view! { <ExportJobDetails /> }.into_any(),
                }}
            </main>
        </div>
    }
}

/// Page key from the current `?page=` parameter, defaulting to the export job.
fn initial_page() -> &'static str {
    let search = window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    page_from_query(&search)
}

fn page_from_query(search: &str) -> &'static str {
    let params: HashMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    params
        .get("page")
        .and_then(|requested| PAGES.iter().find(|(key, _)| key == requested))
        .map(|&(key, _)| key)
        .unwrap_or(PAGES[0].0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_from_query() {
        assert_eq!(page_from_query("?page=directory"), "directory");
        assert_eq!(page_from_query("?page=export-job&x=1"), "export-job");
        assert_eq!(page_from_query("?page=unknown"), "export-job");
        assert_eq!(page_from_query(""), "export-job");
    }
}
