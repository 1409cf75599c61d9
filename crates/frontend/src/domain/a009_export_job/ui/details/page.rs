//! Export job page
//!
//! Creates the ViewModel, loads reference data (rates, manufacturers,
//! directory entries), renders the header, tab bar and the active tab.

use super::tabs::{DepbTab, InvoiceMainTab, ProductGeneralTab, ShipmentMainTab};
use super::view_model::ExportJobDetailsVm;
use leptos::prelude::*;
use thaw::*;

const TABS: [(&str, &str); 4] = [
    ("shipment", "Shipment"),
    ("invoice", "Invoice"),
    ("product", "Product"),
    ("depb", "DEPB"),
];

#[component]
pub fn ExportJobDetails(
    #[prop(optional, into)] job_no: Option<String>,
    #[prop(optional, into)] on_saved: Option<Callback<()>>,
) -> impl IntoView {
    let vm = ExportJobDetailsVm::new();
    vm.load_rates();
    vm.load_manufacturers();
    vm.load_directories();
    if let Some(job_no) = job_no.filter(|j| !j.trim().is_empty()) {
        vm.load(job_no);
    }

    let on_saved = on_saved.unwrap_or_else(|| Callback::new(|_| {}));

    view! {
        <div class="details-container export-job-details">
            <Header vm=vm on_saved=on_saved />
            <div class="modal-body">
                <Messages vm=vm />
                <TabBar vm=vm />
                <Show
                    when=move || !vm.loading.get()
                    fallback=|| view! { <Spinner /> }
                >
                    <TabContent vm=vm />
                </Show>
            </div>
        </div>
    }
}

#[component]
fn Header(vm: ExportJobDetailsVm, on_saved: Callback<()>) -> impl IntoView {
    let job_no = RwSignal::new(vm.job.with_untracked(|j| j.job_no.clone()));

    // Loaded or saved job replaces the typed number
    let stored_no = Memo::new(move |_| vm.job.with(|j| j.job_no.clone()));
    Effect::new(move |_| {
        let current = stored_no.get();
        if job_no.with_untracked(|t| *t != current) {
            job_no.set(current);
        }
    });
    Effect::new(move |_| {
        let typed = job_no.get();
        if vm.job.with_untracked(|j| j.job_no != typed) {
            vm.job.update(|j| j.job_no = typed);
        }
    });

    view! {
        <div class="modal-header">
            <h3 class="modal-title">"Export job"</h3>
            <div class="modal-header-actions">
                <Input value=job_no placeholder="Job number" />
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| vm.load(job_no.get_untracked())
                    disabled=Signal::derive(move || job_no.get().trim().is_empty())
                >
                    "Load"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| vm.save(on_saved)
                    disabled=vm.is_save_disabled()
                >
                    {move || if vm.saving.get() { "Saving..." } else { "Save" }}
                </Button>
            </div>
        </div>
    }
}

#[component]
fn Messages(vm: ExportJobDetailsVm) -> impl IntoView {
    view! {
        {move || vm.error.get().map(|e| view! {
            <div class="warning-box" style="background: var(--color-error-50); border-color: var(--color-error-100); margin-bottom: var(--spacing-md);">
                <span class="warning-box__icon" style="color: var(--color-error);">"⚠"</span>
                <span class="warning-box__text" style="color: var(--color-error);">{e}</span>
            </div>
        })}
        {move || vm.success.get().map(|msg| view! {
            <MessageBar intent=MessageBarIntent::Success>{msg}</MessageBar>
        })}
    }
}

#[component]
fn TabBar(vm: ExportJobDetailsVm) -> impl IntoView {
    let active_tab = vm.active_tab;

    view! {
        <Flex
            gap=FlexGap::Small
            align=FlexAlign::Center
            style="margin-bottom: var(--spacing-md); padding: var(--spacing-sm); background: var(--color-bg-secondary); border-radius: var(--radius-lg); border: 1px solid var(--color-border);"
        >
            {TABS
                .iter()
                .map(|&(key, title)| view! {
                    <Button
                        appearance=Signal::derive(move || if active_tab.get() == key {
                            ButtonAppearance::Primary
                        } else {
                            ButtonAppearance::Subtle
                        })
                        size=ButtonSize::Small
                        on_click=move |_| vm.set_tab(key)
                    >
                        {title}
                    </Button>
                })
                .collect_view()}
        </Flex>
    }
}

#[component]
fn TabContent(vm: ExportJobDetailsVm) -> impl IntoView {
    view! {
        {move || match vm.active_tab.get() {
            "invoice" => view! { <InvoiceMainTab vm=vm /> }.into_any(),
            "product" => view! { <ProductGeneralTab vm=vm /> }.into_any(),
            "depb" => view! { <DepbTab vm=vm /> }.into_any(),
            _ => view! { <ShipmentMainTab vm=vm /> }.into_any(),
        }}
    }
}
