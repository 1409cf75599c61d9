//! Directory entry page

use super::tabs::{BanksTab, BranchesTab, GeneralTab, KycTab};
use super::view_model::DirectoryDetailsVm;
use leptos::prelude::*;
use thaw::*;

const TABS: [(&str, &str); 4] = [
    ("general", "General"),
    ("banks", "Bank details"),
    ("branches", "Branches"),
    ("kyc", "KYC"),
];

#[component]
pub fn DirectoryDetails(
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] on_saved: Option<Callback<()>>,
) -> impl IntoView {
    let vm = DirectoryDetailsVm::new();
    if let Some(id) = id.filter(|id| !id.is_empty()) {
        vm.load(id);
    }
    let on_saved = on_saved.unwrap_or_else(|| Callback::new(|_| {}));

    let is_edit = vm.is_edit_mode();
    let title = move || {
        if is_edit.get() {
            vm.form.with(|d| format!("Directory: {}", d.organization))
        } else {
            "New directory entry".to_string()
        }
    };

    view! {
        <div class="details-container directory-details">
            <div class="modal-header">
                <h3 class="modal-title">{title}</h3>
                <div class="modal-header-actions">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| vm.save(on_saved)
                        disabled=Signal::derive(move || {
                            vm.saving.get() || vm.loading.get() || vm.uploading.get().is_some()
                        })
                    >
                        {move || if vm.saving.get() { "Saving..." } else { "Save" }}
                    </Button>
                </div>
            </div>

            <div class="modal-body">
                {move || vm.error.get().map(|e| view! {
                    <div class="warning-box" style="background: var(--color-error-50); border-color: var(--color-error-100); margin-bottom: var(--spacing-md);">
                        <span class="warning-box__icon" style="color: var(--color-error);">"⚠"</span>
                        <span class="warning-box__text" style="color: var(--color-error);">{e}</span>
                    </div>
                })}
                {move || vm.success.get().map(|msg| view! {
                    <MessageBar intent=MessageBarIntent::Success>{msg}</MessageBar>
                })}

                <Flex
                    gap=FlexGap::Small
                    align=FlexAlign::Center
                    style="margin-bottom: var(--spacing-md); padding: var(--spacing-sm); background: var(--color-bg-secondary); border-radius: var(--radius-lg); border: 1px solid var(--color-border);"
                >
                    {TABS
                        .iter()
                        .map(|&(key, label)| view! {
                            <Button
                                appearance=Signal::derive(move || if vm.active_tab.get() == key {
                                    ButtonAppearance::Primary
                                } else {
                                    ButtonAppearance::Subtle
                                })
                                size=ButtonSize::Small
                                on_click=move |_| vm.set_tab(key)
                            >
                                {label}
                            </Button>
                        })
                        .collect_view()}
                </Flex>

                <Show when=move || !vm.loading.get() fallback=|| view! { <Spinner /> }>
                    {move || match vm.active_tab.get() {
                        "banks" => view! { <BanksTab vm=vm /> }.into_any(),
                        "branches" => view! { <BranchesTab vm=vm /> }.into_any(),
                        "kyc" => view! { <KycTab vm=vm /> }.into_any(),
                        _ => view! { <GeneralTab vm=vm /> }.into_any(),
                    }}
                </Show>
            </div>
        </div>
    }
}
