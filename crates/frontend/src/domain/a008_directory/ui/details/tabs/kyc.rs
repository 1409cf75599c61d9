//! KYC documents - one upload slot per document kind

use super::super::view_model::DirectoryDetailsVm;
use crate::shared::upload::selected_files;
use contracts::domain::a008_directory::aggregate::KycDocumentKind;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

#[component]
pub fn KycTab(vm: DirectoryDetailsVm) -> impl IntoView {
    view! {
        <div class="details-section">
            <h4 class="details-section__title">"KYC documents"</h4>
            <table class="table">
                <tbody>
                    {KycDocumentKind::ALL
                        .iter()
                        .map(|&kind| view! { <KycRow vm=vm kind=kind /> })
                        .collect_view()}
                </tbody>
            </table>
        </div>
    }
}

#[component]
fn KycRow(vm: DirectoryDetailsVm, kind: KycDocumentKind) -> impl IntoView {
    let files = Signal::derive(move || vm.form.with(|d| d.kyc_documents.get(kind).files.clone()));
    let busy = Signal::derive(move || vm.uploading.get() == Some(kind));

    let on_files = move |ev: leptos::ev::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
        else {
            return;
        };
        vm.upload_kyc(kind, selected_files(&input));
        // allow picking the same file again
        input.set_value("");
    };

    view! {
        <tr>
            <td>{kind.label()}</td>
            <td>
                <input
                    type="file"
                    multiple=true
                    disabled=move || vm.uploading.get().is_some()
                    on:change=on_files
                />
                <Show when=move || busy.get()>
                    <span class="form__hint">"Uploading..."</span>
                </Show>
            </td>
            <td>
                <ul class="file-list">
                    {move || {
                        files
                            .get()
                            .into_iter()
                            .enumerate()
                            .map(|(index, file)| view! {
                                <li>
                                    <a href=file.url target="_blank" rel="noopener">{file.name}</a>
                                    <button
                                        class="btn btn-link"
                                        title="Remove file"
                                        on:click=move |_| vm.remove_kyc_file(kind, index)
                                    >
                                        "×"
                                    </button>
                                </li>
                            })
                            .collect_view()
                    }}
                </ul>
            </td>
        </tr>
    }
}
