//! General tab - identity, address, registration and notes

use super::super::view_model::DirectoryDetailsVm;
use crate::shared::components::ui::{Checkbox, Select, TextInput};
use contracts::domain::a008_directory::aggregate::Directory;
use leptos::prelude::*;

const ENTITY_TYPES: &[(&str, &str)] = &[
    ("Company", "Company"),
    ("Partnership", "Partnership"),
    ("LLP", "LLP"),
    ("Proprietorship", "Proprietorship"),
];

#[component]
pub fn GeneralTab(vm: DirectoryDetailsVm) -> impl IntoView {
    let form = vm.form;
    let text = move |get: fn(&Directory) -> String| Signal::derive(move || form.with(get));
    let set_text = move |apply: fn(&mut Directory, String)| {
        Callback::new(move |value: String| vm.update(|d| apply(d, value)))
    };

    view! {
        <div class="details-section">
            <h4 class="details-section__title">"Organization"</h4>
            <div class="details-grid--3col">
                <TextInput
                    label="Organization"
                    value=text(|d| d.organization.clone())
                    on_input=set_text(|d, v| d.organization = v)
                    maxlength=255u32
                    error=vm.field_error("organization")
                />
                <TextInput
                    label="Alias"
                    value=text(|d| d.alias.clone())
                    on_input=set_text(|d, v| d.alias = v)
                    maxlength=50u32
                    error=vm.field_error("alias")
                />
                <div class="form__group">
                    <label class="form__label">"Approval"</label>
                    <span class="badge">{move || form.with(|d| d.approval_status.clone())}</span>
                </div>
                <Select
                    label="Entity type"
                    value=text(|d| d.general_info.entity_type.clone())
                    on_change=set_text(|d, v| d.general_info.entity_type = v)
                    options=ENTITY_TYPES
                    placeholder="Select entity type"
                    error=vm.field_error("generalInfo.entityType")
                />
                <TextInput
                    label="Company name"
                    value=text(|d| d.general_info.company_name.clone())
                    on_input=set_text(|d, v| d.general_info.company_name = v)
                    maxlength=255u32
                    error=vm.field_error("generalInfo.companyName")
                />
                <div class="form__group">
                    <Checkbox
                        label="MSME registered"
                        checked=Signal::derive(move || form.with(|d| d.general_info.msme_registered))
                        on_change=Callback::new(move |on: bool| vm.update(|d| d.general_info.msme_registered = on))
                    />
                </div>
            </div>
        </div>

        <div class="details-section">
            <h4 class="details-section__title">"Address"</h4>
            <div class="details-grid--3col">
                <div style="grid-column: 1 / -1;">
                    <TextInput
                        label="Address"
                        value=text(|d| d.address.address_line.clone())
                        on_input=set_text(|d, v| d.address.address_line = v)
                        maxlength=500u32
                        error=vm.field_error("address.addressLine")
                    />
                </div>
                <TextInput
                    label="Postal code"
                    value=text(|d| d.address.postal_code.clone())
                    on_input=set_text(|d, v| d.address.postal_code = v)
                    maxlength=10u32
                    error=vm.field_error("address.postalCode")
                />
                <TextInput
                    label="Telephone"
                    input_type="tel"
                    value=text(|d| d.address.telephone.clone())
                    on_input=set_text(|d, v| d.address.telephone = v)
                />
                <TextInput
                    label="Fax"
                    value=text(|d| d.address.fax.clone())
                    on_input=set_text(|d, v| d.address.fax = v)
                />
                <TextInput
                    label="Email"
                    input_type="email"
                    value=text(|d| d.address.email.clone())
                    on_input=set_text(|d, v| d.address.email = v)
                    maxlength=255u32
                    error=vm.field_error("address.email")
                />
            </div>
        </div>

        <div class="details-section">
            <h4 class="details-section__title">"Registration"</h4>
            <div class="details-grid--3col">
                <TextInput
                    label="IE code"
                    value=text(|d| d.registration_details.ie_code.clone())
                    on_input=set_text(|d, v| d.registration_details.ie_code = v.to_uppercase())
                    maxlength=20u32
                    error=vm.field_error("registrationDetails.ieCode")
                />
                <TextInput
                    label="PAN No"
                    value=text(|d| d.registration_details.pan_no.clone())
                    on_input=set_text(|d, v| d.registration_details.pan_no = v.to_uppercase())
                    maxlength=10u32
                    error=vm.field_error("registrationDetails.panNo")
                />
                <TextInput
                    label="BIN No"
                    value=text(|d| d.registration_details.bin_no.clone())
                    on_input=set_text(|d, v| d.registration_details.bin_no = v)
                />
                <TextInput
                    label="GSTIN (main branch)"
                    value=text(|d| d.registration_details.gstin_main_branch.clone())
                    on_input=set_text(|d, v| d.registration_details.gstin_main_branch = v.to_uppercase())
                />
            </div>
        </div>

        <div class="details-section">
            <h4 class="details-section__title">"Notes"</h4>
            <textarea
                class="form__textarea"
                rows=4
                prop:value=move || form.with(|d| d.notes.clone())
                on:input=move |ev| {
                    let notes = event_target_value(&ev);
                    vm.update(|d| d.notes = notes);
                }
            ></textarea>
        </div>
    }
}
