//! Branches - row editor; picking a district fills its state

use super::super::view_model::DirectoryDetailsVm;
use crate::domain::a001_country::api::CountrySource;
use crate::domain::a003_district::api::DistrictSource;
use crate::shared::components::ui::TextInput;
use crate::shared::lookup::{master_options, RemoteLookupField, StaticLookupField};
use contracts::domain::a003_district::aggregate::District;
use contracts::domain::a008_directory::aggregate::Branch;
use contracts::shared::master_data::INDIAN_STATES;
use leptos::prelude::*;

#[component]
pub fn BranchesTab(vm: DirectoryDetailsVm) -> impl IntoView {
    let count = Signal::derive(move || vm.form.with(|d| d.branch_info.len()));

    view! {
        {move || (0..count.get()).map(|index| view! { <BranchCard vm=vm index=index /> }).collect_view()}
        <button class="btn btn-secondary" on:click=move |_| vm.add_branch()>"+ Add branch"</button>
    }
}

#[component]
fn BranchCard(vm: DirectoryDetailsVm, index: usize) -> impl IntoView {
    let branch = Signal::derive(move || {
        vm.form
            .with(|d| d.branch_info.get(index).cloned().unwrap_or_default())
    });
    let text = move |get: fn(&Branch) -> String| Signal::derive(move || branch.with(get));
    let set_text = move |apply: fn(&mut Branch, String)| {
        Callback::new(move |v: String| vm.update_branch(index, |b| apply(b, v)))
    };
    let single = Signal::derive(move || vm.form.with(|d| d.branch_info.len() <= 1));

    view! {
        <div class="details-section">
            <div class="details-section__header">
                <h4 class="details-section__title">{format!("Branch {}", index + 1)}</h4>
                <button class="btn btn-link" on:click=move |_| vm.copy_branch(index)>"Copy"</button>
                <button
                    class="btn btn-link"
                    disabled=move || single.get()
                    on:click=move |_| vm.remove_branch(index)
                >
                    "Remove"
                </button>
            </div>
            <div class="details-grid--3col">
                <TextInput
                    label="Branch code"
                    value=text(|b| b.branch_code.clone())
                    on_input=set_text(|b, v| b.branch_code = v)
                />
                <div style="grid-column: span 2;">
                    <TextInput
                        label="Address"
                        value=text(|b| b.address.clone())
                        on_input=set_text(|b, v| b.address = v)
                    />
                </div>
                <TextInput
                    label="City"
                    value=text(|b| b.city.clone())
                    on_input=set_text(|b, v| b.city = v)
                />
                <RemoteLookupField
                    source=DistrictSource
                    label="District"
                    value=text(|b| b.district.clone())
                    on_change=set_text(|b, v| b.district = v)
                    on_select=Callback::new(move |district: District| {
                        if let Some(state) = district.parent_state() {
                            vm.update_branch(index, |b| b.state = state);
                        }
                    })
                    trim_on_blur=true
                />
                <StaticLookupField
                    options=master_options(INDIAN_STATES)
                    label="State"
                    value=text(|b| b.state.clone())
                    on_change=set_text(|b, v| b.state = v)
                    trim_on_blur=true
                />
                <TextInput
                    label="Postal code"
                    value=text(|b| b.postal_code.clone())
                    on_input=set_text(|b, v| b.postal_code = v)
                />
                <RemoteLookupField
                    source=CountrySource
                    label="Country"
                    value=text(|b| b.country.clone())
                    on_change=set_text(|b, v| b.country = v)
                    trim_on_blur=true
                />
            </div>
        </div>
    }
}
