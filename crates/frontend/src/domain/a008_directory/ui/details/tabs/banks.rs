//! Bank accounts - row editor with a single default account

use super::super::view_model::DirectoryDetailsVm;
use crate::shared::components::ui::TextInput;
use contracts::domain::a008_directory::aggregate::BankDetail;
use leptos::prelude::*;

#[component]
pub fn BanksTab(vm: DirectoryDetailsVm) -> impl IntoView {
    let count = Signal::derive(move || vm.form.with(|d| d.bank_details.len()));

    view! {
        <div class="details-section">
            <h4 class="details-section__title">"Bank details"</h4>
            <table class="table">
                <thead>
                    <tr>
                        <th>"Default"</th>
                        <th>"Bank"</th>
                        <th>"Branch location"</th>
                        <th>"Account number"</th>
                        <th>"AD code"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    {move || (0..count.get()).map(|index| view! { <BankRow vm=vm index=index /> }).collect_view()}
                </tbody>
            </table>
            <button class="btn btn-secondary" on:click=move |_| vm.add_bank()>"+ Add bank"</button>
        </div>
    }
}

#[component]
fn BankRow(vm: DirectoryDetailsVm, index: usize) -> impl IntoView {
    let bank = Signal::derive(move || {
        vm.form
            .with(|d| d.bank_details.get(index).cloned().unwrap_or_default())
    });
    let text = move |get: fn(&BankDetail) -> String| Signal::derive(move || bank.with(get));
    let set_text = move |apply: fn(&mut BankDetail, String)| {
        Callback::new(move |v: String| vm.update_bank(index, |b| apply(b, v)))
    };
    let single = Signal::derive(move || vm.form.with(|d| d.bank_details.len() <= 1));

    view! {
        <tr>
            <td>
                <input
                    type="radio"
                    name="default-bank"
                    prop:checked=move || bank.with(|b| b.is_default)
                    on:change=move |_| vm.make_default_bank(index)
                />
            </td>
            <td><TextInput value=text(|b| b.entity_name.clone()) on_input=set_text(|b, v| b.entity_name = v) /></td>
            <td><TextInput value=text(|b| b.branch_location.clone()) on_input=set_text(|b, v| b.branch_location = v) /></td>
            <td><TextInput value=text(|b| b.account_number.clone()) on_input=set_text(|b, v| b.account_number = v) /></td>
            <td><TextInput value=text(|b| b.ad_code.clone()) on_input=set_text(|b, v| b.ad_code = v.to_uppercase()) /></td>
            <td>
                <button
                    class="btn btn-link"
                    title="Remove row"
                    disabled=move || single.get()
                    on:click=move |_| vm.remove_bank(index)
                >
                    "Remove"
                </button>
            </td>
        </tr>
    }
}
