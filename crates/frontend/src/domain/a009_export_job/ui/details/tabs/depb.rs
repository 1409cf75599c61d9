//! DEPB tab - item and parent-item row editors of the selected product

use super::super::view_model::ExportJobDetailsVm;
use crate::shared::components::ui::{Checkbox, NumberInput, TextInput};
use crate::shared::lookup::{master_options, StaticLookupField};
use contracts::domain::a009_export_job::aggregate::{DepbDetails, DepbItem, DepbParentItem};
use contracts::shared::master_data::UNIT_CODES;
use leptos::prelude::*;

#[component]
pub fn DepbTab(vm: ExportJobDetailsVm) -> impl IntoView {
    let product = vm.product();
    let details = Signal::derive(move || product.with(|p| p.depb_details.clone()));

    let is_item = Signal::derive(move || details.with(|d| d.is_depb_item));
    let is_parent = Signal::derive(move || details.with(|d| d.is_depb_parent));

    view! {
        <div class="details-section">
            <h4 class="details-section__title">"DEPB items"</h4>
            <Checkbox
                label="Product is a DEPB item"
                checked=is_item
                on_change=Callback::new(move |on: bool| vm.update_product(|p| p.depb_details.is_depb_item = on))
            />
            <Show when=move || is_item.get()>
                <table class="table">
                    <thead>
                        <tr>
                            <th>"Product group"</th>
                            <th>"Rate list Sr. no"</th>
                            <th>"SION"</th>
                            <th>"Rate"</th>
                            <th>"Qty"</th>
                            <th>"Unit"</th>
                            <th>"Cap value"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let count = details.with(|d| d.depb_items.len());
                            (0..count).map(|index| view! { <DepbItemRow vm=vm details=details index=index /> }).collect_view()
                        }}
                    </tbody>
                </table>
                <button class="btn btn-secondary" on:click=move |_| vm.update_depb(DepbDetails::with_new_item)>
                    "+ Add item"
                </button>
            </Show>
        </div>

        <div class="details-section">
            <h4 class="details-section__title">"DEPB parent items"</h4>
            <Checkbox
                label="Product has DEPB parent items"
                checked=is_parent
                on_change=Callback::new(move |on: bool| vm.update_product(|p| p.depb_details.is_depb_parent = on))
            />
            <Show when=move || is_parent.get()>
                <table class="table">
                    <thead>
                        <tr>
                            <th>"Product group"</th>
                            <th>"Rate list Sr. no"</th>
                            <th>"Rate"</th>
                            <th>"Qty"</th>
                            <th>"Unit"</th>
                            <th>"% of qty"</th>
                            <th>"Cap value"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let count = details.with(|d| d.depb_parent_items.len());
                            (0..count).map(|index| view! { <DepbParentRow vm=vm details=details index=index /> }).collect_view()
                        }}
                    </tbody>
                </table>
                <button class="btn btn-secondary" on:click=move |_| vm.update_depb(DepbDetails::with_new_parent_item)>
                    "+ Add parent item"
                </button>
            </Show>
        </div>
    }
}

#[component]
fn DepbItemRow(vm: ExportJobDetailsVm, details: Signal<DepbDetails>, index: usize) -> impl IntoView {
    let item = Signal::derive(move || details.with(|d| d.depb_items.get(index).cloned().unwrap_or_default()));
    let text = move |get: fn(&DepbItem) -> String| Signal::derive(move || item.with(get));
    let number = move |get: fn(&DepbItem) -> f64| Signal::derive(move || item.with(get));
    let set_text = move |apply: fn(&mut DepbItem, String)| {
        Callback::new(move |v: String| vm.update_depb(move |d| d.with_item(index, |i| apply(i, v))))
    };
    let set_number = move |apply: fn(&mut DepbItem, f64)| {
        Callback::new(move |v: f64| vm.update_depb(move |d| d.with_item(index, |i| apply(i, v))))
    };
    let single = Signal::derive(move || details.with(|d| d.depb_items.len() <= 1));

    view! {
        <tr>
            <td><TextInput value=text(|i| i.product_group.clone()) on_input=set_text(|i, v| i.product_group = v.to_uppercase()) /></td>
            <td><TextInput value=text(|i| i.rate_list_sr_no.clone()) on_input=set_text(|i, v| i.rate_list_sr_no = v) /></td>
            <td><TextInput value=text(|i| i.std_io_norms.clone()) on_input=set_text(|i, v| i.std_io_norms = v) /></td>
            <td><NumberInput value=number(|i| i.depb_rate) on_input=set_number(|i, v| i.depb_rate = v) /></td>
            <td><NumberInput value=number(|i| i.depb_qty) on_input=set_number(|i, v| i.depb_qty = v) /></td>
            <td>
                <StaticLookupField
                    options=master_options(UNIT_CODES)
                    label=""
                    value=text(|i| i.unit.clone())
                    on_change=set_text(|i, v| i.unit = v)
                />
            </td>
            <td><TextInput value=text(|i| i.cap_value.clone()) on_input=set_text(|i, v| i.cap_value = v) /></td>
            <td>
                <button class="btn btn-link" title="Copy row" on:click=move |_| vm.update_depb(move |d| d.with_copied_item(index))>"Copy"</button>
                <button
                    class="btn btn-link"
                    title="Remove row"
                    disabled=move || single.get()
                    on:click=move |_| vm.update_depb(move |d| d.without_item(index))
                >
                    "Remove"
                </button>
            </td>
        </tr>
    }
}

#[component]
fn DepbParentRow(vm: ExportJobDetailsVm, details: Signal<DepbDetails>, index: usize) -> impl IntoView {
    let item = Signal::derive(move || {
        details.with(|d| d.depb_parent_items.get(index).cloned().unwrap_or_default())
    });
    let text = move |get: fn(&DepbParentItem) -> String| Signal::derive(move || item.with(get));
    let number = move |get: fn(&DepbParentItem) -> f64| Signal::derive(move || item.with(get));
    let set_text = move |apply: fn(&mut DepbParentItem, String)| {
        Callback::new(move |v: String| vm.update_depb(move |d| d.with_parent_item(index, |i| apply(i, v))))
    };
    let set_number = move |apply: fn(&mut DepbParentItem, f64)| {
        Callback::new(move |v: f64| vm.update_depb(move |d| d.with_parent_item(index, |i| apply(i, v))))
    };
    let single = Signal::derive(move || details.with(|d| d.depb_parent_items.len() <= 1));

    view! {
        <tr>
            <td><TextInput value=text(|i| i.product_group.clone()) on_input=set_text(|i, v| i.product_group = v.to_uppercase()) /></td>
            <td><TextInput value=text(|i| i.rate_list_sr_no.clone()) on_input=set_text(|i, v| i.rate_list_sr_no = v) /></td>
            <td><NumberInput value=number(|i| i.depb_rate) on_input=set_number(|i, v| i.depb_rate = v) /></td>
            <td><NumberInput value=number(|i| i.depb_qty) on_input=set_number(|i, v| i.depb_qty = v) /></td>
            <td>
                <StaticLookupField
                    options=master_options(UNIT_CODES)
                    label=""
                    value=text(|i| i.unit.clone())
                    on_change=set_text(|i, v| i.unit = v)
                />
            </td>
            <td><NumberInput value=number(|i| i.percent_qty) on_input=set_number(|i, v| i.percent_qty = v) /></td>
            <td><TextInput value=text(|i| i.cap_value.clone()) on_input=set_text(|i, v| i.cap_value = v) /></td>
            <td>
                <button class="btn btn-link" title="Copy row" on:click=move |_| vm.update_depb(move |d| d.with_copied_parent_item(index))>"Copy"</button>
                <button
                    class="btn btn-link"
                    title="Remove row"
                    disabled=move || single.get()
                    on:click=move |_| vm.update_depb(move |d| d.without_parent_item(index))
                >
                    "Remove"
                </button>
            </td>
        </tr>
    }
}
