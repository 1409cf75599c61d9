//! Product tab - description, tariff, quantities, origin, manufacturer, PMV
//!
//! Quantity, price, per and PMV settings go through
//! `update_product_figures`, which recomputes amount and PMV.

use super::super::view_model::ExportJobDetailsVm;
use crate::domain::a003_district::api::DistrictSource;
use crate::domain::a005_tariff_item::api::TariffSource;
use crate::shared::components::ui::{Checkbox, NumberInput, ReadonlyNumber, Select, TextInput};
use crate::shared::lookup::{master_options, RemoteLookupField, StaticLookupField};
use contracts::domain::a003_district::aggregate::District;
use contracts::domain::a005_tariff_item::aggregate::TariffItem;
use contracts::domain::a007_manufacturer::aggregate::Manufacturer;
use contracts::domain::a009_export_job::aggregate::{CalculationMethod, Product};
use contracts::shared::master_data::{INDIAN_STATES, INVOICE_CURRENCIES, UNIT_CODES};
use leptos::prelude::*;

const CALCULATION_METHODS: &[(&str, &str)] = &[("percentage", "Percentage"), ("manual", "Manual")];
const CLAIM_OPTIONS: &[(&str, &str)] = &[("Yes", "Yes"), ("No", "No")];

#[component]
pub fn ProductGeneralTab(vm: ExportJobDetailsVm) -> impl IntoView {
    let product = vm.product();
    let text = move |get: fn(&Product) -> String| Signal::derive(move || product.with(get));
    let number = move |get: fn(&Product) -> f64| Signal::derive(move || product.with(get));

    let set_text = move |apply: fn(&mut Product, String)| {
        Callback::new(move |value: String| vm.update_product(|p| apply(p, value)))
    };
    let set_number = move |apply: fn(&mut Product, f64)| {
        Callback::new(move |value: f64| vm.update_product(|p| apply(p, value)))
    };
    let set_figure = move |apply: fn(&mut Product, f64)| {
        Callback::new(move |value: f64| vm.update_product_figures(|p| apply(p, value)))
    };

    let auto_recalc = Signal::derive(move || product.with(|p| p.auto_recalc));
    let is_manual_pmv = Signal::derive(move || {
        product.with(|p| p.pmv_info.calculation_method == CalculationMethod::Manual)
    });

    view! {
        <ProductSelector vm=vm />

        <div class="details-section">
            <h4 class="details-section__title">"General"</h4>
            <div class="details-grid--3col">
                <div style="grid-column: 1 / -1;">
                    <TextInput
                        label="Description"
                        value=text(|p| p.description.clone())
                        on_input=set_text(|p, v| p.description = v)
                    />
                </div>
                <RemoteLookupField
                    source=TariffSource
                    label="RITC"
                    placeholder="Type at least 2 characters"
                    value=text(|p| p.ritc.clone())
                    on_change=set_text(|p, v| p.ritc = v)
                    on_select=Callback::new(move |item: TariffItem| vm.update_product(|p| p.ritc = item.hs_code))
                    trim_on_blur=true
                />
                <NumberInput
                    label="Quantity"
                    value=number(|p| p.quantity)
                    on_input=set_figure(|p, v| p.quantity = v)
                />
                <StaticLookupField
                    options=master_options(UNIT_CODES)
                    label="Qty unit"
                    value=text(|p| p.qty_unit.clone())
                    on_change=set_text(|p, v| p.qty_unit = v)
                    trim_on_blur=true
                />
                <NumberInput
                    label="Unit price"
                    value=number(|p| p.unit_price)
                    on_input=set_figure(|p, v| p.unit_price = v)
                />
                <NumberInput
                    label="Per"
                    value=number(|p| p.per)
                    on_input=set_figure(|p, v| p.per = v)
                />
                <StaticLookupField
                    options=master_options(UNIT_CODES)
                    label="Per unit"
                    value=text(|p| p.per_unit.clone())
                    on_change=set_text(|p, v| p.per_unit = v)
                    trim_on_blur=true
                />
                <NumberInput
                    label="Amount"
                    value=number(|p| p.amount)
                    on_input=set_figure(|p, v| p.amount = v)
                    disabled=auto_recalc
                />
                <div class="form__group">
                    <Checkbox
                        label="Calculate amount"
                        checked=auto_recalc
                        on_change=Callback::new(move |on: bool| vm.update_product_figures(|p| p.auto_recalc = on))
                    />
                </div>
                <ReadonlyNumber label="FOB (INR)" value=vm.product_fob() />
            </div>
        </div>

        <div class="details-section">
            <h4 class="details-section__title">"Origin and manufacturer"</h4>
            <div class="details-grid--3col">
                <RemoteLookupField
                    source=DistrictSource
                    label="Origin district"
                    value=text(|p| p.origin_district.clone())
                    on_change=set_text(|p, v| p.origin_district = v)
                    on_select=Callback::new(move |district: District| {
                        if let Some(state) = district.parent_state() {
                            vm.update_product(|p| p.origin_state = state);
                        }
                    })
                    trim_on_blur=true
                />
                <StaticLookupField
                    options=master_options(INDIAN_STATES)
                    label="Origin state"
                    value=text(|p| p.origin_state.clone())
                    on_change=set_text(|p, v| p.origin_state = v)
                    trim_on_blur=true
                />
                <StaticLookupField
                    options=vm.manufacturers
                    label="Manufacturer"
                    value=text(|p| p.manufacturer.name.clone())
                    on_change=set_text(|p, v| p.manufacturer.name = v)
                    on_select=Callback::new(move |m: Manufacturer| vm.update_product(|p| p.manufacturer = m))
                    trim_on_blur=true
                />
                <TextInput
                    label="Manufacturer code"
                    value=text(|p| p.manufacturer.code.clone())
                    on_input=set_text(|p, v| p.manufacturer.code = v)
                />
                <TextInput
                    label="Manufacturer address"
                    value=text(|p| p.manufacturer.address.clone())
                    on_input=set_text(|p, v| p.manufacturer.address = v)
                />
                <TextInput
                    label="Postal code"
                    value=text(|p| p.manufacturer.postal_code.clone())
                    on_input=set_text(|p, v| p.manufacturer.postal_code = v)
                />
            </div>
        </div>

        <div class="details-section">
            <h4 class="details-section__title">"PMV"</h4>
            <div class="details-grid--3col">
                <StaticLookupField
                    options=master_options(INVOICE_CURRENCIES)
                    label="PMV currency"
                    value=text(|p| p.pmv_info.currency.clone())
                    on_change=Callback::new(move |v: String| vm.update_product_figures(|p| p.pmv_info.currency = v))
                    trim_on_blur=true
                />
                <Select
                    label="Calculation"
                    value=Signal::derive(move || if is_manual_pmv.get() { "manual".to_string() } else { "percentage".to_string() })
                    on_change=Callback::new(move |v: String| vm.update_product_figures(|p| {
                        p.pmv_info.calculation_method = if v == "manual" {
                            CalculationMethod::Manual
                        } else {
                            CalculationMethod::Percentage
                        };
                    }))
                    options=CALCULATION_METHODS
                />
                <NumberInput
                    label="Percentage"
                    value=number(|p| p.pmv_info.percentage)
                    on_input=set_figure(|p, v| p.pmv_info.percentage = v)
                    disabled=is_manual_pmv
                />
                <Show
                    when=move || is_manual_pmv.get()
                    fallback=move || view! {
                        <ReadonlyNumber label="PMV / unit" value=number(|p| p.pmv_info.pmv_per_unit) />
                        <ReadonlyNumber label="Total PMV" value=number(|p| p.pmv_info.total_pmv) />
                    }
                >
                    <NumberInput
                        label="PMV / unit"
                        value=number(|p| p.pmv_info.pmv_per_unit)
                        on_input=set_number(|p, v| p.pmv_info.pmv_per_unit = v)
                    />
                    <NumberInput
                        label="Total PMV"
                        value=number(|p| p.pmv_info.total_pmv)
                        on_input=set_number(|p, v| p.pmv_info.total_pmv = v)
                    />
                </Show>
            </div>
        </div>

        <div class="details-section">
            <h4 class="details-section__title">"RoDTEP"</h4>
            <div class="details-grid--3col">
                <Select
                    label="Claim"
                    value=text(|p| p.rodtep_info.claim.clone())
                    on_change=set_text(|p, v| p.rodtep_info.claim = v)
                    options=CLAIM_OPTIONS
                />
                <NumberInput
                    label="Quantity"
                    value=number(|p| p.rodtep_info.quantity)
                    on_input=set_number(|p, v| p.rodtep_info.quantity = v)
                />
                <StaticLookupField
                    options=master_options(UNIT_CODES)
                    label="Unit"
                    value=text(|p| p.rodtep_info.unit.clone())
                    on_change=set_text(|p, v| p.rodtep_info.unit = v)
                />
                <NumberInput
                    label="Rate %"
                    value=number(|p| p.rodtep_info.rate_percent)
                    on_input=set_number(|p, v| p.rodtep_info.rate_percent = v)
                />
                <NumberInput
                    label="Cap value"
                    value=number(|p| p.rodtep_info.cap_value)
                    on_input=set_number(|p, v| p.rodtep_info.cap_value = v)
                />
                <NumberInput
                    label="Cap value per units"
                    value=number(|p| p.rodtep_info.cap_value_per_units)
                    on_input=set_number(|p, v| p.rodtep_info.cap_value_per_units = v)
                />
                <StaticLookupField
                    options=master_options(UNIT_CODES)
                    label="Cap unit"
                    value=text(|p| p.rodtep_info.cap_unit.clone())
                    on_change=set_text(|p, v| p.rodtep_info.cap_unit = v)
                />
                <NumberInput
                    label="Amount (INR)"
                    value=number(|p| p.rodtep_info.amount_inr)
                    on_input=set_number(|p, v| p.rodtep_info.amount_inr = v)
                />
            </div>
        </div>
    }
}

/// Product pills of the selected invoice with add / remove.
#[component]
fn ProductSelector(vm: ExportJobDetailsVm) -> impl IntoView {
    let products = Signal::derive(move || {
        vm.invoice().with(|inv| {
            inv.products
                .iter()
                .map(|p| (p.serial_number, p.description.clone()))
                .collect::<Vec<_>>()
        })
    });

    view! {
        <div class="detail-tabs">
            {move || {
                products
                    .get()
                    .into_iter()
                    .enumerate()
                    .map(|(index, (serial, description))| {
                        let title = if description.is_empty() {
                            format!("#{}", serial)
                        } else {
                            format!("#{} {}", serial, description)
                        };
                        view! {
                            <button
                                class=move || if vm.selected_product.get() == index { "detail-tabs__item detail-tabs__item--active" } else { "detail-tabs__item" }
                                on:click=move |_| vm.select_product(index)
                            >
                                {title}
                            </button>
                        }
                    })
                    .collect_view()
            }}
            <button class="detail-tabs__item" on:click=move |_| vm.add_product()>"+ Product"</button>
            <button
                class="detail-tabs__item"
                disabled=move || products.with(|p| p.len() <= 1)
                on:click=move |_| vm.remove_product(vm.selected_product.get_untracked())
            >
                "Remove"
            </button>
        </div>
    }
}
