//! Invoice tab - number, terms, currency, values and charges
//!
//! A currency change is copied to every charge row with the day's rate and
//! reprices PMV of the invoice's products.

use super::super::view_model::ExportJobDetailsVm;
use crate::shared::components::ui::{NumberInput, ReadonlyNumber, TextInput};
use crate::shared::lookup::{master_options, StaticLookupField};
use contracts::domain::a009_export_job::aggregate::{Charge, FreightInsuranceCharges, Invoice};
use contracts::shared::master_data::{INVOICE_CURRENCIES, TERMS_OF_INVOICE};
use leptos::prelude::*;

#[component]
pub fn InvoiceMainTab(vm: ExportJobDetailsVm) -> impl IntoView {
    let invoice = vm.invoice();
    let text = move |get: fn(&Invoice) -> String| Signal::derive(move || invoice.with(get));
    let number = move |get: fn(&Invoice) -> f64| Signal::derive(move || invoice.with(get));

    let invoice_count = Signal::derive(move || vm.job.with(|j| j.invoices.len()));

    view! {
        <div class="details-section">
            <h4 class="details-section__title">"Invoice"</h4>

            <Show when=move || { invoice_count.get() > 1 }>
                <div class="detail-tabs">
                    {move || (0..invoice_count.get()).map(|i| view! {
                        <button
                            class=move || if vm.selected_invoice.get() == i { "detail-tabs__item detail-tabs__item--active" } else { "detail-tabs__item" }
                            on:click=move |_| vm.select_invoice(i)
                        >
                            {format!("Invoice {}", i + 1)}
                        </button>
                    }).collect_view()}
                </div>
            </Show>

            <div class="details-grid--3col">
                <TextInput
                    label="Invoice number"
                    value=text(|i| i.invoice_number.clone())
                    on_input=Callback::new(move |v: String| vm.update_invoice(|inv| Invoice { invoice_number: v.to_uppercase(), ..inv.clone() }))
                />
                <TextInput
                    label="Invoice date"
                    input_type="date"
                    value=text(|i| i.invoice_date.clone())
                    on_input=Callback::new(move |v: String| vm.update_invoice(|inv| Invoice { invoice_date: v, ..inv.clone() }))
                />
                <StaticLookupField
                    options=master_options(TERMS_OF_INVOICE)
                    label="Terms of invoice"
                    value=text(|i| i.terms_of_invoice.clone())
                    on_change=Callback::new(move |v: String| vm.set_terms(v))
                />
                <StaticLookupField
                    options=master_options(INVOICE_CURRENCIES)
                    label="Currency"
                    value=text(|i| i.currency.clone())
                    on_change=Callback::new(move |v: String| vm.set_invoice_currency(v))
                    trim_on_blur=true
                />
                <ReadonlyNumber label="Exchange rate (INR)" value=number(|i| i.exchange_rate) />
                <div class="form__group">
                    <label class="form__label">"Price includes"</label>
                    <div class="form__static">{move || invoice.with(|i| i.price_includes.clone())}</div>
                </div>
                <NumberInput
                    label="Invoice value"
                    value=number(|i| i.invoice_value)
                    on_input=Callback::new(move |v: f64| vm.update_invoice(|inv| Invoice { invoice_value: v, ..inv.clone() }))
                />
                <div class="form__group">
                    <label class="form__label">"Product value basis"</label>
                    <span class="badge">{move || invoice.with(|i| i.product_value_pill.clone())}</span>
                </div>
                <NumberInput
                    label="Product value"
                    value=number(|i| i.product_value)
                    on_input=Callback::new(move |v: f64| vm.update_invoice(|inv| Invoice { product_value: v, ..inv.clone() }))
                />
            </div>
        </div>

        <div class="details-section">
            <h4 class="details-section__title">"Freight, insurance and deductions"</h4>
            <table class="table">
                <thead>
                    <tr>
                        <th>"Charge"</th>
                        <th>"Currency"</th>
                        <th>"Rate"</th>
                        <th>"Amount"</th>
                    </tr>
                </thead>
                <tbody>
                    {FreightInsuranceCharges::LABELS
                        .iter()
                        .enumerate()
                        .map(|(row, &label)| {
                            let charge = Signal::derive(move || {
                                invoice.with(|i| i.freight_insurance_charges.rows()[row].clone())
                            });
                            let update = move |f: fn(&mut Charge, f64), value: f64| {
                                vm.update_invoice(|inv| {
                                    let mut next = inv.clone();
                                    if let Some(target) =
                                        next.freight_insurance_charges.rows_mut().into_iter().nth(row)
                                    {
                                        f(target, value);
                                    }
                                    next
                                })
                            };
                            view! {
                                <tr>
                                    <td>{label}</td>
                                    <td>{move || charge.with(|c| c.currency.clone())}</td>
                                    <td>
                                        <NumberInput
                                            value=Signal::derive(move || charge.with(|c| c.exchange_rate))
                                            on_input=Callback::new(move |v: f64| update(|c, v| c.exchange_rate = v, v))
                                        />
                                    </td>
                                    <td>
                                        <NumberInput
                                            value=Signal::derive(move || charge.with(|c| c.amount))
                                            on_input=Callback::new(move |v: f64| update(|c, v| c.amount = v, v))
                                        />
                                    </td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        </div>
    }
}
