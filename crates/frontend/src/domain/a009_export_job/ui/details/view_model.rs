//! ViewModel for the export job form
//!
//! The whole job is one `RwSignal<ExportJob>`; tabs write individual field
//! paths through the copy-with-update helpers of the aggregate. Derived
//! figures (amount, PMV) are recomputed here whenever their inputs change.

use super::model;
use crate::domain::a004_currency_rate::api::fetch_rates_for;
use crate::domain::a008_directory::api::fetch_directories;
use crate::domain::a007_manufacturer::api::fetch_manufacturers;
use crate::shared::config::use_config;
use crate::shared::date_utils::{format_date, today};
use contracts::domain::a004_currency_rate::aggregate::ExchangeRateTable;
use contracts::domain::a007_manufacturer::aggregate::Manufacturer;
use contracts::domain::a008_directory::aggregate::Directory;
use contracts::domain::a009_export_job::aggregate::{
    DepbDetails, ExportJob, Invoice, Product, Shipment,
};
use contracts::domain::a009_export_job::calculations::{
    product_fob_inr, recalculate_invoice_pmv, recalculate_product, reprice_invoice,
};
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct ExportJobDetailsVm {
    pub api_base: StoredValue<String>,

    // === Form ===
    pub job: RwSignal<ExportJob>,

    // === Reference data ===
    pub rates: RwSignal<ExchangeRateTable>,
    pub manufacturers: RwSignal<Vec<Manufacturer>>,
    /// Exporter / consignee candidates
    pub directories: RwSignal<Vec<Directory>>,

    // === Selection ===
    pub selected_invoice: RwSignal<usize>,
    pub selected_product: RwSignal<usize>,

    // === UI State ===
    pub active_tab: RwSignal<&'static str>,
    pub loading: RwSignal<bool>,
    pub saving: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    pub success: RwSignal<Option<String>>,
}

impl ExportJobDetailsVm {
    pub fn new() -> Self {
        Self {
            api_base: StoredValue::new(use_config().api_base),
            job: RwSignal::new(ExportJob::default()),
            rates: RwSignal::new(ExchangeRateTable::default()),
            manufacturers: RwSignal::new(Vec::new()),
            directories: RwSignal::new(Vec::new()),
            selected_invoice: RwSignal::new(0),
            selected_product: RwSignal::new(0),
            active_tab: RwSignal::new("shipment"),
            loading: RwSignal::new(false),
            saving: RwSignal::new(false),
            error: RwSignal::new(None),
            success: RwSignal::new(None),
        }
    }

    pub fn set_tab(&self, tab: &'static str) {
        self.active_tab.set(tab);
    }

    // === Derived signals ===

    pub fn invoice(&self) -> Signal<Invoice> {
        let job = self.job;
        let selected = self.selected_invoice;
        Signal::derive(move || {
            let index = selected.get();
            job.with(|j| j.invoices.get(index).cloned().unwrap_or_default())
        })
    }

    pub fn product(&self) -> Signal<Product> {
        let job = self.job;
        let invoice = self.selected_invoice;
        let product = self.selected_product;
        Signal::derive(move || {
            let (i, p) = (invoice.get(), product.get());
            job.with(|j| j.product(i, p).cloned().unwrap_or_default())
        })
    }

    /// FOB of the selected product in INR.
    pub fn product_fob(&self) -> Signal<f64> {
        let invoice = self.invoice();
        let product = self.product();
        Signal::derive(move || product.with(|p| invoice.with(|inv| product_fob_inr(p, inv))))
    }

    pub fn is_save_disabled(&self) -> Signal<bool> {
        let saving = self.saving;
        let job = self.job;
        Signal::derive(move || saving.get() || job.with(|j| j.job_no.trim().is_empty()))
    }

    // === Validation ===

    pub fn validate(&self) -> Result<(), String> {
        let job = self.job.get_untracked();
        if job.job_no.trim().is_empty() {
            return Err("Job number is required".into());
        }
        if job.invoices.is_empty() {
            return Err("A job needs at least one invoice".into());
        }
        Ok(())
    }

    // === Data loading ===

    /// Load the exchange rates for today and reprice every invoice.
    pub fn load_rates(&self) {
        let this = *self;
        let date = today();
        let base = self.api_base.get_value();
        leptos::task::spawn_local(async move {
            match fetch_rates_for(&base, date).await {
                Ok(table) => {
                    log::debug!(
                        "loaded {} exchange rates for {}",
                        table.len(),
                        format_date(&date.to_string())
                    );
                    this.apply_rates(table);
                }
                Err(e) => log::warn!("exchange rates for {} unavailable: {}", date, e),
            }
        });
    }

    pub fn load_manufacturers(&self) {
        let manufacturers = self.manufacturers;
        let base = self.api_base.get_value();
        leptos::task::spawn_local(async move {
            match fetch_manufacturers(&base).await {
                Ok(list) => {
                    manufacturers.try_set(list);
                }
                Err(e) => log::warn!("manufacturers lookup failed: {}", e),
            }
        });
    }

    pub fn load_directories(&self) {
        let directories = self.directories;
        let base = self.api_base.get_value();
        leptos::task::spawn_local(async move {
            match fetch_directories(&base).await {
                Ok(list) => {
                    directories.try_set(list);
                }
                Err(e) => log::warn!("directory lookup failed: {}", e),
            }
        });
    }

    pub fn set_exporter(&self, exporter: String) {
        self.job.update(|j| j.exporter = exporter);
    }

    pub fn set_consignee(&self, consignee: String) {
        self.job.update(|j| j.consignee = consignee);
    }

    pub fn load(&self, job_no: String) {
        let this = *self;
        this.loading.set(true);
        this.error.set(None);
        let base = self.api_base.get_value();

        leptos::task::spawn_local(async move {
            match model::fetch_job(&base, &job_no).await {
                Ok(job) => this.apply_loaded_job(job),
                Err(e) => {
                    this.error.try_set(Some(format!("Failed to load job {}: {}", job_no, e)));
                }
            }
            this.loading.try_set(false);
        });
    }

    pub fn save(&self, on_saved: Callback<()>) {
        if let Err(msg) = self.validate() {
            self.error.set(Some(msg));
            return;
        }

        let this = *self;
        this.saving.set(true);
        this.error.set(None);
        this.success.set(None);
        let job = this.job.get_untracked();
        let base = self.api_base.get_value();

        leptos::task::spawn_local(async move {
            match model::save_job(&base, &job).await {
                Ok(saved) => {
                    // form gone before the reply: nothing left to notify
                    if this.job.try_set(saved).is_some() {
                        return;
                    }
                    this.success.try_set(Some("Job saved".into()));
                    on_saved.run(());
                }
                Err(e) => {
                    this.error.try_set(Some(format!("Save failed: {}", e)));
                }
            }
            this.saving.try_set(false);
        });
    }

    // === Commands ===

    pub fn update_shipment(&self, f: impl FnOnce(&mut Shipment)) {
        self.job.update(|j| *j = j.with_shipment(f));
    }

    /// Replace the selected invoice with `f(invoice)`.
    pub fn update_invoice(&self, f: impl FnOnce(&Invoice) -> Invoice) {
        let index = self.selected_invoice.get_untracked();
        self.job.update(|j| *j = j.with_invoice(index, f));
    }

    /// Edit a field of the selected product that no figure depends on.
    pub fn update_product(&self, f: impl FnOnce(&mut Product)) {
        let (i, p) = self.selection();
        self.job.update(|j| *j = j.with_product(i, p, f));
    }

    /// Replace the DEPB block of the selected product with `f(block)`.
    pub fn update_depb(&self, f: impl FnOnce(&DepbDetails) -> DepbDetails) {
        self.update_product(|p| {
            let updated = f(&p.depb_details);
            p.depb_details = updated;
        });
    }

    /// Edit an input of the derived figures and recompute amount and PMV.
    pub fn update_product_figures(&self, f: impl FnOnce(&mut Product)) {
        let rates = self.rates.get_untracked();
        let p = self.selected_product.get_untracked();
        self.update_invoice(|inv| {
            let currency = inv.currency.clone();
            inv.with_product(p, |product| {
                f(product);
                let updated = recalculate_product(product, &currency, &rates);
                *product = updated;
            })
        });
    }

    /// New invoice currency: propagate to the charge rows and reprice PMV.
    pub fn set_invoice_currency(&self, code: String) {
        let rates = self.rates.get_untracked();
        self.update_invoice(|inv| recalculate_invoice_pmv(&inv.with_currency(&code, &rates), &rates));
    }

    pub fn set_terms(&self, terms: String) {
        self.update_invoice(|inv| inv.with_terms(&terms));
    }

    pub fn select_invoice(&self, index: usize) {
        self.selected_invoice.set(index);
        self.selected_product.set(0);
    }

    pub fn select_product(&self, index: usize) {
        self.selected_product.set(index);
    }

    pub fn add_product(&self) {
        self.update_invoice(Invoice::with_new_product);
        let count = self.invoice().get_untracked().products.len();
        self.selected_product.set(count.saturating_sub(1));
    }

    pub fn remove_product(&self, index: usize) {
        self.update_invoice(|inv| inv.without_product(index));
        let count = self.invoice().get_untracked().products.len();
        if self.selected_product.get_untracked() >= count {
            self.selected_product.set(count.saturating_sub(1));
        }
    }

    fn selection(&self) -> (usize, usize) {
        (
            self.selected_invoice.get_untracked(),
            self.selected_product.get_untracked(),
        )
    }

    // The helpers below run after an await and may find the form disposed.

    fn apply_rates(&self, table: ExchangeRateTable) {
        if self.rates.try_set(table).is_none() {
            self.reprice_all();
        }
    }

    fn apply_loaded_job(&self, job: ExportJob) {
        if self.job.try_set(job).is_some() {
            return;
        }
        self.selected_invoice.try_set(0);
        self.selected_product.try_set(0);
        self.reprice_all();
    }

    /// Refresh invoice rates and PMV against the current rate table.
    fn reprice_all(&self) {
        let Some(rates) = self.rates.try_get_untracked() else {
            return;
        };
        self.job.try_update(|j| {
            for invoice in j.invoices.iter_mut() {
                *invoice = reprice_invoice(invoice, &rates);
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::AppConfig;
    use contracts::domain::a004_currency_rate::aggregate::ExchangeRate;
    use contracts::shared::lookup::LookupConfig;

    fn vm_in(owner: &Owner) -> ExportJobDetailsVm {
        owner.with(|| {
            provide_context(AppConfig {
                api_base: "http://test/api".into(),
                lookup: LookupConfig::default(),
            });
            ExportJobDetailsVm::new()
        })
    }

    fn usd_table() -> ExchangeRateTable {
        ExchangeRateTable::new(vec![ExchangeRate {
            currency_code: "USD".into(),
            unit: 1.0,
            export_rate: 83.0,
            ..Default::default()
        }])
    }

    #[test]
    fn test_rates_arriving_after_currency_reprice_invoice() {
        let owner = Owner::new();
        let vm = vm_in(&owner);
        vm.set_invoice_currency("USD".into());
        vm.update_product_figures(|p| {
            p.quantity = 1.0;
            p.unit_price = 100.0;
        });

        vm.apply_rates(usd_table());
        let invoice = vm.invoice().get_untracked();
        assert_eq!(invoice.exchange_rate, 83.0);
        assert_eq!(invoice.products[0].pmv_info.total_pmv, 9130.0);
        assert_eq!(vm.product_fob().get_untracked(), 8300.0);
    }

    #[test]
    fn test_replies_after_form_closed_are_dropped() {
        let owner = Owner::new();
        let vm = vm_in(&owner);
        owner.cleanup();

        vm.apply_rates(usd_table());
        vm.apply_loaded_job(ExportJob::default());
        vm.reprice_all();
        assert_eq!(vm.loading.try_set(false), Some(false));
    }
}
