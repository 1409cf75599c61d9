use crate::domain::a004_currency_rate::aggregate::ExchangeRateTable;
use crate::domain::a007_manufacturer::aggregate::Manufacturer;
use crate::shared::lenient;
use crate::shared::rows;
use serde::{Deserialize, Serialize};

// ============================================================================
// Shipment
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Shipment {
    pub transport_mode: String,
    pub port_of_loading: String,
    pub port_of_discharge: String,
    pub discharge_country: String,
    pub destination_country: String,
    pub destination_country_code: String,
    pub gateway_port: String,
    pub state_of_origin: String,
    pub cfs: String,
    pub nature_of_cargo: String,
    pub shipping_line: String,
    pub airline: String,
}

// ============================================================================
// Invoice
// ============================================================================

/// A freight/insurance/deduction line of an invoice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Charge {
    pub currency: String,
    #[serde(deserialize_with = "lenient::number")]
    pub amount: f64,
    /// INR per unit of `currency`; 0 when not known.
    #[serde(deserialize_with = "lenient::number")]
    pub exchange_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct FreightInsuranceCharges {
    pub freight: Charge,
    pub insurance: Charge,
    pub discount: Charge,
    pub other_deduction: Charge,
    pub commission: Charge,
    pub fob_value: Charge,
}

impl FreightInsuranceCharges {
    pub const LABELS: [&'static str; 6] = [
        "Freight",
        "Insurance",
        "Discount",
        "Other deduction",
        "Commission",
        "FOB value",
    ];

    /// Rows in `LABELS` order.
    pub fn rows(&self) -> [&Charge; 6] {
        [
            &self.freight,
            &self.insurance,
            &self.discount,
            &self.other_deduction,
            &self.commission,
            &self.fob_value,
        ]
    }

    pub fn rows_mut(&mut self) -> [&mut Charge; 6] {
        [
            &mut self.freight,
            &mut self.insurance,
            &mut self.discount,
            &mut self.other_deduction,
            &mut self.commission,
            &mut self.fob_value,
        ]
    }
}

/// What the invoice unit price covers, derived from the terms of invoice.
pub fn price_includes_for_terms(terms: &str) -> &'static str {
    match terms {
        "C&I" => "Insurance",
        "C&F" => "Freight",
        "CIF" => "Both",
        _ => "None",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Invoice {
    pub invoice_number: String,
    pub invoice_date: String,
    pub terms_of_invoice: String,
    pub price_includes: String,
    /// "CIF" or "FOB"; label of the product value figure.
    pub product_value_pill: String,
    pub currency: String,
    #[serde(deserialize_with = "lenient::number")]
    pub exchange_rate: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub invoice_value: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub product_value: f64,
    pub freight_insurance_charges: FreightInsuranceCharges,
    pub products: Vec<Product>,
}

impl Invoice {
    /// New terms of invoice together with the fields derived from them.
    pub fn with_terms(&self, terms: &str) -> Self {
        let mut next = self.clone();
        next.terms_of_invoice = terms.to_string();
        next.price_includes = price_includes_for_terms(terms).to_string();
        next.product_value_pill = if terms == "CIF" { "CIF" } else { "FOB" }.to_string();
        next
    }

    /// New invoice currency. The rate is looked up in `rates` and the code
    /// and rate are copied to every charge row; a row keeps its old rate
    /// when the currency is not in the table.
    pub fn with_currency(&self, code: &str, rates: &ExchangeRateTable) -> Self {
        let code = code.trim().to_uppercase();
        let known = rates.find(&code).map(|r| r.per_unit());

        let mut next = self.clone();
        next.currency = code.clone();
        if let Some(rate) = known {
            next.exchange_rate = rate;
        }
        for row in next.freight_insurance_charges.rows_mut() {
            row.currency = code.clone();
            if let Some(rate) = known {
                row.exchange_rate = rate;
            }
        }
        next
    }

    /// Fill in the rate of the current currency from `rates`. Charge rows
    /// in the same currency that still have no rate get it too.
    pub fn with_refreshed_rate(&self, rates: &ExchangeRateTable) -> Self {
        let Some(rate) = rates.find(&self.currency).map(|r| r.per_unit()) else {
            return self.clone();
        };
        let mut next = self.clone();
        next.exchange_rate = rate;
        for row in next.freight_insurance_charges.rows_mut() {
            if row.exchange_rate == 0.0 && row.currency.eq_ignore_ascii_case(&self.currency) {
                row.exchange_rate = rate;
            }
        }
        next
    }

    pub fn with_product<F>(&self, index: usize, f: F) -> Self
    where
        F: FnOnce(&mut Product),
    {
        Self {
            products: rows::update_row(&self.products, index, f),
            ..self.clone()
        }
    }

    /// Append a blank product numbered after the last one.
    pub fn with_new_product(&self) -> Self {
        let product = Product {
            serial_number: self.products.len() as u32 + 1,
            ..Product::default()
        };
        Self {
            products: rows::push_row(&self.products, product),
            ..self.clone()
        }
    }

    /// Remove a product and renumber the rest.
    pub fn without_product(&self, index: usize) -> Self {
        let mut products = rows::remove_row(&self.products, index, 0);
        for (i, p) in products.iter_mut().enumerate() {
            p.serial_number = i as u32 + 1;
        }
        Self {
            products,
            ..self.clone()
        }
    }
}

// ============================================================================
// Product
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CalculationMethod {
    #[default]
    Percentage,
    Manual,
}

pub const DEFAULT_PMV_PERCENTAGE: f64 = 110.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PmvInfo {
    pub currency: String,
    pub calculation_method: CalculationMethod,
    #[serde(deserialize_with = "lenient::number")]
    pub percentage: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub pmv_per_unit: f64,
    #[serde(rename = "totalPMV", deserialize_with = "lenient::number")]
    pub total_pmv: f64,
}

impl Default for PmvInfo {
    fn default() -> Self {
        Self {
            currency: "INR".to_string(),
            calculation_method: CalculationMethod::Percentage,
            percentage: DEFAULT_PMV_PERCENTAGE,
            pmv_per_unit: 0.0,
            total_pmv: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RodtepInfo {
    pub claim: String,
    #[serde(deserialize_with = "lenient::number")]
    pub quantity: f64,
    pub unit: String,
    #[serde(deserialize_with = "lenient::number")]
    pub rate_percent: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub cap_value: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub cap_value_per_units: f64,
    pub cap_unit: String,
    #[serde(rename = "amountINR", deserialize_with = "lenient::number")]
    pub amount_inr: f64,
}

impl Default for RodtepInfo {
    fn default() -> Self {
        Self {
            claim: "Yes".to_string(),
            quantity: 0.0,
            unit: String::new(),
            rate_percent: 0.0,
            cap_value: 0.0,
            cap_value_per_units: 0.0,
            cap_unit: String::new(),
            amount_inr: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Product {
    pub serial_number: u32,
    pub description: String,
    pub ritc: String,
    #[serde(deserialize_with = "lenient::number")]
    pub quantity: f64,
    pub qty_unit: String,
    #[serde(deserialize_with = "lenient::number")]
    pub unit_price: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub per: f64,
    pub per_unit: String,
    #[serde(deserialize_with = "lenient::number")]
    pub amount: f64,
    /// Recompute `amount` whenever quantity, price or per change.
    pub auto_recalc: bool,
    pub origin_district: String,
    pub origin_state: String,
    pub manufacturer: Manufacturer,
    pub pmv_info: PmvInfo,
    pub rodtep_info: RodtepInfo,
    pub depb_details: DepbDetails,
}

impl Default for Product {
    fn default() -> Self {
        Self {
            serial_number: 1,
            description: String::new(),
            ritc: String::new(),
            quantity: 0.0,
            qty_unit: String::new(),
            unit_price: 0.0,
            per: 1.0,
            per_unit: String::new(),
            amount: 0.0,
            auto_recalc: true,
            origin_district: String::new(),
            origin_state: String::new(),
            manufacturer: Manufacturer::default(),
            pmv_info: PmvInfo::default(),
            rodtep_info: RodtepInfo::default(),
            depb_details: DepbDetails::default(),
        }
    }
}

// ============================================================================
// DEPB details
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct DepbItem {
    #[serde(deserialize_with = "lenient::text")]
    pub product_group: String,
    #[serde(deserialize_with = "lenient::text")]
    pub rate_list_sr_no: String,
    #[serde(deserialize_with = "lenient::text")]
    pub std_io_norms: String,
    #[serde(deserialize_with = "lenient::number")]
    pub depb_rate: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub depb_qty: f64,
    pub unit: String,
    #[serde(deserialize_with = "lenient::text")]
    pub cap_value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct DepbParentItem {
    #[serde(deserialize_with = "lenient::text")]
    pub product_group: String,
    #[serde(deserialize_with = "lenient::text")]
    pub rate_list_sr_no: String,
    #[serde(deserialize_with = "lenient::number")]
    pub depb_rate: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub depb_qty: f64,
    pub unit: String,
    #[serde(deserialize_with = "lenient::number")]
    pub percent_qty: f64,
    #[serde(deserialize_with = "lenient::text")]
    pub cap_value: String,
}

/// DEPB lists always hold at least one row.
pub const DEPB_MIN_ROWS: usize = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "DepbDetailsWire")]
pub struct DepbDetails {
    pub is_depb_item: bool,
    pub depb_items: Vec<DepbItem>,
    pub is_depb_parent: bool,
    pub depb_parent_items: Vec<DepbParentItem>,
}

impl Default for DepbDetails {
    fn default() -> Self {
        Self {
            is_depb_item: false,
            depb_items: vec![DepbItem::default()],
            is_depb_parent: false,
            depb_parent_items: vec![DepbParentItem::default()],
        }
    }
}

/// Stored shape of `depbDetails`. Older records kept a single item flat on
/// the object instead of in `depbItems`.
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
struct DepbDetailsWire {
    is_depb_item: bool,
    depb_items: Option<Vec<DepbItem>>,
    is_depb_parent: bool,
    depb_parent_items: Option<Vec<DepbParentItem>>,

    product_group: Option<serde_json::Value>,
    #[serde(deserialize_with = "lenient::text")]
    rate_list_sr_no: String,
    #[serde(deserialize_with = "lenient::text")]
    std_io_norms: String,
    #[serde(deserialize_with = "lenient::number")]
    depb_rate: f64,
    #[serde(deserialize_with = "lenient::number")]
    depb_qty: f64,
    #[serde(deserialize_with = "lenient::text")]
    unit: String,
    #[serde(deserialize_with = "lenient::text")]
    cap_value: String,
}

impl From<DepbDetailsWire> for DepbDetails {
    fn from(wire: DepbDetailsWire) -> Self {
        let depb_items = match (wire.depb_items, wire.product_group) {
            (Some(items), _) if !items.is_empty() => items,
            (None, Some(group)) => vec![DepbItem {
                product_group: match group {
                    serde_json::Value::String(s) => s,
                    serde_json::Value::Null => String::new(),
                    other => other.to_string(),
                },
                rate_list_sr_no: wire.rate_list_sr_no,
                std_io_norms: wire.std_io_norms,
                depb_rate: wire.depb_rate,
                depb_qty: wire.depb_qty,
                unit: wire.unit,
                cap_value: wire.cap_value,
            }],
            _ => vec![DepbItem::default()],
        };
        let depb_parent_items = match wire.depb_parent_items {
            Some(items) if !items.is_empty() => items,
            _ => vec![DepbParentItem::default()],
        };
        Self {
            is_depb_item: wire.is_depb_item,
            depb_items,
            is_depb_parent: wire.is_depb_parent,
            depb_parent_items,
        }
    }
}

impl DepbDetails {
    pub fn with_item<F: FnOnce(&mut DepbItem)>(&self, index: usize, f: F) -> Self {
        Self {
            depb_items: rows::update_row(&self.depb_items, index, f),
            ..self.clone()
        }
    }

    pub fn with_new_item(&self) -> Self {
        Self {
            depb_items: rows::push_row(&self.depb_items, DepbItem::default()),
            ..self.clone()
        }
    }

    pub fn with_copied_item(&self, index: usize) -> Self {
        Self {
            depb_items: rows::duplicate_row(&self.depb_items, index),
            ..self.clone()
        }
    }

    pub fn without_item(&self, index: usize) -> Self {
        Self {
            depb_items: rows::remove_row(&self.depb_items, index, DEPB_MIN_ROWS),
            ..self.clone()
        }
    }

    pub fn with_parent_item<F: FnOnce(&mut DepbParentItem)>(&self, index: usize, f: F) -> Self {
        Self {
            depb_parent_items: rows::update_row(&self.depb_parent_items, index, f),
            ..self.clone()
        }
    }

    pub fn with_new_parent_item(&self) -> Self {
        Self {
            depb_parent_items: rows::push_row(&self.depb_parent_items, DepbParentItem::default()),
            ..self.clone()
        }
    }

    pub fn with_copied_parent_item(&self, index: usize) -> Self {
        Self {
            depb_parent_items: rows::duplicate_row(&self.depb_parent_items, index),
            ..self.clone()
        }
    }

    pub fn without_parent_item(&self, index: usize) -> Self {
        Self {
            depb_parent_items: rows::remove_row(&self.depb_parent_items, index, DEPB_MIN_ROWS),
            ..self.clone()
        }
    }
}

// ============================================================================
// Aggregate
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExportJob {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "job_no", alias = "jobNo")]
    pub job_no: String,
    pub exporter: String,
    pub consignee: String,
    pub shipment: Shipment,
    pub invoices: Vec<Invoice>,
}

impl Default for ExportJob {
    fn default() -> Self {
        Self {
            id: None,
            job_no: String::new(),
            exporter: String::new(),
            consignee: String::new(),
            shipment: Shipment::default(),
            invoices: vec![Invoice {
                products: vec![Product::default()],
                ..Invoice::default()
            }],
        }
    }
}

impl ExportJob {
    pub fn with_shipment<F: FnOnce(&mut Shipment)>(&self, f: F) -> Self {
        let mut next = self.clone();
        f(&mut next.shipment);
        next
    }

    /// Replace invoice `index` with `f(invoice)`. Out-of-range is a no-op.
    pub fn with_invoice<F>(&self, index: usize, f: F) -> Self
    where
        F: FnOnce(&Invoice) -> Invoice,
    {
        let mut next = self.clone();
        if let Some(slot) = next.invoices.get_mut(index) {
            let updated = f(slot);
            *slot = updated;
        }
        next
    }

    pub fn with_product<F>(&self, invoice: usize, product: usize, f: F) -> Self
    where
        F: FnOnce(&mut Product),
    {
        self.with_invoice(invoice, |inv| inv.with_product(product, f))
    }

    pub fn product(&self, invoice: usize, product: usize) -> Option<&Product> {
        self.invoices.get(invoice)?.products.get(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a004_currency_rate::aggregate::ExchangeRate;
    use serde_json::json;

    fn rates() -> ExchangeRateTable {
        ExchangeRateTable::new(vec![ExchangeRate {
            currency_code: "USD".into(),
            unit: 1.0,
            export_rate: 83.0,
            ..Default::default()
        }])
    }

    #[test]
    fn test_terms_set_price_includes_and_pill() {
        let inv = Invoice::default().with_terms("CIF");
        assert_eq!(inv.price_includes, "Both");
        assert_eq!(inv.product_value_pill, "CIF");

        let inv = inv.with_terms("C&I");
        assert_eq!(inv.price_includes, "Insurance");
        assert_eq!(inv.product_value_pill, "FOB");

        assert_eq!(Invoice::default().with_terms("C&F").price_includes, "Freight");
        assert_eq!(Invoice::default().with_terms("FOB").price_includes, "None");
    }

    #[test]
    fn test_currency_change_propagates_to_charges() {
        let mut inv = Invoice::default();
        inv.freight_insurance_charges.freight.amount = 50.0;
        let next = inv.with_currency("usd", &rates());
        assert_eq!(next.currency, "USD");
        assert_eq!(next.exchange_rate, 83.0);
        assert_eq!(next.freight_insurance_charges.freight.currency, "USD");
        assert_eq!(next.freight_insurance_charges.freight.exchange_rate, 83.0);
        assert_eq!(next.freight_insurance_charges.freight.amount, 50.0);
        assert_eq!(next.freight_insurance_charges.fob_value.currency, "USD");
        assert_eq!(inv.currency, "");
    }

    #[test]
    fn test_unknown_currency_keeps_row_rates() {
        let mut inv = Invoice::default();
        inv.freight_insurance_charges.insurance.exchange_rate = 90.0;
        let next = inv.with_currency("EUR", &rates());
        assert_eq!(next.freight_insurance_charges.insurance.exchange_rate, 90.0);
        assert_eq!(next.freight_insurance_charges.insurance.currency, "EUR");
    }

    #[test]
    fn test_with_product_leaves_siblings_untouched() {
        let job = ExportJob::default().with_invoice(0, Invoice::with_new_product);
        let next = job.with_product(0, 1, |p| p.description = "COTTON YARN".into());
        assert_eq!(next.invoices[0].products[1].description, "COTTON YARN");
        assert_eq!(next.invoices[0].products[0].description, "");
        assert_eq!(job.invoices[0].products[1].description, "");
        assert_eq!(next.invoices[0].products[1].serial_number, 2);
    }

    #[test]
    fn test_remove_product_renumbers() {
        let inv = Invoice::default()
            .with_new_product()
            .with_new_product()
            .with_new_product();
        let inv = inv.without_product(0);
        let serials: Vec<u32> = inv.products.iter().map(|p| p.serial_number).collect();
        assert_eq!(serials, vec![1, 2]);
    }

    #[test]
    fn test_legacy_flat_depb_is_migrated() {
        let details: DepbDetails = serde_json::from_value(json!({
            "isDepbItem": true,
            "productGroup": "Chemicals",
            "rateListSrNo": 12,
            "depbRate": "4.5",
            "unit": "KGS"
        }))
        .unwrap();
        assert!(details.is_depb_item);
        assert_eq!(details.depb_items.len(), 1);
        assert_eq!(details.depb_items[0].product_group, "Chemicals");
        assert_eq!(details.depb_items[0].rate_list_sr_no, "12");
        assert_eq!(details.depb_items[0].depb_rate, 4.5);
        assert_eq!(details.depb_parent_items.len(), 1);
    }

    #[test]
    fn test_missing_depb_lists_get_one_default_row() {
        let details: DepbDetails = serde_json::from_value(json!({})).unwrap();
        assert_eq!(details, DepbDetails::default());

        let product: Product = serde_json::from_value(json!({"ritc": "52051110"})).unwrap();
        assert_eq!(product.depb_details.depb_items.len(), 1);
        assert!(product.auto_recalc);
        assert_eq!(product.pmv_info.percentage, 110.0);
    }

    #[test]
    fn test_depb_items_serialize_as_list() {
        let value = serde_json::to_value(DepbDetails::default()).unwrap();
        assert!(value["depbItems"].is_array());
        assert!(value.get("productGroup").is_none());
    }

    #[test]
    fn test_depb_row_editing() {
        let details = DepbDetails::default();
        assert_eq!(details.without_item(0).depb_items.len(), 1);

        let details = details
            .with_item(0, |i| i.product_group = "Textiles".into())
            .with_copied_item(0)
            .with_new_item();
        assert_eq!(details.depb_items.len(), 3);
        assert_eq!(details.depb_items[1].product_group, "Textiles");
        assert_eq!(details.depb_items[2].product_group, "");

        let details = details.without_item(0);
        assert_eq!(details.depb_items.len(), 2);

        let details = details
            .with_parent_item(0, |p| p.percent_qty = 40.0)
            .with_copied_parent_item(0);
        assert_eq!(details.depb_parent_items[1].percent_qty, 40.0);
        assert_eq!(details.with_new_parent_item().depb_parent_items.len(), 3);
        assert_eq!(details.without_parent_item(5).depb_parent_items.len(), 2);
    }

    #[test]
    fn test_pmv_fields_from_strings() {
        let pmv: PmvInfo = serde_json::from_value(json!({
            "currency": "USD",
            "calculationMethod": "manual",
            "pmvPerUnit": "12.50",
            "totalPMV": "125.00"
        }))
        .unwrap();
        assert_eq!(pmv.calculation_method, CalculationMethod::Manual);
        assert_eq!(pmv.pmv_per_unit, 12.5);
        assert_eq!(pmv.total_pmv, 125.0);
        assert_eq!(pmv.percentage, DEFAULT_PMV_PERCENTAGE);
    }
}
