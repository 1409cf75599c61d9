//! Derived product and invoice figures.

use super::aggregate::{CalculationMethod, Invoice, Product, DEFAULT_PMV_PERCENTAGE};
use crate::domain::a004_currency_rate::aggregate::{ExchangeRateTable, BASE_CURRENCY};

/// Round half away from zero to two decimals.
pub fn round2(value: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    (value * 100.0).round() / 100.0
}

/// `quantity × unit_price / per`. A missing or non-positive `per` counts as 1.
pub fn line_amount(quantity: f64, unit_price: f64, per: f64) -> f64 {
    let per = if per.is_finite() && per > 0.0 { per } else { 1.0 };
    round2(quantity * unit_price / per)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PmvFigures {
    pub pmv_per_unit: f64,
    pub total_pmv: f64,
}

/// PMV of a product priced in `invoice_currency`.
///
/// Percentage method: the amount is taken to INR, scaled by the percentage
/// (110 when unset) and divided by the quantity (1 when unset), then taken
/// to the PMV currency. Manual method returns the stored figures.
pub fn calculate_pmv(product: &Product, invoice_currency: &str, rates: &ExchangeRateTable) -> PmvFigures {
    let pmv = &product.pmv_info;
    if pmv.calculation_method == CalculationMethod::Manual {
        return PmvFigures {
            pmv_per_unit: pmv.pmv_per_unit,
            total_pmv: pmv.total_pmv,
        };
    }

    let percentage = if pmv.percentage > 0.0 {
        pmv.percentage
    } else {
        DEFAULT_PMV_PERCENTAGE
    };
    let quantity = if product.quantity > 0.0 { product.quantity } else { 1.0 };

    let amount_inr = rates.to_inr(product.amount, invoice_currency);
    let mut total = amount_inr * percentage / 100.0;
    let mut per_unit = total / quantity;

    let pmv_currency = pmv.currency.trim();
    if !pmv_currency.is_empty() && !pmv_currency.eq_ignore_ascii_case(BASE_CURRENCY) {
        let rate = rates.rate_for(pmv_currency);
        if rate > 0.0 {
            total /= rate;
            per_unit /= rate;
        }
    }

    PmvFigures {
        pmv_per_unit: round2(per_unit),
        total_pmv: round2(total),
    }
}

/// Recompute the derived fields of one product after an edit.
pub fn recalculate_product(product: &Product, invoice_currency: &str, rates: &ExchangeRateTable) -> Product {
    let mut next = product.clone();
    if next.auto_recalc {
        next.amount = line_amount(next.quantity, next.unit_price, next.per);
    }
    if next.pmv_info.calculation_method == CalculationMethod::Percentage {
        let figures = calculate_pmv(&next, invoice_currency, rates);
        next.pmv_info.pmv_per_unit = figures.pmv_per_unit;
        next.pmv_info.total_pmv = figures.total_pmv;
    }
    next
}

/// Refresh PMV of every percentage-method product, after the invoice
/// currency changed or a rate table arrived.
pub fn recalculate_invoice_pmv(invoice: &Invoice, rates: &ExchangeRateTable) -> Invoice {
    let products = invoice
        .products
        .iter()
        .map(|p| {
            if p.pmv_info.calculation_method != CalculationMethod::Percentage {
                return p.clone();
            }
            let figures = calculate_pmv(p, &invoice.currency, rates);
            let mut next = p.clone();
            next.pmv_info.pmv_per_unit = figures.pmv_per_unit;
            next.pmv_info.total_pmv = figures.total_pmv;
            next
        })
        .collect();
    Invoice {
        products,
        ..invoice.clone()
    }
}

/// Reprice an invoice against a (possibly newer) rate table: the invoice
/// rate is refreshed first so FOB and PMV use the same figure.
pub fn reprice_invoice(invoice: &Invoice, rates: &ExchangeRateTable) -> Invoice {
    recalculate_invoice_pmv(&invoice.with_refreshed_rate(rates), rates)
}

/// Product FOB in INR with freight and insurance pro-rated by value.
///
/// ```text
/// C = A / B                 A product amount, B invoice product value
/// FOB = (A - C × (K + J)) × invoice rate
/// ```
/// K and J are freight and insurance in invoice currency. A charge without
/// its own rate is taken as already being in invoice currency.
pub fn product_fob_inr(product: &Product, invoice: &Invoice) -> f64 {
    let invoice_rate = if invoice.exchange_rate > 0.0 {
        invoice.exchange_rate
    } else {
        1.0
    };

    let in_invoice_currency = |amount: f64, row_rate: f64| {
        if amount == 0.0 {
            0.0
        } else if row_rate > 0.0 {
            amount * row_rate / invoice_rate
        } else {
            amount
        }
    };
    let charges = &invoice.freight_insurance_charges;
    let freight = in_invoice_currency(charges.freight.amount, charges.freight.exchange_rate);
    let insurance = in_invoice_currency(charges.insurance.amount, charges.insurance.exchange_rate);

    let a = product.amount;
    let b = if invoice.product_value != 0.0 {
        invoice.product_value
    } else {
        invoice.invoice_value
    };
    let ratio = if b > 0.0 { a / b } else { 0.0 };

    round2((a - ratio * (freight + insurance)) * invoice_rate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a004_currency_rate::aggregate::ExchangeRate;

    fn rates() -> ExchangeRateTable {
        ExchangeRateTable::new(vec![
            ExchangeRate {
                currency_code: "USD".into(),
                unit: 1.0,
                export_rate: 83.0,
                ..Default::default()
            },
            ExchangeRate {
                currency_code: "JPY".into(),
                unit: 100.0,
                export_rate: 56.0,
                ..Default::default()
            },
        ])
    }

    fn product(amount: f64, quantity: f64) -> Product {
        Product {
            amount,
            quantity,
            ..Product::default()
        }
    }

    #[test]
    fn test_line_amount() {
        assert_eq!(line_amount(10.0, 2.5, 1.0), 25.0);
        assert_eq!(line_amount(10.0, 2.5, 0.0), 25.0);
        assert_eq!(line_amount(10.0, 2.5, -4.0), 25.0);
        assert_eq!(line_amount(1000.0, 12.0, 100.0), 120.0);
        assert_eq!(line_amount(3.0, 0.1, 1.0), 0.3);
    }

    #[test]
    fn test_pmv_percentage_in_inr() {
        let figures = calculate_pmv(&product(100.0, 10.0), "USD", &rates());
        assert_eq!(figures.total_pmv, 9130.0);
        assert_eq!(figures.pmv_per_unit, 913.0);
    }

    #[test]
    fn test_pmv_zero_quantity_counts_as_one() {
        let figures = calculate_pmv(&product(100.0, 0.0), "USD", &rates());
        assert_eq!(figures.pmv_per_unit, 9130.0);
    }

    #[test]
    fn test_pmv_converted_to_pmv_currency() {
        let mut p = product(100.0, 1.0);
        p.pmv_info.currency = "USD".into();
        let figures = calculate_pmv(&p, "USD", &rates());
        assert_eq!(figures.total_pmv, 110.0);
    }

    #[test]
    fn test_pmv_unknown_currency_converts_one_to_one() {
        let figures = calculate_pmv(&product(100.0, 1.0), "XYZ", &rates());
        assert_eq!(figures.total_pmv, 110.0);
    }

    #[test]
    fn test_pmv_respects_rate_unit() {
        let figures = calculate_pmv(&product(1000.0, 1.0), "JPY", &rates());
        // 1000 JPY × 0.56 = 560 INR, × 110 %
        assert_eq!(figures.total_pmv, 616.0);
    }

    #[test]
    fn test_manual_pmv_is_kept() {
        let mut p = product(100.0, 1.0);
        p.pmv_info.calculation_method = CalculationMethod::Manual;
        p.pmv_info.total_pmv = 42.0;
        p.pmv_info.pmv_per_unit = 4.2;
        let figures = calculate_pmv(&p, "USD", &rates());
        assert_eq!(figures, PmvFigures { pmv_per_unit: 4.2, total_pmv: 42.0 });
    }

    #[test]
    fn test_recalculate_product_amount_and_pmv() {
        let p = Product {
            quantity: 10.0,
            unit_price: 10.0,
            per: 1.0,
            ..Product::default()
        };
        let next = recalculate_product(&p, "USD", &rates());
        assert_eq!(next.amount, 100.0);
        assert_eq!(next.pmv_info.total_pmv, 9130.0);
        assert_eq!(next.pmv_info.pmv_per_unit, 913.0);
    }

    #[test]
    fn test_recalculate_product_without_auto_amount() {
        let p = Product {
            quantity: 10.0,
            unit_price: 10.0,
            amount: 55.0,
            auto_recalc: false,
            ..Product::default()
        };
        assert_eq!(recalculate_product(&p, "INR", &rates()).amount, 55.0);
    }

    #[test]
    fn test_invoice_pmv_refresh_skips_manual() {
        let mut manual = product(100.0, 1.0);
        manual.pmv_info.calculation_method = CalculationMethod::Manual;
        let invoice = Invoice {
            currency: "USD".into(),
            products: vec![product(100.0, 1.0), manual],
            ..Invoice::default()
        };
        let next = recalculate_invoice_pmv(&invoice, &rates());
        assert_eq!(next.products[0].pmv_info.total_pmv, 9130.0);
        assert_eq!(next.products[1].pmv_info.total_pmv, 0.0);
    }

    #[test]
    fn test_product_fob_inr() {
        let mut invoice = Invoice {
            currency: "USD".into(),
            exchange_rate: 80.0,
            product_value: 1000.0,
            ..Invoice::default()
        };
        invoice.freight_insurance_charges.freight.amount = 100.0;
        invoice.freight_insurance_charges.insurance.amount = 8000.0;
        invoice.freight_insurance_charges.insurance.exchange_rate = 1.0;

        // freight taken as USD, insurance 8000 INR -> 100 USD
        let fob = product_fob_inr(&product(500.0, 1.0), &invoice);
        assert_eq!(fob, (500.0 - 0.5 * 200.0) * 80.0);
    }

    #[test]
    fn test_product_fob_falls_back_to_invoice_value() {
        let mut invoice = Invoice {
            invoice_value: 200.0,
            ..Invoice::default()
        };
        invoice.freight_insurance_charges.freight.amount = 20.0;
        assert_eq!(product_fob_inr(&product(100.0, 1.0), &invoice), 90.0);

        invoice.invoice_value = 0.0;
        assert_eq!(product_fob_inr(&product(100.0, 1.0), &invoice), 100.0);
    }

    #[test]
    fn test_currency_picked_before_rates_arrive() {
        let mut invoice = Invoice {
            products: vec![product(100.0, 1.0)],
            ..Invoice::default()
        }
        .with_currency("usd", &ExchangeRateTable::default());
        invoice.freight_insurance_charges.insurance.exchange_rate = 1.0;
        assert_eq!(invoice.exchange_rate, 0.0);

        let repriced = reprice_invoice(&invoice, &rates());
        assert_eq!(repriced.exchange_rate, 83.0);
        assert_eq!(repriced.freight_insurance_charges.freight.exchange_rate, 83.0);
        // a rate already set on a row is left alone
        assert_eq!(repriced.freight_insurance_charges.insurance.exchange_rate, 1.0);
        assert_eq!(repriced.products[0].pmv_info.total_pmv, 9130.0);
        assert_eq!(product_fob_inr(&repriced.products[0], &repriced), 8300.0);
    }

    #[test]
    fn test_reprice_keeps_rate_for_unknown_currency() {
        let invoice = Invoice {
            currency: "XYZ".into(),
            exchange_rate: 12.5,
            ..Invoice::default()
        };
        assert_eq!(reprice_invoice(&invoice, &rates()).exchange_rate, 12.5);
    }
}
