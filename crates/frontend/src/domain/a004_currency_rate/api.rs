use crate::shared::api_utils::{get_value, ApiError};
use chrono::NaiveDate;
use contracts::domain::a004_currency_rate::aggregate::{
    rate_date_segment, rates_from_response, ExchangeRateTable,
};

/// Export rates in force on `date`. An unknown date gives an empty table.
pub async fn fetch_rates_for(api_base: &str, date: NaiveDate) -> Result<ExchangeRateTable, ApiError> {
    let url = format!(
        "{}/currency-rates/by-date/{}",
        api_base,
        rate_date_segment(date)
    );
    let body = get_value(&url).await?;
    Ok(ExchangeRateTable::new(rates_from_response(body)))
}
