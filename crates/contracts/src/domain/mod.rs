pub mod a001_country;
pub mod a002_port;
pub mod a003_district;
pub mod a004_currency_rate;
pub mod a005_tariff_item;
pub mod a006_carrier;
pub mod a007_manufacturer;
pub mod a008_directory;
pub mod a009_export_job;
