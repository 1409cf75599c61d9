//! Tab components of the export job form

mod depb;
mod invoice_main;
mod product_general;
mod shipment_main;

pub use depb::DepbTab;
pub use invoice_main::InvoiceMainTab;
pub use product_general::ProductGeneralTab;
pub use shipment_main::ShipmentMainTab;
