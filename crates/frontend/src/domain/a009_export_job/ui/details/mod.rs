//! Export job details (MVVM)
//!
//! - model.rs: API functions (fetch, save)
//! - view_model.rs: form state, derived figures and commands
//! - page.rs: header, tab bar, tab routing
//! - tabs/: one component per tab

mod model;
mod page;
mod tabs;
mod view_model;

pub use page::ExportJobDetails;
pub use view_model::ExportJobDetailsVm;
