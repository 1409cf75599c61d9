//! Directory entry details (MVVM)
//!
//! - view_model.rs: form state, field errors, row and upload commands
//! - page.rs: header, tab bar, tab routing
//! - tabs/: general, banks, branches, KYC

mod page;
mod tabs;
mod view_model;

pub use page::DirectoryDetails;
pub use view_model::DirectoryDetailsVm;
