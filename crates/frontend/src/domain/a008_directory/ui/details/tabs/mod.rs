pub mod banks;
pub mod branches;
pub mod general;
pub mod kyc;

pub use banks::BanksTab;
pub use branches::BranchesTab;
pub use general::GeneralTab;
pub use kyc::KycTab;
