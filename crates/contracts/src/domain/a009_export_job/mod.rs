pub mod aggregate;
pub mod calculations;
