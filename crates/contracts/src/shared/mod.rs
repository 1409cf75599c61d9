pub mod api_response;
pub mod lenient;
pub mod lookup;
pub mod master_data;
pub mod rows;
pub mod upload;
