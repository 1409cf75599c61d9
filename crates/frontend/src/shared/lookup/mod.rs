//! Lookup (autocomplete) fields
//!
//! - `RemoteLookupField`: debounced search against a `LookupSource`
//! - `StaticLookupField`: filtering of an in-memory list
//!
//! Both drive the headless `ComboboxState` from `contracts` and share the
//! `SuggestionPanel` rendering.

mod panel;
mod remote_field;
mod source;
mod static_field;

pub use panel::{SuggestionPanel, SuggestionRow};
pub use remote_field::RemoteLookupField;
pub use source::{LookupSource, SearchFuture};
pub use static_field::{master_options, StaticLookupField};
