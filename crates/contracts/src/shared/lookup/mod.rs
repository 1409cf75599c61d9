//! Lookup (autocomplete) core shared by all searchable fields
//!
//! - `ranking`: priority-match filter used for both static and remote lists
//! - `combobox`: headless open/highlight/commit state machine
//! - `scheduler`: debounce tickets with a generation guard, search planning
//! - `config`: timing and result-cap settings
//! - `item`: what a suggestion row has to provide

pub mod combobox;
pub mod config;
pub mod item;
pub mod ranking;
pub mod scheduler;

pub use combobox::{ComboboxState, KeyOutcome, LookupKey, TextCase};
pub use config::LookupConfig;
pub use item::LookupItem;
pub use ranking::{priority_filter, priority_filter_str};
pub use scheduler::{exact_pick, SearchPlan, SearchScheduler, SearchTicket};
