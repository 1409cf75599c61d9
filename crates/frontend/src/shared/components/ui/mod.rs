pub mod checkbox;
pub mod input;
pub mod select;

pub use checkbox::Checkbox;
pub use input::{NumberInput, ReadonlyNumber, TextInput};
pub use select::Select;
