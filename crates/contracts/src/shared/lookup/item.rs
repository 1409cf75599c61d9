/// A row that can be offered by a lookup field.
pub trait LookupItem: Clone {
    /// Text the ranker matches the query against.
    fn search_label(&self) -> String;

    /// Canonical value written to the bound field when the row is chosen.
    fn display_value(&self) -> String;

    /// Secondary text rendered next to the option.
    fn hint(&self) -> Option<String> {
        None
    }
}

impl LookupItem for String {
    fn search_label(&self) -> String {
        self.clone()
    }

    fn display_value(&self) -> String {
        self.to_uppercase()
    }
}

impl LookupItem for &'static str {
    fn search_label(&self) -> String {
        self.to_string()
    }

    fn display_value(&self) -> String {
        self.to_uppercase()
    }
}
