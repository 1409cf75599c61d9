//! Headless state machine behind every lookup field.
//!
//! The widget layer forwards DOM events here and acts on the returned
//! values: text to write through to the bound field, an option to commit,
//! or nothing. Keeping the transitions here lets them be tested without a
//! browser.

/// How typed text is normalised before it reaches the bound field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextCase {
    #[default]
    Upper,
    AsTyped,
}

impl TextCase {
    pub fn apply(self, text: &str) -> String {
        match self {
            TextCase::Upper => text.to_uppercase(),
            TextCase::AsTyped => text.to_string(),
        }
    }
}

/// Keys the combobox reacts to. Everything else maps to `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupKey {
    ArrowDown,
    ArrowUp,
    Enter,
    Escape,
    Tab,
    Other,
}

impl LookupKey {
    /// Map a DOM `KeyboardEvent.key` value.
    pub fn from_dom(key: &str) -> Self {
        match key {
            "ArrowDown" => LookupKey::ArrowDown,
            "ArrowUp" => LookupKey::ArrowUp,
            "Enter" => LookupKey::Enter,
            "Escape" => LookupKey::Escape,
            "Tab" => LookupKey::Tab,
            _ => LookupKey::Other,
        }
    }
}

/// Result of a key press.
#[derive(Debug, Clone, PartialEq)]
pub enum KeyOutcome<T> {
    /// Nothing for the caller to do beyond re-rendering.
    Handled,
    /// The caller should commit this option (and suppress the default
    /// action for Enter).
    Commit(T),
    /// Key not consumed by the combobox.
    Ignored,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ComboboxState<T> {
    query: String,
    is_open: bool,
    options: Vec<T>,
    active_index: Option<usize>,
    loading: bool,
    case: TextCase,
    /// Bumped on every focus; a blur timer only closes the panel when no
    /// focus happened since it started.
    focus_generation: u64,
}

impl<T: Clone> ComboboxState<T> {
    pub fn new(initial: &str, case: TextCase) -> Self {
        Self {
            query: initial.to_string(),
            is_open: false,
            options: Vec::new(),
            active_index: None,
            loading: false,
            case,
            focus_generation: 0,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn options(&self) -> &[T] {
        &self.options
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active_index
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    /// The panel is only rendered while open and there is something to show.
    pub fn panel_visible(&self) -> bool {
        self.is_open && (self.loading || !self.options.is_empty())
    }

    /// Resync with the bound field after an out-of-band change
    /// (programmatic reset, cascade from another field).
    /// Returns true if the visible query changed.
    pub fn sync_external(&mut self, value: &str) -> bool {
        if self.query == value {
            return false;
        }
        self.query = value.to_string();
        true
    }

    /// Returns the normalised value to write through to the bound field.
    pub fn on_text_change(&mut self, text: &str) -> String {
        let normalized = self.case.apply(text);
        self.query = normalized.clone();
        self.is_open = true;
        self.active_index = None;
        normalized
    }

    pub fn on_focus(&mut self) {
        self.focus_generation += 1;
        self.is_open = true;
        self.active_index = None;
    }

    /// Taken when the input loses focus and handed back to `on_blur_elapsed`.
    pub fn blur_token(&self) -> u64 {
        self.focus_generation
    }

    /// Called once the blur grace period has elapsed.
    ///
    /// Does nothing if the input was focused again in the meantime.
    /// Otherwise closes the panel and, when `trim` is set and the query
    /// carries surrounding whitespace, returns the trimmed value to write back.
    pub fn on_blur_elapsed(&mut self, token: u64, trim: bool) -> Option<String> {
        if token != self.focus_generation {
            return None;
        }
        self.close();
        if !trim {
            return None;
        }
        let trimmed = self.case.apply(self.query.trim());
        if trimmed == self.query {
            return None;
        }
        self.query = trimmed.clone();
        Some(trimmed)
    }

    pub fn on_key(&mut self, key: LookupKey) -> KeyOutcome<T> {
        match key {
            LookupKey::Tab => {
                if !self.is_open {
                    return KeyOutcome::Ignored;
                }
                if let Some(option) = self.highlighted() {
                    return KeyOutcome::Commit(option);
                }
                if self.options.len() == 1 {
                    return KeyOutcome::Commit(self.options[0].clone());
                }
                self.close();
                KeyOutcome::Handled
            }
            LookupKey::ArrowDown => {
                self.is_open = true;
                if self.options.is_empty() {
                    return KeyOutcome::Handled;
                }
                let last = self.options.len() - 1;
                self.active_index = Some(match self.active_index {
                    None => 0,
                    Some(i) => (i + 1).min(last),
                });
                KeyOutcome::Handled
            }
            LookupKey::ArrowUp => {
                if !self.is_open || self.options.is_empty() {
                    return KeyOutcome::Ignored;
                }
                self.active_index = Some(self.active_index.map_or(0, |i| i.saturating_sub(1)));
                KeyOutcome::Handled
            }
            LookupKey::Enter => match self.highlighted() {
                Some(option) if self.is_open => KeyOutcome::Commit(option),
                _ => KeyOutcome::Ignored,
            },
            LookupKey::Escape => {
                if !self.is_open {
                    return KeyOutcome::Ignored;
                }
                self.close();
                KeyOutcome::Handled
            }
            LookupKey::Other => KeyOutcome::Ignored,
        }
    }

    /// Pointer hover over an option row.
    pub fn highlight(&mut self, index: usize) {
        if index < self.options.len() {
            self.active_index = Some(index);
        }
    }

    /// Option at `index` of the current suggestion list, for pointer selection.
    pub fn option_at(&self, index: usize) -> Option<T> {
        self.options.get(index).cloned()
    }

    /// Apply the canonical display string of a chosen option.
    /// Returns the value to write to the bound field.
    pub fn commit(&mut self, display: String) -> String {
        self.query = display.clone();
        self.close();
        display
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// Replace the suggestion list. The highlight is dropped because its
    /// index would point into the old list.
    pub fn set_options(&mut self, options: Vec<T>) {
        self.options = options;
        self.active_index = None;
        self.loading = false;
    }

    /// A remote search failed: show nothing.
    pub fn fail(&mut self) {
        self.set_options(Vec::new());
    }

    pub fn close(&mut self) {
        self.is_open = false;
        self.active_index = None;
    }

    fn highlighted(&self) -> Option<T> {
        self.active_index.and_then(|i| self.options.get(i).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_with(options: &[&str]) -> ComboboxState<String> {
        let mut state = ComboboxState::new("", TextCase::Upper);
        state.on_focus();
        state.set_options(options.iter().map(|s| s.to_string()).collect());
        state
    }

    #[test]
    fn test_text_change_uppercases_and_opens() {
        let mut state: ComboboxState<String> = ComboboxState::new("", TextCase::Upper);
        let written = state.on_text_change("mundra");
        assert_eq!(written, "MUNDRA");
        assert_eq!(state.query(), "MUNDRA");
        assert!(state.is_open());
    }

    #[test]
    fn test_as_typed_keeps_case() {
        let mut state: ComboboxState<String> = ComboboxState::new("", TextCase::AsTyped);
        assert_eq!(state.on_text_change("Acme Ltd"), "Acme Ltd");
    }

    #[test]
    fn test_external_sync() {
        let mut state: ComboboxState<String> = ComboboxState::new("INDIA", TextCase::Upper);
        assert!(!state.sync_external("INDIA"));
        assert!(state.sync_external(""));
        assert_eq!(state.query(), "");
    }

    #[test]
    fn test_arrow_navigation_is_clamped() {
        let mut state = open_with(&["A", "B", "C"]);
        assert_eq!(state.active_index(), None);
        state.on_key(LookupKey::ArrowDown);
        assert_eq!(state.active_index(), Some(0));
        state.on_key(LookupKey::ArrowDown);
        state.on_key(LookupKey::ArrowDown);
        state.on_key(LookupKey::ArrowDown);
        assert_eq!(state.active_index(), Some(2));
        state.on_key(LookupKey::ArrowUp);
        state.on_key(LookupKey::ArrowUp);
        state.on_key(LookupKey::ArrowUp);
        assert_eq!(state.active_index(), Some(0));
    }

    #[test]
    fn test_enter_commits_only_with_highlight() {
        let mut state = open_with(&["KGS", "KG"]);
        assert_eq!(state.on_key(LookupKey::Enter), KeyOutcome::Ignored);
        state.on_key(LookupKey::ArrowDown);
        state.on_key(LookupKey::ArrowDown);
        assert_eq!(state.on_key(LookupKey::Enter), KeyOutcome::Commit("KG".to_string()));
    }

    #[test]
    fn test_escape_closes_without_commit() {
        let mut state = open_with(&["KGS"]);
        state.on_key(LookupKey::ArrowDown);
        assert_eq!(state.on_key(LookupKey::Escape), KeyOutcome::Handled);
        assert!(!state.is_open());
        assert_eq!(state.query(), "");
    }

    #[test]
    fn test_tab_commits_sole_option() {
        let mut state = open_with(&["INDIA"]);
        assert_eq!(state.on_key(LookupKey::Tab), KeyOutcome::Commit("INDIA".to_string()));
    }

    #[test]
    fn test_tab_with_many_options_just_closes() {
        let mut state = open_with(&["INDIA", "INDONESIA"]);
        assert_eq!(state.on_key(LookupKey::Tab), KeyOutcome::Handled);
        assert!(!state.is_open());
    }

    #[test]
    fn test_tab_prefers_highlight() {
        let mut state = open_with(&["INDIA", "INDONESIA"]);
        state.highlight(1);
        assert_eq!(
            state.on_key(LookupKey::Tab),
            KeyOutcome::Commit("INDONESIA".to_string())
        );
    }

    #[test]
    fn test_commit_closes_and_sets_query() {
        let mut state = open_with(&["IN"]);
        state.on_key(LookupKey::ArrowDown);
        let written = state.commit("IN - INDIA".to_string());
        assert_eq!(written, "IN - INDIA");
        assert_eq!(state.query(), "IN - INDIA");
        assert!(!state.is_open());
        assert_eq!(state.active_index(), None);
    }

    #[test]
    fn test_blur_trims() {
        let mut state: ComboboxState<String> = ComboboxState::new("", TextCase::Upper);
        state.on_text_change("  chennai ");
        let token = state.blur_token();
        assert_eq!(state.on_blur_elapsed(token, true), Some("CHENNAI".to_string()));
        assert!(!state.is_open());
        assert_eq!(state.on_blur_elapsed(token, true), None);
    }

    #[test]
    fn test_refocus_during_grace_keeps_panel_open() {
        let mut state = open_with(&["CHENNAI", "COCHIN"]);
        let token = state.blur_token();
        state.on_focus();
        assert_eq!(state.on_blur_elapsed(token, false), None);
        assert!(state.is_open());
        assert_eq!(state.options().len(), 2);

        // a later blur without refocus still closes
        let token = state.blur_token();
        state.on_blur_elapsed(token, false);
        assert!(!state.is_open());
    }

    #[test]
    fn test_failure_empties_options() {
        let mut state = open_with(&["A"]);
        state.set_loading(true);
        state.fail();
        assert!(state.options().is_empty());
        assert!(!state.loading());
        assert!(!state.panel_visible());
    }

    #[test]
    fn test_new_options_drop_highlight() {
        let mut state = open_with(&["A", "B"]);
        state.highlight(1);
        state.set_options(vec!["C".to_string()]);
        assert_eq!(state.active_index(), None);
    }
}
