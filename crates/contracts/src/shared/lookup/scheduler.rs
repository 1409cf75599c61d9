//! Debounce bookkeeping for remote lookups.
//!
//! Every keystroke takes a new ticket and bumps the generation. When a
//! ticket's timer elapses the caller asks `take_due`; only the newest ticket
//! gets its query back, so a superseded query is never sent. After the
//! response arrives the caller checks `is_current` again before applying it.
//!
//! `SearchPlan` decides what a trigger sends and what the response is ranked
//! by; `exact_pick` finds the row a pasted code refers to.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchTicket {
    generation: u64,
}

#[derive(Debug, Clone, Default)]
pub struct SearchScheduler {
    generation: u64,
    pending: Option<String>,
    disposed: bool,
}

impl SearchScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new search, superseding any earlier ticket.
    pub fn schedule(&mut self, query: impl Into<String>) -> SearchTicket {
        self.generation += 1;
        self.pending = Some(query.into());
        SearchTicket {
            generation: self.generation,
        }
    }

    /// Called when the ticket's quiet period has elapsed.
    /// Returns the query to send, at most once, and only for the newest ticket.
    pub fn take_due(&mut self, ticket: SearchTicket) -> Option<String> {
        if !self.is_current(ticket) {
            return None;
        }
        self.pending.take()
    }

    /// Whether a response for `ticket` may still be applied.
    pub fn is_current(&self, ticket: SearchTicket) -> bool {
        !self.disposed && ticket.generation == self.generation
    }

    /// Drop whatever is pending or in flight.
    pub fn cancel(&mut self) {
        self.generation += 1;
        self.pending = None;
    }

    /// The owning widget is gone; nothing may be applied any more.
    pub fn dispose(&mut self) {
        self.cancel();
        self.disposed = true;
    }
}

/// What one lookup trigger (keystroke or focus) does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchPlan {
    /// Too short to search: send nothing and empty the list.
    Clear,
    /// Send `search` and rank the rows that come back by `rank_by`.
    Send { search: String, rank_by: String },
}

impl SearchPlan {
    /// Plan for typed text. Below `min_len` trimmed characters nothing is sent.
    pub fn for_input(typed: &str, min_len: usize) -> Self {
        let query = typed.trim();
        if query.chars().count() < min_len {
            return SearchPlan::Clear;
        }
        SearchPlan::Send {
            search: query.to_string(),
            rank_by: query.to_string(),
        }
    }

    /// Plan for focus on a field that lists its whole directory: fetch
    /// unfiltered, then rank by what the field already holds.
    pub fn for_focus(current: &str) -> Self {
        SearchPlan::Send {
            search: String::new(),
            rank_by: current.trim().to_string(),
        }
    }
}

/// The row whose code equals the typed query, if any.
/// An empty query never matches.
pub fn exact_pick<T, F>(items: &[T], query: &str, code_of: F) -> Option<T>
where
    T: Clone,
    F: Fn(&T) -> &str,
{
    let query = query.trim();
    if query.is_empty() {
        return None;
    }
    items.iter().find(|item| code_of(item) == query).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_superseded_query_never_fires() {
        let mut scheduler = SearchScheduler::new();
        let first = scheduler.schedule("IN");
        let second = scheduler.schedule("IND");

        // the "IN" timer elapses first but is stale
        assert_eq!(scheduler.take_due(first), None);
        assert_eq!(scheduler.take_due(second), Some("IND".to_string()));
        // a ticket fires once
        assert_eq!(scheduler.take_due(second), None);
    }

    #[test]
    fn test_in_flight_response_discarded_after_new_keystroke() {
        let mut scheduler = SearchScheduler::new();
        let first = scheduler.schedule("CHE");
        assert_eq!(scheduler.take_due(first), Some("CHE".to_string()));
        let _second = scheduler.schedule("CHEN");
        assert!(!scheduler.is_current(first));
    }

    #[test]
    fn test_cancel_and_dispose() {
        let mut scheduler = SearchScheduler::new();
        let ticket = scheduler.schedule("MUN");
        scheduler.cancel();
        assert_eq!(scheduler.take_due(ticket), None);

        let ticket = scheduler.schedule("MUN");
        scheduler.dispose();
        assert!(!scheduler.is_current(ticket));
        let late = scheduler.schedule("MUND");
        assert_eq!(scheduler.take_due(late), None);
    }

    #[test]
    fn test_short_tariff_query_is_not_sent() {
        assert_eq!(SearchPlan::for_input(" 5 ", 2), SearchPlan::Clear);
        assert_eq!(SearchPlan::for_input("", 2), SearchPlan::Clear);
        assert_eq!(
            SearchPlan::for_input(" 52 ", 2),
            SearchPlan::Send {
                search: "52".into(),
                rank_by: "52".into()
            }
        );
        // sources without a minimum search from the first character
        assert!(matches!(SearchPlan::for_input("", 0), SearchPlan::Send { .. }));
    }

    #[test]
    fn test_focus_fetches_everything_ranked_by_current_value() {
        assert_eq!(
            SearchPlan::for_focus("UNITED "),
            SearchPlan::Send {
                search: String::new(),
                rank_by: "UNITED".into()
            }
        );
    }

    #[test]
    fn test_exact_pick() {
        let rows = vec![("5201", "cotton"), ("52010011", "deshi cotton")];
        assert_eq!(exact_pick(&rows, " 52010011 ", |r| r.0), Some(rows[1]));
        assert_eq!(exact_pick(&rows, "520100", |r| r.0), None);
        assert_eq!(exact_pick(&rows, "", |r| r.0), None);
    }
}
