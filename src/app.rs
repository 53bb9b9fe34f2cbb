use crate::api::MealDatabase;
use crate::error::ApiError;
use crate::model::{MealDetail, MealSummary};
use log::{debug, warn};

/// Fixed user-facing messages, one per failure class.
pub mod messages {
    pub const EMPTY_QUERY: &str = "Please enter an ingredient, like 'chicken' or 'egg'.";
    pub const NO_RESULTS: &str = "No recipes found. Try a different ingredient.";
    pub const SEARCH_FAILED: &str = "Error fetching recipes. Please try again.";
    pub const DETAILS_FAILED: &str = "Failed to load meal details.";
}

/// The complete UI state. Rendering is a pure function of this struct.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    /// Current search text, as typed
    pub query: String,
    /// Result list, in API response order
    pub results: Vec<MealSummary>,
    /// True strictly between search dispatch and its resolution
    pub loading: bool,
    /// User-facing error text; empty means no error
    pub error: String,
    /// Detail overlay content, present only after a successful lookup
    pub selected: Option<MealDetail>,
}

/// Identifies one dispatched search. A completion whose ticket is no
/// longer the latest is dropped without touching state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchTicket(u64);

/// Owns the [`ViewState`] and drives it through the three user
/// operations: search, select a meal, dismiss the detail overlay.
pub struct App<D> {
    db: D,
    state: ViewState,
    seq: u64,
}

impl<D: MealDatabase> App<D> {
    pub fn new(db: D) -> Self {
        App {
            db,
            state: ViewState::default(),
            seq: 0,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Validate the query and move the state into its loading phase.
    ///
    /// Returns `None` for an empty/whitespace query: the validation
    /// error is set and no request must be dispatched. Otherwise clears
    /// the previous error and selection, raises the loading flag, and
    /// returns the ticket the eventual completion must present.
    pub fn begin_search(&mut self, query: impl Into<String>) -> Option<SearchTicket> {
        self.state.query = query.into();
        if self.state.query.trim().is_empty() {
            self.state.results.clear();
            self.state.error = messages::EMPTY_QUERY.to_string();
            return None;
        }

        self.state.loading = true;
        self.state.error.clear();
        self.state.selected = None;
        self.seq += 1;
        debug!("search #{} for {:?}", self.seq, self.state.query.trim());
        Some(SearchTicket(self.seq))
    }

    /// Apply a search outcome. All three paths (results, no results,
    /// failure) clear the loading flag; stale tickets are ignored.
    pub fn finish_search(
        &mut self,
        ticket: SearchTicket,
        outcome: Result<Vec<MealSummary>, ApiError>,
    ) {
        if ticket.0 != self.seq {
            debug!(
                "dropping stale search completion #{} (latest is #{})",
                ticket.0, self.seq
            );
            return;
        }

        self.state.loading = false;
        match outcome {
            Ok(meals) if !meals.is_empty() => {
                debug!("search #{} found {} meals", ticket.0, meals.len());
                self.state.results = meals;
                self.state.error.clear();
            }
            Ok(_) => {
                self.state.results.clear();
                self.state.error = messages::NO_RESULTS.to_string();
            }
            Err(e) => {
                warn!("search #{} failed: {}", ticket.0, e);
                self.state.results.clear();
                self.state.error = messages::SEARCH_FAILED.to_string();
            }
        }
    }

    /// Search the database by ingredient and apply the outcome.
    pub async fn search(&mut self, query: impl Into<String>) {
        let Some(ticket) = self.begin_search(query) else {
            return;
        };
        let ingredient = self.state.query.trim().to_string();
        let outcome = self.db.filter_by_ingredient(&ingredient).await;
        self.finish_search(ticket, outcome);
    }

    /// Fetch one meal's full record and open the detail overlay.
    ///
    /// A failure sets the detail error message and leaves the result
    /// list and loading flag untouched.
    pub async fn select_meal(&mut self, id: &str) {
        match self.db.lookup(id).await {
            Ok(detail) => {
                debug!("selected meal {} ({})", detail.id, detail.name);
                self.state.selected = Some(detail);
            }
            Err(e) => {
                warn!("lookup of meal {} failed: {}", id, e);
                self.state.error = messages::DETAILS_FAILED.to_string();
            }
        }
    }

    /// Close the detail overlay. No network effect.
    pub fn dismiss_detail(&mut self) {
        self.state.selected = None;
    }
}
