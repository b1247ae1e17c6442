use crate::app::state::{AppAction, AppEvent, UpdatableState};

#[derive(Clone, Debug)]
pub enum SearchAction {
    QueryChanged(String),
    ScreenAppeared,
}

impl From<SearchAction> for AppAction {
    fn from(search_action: SearchAction) -> Self {
        Self::SearchAction(search_action)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchEvent {
    QueryUpdated,
    QueryCleared,
}

impl From<SearchEvent> for AppEvent {
    fn from(search_event: SearchEvent) -> Self {
        Self::SearchEvent(search_event)
    }
}

#[derive(Clone, Debug, Default)]
pub struct SearchState {
    pub query: String,
}

impl UpdatableState for SearchState {
    type Action = SearchAction;
    type Event = SearchEvent;

    fn update_with(&mut self, action: Self::Action) -> Vec<Self::Event> {
        match action {
            SearchAction::QueryChanged(query) => {
                self.query = query;
                vec![SearchEvent::QueryUpdated]
            }
            SearchAction::ScreenAppeared => {
                self.query.clear();
                vec![SearchEvent::QueryCleared]
            }
        }
    }
}
