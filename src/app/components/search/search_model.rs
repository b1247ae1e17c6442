use std::ops::Deref;
use std::rc::Rc;

use crate::app::state::{AppAction, AppModel, SearchAction};
use crate::app::ActionDispatcher;

pub struct SearchModel {
    app_model: Rc<AppModel>,
    dispatcher: Box<dyn ActionDispatcher>,
}

impl SearchModel {
    pub fn new(app_model: Rc<AppModel>, dispatcher: Box<dyn ActionDispatcher>) -> Self {
        Self {
            app_model,
            dispatcher,
        }
    }

    pub fn get_query(&self) -> impl Deref<Target = String> + '_ {
        self.app_model.map_state(|s| &s.search.query)
    }

    pub fn can_get_followers(&self) -> bool {
        !self.get_query().is_empty()
    }

    pub fn appeared(&self) {
        self.dispatcher.dispatch(SearchAction::ScreenAppeared.into());
    }

    pub fn set_query(&self, query: String) {
        self.dispatcher
            .dispatch(SearchAction::QueryChanged(query).into());
    }

    pub fn get_followers(&self) -> Option<()> {
        if !self.can_get_followers() {
            return None;
        }
        let username = self.get_query().clone();
        self.dispatcher.dispatch(AppAction::ViewFollowers(username));
        Some(())
    }
}
