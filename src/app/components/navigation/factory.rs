use std::rc::Rc;

use crate::app::components::*;
use crate::app::{ActionDispatcher, AppModel};

pub struct ScreenFactory {
    app_model: Rc<AppModel>,
    dispatcher: Box<dyn ActionDispatcher>,
}

impl ScreenFactory {
    pub fn new(app_model: Rc<AppModel>, dispatcher: Box<dyn ActionDispatcher>) -> Self {
        Self {
            app_model,
            dispatcher,
        }
    }

    pub fn make_search(&self) -> SearchScreen {
        let model = SearchModel::new(Rc::clone(&self.app_model), self.dispatcher.box_clone());
        SearchScreen::new(model)
    }

    pub fn make_followers(&self) -> FollowersScreen {
        let model = FollowersModel::new(Rc::clone(&self.app_model), self.dispatcher.box_clone());
        FollowersScreen::new(model)
    }
}
