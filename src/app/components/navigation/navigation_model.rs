use crate::app::state::ScreenName;
use crate::app::AppModel;
use std::rc::Rc;

pub struct NavigationModel {
    app_model: Rc<AppModel>,
}

impl NavigationModel {
    pub fn new(app_model: Rc<AppModel>) -> Self {
        Self { app_model }
    }

    pub fn visible_child_name(&self) -> ScreenName {
        self.app_model.get_state().current_screen()
    }

    pub fn can_go_back(&self) -> bool {
        self.visible_child_name() != ScreenName::Search
    }
}
