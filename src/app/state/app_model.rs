use crate::api::GitHubApiClient;
use crate::app::state::*;
use ref_filter_map::*;
use std::cell::{Ref, RefCell};
use std::sync::Arc;

pub struct AppServices {
    pub github_api: Arc<dyn GitHubApiClient + Send + Sync>,
}

pub struct AppModel {
    state: RefCell<AppState>,
    services: AppServices,
}

impl AppModel {
    pub fn new(state: AppState, github_api: Arc<dyn GitHubApiClient + Send + Sync>) -> Self {
        let services = AppServices { github_api };
        let state = RefCell::new(state);
        Self { state, services }
    }

    pub fn get_github(&self) -> Arc<dyn GitHubApiClient + Send + Sync> {
        Arc::clone(&self.services.github_api)
    }

    pub fn get_state(&self) -> Ref<'_, AppState> {
        self.state.borrow()
    }

    pub fn map_state<T: 'static, F: FnOnce(&AppState) -> &T>(&self, map: F) -> Ref<'_, T> {
        Ref::map(self.state.borrow(), map)
    }

    pub fn map_state_opt<T: 'static, F: FnOnce(&AppState) -> Option<&T>>(
        &self,
        map: F,
    ) -> Option<Ref<'_, T>> {
        ref_filter_map(self.state.borrow(), map)
    }

    pub fn update_state(&self, message: AppAction) -> Vec<AppEvent> {
        debug!("action: {:?}", &message);
        let mut state = self.state.borrow_mut();
        let events = state.update_state(message);
        debug!("events: {:?}", &events);
        events
    }
}
