use std::cell::{Cell, Ref, RefCell};
use std::ops::Deref;
use std::rc::Rc;

use crate::api::GitHubResult;
use crate::app::dispatch::TaskHandle;
use crate::app::models::*;
use crate::app::state::{AppAction, AppModel, FollowersAction, FollowersState};
use crate::app::ActionDispatcher;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListFooter {
    Hidden,
    NextPageButton,
    LoadingIndicator,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FollowersView {
    Loading,
    List(ListFooter),
    Empty,
}

impl FollowersView {
    pub fn from_state(state: &FollowersState) -> Self {
        if state.fetch_status == FetchStatus::Initial {
            Self::Loading
        } else if !state.followers.is_empty() {
            let footer = match (state.page.has_more(), state.fetch_status) {
                (false, _) => ListFooter::Hidden,
                (true, FetchStatus::NextPage) => ListFooter::LoadingIndicator,
                (true, _) => ListFooter::NextPageButton,
            };
            Self::List(footer)
        } else {
            Self::Empty
        }
    }
}

pub struct FollowersModel {
    app_model: Rc<AppModel>,
    dispatcher: Box<dyn ActionDispatcher>,
    in_flight: RefCell<Option<TaskHandle>>,
    // Set from the moment a next page is asked for until its fetch starts
    next_page_requested: Cell<bool>,
}

impl FollowersModel {
    pub fn new(app_model: Rc<AppModel>, dispatcher: Box<dyn ActionDispatcher>) -> Self {
        Self {
            app_model,
            dispatcher,
            in_flight: RefCell::new(None),
            next_page_requested: Cell::new(false),
        }
    }

    fn state(&self) -> Option<Ref<'_, FollowersState>> {
        self.app_model.map_state_opt(|s| s.followers.as_ref())
    }

    pub fn get_followers(&self) -> Option<impl Deref<Target = Vec<Follower>> + '_> {
        Some(Ref::map(self.state()?, |s| &s.followers))
    }

    pub fn get_view(&self) -> Option<FollowersView> {
        Some(FollowersView::from_state(&*self.state()?))
    }

    pub fn get_title(&self) -> Option<String> {
        Some(self.state()?.username.to_lowercase())
    }

    pub fn appeared(&self) -> Option<()> {
        let username = self.state()?.username.clone();
        self.dispatcher
            .dispatch(FollowersAction::Retrieve(username).into());
        Some(())
    }

    // Only possible while the "next page" button is shown, and only once until its fetch starts
    pub fn load_next_page(&self) -> Option<()> {
        if self.next_page_requested.get()
            || self.get_view()? != FollowersView::List(ListFooter::NextPageButton)
        {
            return None;
        }
        self.appeared()?;
        self.next_page_requested.set(true);
        Some(())
    }

    pub fn go_back(&self) {
        self.dispatcher.dispatch(AppAction::GoBack);
    }

    pub fn fetch(&self, request: FollowersRequest) {
        self.next_page_requested.set(false);
        let api = self.app_model.get_github();
        let FollowersRequest {
            id,
            username,
            page,
            per_page,
        } = request;

        let task = self.dispatcher.dispatch_async(Box::pin(async move {
            let result: GitHubResult<Vec<Follower>> =
                api.get_followers(&username, page, per_page).await;
            let action = match result {
                Ok(followers) => FollowersAction::FetchSucceeded(id, followers),
                Err(err) => {
                    error!("Could not fetch followers of {} (page {}): {}", username, page, err);
                    FollowersAction::FetchFailed(id, err.into())
                }
            };
            Some(AppAction::from(action))
        }));

        if let Some(previous) = self.in_flight.replace(Some(task)) {
            previous.abort();
        }
    }

    pub fn cancel(&self) {
        if let Some(task) = self.in_flight.take() {
            task.abort();
        }
    }
}

impl Drop for FollowersModel {
    fn drop(&mut self) {
        self.cancel();
    }
}
