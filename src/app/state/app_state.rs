use std::borrow::Cow;

use crate::app::state::{
    FollowersAction, FollowersEvent, FollowersState, SearchAction, SearchEvent, SearchState,
    UpdatableState,
};

#[derive(Clone, Debug)]
pub enum AppAction {
    Start,
    ViewFollowers(String),
    GoBack,
    SearchAction(SearchAction),
    FollowersAction(FollowersAction),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppEvent {
    Started,
    NavigationPushed(ScreenName),
    NavigationPopped,
    SearchEvent(SearchEvent),
    FollowersEvent(FollowersEvent),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScreenName {
    Search,
    Followers(String),
}

impl ScreenName {
    pub fn identifier(&self) -> Cow<str> {
        match self {
            Self::Search => Cow::Borrowed("search"),
            Self::Followers(s) => Cow::Owned(format!("followers_{}", s)),
        }
    }
}

pub struct AppState {
    pub search: SearchState,
    pub followers: Option<FollowersState>,
    // Each followers screen gets its own instance number, request ids are scoped by it
    visits: u64,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            search: SearchState::default(),
            followers: None,
            visits: 0,
        }
    }

    pub fn current_screen(&self) -> ScreenName {
        match &self.followers {
            Some(followers) => ScreenName::Followers(followers.username.clone()),
            None => ScreenName::Search,
        }
    }

    pub fn update_state(&mut self, message: AppAction) -> Vec<AppEvent> {
        match message {
            AppAction::Start => vec![AppEvent::Started],
            AppAction::ViewFollowers(username) if self.followers.is_none() => {
                self.visits += 1;
                self.followers = Some(FollowersState::new(username.clone(), self.visits));
                vec![AppEvent::NavigationPushed(ScreenName::Followers(username))]
            }
            AppAction::ViewFollowers(username) => {
                warn!("followers screen already shown, ignoring {}", username);
                vec![]
            }
            AppAction::GoBack => {
                if let Some(mut followers) = self.followers.take() {
                    let mut events: Vec<AppEvent> = followers
                        .update_with(FollowersAction::ViewClosed)
                        .into_iter()
                        .map(AppEvent::from)
                        .collect();
                    events.push(AppEvent::NavigationPopped);
                    events
                } else {
                    vec![]
                }
            }
            AppAction::SearchAction(a) => self
                .search
                .update_with(a)
                .into_iter()
                .map(AppEvent::from)
                .collect(),
            AppAction::FollowersAction(a) => match self.followers.as_mut() {
                Some(followers) => followers
                    .update_with(a)
                    .into_iter()
                    .map(AppEvent::from)
                    .collect(),
                None => {
                    debug!("no followers screen, dropping {:?}", a);
                    vec![]
                }
            },
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
