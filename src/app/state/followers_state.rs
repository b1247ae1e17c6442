use crate::app::models::*;
use crate::app::state::{AppAction, AppEvent, Pagination, UpdatableState};

pub const BATCH_SIZE: u32 = 30;

#[derive(Clone, Debug)]
pub enum FollowersAction {
    Retrieve(String),
    FetchSucceeded(RequestId, Vec<Follower>),
    FetchFailed(RequestId, FetchFailure),
    ViewClosed,
}

impl From<FollowersAction> for AppAction {
    fn from(followers_action: FollowersAction) -> Self {
        Self::FollowersAction(followers_action)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FollowersEvent {
    FetchRequested(FollowersRequest),
    // Index of the first appended follower
    FollowersAppended(usize),
    FollowersCleared,
    Closed,
}

impl From<FollowersEvent> for AppEvent {
    fn from(followers_event: FollowersEvent) -> Self {
        Self::FollowersEvent(followers_event)
    }
}

#[derive(Clone, Debug)]
pub struct FollowersState {
    pub username: String,
    pub followers: Vec<Follower>,
    pub fetch_status: FetchStatus,
    pub page: Pagination,
    instance: u64,
    sequence: u64,
    pending: Option<RequestId>,
}

impl FollowersState {
    pub fn new(username: String, instance: u64) -> Self {
        Self {
            username,
            followers: vec![],
            fetch_status: FetchStatus::Initial,
            page: Pagination::new(BATCH_SIZE),
            instance,
            sequence: 0,
            pending: None,
        }
    }

    #[cfg(test)]
    pub fn pending_request(&self) -> Option<RequestId> {
        self.pending
    }

    fn next_request_id(&mut self) -> RequestId {
        self.sequence += 1;
        RequestId {
            instance: self.instance,
            sequence: self.sequence,
        }
    }

    // Settles the pending request if `id` is the one we're waiting for
    fn settle(&mut self, id: RequestId) -> bool {
        if self.pending == Some(id) {
            self.pending = None;
            true
        } else {
            debug!("discarding response for stale request {:?}", id);
            false
        }
    }
}

impl UpdatableState for FollowersState {
    type Action = FollowersAction;
    type Event = FollowersEvent;

    fn update_with(&mut self, action: Self::Action) -> Vec<Self::Event> {
        match action {
            FollowersAction::Retrieve(username) => {
                self.username = username;
                let page = self.page.advance();
                if self.page.is_next_page() {
                    self.fetch_status = FetchStatus::NextPage;
                }

                let id = self.next_request_id();
                if let Some(superseded) = self.pending.replace(id) {
                    debug!("request {:?} superseded by {:?}", superseded, id);
                }

                vec![FollowersEvent::FetchRequested(FollowersRequest {
                    id,
                    username: self.username.clone(),
                    page,
                    per_page: self.page.batch_size,
                })]
            }
            FollowersAction::FetchSucceeded(id, mut followers) if self.settle(id) => {
                self.page.set_loaded_count(followers.len());
                let append_index = self.followers.len();
                self.followers.append(&mut followers);
                self.fetch_status = FetchStatus::Done;
                vec![FollowersEvent::FollowersAppended(append_index)]
            }
            FollowersAction::FetchFailed(id, _) if self.settle(id) => {
                self.followers.clear();
                self.fetch_status = FetchStatus::Done;
                vec![FollowersEvent::FollowersCleared]
            }
            FollowersAction::ViewClosed => {
                self.followers.clear();
                self.page.reset();
                self.fetch_status = FetchStatus::Initial;
                self.pending = None;
                vec![FollowersEvent::Closed]
            }
            _ => vec![],
        }
    }
}
