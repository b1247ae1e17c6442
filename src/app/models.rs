use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Follower {
    pub id: u64,
    pub username: String,
}

impl Follower {
    pub fn new(id: u64, username: &str) -> Self {
        Self {
            id,
            username: username.to_string(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FetchStatus {
    // Nothing settled yet: first page requested or screen not shown
    Initial,
    NextPage,
    Done,
}

// Identifies one fetch of one followers screen visit.
// Only the latest id of a visit may have its response applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RequestId {
    pub instance: u64,
    pub sequence: u64,
}

// Describes the fetch a component should perform
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FollowersRequest {
    pub id: RequestId,
    pub username: String,
    pub page: u32,
    pub per_page: u32,
}

// Fetch failures are not told apart: network, status and decoding errors all end up here
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
#[error("Could not fetch followers")]
pub struct FetchFailure;
