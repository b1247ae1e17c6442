use futures::future::BoxFuture;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::sync::{Arc, Mutex};

use crate::api::{GitHubApiClient, GitHubApiError, GitHubResult};
use crate::app::dispatch::{ActionDispatcher, TaskHandle};
use crate::app::models::*;
use crate::app::AppAction;

// Records actions; futures are kept aside so tests can run them by hand
#[derive(Clone, Default)]
pub struct TestDispatcher {
    actions: Rc<RefCell<Vec<AppAction>>>,
    futures: Rc<RefCell<Vec<BoxFuture<'static, Option<AppAction>>>>>,
}

impl TestDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take_actions(&self) -> Vec<AppAction> {
        self.actions.borrow_mut().drain(..).collect()
    }

    pub fn run_futures(&self) -> Vec<AppAction> {
        let futures: Vec<_> = self.futures.borrow_mut().drain(..).collect();
        futures
            .into_iter()
            .filter_map(futures::executor::block_on)
            .collect()
    }
}

impl ActionDispatcher for TestDispatcher {
    fn dispatch(&self, action: AppAction) {
        self.actions.borrow_mut().push(action);
    }

    fn dispatch_async(&self, action: BoxFuture<'static, Option<AppAction>>) -> TaskHandle {
        self.futures.borrow_mut().push(action);
        TaskHandle::detached()
    }

    fn box_clone(&self) -> Box<dyn ActionDispatcher> {
        Box::new(self.clone())
    }
}

// Serves canned pages per username; unknown users fail like a 404 would
#[derive(Default)]
pub struct FakeGitHubApi {
    pages: HashMap<String, Vec<Vec<Follower>>>,
    pub calls: Mutex<Vec<(String, u32, u32)>>,
}

impl FakeGitHubApi {
    pub fn with_pages(username: &str, pages: Vec<Vec<Follower>>) -> Arc<Self> {
        let mut fake = Self::default();
        fake.pages.insert(username.to_string(), pages);
        Arc::new(fake)
    }
}

impl GitHubApiClient for FakeGitHubApi {
    fn get_followers(
        &self,
        username: &str,
        page: u32,
        per_page: u32,
    ) -> BoxFuture<GitHubResult<Vec<Follower>>> {
        self.calls
            .lock()
            .unwrap()
            .push((username.to_string(), page, per_page));
        let result = match self.pages.get(username) {
            Some(pages) => Ok(pages
                .get(page as usize - 1)
                .cloned()
                .unwrap_or_default()),
            None => Err(GitHubApiError::BadStatus(404, "Not Found".to_string())),
        };
        Box::pin(async move { result })
    }
}

pub fn followers(from: u64, count: u64) -> Vec<Follower> {
    (from..from + count)
        .map(|id| Follower::new(id, &format!("user{}", id)))
        .collect()
}
