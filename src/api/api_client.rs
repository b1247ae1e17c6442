use futures::future::BoxFuture;

use super::client::{GitHubApiError, GitHubClient};
use crate::app::models::*;
use crate::settings::ApiSettings;

pub type GitHubResult<T> = Result<T, GitHubApiError>;

pub trait GitHubApiClient {
    fn get_followers(
        &self,
        username: &str,
        page: u32,
        per_page: u32,
    ) -> BoxFuture<GitHubResult<Vec<Follower>>>;
}

pub struct GitHubApi {
    client: GitHubClient,
}

impl GitHubApi {
    pub fn new(settings: ApiSettings) -> GitHubResult<GitHubApi> {
        Ok(GitHubApi {
            client: GitHubClient::new(settings)?,
        })
    }
}

impl GitHubApiClient for GitHubApi {
    fn get_followers(
        &self,
        username: &str,
        page: u32,
        per_page: u32,
    ) -> BoxFuture<GitHubResult<Vec<Follower>>> {
        let username = username.to_owned();

        Box::pin(async move {
            let users = self
                .client
                .get_followers(&username, page, per_page)
                .send()
                .await?;

            let followers = users
                .into_iter()
                .map(|user| user.into())
                .collect::<Vec<Follower>>();

            Ok(followers)
        })
    }
}
