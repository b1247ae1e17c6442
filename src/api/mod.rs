mod api_client;
mod api_models;
mod client;

pub use api_client::{GitHubApi, GitHubApiClient, GitHubResult};
pub use client::GitHubApiError;
