use form_urlencoded::Serializer;
use serde::Deserialize;

use crate::app::models::*;

pub struct FollowersQuery {
    pub page: u32,
    pub per_page: u32,
}

impl FollowersQuery {
    pub fn into_query_string(self) -> String {
        Serializer::new(String::new())
            .append_pair("per_page", &self.per_page.to_string()[..])
            .append_pair("page", &self.page.to_string()[..])
            .finish()
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct User {
    pub id: u64,
    pub login: String,
}

impl From<User> for Follower {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.login,
        }
    }
}
