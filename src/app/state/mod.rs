mod app_model;
mod app_state;
mod followers_state;
mod pagination;
mod search_state;

pub use app_model::AppModel;
pub use app_state::*;
pub use followers_state::*;
pub use pagination::Pagination;
pub use search_state::*;

pub trait UpdatableState {
    type Action;
    type Event;

    fn update_with(&mut self, action: Self::Action) -> Vec<Self::Event>;
}
