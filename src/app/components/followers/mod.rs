mod followers;
pub use followers::*;

mod followers_model;
pub use followers_model::*;
