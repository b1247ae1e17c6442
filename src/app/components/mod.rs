use crate::app::AppEvent;

mod navigation;
pub use navigation::*;

mod search;
pub use search::*;

mod followers;
pub use followers::*;

#[cfg(test)]
pub(crate) mod test_utils;

pub const HELP_BACK: &str = "[b] go back";
pub const HELP_NEXT_PAGE: &str = "[n] next page";

pub trait EventListener {
    fn on_event(&mut self, _: &AppEvent) {}
}

// A screen also gets the lines typed while it is visible
pub trait Screen: EventListener {
    fn on_input(&mut self, input: &str);
}
