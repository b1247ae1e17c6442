use super::{FollowersModel, FollowersView, ListFooter};
use crate::app::components::{EventListener, Screen, HELP_BACK, HELP_NEXT_PAGE};
use crate::app::state::FollowersEvent;
use crate::app::AppEvent;

pub struct FollowersScreen {
    model: FollowersModel,
}

impl FollowersScreen {
    pub fn new(model: FollowersModel) -> Self {
        if let Some(title) = model.get_title() {
            println!();
            println!("== {} ==", title);
        }
        model.appeared();
        Self { model }
    }

    fn show_progress(&self) {
        match self.model.get_view() {
            Some(FollowersView::Loading) => println!("Loading..."),
            Some(FollowersView::List(ListFooter::LoadingIndicator)) => {
                println!("loading next page...")
            }
            _ => {}
        }
    }

    fn show_followers_from(&self, index: usize) {
        if let Some(followers) = self.model.get_followers() {
            for (i, follower) in followers.iter().enumerate().skip(index) {
                println!("{:>4}. {}", i + 1, follower.username);
            }
        }
        self.show_footer();
    }

    fn show_footer(&self) {
        match self.model.get_view() {
            Some(FollowersView::List(ListFooter::NextPageButton)) => {
                println!("{}  {}", HELP_NEXT_PAGE, HELP_BACK)
            }
            Some(FollowersView::Empty) => {
                println!("No followers to show");
                println!("{}", HELP_BACK);
            }
            Some(_) => println!("{}", HELP_BACK),
            None => {}
        }
    }
}

impl EventListener for FollowersScreen {
    fn on_event(&mut self, event: &AppEvent) {
        match event {
            AppEvent::FollowersEvent(FollowersEvent::FetchRequested(request)) => {
                self.model.fetch(request.clone());
                self.show_progress();
            }
            AppEvent::FollowersEvent(FollowersEvent::FollowersAppended(index)) => {
                self.show_followers_from(*index)
            }
            AppEvent::FollowersEvent(FollowersEvent::FollowersCleared) => self.show_footer(),
            AppEvent::FollowersEvent(FollowersEvent::Closed) => self.model.cancel(),
            _ => {}
        }
    }
}

impl Screen for FollowersScreen {
    fn on_input(&mut self, input: &str) {
        match input {
            "n" => {
                if self.model.load_next_page().is_none() {
                    println!("No more followers to load");
                }
            }
            "b" => self.model.go_back(),
            _ => self.show_footer(),
        }
    }
}
