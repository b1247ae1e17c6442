use crate::app::components::{EventListener, FollowersScreen, Screen, SearchScreen};
use crate::app::state::ScreenName;
use crate::app::AppEvent;

use super::{NavigationModel, ScreenFactory};

pub struct Navigation {
    model: NavigationModel,
    screen_factory: ScreenFactory,
    search: SearchScreen,
    followers: Option<FollowersScreen>,
}

impl Navigation {
    pub fn new(model: NavigationModel, screen_factory: ScreenFactory) -> Self {
        let search = screen_factory.make_search();
        Self {
            model,
            screen_factory,
            search,
            followers: None,
        }
    }

    fn push_screen(&mut self, name: &ScreenName) {
        debug!("pushing {}", name.identifier());
        if let ScreenName::Followers(_) = name {
            self.followers = Some(self.screen_factory.make_followers());
        }
    }

    fn pop(&mut self) {
        self.followers.take();
        debug!("back to {}", self.model.visible_child_name().identifier());
    }
}

impl EventListener for Navigation {
    fn on_event(&mut self, event: &AppEvent) {
        match event {
            AppEvent::NavigationPushed(name) => self.push_screen(name),
            AppEvent::NavigationPopped => self.pop(),
            _ => {}
        };
        if let Some(followers) = self.followers.as_mut() {
            followers.on_event(event);
        }
        self.search.on_event(event);
    }
}

impl Screen for Navigation {
    fn on_input(&mut self, input: &str) {
        match (self.model.visible_child_name(), self.followers.as_mut()) {
            (ScreenName::Followers(_), Some(followers)) => followers.on_input(input),
            _ => self.search.on_input(input),
        }
    }
}
