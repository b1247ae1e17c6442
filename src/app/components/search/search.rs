use super::SearchModel;
use crate::app::components::{EventListener, Screen};
use crate::app::state::SearchEvent;
use crate::app::AppEvent;

pub struct SearchScreen {
    model: SearchModel,
    // Enter was pressed, the query is submitted once the state has it
    submitted: bool,
}

impl SearchScreen {
    pub fn new(model: SearchModel) -> Self {
        Self {
            model,
            submitted: false,
        }
    }

    fn show_prompt(&self) {
        println!();
        println!("Search a username... e.g. octocat");
    }

    fn submit(&self) {
        if self.model.get_followers().is_none() {
            println!("Type a username to get its followers");
        }
    }
}

impl EventListener for SearchScreen {
    fn on_event(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Started | AppEvent::NavigationPopped => self.model.appeared(),
            AppEvent::SearchEvent(SearchEvent::QueryCleared) => self.show_prompt(),
            AppEvent::SearchEvent(SearchEvent::QueryUpdated) if self.submitted => {
                self.submitted = false;
                self.submit()
            }
            _ => {}
        }
    }
}

impl Screen for SearchScreen {
    fn on_input(&mut self, input: &str) {
        self.submitted = true;
        self.model.set_query(input.to_string());
    }
}
