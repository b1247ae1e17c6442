use std::ops::ControlFlow;
use std::rc::Rc;
use std::sync::Arc;

use futures::stream::Stream;

pub mod dispatch;
pub use dispatch::{ActionDispatcher, AppMessage, DispatchLoop, Worker};

pub mod components;
use components::*;

use crate::api::GitHubApiClient;

pub mod models;

pub mod state;
pub use state::{AppAction, AppEvent, AppModel, AppState};

const QUIT: &str = ":q";

pub struct App {
    model: Rc<AppModel>,
    navigation: Navigation,
}

impl App {
    pub fn new(
        github_api: Arc<dyn GitHubApiClient + Send + Sync>,
        dispatcher: Box<dyn ActionDispatcher>,
    ) -> Self {
        let model = Rc::new(AppModel::new(AppState::new(), github_api));
        let navigation = App::make_navigation(Rc::clone(&model), dispatcher);
        Self { model, navigation }
    }

    fn make_navigation(model: Rc<AppModel>, dispatcher: Box<dyn ActionDispatcher>) -> Navigation {
        let navigation_model = NavigationModel::new(Rc::clone(&model));
        let screen_factory = ScreenFactory::new(model, dispatcher);
        Navigation::new(navigation_model, screen_factory)
    }

    fn handle(&mut self, message: AppAction) {
        let events = self.model.update_state(message);

        for event in events.iter() {
            self.navigation.on_event(event);
        }
    }

    fn handle_message(&mut self, message: AppMessage) -> ControlFlow<()> {
        match message {
            AppMessage::Action(action) => self.handle(action),
            AppMessage::Input(line) if line.trim() == QUIT => return ControlFlow::Break(()),
            AppMessage::Input(line) => self.navigation.on_input(line.trim()),
            AppMessage::Quit => return ControlFlow::Break(()),
        }
        ControlFlow::Continue(())
    }

    pub async fn attach<S>(mut self, dispatch_loop: DispatchLoop, input: S)
    where
        S: Stream<Item = String> + Unpin,
    {
        let app = &mut self;
        dispatch_loop
            .attach(input, move |message| app.handle_message(message))
            .await;
        info!("bye");
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::app::components::test_utils::*;
    use crate::app::state::SearchAction;

    fn make_app() -> (TestDispatcher, App) {
        let dispatcher = TestDispatcher::new();
        let app = App::new(
            FakeGitHubApi::with_pages("octocat", vec![followers(0, 3)]),
            Box::new(dispatcher.clone()),
        );
        (dispatcher, app)
    }

    // Runs dispatched actions and fetches until nothing is left
    fn settle(dispatcher: &TestDispatcher, app: &mut App) {
        loop {
            let mut actions = dispatcher.take_actions();
            actions.extend(dispatcher.run_futures());
            if actions.is_empty() {
                break;
            }
            for action in actions {
                app.handle(action);
            }
        }
    }

    #[test]
    fn test_quit_command() {
        let (_, mut app) = make_app();

        assert!(app.handle_message(AppMessage::Input(" :q ".to_string())).is_break());
        assert!(app.handle_message(AppMessage::Quit).is_break());
    }

    #[test]
    fn test_search_then_back() {
        let (dispatcher, mut app) = make_app();
        app.handle(AppAction::Start);
        settle(&dispatcher, &mut app);

        assert!(app
            .handle_message(AppMessage::Input("octocat\n".to_string()))
            .is_continue());
        settle(&dispatcher, &mut app);
        {
            let state = app.model.get_state();
            let followers = state.followers.as_ref().unwrap();
            assert_eq!(followers.username, "octocat");
            assert_eq!(followers.followers.len(), 3);
        }

        app.handle_message(AppMessage::Input("b".to_string()));
        settle(&dispatcher, &mut app);

        let state = app.model.get_state();
        assert!(state.followers.is_none());
        assert_eq!(state.search.query, "");
    }

    #[test]
    fn test_empty_line_does_not_navigate() {
        let (dispatcher, mut app) = make_app();
        app.handle(AppAction::Start);
        settle(&dispatcher, &mut app);

        app.handle_message(AppMessage::Input("".to_string()));
        settle(&dispatcher, &mut app);

        assert!(app.model.get_state().followers.is_none());
    }

    #[test]
    fn test_search_action_reaches_state() {
        let (_, mut app) = make_app();
        app.handle(SearchAction::QueryChanged("torvalds".to_string()).into());

        assert_eq!(app.model.get_state().search.query, "torvalds");
    }
}
