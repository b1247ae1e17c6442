#[macro_use]
extern crate log;

use futures::channel::mpsc::{unbounded, UnboundedReceiver};
use std::io::BufRead;
use std::sync::Arc;
use std::thread;

mod api;
mod app;
mod settings;

use crate::api::GitHubApi;
use crate::app::{App, AppAction, DispatchLoop, Worker};
use crate::settings::FollowersSettings;

#[tokio::main]
async fn main() {
    env_logger::init();

    let settings = FollowersSettings::new_from_env();
    info!("using {}://{}", settings.api.scheme, settings.api.host);

    let github_api = match GitHubApi::new(settings.api) {
        Ok(api) => Arc::new(api),
        Err(err) => {
            error!("could not create http client: {}", err);
            std::process::exit(1);
        }
    };

    let dispatch_loop = DispatchLoop::new();
    let dispatcher = dispatch_loop.make_dispatcher(Worker::new(tokio::runtime::Handle::current()));
    dispatcher.dispatch(AppAction::Start);

    let app = App::new(github_api, dispatcher);
    app.attach(dispatch_loop, read_lines()).await;
}

// Stdin is read on its own thread so the dispatch loop never blocks on it
fn read_lines() -> UnboundedReceiver<String> {
    let (sender, receiver) = unbounded::<String>();
    thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            match line {
                Ok(line) => {
                    if sender.unbounded_send(line).is_err() {
                        break;
                    }
                }
                Err(err) => {
                    error!("could not read input: {}", err);
                    break;
                }
            }
        }
    });
    receiver
}
