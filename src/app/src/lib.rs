pub mod commands;
pub mod config;
pub mod error;
pub mod events;
pub mod format;
pub mod http_helpers;
pub mod macros;
pub mod model;
pub mod types;
pub mod update;
pub mod view_model;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

#[cfg(test)]
mod tests;

use crux_core::Command;

// Re-export core types
pub use crate::{
    commands::{
        dialog::{DialogOperation, DialogOutput},
        navigation::{NavigationOperation, NavigationOutput},
        timer::{TimerOperation, TimerOutput},
    },
    config::ViewConfig,
    error::{RequestError, RequestResult},
    events::Event,
    http_helpers::{
        build_url, build_url_with_query, build_url_with_segment, map_http_error,
        process_json_response, process_status_response,
    },
    model::Model,
    types::*,
    view_model::ViewModel,
};
pub use crux_http::Result as HttpResult;

#[crux_macros::effect(typegen)]
pub enum Effect {
    Render(crux_core::render::RenderOperation),
    Http(crux_http::protocol::HttpRequest),
    Timer(TimerOperation),
    Dialog(DialogOperation),
    Navigation(NavigationOperation),
}

pub type DialogCmd = crate::commands::dialog::Dialog<Effect, Event>;
pub type HttpCmd = crux_http::command::Http<Effect, Event>;
pub type NavigationCmd = crate::commands::navigation::Navigation<Effect, Event>;
pub type TimerCmd = crate::commands::timer::Timer<Effect, Event>;

/// The Core application
#[derive(Default)]
pub struct App;

impl crux_core::App for App {
    type Event = Event;
    type Model = Model;
    type ViewModel = ViewModel;
    type Effect = Effect;

    fn update(&self, event: Self::Event, model: &mut Self::Model) -> Command<Effect, Event> {
        update::update(event, model)
    }

    fn view(&self, model: &Self::Model) -> Self::ViewModel {
        ViewModel::from(model)
    }
}
