mod actions;
mod camera;
mod gallery;
mod logs;
mod notification;
mod settings;
mod telemetry;

use crux_core::{render::render, Command};

use crate::config::ViewConfig;
use crate::events::Event;
use crate::model::Model;
use crate::types::SettingsResource;
use crate::Effect;

/// Main update dispatcher - routes events to domain-specific handlers
pub fn update(event: Event, model: &mut Model) -> Command<Effect, Event> {
    match event {
        Event::Initialize(config) => initialize(config, model),
        Event::Notification(event) => notification::handle(event, model),
        Event::Telemetry(event) => telemetry::handle(event, model),
        Event::Gallery(event) => gallery::handle(event, model),
        Event::Settings(event) => settings::handle(event, model),
        Event::Camera(event) => camera::handle(event, model),
        Event::Action(event) => actions::handle(event, model),
        Event::Logs(event) => logs::handle(event, model),
    }
}

/// Start telemetry polling and load every panel the view contains
fn initialize(config: ViewConfig, model: &mut Model) -> Command<Effect, Event> {
    log::debug!("initializing view: {config:?}");
    model.view_config = config;

    let mut commands = vec![render(), telemetry::start_polling(model)];

    if config.gallery {
        commands.push(gallery::load_dates());
    }

    let panels = [
        (config.camera, SettingsResource::Camera),
        (config.schedule, SettingsResource::Schedule),
        (config.network, SettingsResource::Network),
        (config.power, SettingsResource::Power),
    ];
    commands.extend(
        panels
            .into_iter()
            .filter(|(present, _)| *present)
            .map(|(_, resource)| settings::load(resource)),
    );

    if config.logs {
        commands.push(logs::load(None, model));
    }

    Command::all(commands)
}
