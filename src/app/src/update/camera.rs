use crux_core::{render::render, Command};

use crate::events::{CameraEvent, Event};
use crate::model::Model;
use crate::Effect;

/// Handle the live preview controls
///
/// The shell points the feed image at the stream URL; no request is issued here.
pub fn handle(event: CameraEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        CameraEvent::StartStream => {
            if model.stream.active {
                return Command::done();
            }
            log::debug!("starting camera stream");
            model.stream.start();
            render()
        }
        CameraEvent::StopStream => {
            if !model.stream.active {
                return Command::done();
            }
            log::debug!("stopping camera stream");
            model.stream.stop();
            render()
        }
    }
}
