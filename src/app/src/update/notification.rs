use crux_core::{render::render, Command};

use crate::events::{Event, NotificationEvent};
use crate::model::Model;
use crate::Effect;

/// Handle notification lifetime events
pub fn handle(event: NotificationEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        NotificationEvent::Dismiss { id } | NotificationEvent::Expired { id } => {
            if model.remove_notification(id) {
                render()
            } else {
                Command::done()
            }
        }
    }
}
