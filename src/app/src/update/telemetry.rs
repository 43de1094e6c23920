use crux_core::{render::render, Command};

use crate::config::POLL_INTERVAL_MS;
use crate::events::{Event, TelemetryEvent};
use crate::model::Model;
use crate::types::{TelemetrySnapshot, TelemetryView};
use crate::{api_get, build_url, Effect, TimerCmd};

const STATUS_ENDPOINT: &str = "/system/status";

/// Fetch once now and arm the poll timer, unless the loop already runs
pub fn start_polling(model: &mut Model) -> Command<Effect, Event> {
    if model.polling_active {
        log::debug!("telemetry polling already active");
        return Command::done();
    }
    model.polling_active = true;
    Command::all([fetch_status(), schedule_tick()])
}

/// Fetch outside the poll interval through the same response path
pub fn fetch_status() -> Command<Effect, Event> {
    api_get!(build_url(STATUS_ENDPOINT), |result: TelemetrySnapshot| {
        Event::Telemetry(TelemetryEvent::Response(result))
    })
}

fn schedule_tick() -> Command<Effect, Event> {
    TimerCmd::after(POLL_INTERVAL_MS)
        .build()
        .then_send(|_| Event::Telemetry(TelemetryEvent::PollTick))
}

/// Handle telemetry polling events
pub fn handle(event: TelemetryEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        TelemetryEvent::Refresh => fetch_status(),
        TelemetryEvent::PollTick => Command::all([fetch_status(), schedule_tick()]),
        TelemetryEvent::Response(Ok(snapshot)) => {
            model.telemetry = Some(TelemetryView::from(&snapshot));
            model.actions.set_lights_on(snapshot.power.lights_on);
            render()
        }
        TelemetryEvent::Response(Err(e)) => {
            log::warn!("failed to refresh telemetry: {e}");
            Command::done()
        }
    }
}
