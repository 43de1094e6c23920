use crux_core::{render::render, Command};

use crate::events::{Event, LogEvent};
use crate::model::Model;
use crate::types::{LogContent, Severity, LOG_EMPTY, LOG_LOADING};
use crate::{api_get, build_url_with_segment, Effect, NavigationCmd};

const LOGS_ENDPOINT: &str = "/logs";

/// Select a log (or keep the current one) and fetch its content
pub fn load(log_type: Option<String>, model: &mut Model) -> Command<Effect, Event> {
    if let Some(log_type) = log_type.filter(|t| !t.is_empty()) {
        model.logs.log_type = log_type;
    }
    model.logs.is_loading = true;
    model.logs.content = LOG_LOADING.to_string();

    let log_type = model.logs.log_type.clone();
    let url = build_url_with_segment(LOGS_ENDPOINT, &log_type);

    Command::all([
        render(),
        api_get!(url, |result: LogContent| {
            Event::Logs(LogEvent::Response { log_type, result })
        }),
    ])
}

/// Handle log viewer events
pub fn handle(event: LogEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        LogEvent::Load(log_type) => load(log_type, model),
        LogEvent::Download => NavigationCmd::open(model.logs.download_url()).fire(),
        LogEvent::Response { log_type, result } => {
            if log_type != model.logs.log_type {
                log::debug!("discarding {log_type} log, {} is selected", model.logs.log_type);
                return Command::done();
            }
            model.logs.is_loading = false;
            match result {
                Ok(LogContent { content }) => {
                    model.logs.content = content
                        .filter(|c| !c.is_empty())
                        .unwrap_or_else(|| LOG_EMPTY.to_string());
                    render()
                }
                Err(e) => {
                    log::error!("failed to load {log_type} log: {e}");
                    model.logs.content = format!("Error loading log: {e}");
                    model.notify("Error loading log content", Severity::Error)
                }
            }
        }
    }
}
