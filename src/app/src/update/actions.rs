use crux_core::{render::render, Command};

use super::{settings, telemetry};
use crate::config::REBOOT_RELOAD_DELAY_MS;
use crate::events::{ActionEvent, Event};
use crate::model::Model;
use crate::types::{DeviceAction, SettingsResource, Severity, ToggleLightsResponse};
use crate::{api_post, build_url, DialogCmd, Effect, NavigationCmd, TimerCmd};

const REBOOT_NOTICE: &str = "System is rebooting. The page will refresh in 60 seconds.";
const SHUTDOWN_NOTICE: &str = "System is shutting down. This page will no longer be accessible.";

/// Disable the control and send the one request of `action`
fn dispatch(action: DeviceAction, model: &mut Model) -> Command<Effect, Event> {
    log::info!("sending {action:?} to device");
    model.actions.start(action);

    let url = build_url(action.endpoint());
    let request = match action {
        DeviceAction::ToggleLights => {
            api_post!(url, expect_json: ToggleLightsResponse, |result| {
                Event::Action(ActionEvent::LightsToggled(result))
            })
        }
        _ => api_post!(url, |result| Event::Action(ActionEvent::Completed {
            action,
            result
        })),
    };

    Command::all([render(), request])
}

fn on_success(action: DeviceAction, model: &mut Model) -> Command<Effect, Event> {
    match action {
        DeviceAction::Capture => {
            model.actions.restore(action);
            Command::all([
                model.notify("Photo captured successfully!", Severity::Success),
                telemetry::fetch_status(),
            ])
        }
        DeviceAction::Calibrate => {
            model.actions.restore(action);
            Command::all([
                model.notify("Camera calibrated successfully!", Severity::Success),
                settings::load(SettingsResource::Camera),
            ])
        }
        DeviceAction::ToggleLights => {
            model.actions.restore(action);
            render()
        }
        DeviceAction::Reboot => {
            model.actions.restore(action);
            Command::all([
                model.notify_for(REBOOT_NOTICE, Severity::Warning, REBOOT_RELOAD_DELAY_MS),
                TimerCmd::after(REBOOT_RELOAD_DELAY_MS)
                    .build()
                    .then_send(|_| Event::Action(ActionEvent::ReloadDue)),
            ])
        }
        // the device is going away, nothing to re-enable
        DeviceAction::Shutdown => {
            model.actions.settle_disabled(action);
            model.notify(SHUTDOWN_NOTICE, Severity::Warning)
        }
    }
}

/// Handle device action events
pub fn handle(event: ActionEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        ActionEvent::Trigger(action) => {
            if model.actions.get(action).disabled {
                log::debug!("{action:?} ignored while disabled");
                return Command::done();
            }
            match action.confirmation() {
                Some(question) => DialogCmd::confirm(question)
                    .build()
                    .then_send(move |output| {
                        Event::Action(ActionEvent::Confirmed {
                            action,
                            confirmed: output.is_confirmed(),
                        })
                    }),
                None => dispatch(action, model),
            }
        }
        ActionEvent::Confirmed { action, confirmed } => {
            if !confirmed || model.actions.get(action).disabled {
                return Command::done();
            }
            dispatch(action, model)
        }
        ActionEvent::Completed {
            action,
            result: Ok(()),
        } => on_success(action, model),
        ActionEvent::Completed {
            action,
            result: Err(e),
        } => {
            log::error!("{action:?} failed: {e}");
            model.actions.restore(action);
            model.notify(format!("{}: {e}", action.failure_prefix()), Severity::Error)
        }
        ActionEvent::LightsToggled(Ok(response)) => {
            let lights_on = response.lights_on();
            model.actions.set_lights_on(lights_on);
            model.actions.restore(DeviceAction::ToggleLights);
            let message = if lights_on {
                "Lights turned on"
            } else {
                "Lights turned off"
            };
            Command::all([
                model.notify(message, Severity::Success),
                telemetry::fetch_status(),
            ])
        }
        ActionEvent::LightsToggled(Err(e)) => handle(
            ActionEvent::Completed {
                action: DeviceAction::ToggleLights,
                result: Err(e),
            },
            model,
        ),
        ActionEvent::ReloadDue => NavigationCmd::reload().fire(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::navigation::NavigationOperation;
    use crate::commands::timer::TimerOperation;
    use crate::error::RequestError;
    use crate::types::ActionStates;
    use crate::update::tests::{effects, http_requests};

    fn completed(action: DeviceAction, result: Result<(), RequestError>) -> ActionEvent {
        ActionEvent::Completed { action, result }
    }

    #[test]
    fn trigger_disables_and_sends_one_request() {
        let mut model = Model::default();

        let mut cmd = handle(ActionEvent::Trigger(DeviceAction::Capture), &mut model);
        let effects = effects(&mut cmd);
        let requests = http_requests(&effects);

        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, "POST");
        assert_eq!(requests[0].url, "https://relative/api/camera/capture");
        assert!(model.actions.capture.disabled);
        assert_eq!(model.actions.capture.label, "Taking photo...");
    }

    #[test]
    fn trigger_while_disabled_is_a_no_op() {
        let mut model = Model::default();
        let _ = handle(ActionEvent::Trigger(DeviceAction::Capture), &mut model);
        let before = model.clone();

        let mut cmd = handle(ActionEvent::Trigger(DeviceAction::Capture), &mut model);

        assert!(effects(&mut cmd).is_empty());
        assert_eq!(model, before);
    }

    #[test]
    fn capture_success_restores_and_refreshes_telemetry() {
        let mut model = Model::default();
        let _ = handle(ActionEvent::Trigger(DeviceAction::Capture), &mut model);

        let mut cmd = handle(completed(DeviceAction::Capture, Ok(())), &mut model);
        let effects = effects(&mut cmd);

        assert_eq!(model.actions.capture, ActionStates::default().capture);
        assert_eq!(model.notifications[0].message, "Photo captured successfully!");
        assert_eq!(
            http_requests(&effects)[0].url,
            "https://relative/api/system/status"
        );
    }

    #[test]
    fn failure_restores_and_reports_message() {
        let mut model = Model::default();
        let _ = handle(ActionEvent::Trigger(DeviceAction::Calibrate), &mut model);

        let _ = handle(
            completed(
                DeviceAction::Calibrate,
                Err(RequestError::server(500, "camera busy")),
            ),
            &mut model,
        );

        assert!(!model.actions.calibrate.disabled);
        assert_eq!(model.actions.calibrate.label, "Calibrate");
        assert_eq!(
            model.notifications[0].message,
            "Error calibrating camera: camera busy"
        );
        assert_eq!(model.notifications[0].severity, Severity::Error);
    }

    #[test]
    fn calibrate_success_rehydrates_camera_settings() {
        let mut model = Model::default();
        let _ = handle(ActionEvent::Trigger(DeviceAction::Calibrate), &mut model);

        let mut cmd = handle(completed(DeviceAction::Calibrate, Ok(())), &mut model);
        let effects = effects(&mut cmd);

        assert_eq!(
            http_requests(&effects)[0].url,
            "https://relative/api/camera/settings"
        );
    }

    #[test]
    fn reboot_needs_confirmation_before_any_request() {
        let mut model = Model::default();

        let mut cmd = handle(ActionEvent::Trigger(DeviceAction::Reboot), &mut model);
        let effects = effects(&mut cmd);

        assert!(http_requests(&effects).is_empty());
        assert!(effects.iter().any(|e| matches!(e, Effect::Dialog(_))));
        assert!(!model.actions.reboot.disabled);
    }

    #[test]
    fn declined_confirmation_changes_nothing() {
        let mut model = Model::default();
        let before = model.clone();

        let mut cmd = handle(
            ActionEvent::Confirmed {
                action: DeviceAction::Shutdown,
                confirmed: false,
            },
            &mut model,
        );

        assert!(effects(&mut cmd).is_empty());
        assert_eq!(model, before);
    }

    #[test]
    fn reboot_success_warns_and_schedules_reload() {
        let mut model = Model::default();
        let _ = handle(
            ActionEvent::Confirmed {
                action: DeviceAction::Reboot,
                confirmed: true,
            },
            &mut model,
        );

        let mut cmd = handle(completed(DeviceAction::Reboot, Ok(())), &mut model);
        let timer = effects(&mut cmd).into_iter().filter_map(|e| match e {
            Effect::Timer(request) => Some(request.operation.clone()),
            _ => None,
        });

        assert_eq!(
            timer.collect::<Vec<_>>(),
            vec![
                TimerOperation::Start { millis: 60_000 },
                TimerOperation::Start { millis: 60_000 }
            ]
        );
        assert_eq!(model.notifications[0].message, REBOOT_NOTICE);
        assert_eq!(model.notifications[0].severity, Severity::Warning);
        assert_eq!(model.notifications[0].duration_ms, 60_000);

        let mut cmd = handle(ActionEvent::ReloadDue, &mut model);
        let reload = effects(&mut cmd).into_iter().find_map(|e| match e {
            Effect::Navigation(request) => Some(request.operation.clone()),
            _ => None,
        });
        assert_eq!(reload, Some(NavigationOperation::Reload));
    }

    #[test]
    fn shutdown_stays_disabled_after_success() {
        let mut model = Model::default();
        let _ = handle(
            ActionEvent::Confirmed {
                action: DeviceAction::Shutdown,
                confirmed: true,
            },
            &mut model,
        );

        let _ = handle(completed(DeviceAction::Shutdown, Ok(())), &mut model);
        let mut cmd = handle(ActionEvent::Trigger(DeviceAction::Shutdown), &mut model);

        assert!(model.actions.shutdown.disabled);
        assert!(!model.actions.shutdown.busy);
        assert!(effects(&mut cmd).is_empty());
        assert_eq!(model.notifications[0].message, SHUTDOWN_NOTICE);
    }

    #[test]
    fn shutdown_failure_re_enables() {
        let mut model = Model::default();
        model.actions.start(DeviceAction::Shutdown);

        let _ = handle(
            completed(
                DeviceAction::Shutdown,
                Err(RequestError::NetworkFailure("Failed to fetch".into())),
            ),
            &mut model,
        );

        assert!(!model.actions.shutdown.disabled);
        assert_eq!(model.actions.shutdown.label, "Shutdown");
        assert_eq!(
            model.notifications[0].message,
            "Error shutting down system: Failed to fetch"
        );
    }

    #[test]
    fn lights_toggle_relabels_from_response() {
        let mut model = Model::default();
        let _ = handle(ActionEvent::Trigger(DeviceAction::ToggleLights), &mut model);
        assert_eq!(model.actions.toggle_lights.label, "Toggling lights...");

        let _ = handle(
            ActionEvent::LightsToggled(Ok(ToggleLightsResponse {
                lights_on: Some(true),
                data: None,
            })),
            &mut model,
        );

        assert!(!model.actions.toggle_lights.disabled);
        assert_eq!(model.actions.toggle_lights.label, "Lights On");
        assert_eq!(model.notifications[0].message, "Lights turned on");
    }
}
