use crux_core::{render::render, Command};

use crate::config::{ViewConfig, NETWORK_RECHECK_DELAY_MS};
use crate::error::RequestError;
use crate::events::{Event, SettingsEvent};
use crate::model::Model;
use crate::types::{SettingsDraft, SettingsForm, SettingsResource, Severity};
use crate::{api_get, api_post, build_url, update_field, Effect, TimerCmd};

/// Fetch a settings resource for hydration
pub fn load(resource: SettingsResource) -> Command<Effect, Event> {
    api_get!(build_url(resource.load_path()), |result: SettingsDraft| {
        Event::Settings(SettingsEvent::Loaded { resource, result })
    })
}

fn hydrate(model: &mut Model, resource: SettingsResource, draft: &SettingsDraft) {
    match resource {
        SettingsResource::Camera => model.camera.hydrate(draft),
        SettingsResource::Schedule => model.schedule.hydrate(draft),
        SettingsResource::Network => model.network.hydrate(draft),
        SettingsResource::Power => model.power.hydrate(draft),
    }
}

/// Validate `form` and post its draft to the resource it mirrors
fn submit_form<F: SettingsForm>(
    form: &F,
    config: &ViewConfig,
) -> Result<Command<Effect, Event>, RequestError> {
    form.validate()?;
    let resource = F::RESOURCE;
    let draft = form.to_draft(config);
    log::debug!("submitting {resource:?} with {} keys", draft.len());

    Ok(api_post!(
        build_url(resource.submit_path()),
        body_json: &draft,
        |result| Event::Settings(SettingsEvent::Submitted { resource, result })
    ))
}

fn submit(
    model: &Model,
    resource: SettingsResource,
) -> Result<Command<Effect, Event>, RequestError> {
    let config = &model.view_config;
    match resource {
        SettingsResource::Camera => submit_form(&model.camera, config),
        SettingsResource::Schedule => submit_form(&model.schedule, config),
        SettingsResource::Network => submit_form(&model.network, config),
        SettingsResource::Power => submit_form(&model.power, config),
    }
}

/// Handle settings synchronization events
pub fn handle(event: SettingsEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        SettingsEvent::Load(resource) => load(resource),
        SettingsEvent::Loaded {
            resource,
            result: Ok(draft),
        } => {
            log::debug!("hydrating {resource:?} from {} keys", draft.len());
            hydrate(model, resource, &draft);
            render()
        }
        SettingsEvent::Loaded {
            resource,
            result: Err(e),
        } => {
            if resource.reports_load_failure() {
                log::error!("failed to load {resource:?} settings: {e}");
                model.notify(resource.load_failure_message(&e), Severity::Error)
            } else {
                log::warn!("failed to load {resource:?} status: {e}");
                Command::done()
            }
        }

        SettingsEvent::Submit(resource) => match submit(model, resource) {
            Ok(request) => request,
            Err(e) => model.notify(resource.submit_failure_message(&e), Severity::Error),
        },
        SettingsEvent::Submitted {
            resource,
            result: Ok(()),
        } => {
            let notify = model.notify(resource.submit_success_message(), Severity::Success);
            if resource != SettingsResource::Network {
                return notify;
            }
            model.network.clear_credentials();
            Command::all([
                notify,
                TimerCmd::after(NETWORK_RECHECK_DELAY_MS)
                    .build()
                    .then_send(|_| Event::Settings(SettingsEvent::NetworkRecheckDue)),
            ])
        }
        SettingsEvent::Submitted {
            resource,
            result: Err(e),
        } => {
            log::error!("failed to submit {resource:?} settings: {e}");
            model.notify(resource.submit_failure_message(&e), Severity::Error)
        }
        SettingsEvent::NetworkRecheckDue => load(SettingsResource::Network),

        SettingsEvent::CameraFormChanged(camera) => update_field!(model.camera, camera),
        SettingsEvent::ToggleHdr(enabled) => update_field!(model.camera.hdr_enabled, enabled),
        SettingsEvent::ScheduleFormChanged(schedule) => update_field!(model.schedule, schedule),
        SettingsEvent::ToggleHour(hour) => {
            let mut schedule = model.schedule.clone();
            schedule.toggle_hour(hour);
            update_field!(model.schedule, schedule)
        }
        SettingsEvent::ToggleWeekday(weekday) => {
            let mut schedule = model.schedule.clone();
            schedule.toggle_weekday(&weekday);
            update_field!(model.schedule, schedule)
        }
        SettingsEvent::NetworkCredentialsChanged(credentials) => {
            update_field!(model.network.credentials, credentials)
        }
        SettingsEvent::PowerFormChanged {
            power_off_on_halt,
            wake_on_gpio,
        } => update_field!(
            model.power.power_off_on_halt, power_off_on_halt;
            model.power.wake_on_gpio, wake_on_gpio
        ),
    }
}
