use super::*;
use crate::events::{ActionEvent, CameraEvent, GalleryEvent, SettingsEvent};
use crux_core::testing::AppTester;

fn photo(filename: &str) -> PhotoRecord {
    PhotoRecord {
        filename: filename.to_string(),
        date: "2024-05-01".to_string(),
        url: format!("/photos/{filename}"),
        ..Default::default()
    }
}

#[test]
fn test_view_mirrors_model() {
    let app = AppTester::<App>::default();
    let mut model = Model::default();

    let _ = app.update(
        Event::Gallery(GalleryEvent::SetLayout(GalleryLayout::List)),
        &mut model,
    );

    assert_eq!(app.view(&model).gallery.layout, GalleryLayout::List);
}

#[test]
fn test_gallery_round_trip_through_app() {
    let app = AppTester::<App>::default();
    let mut model = Model::default();

    let _ = app.update(Event::Initialize(ViewConfig::default()), &mut model);
    let _ = app.update(
        Event::Gallery(GalleryEvent::PhotosResponse {
            request: model.gallery.latest_request,
            result: Ok(vec![photo("a.jpg"), photo("b.jpg")]),
        }),
        &mut model,
    );
    let _ = app.update(Event::Gallery(GalleryEvent::Open(0)), &mut model);
    let _ = app.update(
        Event::Gallery(GalleryEvent::KeyPressed("ArrowRight".into())),
        &mut model,
    );

    let view = app.view(&model);
    assert_eq!(view.gallery.current_index, Some(1));
    assert_eq!(view.gallery.detail.map(|d| d.title), Some("b.jpg".into()));
}

#[test]
fn test_camera_settings_hydrate_then_serialize() {
    let app = AppTester::<App>::default();
    let mut model = Model::default();
    let draft: SettingsDraft = serde_json::from_str(
        r#"{"ExposureTime": 0, "AnalogueGain": "2", "HDR": 4, "VerticalFlip": true, "AwbMode": null}"#,
    )
    .unwrap();

    let _ = app.update(
        Event::Settings(SettingsEvent::Loaded {
            resource: SettingsResource::Camera,
            result: Ok(draft),
        }),
        &mut model,
    );

    assert_eq!(model.camera.exposure_time, "0");
    assert!(model.camera.hdr_enabled);
    assert_eq!(model.camera.hdr_photos, "4");
    assert_eq!(model.camera.awb_mode, "0");

    let body = model.camera.to_draft(&model.view_config);
    assert_eq!(body.get("ExposureTime"), Some("0"));
    assert_eq!(body.get("AnalogueGain"), Some("2"));
    assert_eq!(body.get("HDR"), Some("4"));
    assert_eq!(body.get("VerticalFlip"), Some("1"));
}

#[test]
fn test_shell_events_decode_from_json() {
    let key: Event = serde_json::from_str(r#"{"Gallery":{"KeyPressed":"Escape"}}"#).unwrap();
    assert_eq!(
        key,
        Event::Gallery(GalleryEvent::KeyPressed("Escape".into()))
    );

    let action: Event = serde_json::from_str(r#"{"Action":{"Trigger":"Reboot"}}"#).unwrap();
    assert_eq!(
        action,
        Event::Action(ActionEvent::Trigger(DeviceAction::Reboot))
    );

    let date: Event =
        serde_json::from_str(r#"{"Gallery":{"SelectDate":{"Day":"2024-05-01"}}}"#).unwrap();
    assert_eq!(
        date,
        Event::Gallery(GalleryEvent::SelectDate(DateFilter::Day("2024-05-01".into())))
    );
}

#[test]
fn test_notifications_stay_in_creation_order_across_domains() {
    let app = AppTester::<App>::default();
    let mut model = Model::default();

    let _ = app.update(
        Event::Gallery(GalleryEvent::DatesResponse(Err(RequestError::NetworkFailure(
            "Failed to fetch".into(),
        )))),
        &mut model,
    );
    let _ = app.update(
        Event::Action(ActionEvent::Completed {
            action: DeviceAction::Capture,
            result: Ok(()),
        }),
        &mut model,
    );

    let messages: Vec<_> = model
        .notifications
        .iter()
        .map(|n| (n.message.as_str(), n.severity))
        .collect();
    assert_eq!(
        messages,
        vec![
            ("Error loading gallery dates", Severity::Error),
            ("Photo captured successfully!", Severity::Success),
        ]
    );
}

#[test]
fn test_stream_controls_drive_the_feed_view() {
    let app = AppTester::<App>::default();
    let mut model = Model::default();

    let _command = app.update(Event::Camera(CameraEvent::StartStream), &mut model);
    let streaming = app.view(&model).stream;
    assert_eq!(streaming.image_source, "/api/camera/stream");
    assert!(!streaming.overlay_visible);

    let _command = app.update(Event::Camera(CameraEvent::StopStream), &mut model);
    let stopped = app.view(&model).stream;
    assert_eq!(stopped.image_source, "img/camera-placeholder.jpg");
    assert!(stopped.overlay_visible);
}
