use crux_core::{render::render, Command};

use crate::events::{Event, GalleryEvent};
use crate::model::Model;
use crate::types::{
    DateFilter, ListingStatus, NavigationKey, PhotoEntry, PhotoRecord, Severity,
};
use crate::{
    api_delete, api_get, build_url, build_url_with_query, build_url_with_segment, update_field,
    DialogCmd, Effect, NavigationCmd,
};

const DATES_ENDPOINT: &str = "/gallery/dates";
const PHOTOS_ENDPOINT: &str = "/gallery/photos";

/// Fetch the list of days that have photos
pub fn load_dates() -> Command<Effect, Event> {
    api_get!(build_url(DATES_ENDPOINT), |result: Vec<String>| {
        Event::Gallery(GalleryEvent::DatesResponse(result))
    })
}

/// Fetch the photo list for the selected date, tagging the response with a fresh request id
fn fetch_photos(model: &mut Model) -> Command<Effect, Event> {
    let request = model.gallery.begin_fetch();

    let url = match &model.gallery.selected_date {
        DateFilter::All => build_url(PHOTOS_ENDPOINT),
        DateFilter::Day(day) => {
            build_url_with_query(PHOTOS_ENDPOINT, &[("date", day.as_str())])
        }
    };

    Command::all([
        render(),
        api_get!(url, |result: Vec<PhotoEntry>| {
            let result =
                result.map(|entries| entries.into_iter().map(PhotoRecord::from).collect());
            Event::Gallery(GalleryEvent::PhotosResponse { request, result })
        }),
    ])
}

fn show(model: &mut Model, index: usize) -> Command<Effect, Event> {
    if model.gallery.show(index) {
        render()
    } else {
        Command::done()
    }
}

/// Handle gallery events
pub fn handle(event: GalleryEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        GalleryEvent::LoadDates => load_dates(),

        GalleryEvent::DatesResponse(Ok(dates)) => {
            if let DateFilter::Day(day) = &model.gallery.selected_date {
                if !dates.contains(day) {
                    model.gallery.selected_date = DateFilter::All;
                }
            }
            model.gallery.dates = dates;
            fetch_photos(model)
        }
        GalleryEvent::DatesResponse(Err(e)) => {
            log::error!("failed to load gallery dates: {e}");
            model.notify("Error loading gallery dates", Severity::Error)
        }

        GalleryEvent::SelectDate(date) => {
            model.gallery.close_detail();
            model.gallery.selected_date = date;
            fetch_photos(model)
        }

        GalleryEvent::PhotosResponse { request, result } => {
            if !model.gallery.is_latest_request(request) {
                log::debug!(
                    "discarding photo list of request {request}, {} is newer",
                    model.gallery.latest_request
                );
                return Command::done();
            }
            match result {
                Ok(photos) => {
                    model.gallery.replace_photos(photos);
                    render()
                }
                Err(e) => {
                    log::error!("failed to load gallery photos: {e}");
                    model.gallery.status = ListingStatus::Failed;
                    model.notify("Error loading gallery photos", Severity::Error)
                }
            }
        }

        GalleryEvent::Open(index) => {
            if !model.gallery.can_open() {
                return Command::done();
            }
            show(model, index)
        }
        GalleryEvent::Previous => match model.gallery.current_index {
            Some(index) if index > 0 => show(model, index - 1),
            _ => Command::done(),
        },
        GalleryEvent::Next => match model.gallery.current_index {
            Some(index) => show(model, index + 1),
            None => Command::done(),
        },
        GalleryEvent::Close => {
            if !model.gallery.is_detail_open() {
                return Command::done();
            }
            model.gallery.close_detail();
            render()
        }
        GalleryEvent::KeyPressed(key) => {
            if !model.gallery.is_detail_open() {
                return Command::done();
            }
            match NavigationKey::from_key(&key) {
                Some(NavigationKey::ArrowLeft) => handle(GalleryEvent::Previous, model),
                Some(NavigationKey::ArrowRight) => handle(GalleryEvent::Next, model),
                Some(NavigationKey::Escape) => handle(GalleryEvent::Close, model),
                None => Command::done(),
            }
        }

        GalleryEvent::DeleteCurrent => {
            let Some(photo) = model.gallery.current_photo() else {
                return Command::done();
            };
            let filename = photo.filename.clone();
            DialogCmd::confirm(format!("Are you sure you want to delete \"{filename}\"?"))
                .build()
                .then_send(move |output| {
                    Event::Gallery(GalleryEvent::DeleteConfirmed {
                        filename,
                        confirmed: output.is_confirmed(),
                    })
                })
        }
        GalleryEvent::DeleteConfirmed {
            filename,
            confirmed,
        } => {
            if !confirmed {
                return Command::done();
            }
            api_delete!(
                build_url_with_segment(PHOTOS_ENDPOINT, &filename),
                |result| Event::Gallery(GalleryEvent::DeleteResponse { filename, result })
            )
        }
        GalleryEvent::DeleteResponse { filename, result } => match result {
            Ok(()) => {
                log::info!("deleted photo {filename}");
                model.gallery.close_detail();
                Command::all([
                    model.notify("Photo deleted successfully", Severity::Success),
                    fetch_photos(model),
                ])
            }
            Err(e) => model.notify(format!("Error deleting photo: {e}"), Severity::Error),
        },

        GalleryEvent::DownloadCurrent => match model.gallery.current_photo() {
            Some(photo) => NavigationCmd::download(photo.download_url(), photo.filename.clone())
                .fire(),
            None => Command::done(),
        },
        GalleryEvent::SetLayout(layout) => update_field!(model.gallery.layout, layout),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::dialog::DialogOperation;
    use crate::commands::navigation::NavigationOperation;
    use crate::error::RequestError;
    use crate::update::tests::{effects, http_requests};
    use crux_http::protocol::HttpRequest;

    fn photo(filename: &str) -> PhotoRecord {
        PhotoRecord {
            filename: filename.to_string(),
            date: "2024-05-01".to_string(),
            time: "12:30:00".to_string(),
            thumbnail_url: format!("/thumbs/{filename}"),
            url: format!("/photos/{filename}"),
            exposure: Some("500".to_string()),
            focus: None,
        }
    }

    fn listing(names: &[&str]) -> Model {
        let mut model = Model::default();
        model
            .gallery
            .replace_photos(names.iter().map(|n| photo(n)).collect());
        model
    }

    fn single_request(cmd: &mut Command<Effect, Event>) -> HttpRequest {
        let effects = effects(cmd);
        let requests = http_requests(&effects);
        assert_eq!(requests.len(), 1);
        requests[0].clone()
    }

    #[test]
    fn open_close_open_renders_identical_detail() {
        let mut model = listing(&["a.jpg", "b.jpg", "c.jpg"]);

        let _ = handle(GalleryEvent::Open(1), &mut model);
        let first = model.gallery.detail.clone();
        let _ = handle(GalleryEvent::Close, &mut model);
        assert_eq!(model.gallery.current_index, None);
        assert_eq!(model.gallery.detail, None);
        let _ = handle(GalleryEvent::Open(1), &mut model);

        assert!(first.is_some());
        assert_eq!(model.gallery.detail, first);
        let detail = model.gallery.detail.as_ref().unwrap();
        assert_eq!(detail.title, "b.jpg");
        assert_eq!(detail.date, "May 1, 2024");
        assert_eq!(detail.exposure, "500");
        assert_eq!(detail.focus, "Unknown");
        assert!(detail.can_prev && detail.can_next);
    }

    #[test]
    fn open_out_of_range_is_ignored() {
        let mut model = listing(&["a.jpg"]);

        let _ = handle(GalleryEvent::Open(1), &mut model);

        assert!(!model.gallery.is_detail_open());
    }

    #[test]
    fn navigation_stops_at_the_bounds() {
        let mut model = listing(&["a.jpg", "b.jpg"]);

        let _ = handle(GalleryEvent::Open(0), &mut model);
        let _ = handle(GalleryEvent::Previous, &mut model);
        assert_eq!(model.gallery.current_index, Some(0));

        let _ = handle(GalleryEvent::Next, &mut model);
        assert_eq!(model.gallery.current_index, Some(1));
        let at_end = model.gallery.detail.clone();
        let _ = handle(GalleryEvent::Next, &mut model);

        assert_eq!(model.gallery.current_index, Some(1));
        assert_eq!(model.gallery.detail, at_end);
        assert!(!at_end.unwrap().can_next);
    }

    #[test]
    fn keys_only_act_in_detail_view() {
        let mut model = listing(&["a.jpg", "b.jpg"]);

        let _ = handle(GalleryEvent::KeyPressed("ArrowRight".into()), &mut model);
        assert!(!model.gallery.is_detail_open());

        let _ = handle(GalleryEvent::Open(0), &mut model);
        let _ = handle(GalleryEvent::KeyPressed("ArrowRight".into()), &mut model);
        assert_eq!(model.gallery.current_index, Some(1));
        let _ = handle(GalleryEvent::KeyPressed("ArrowLeft".into()), &mut model);
        assert_eq!(model.gallery.current_index, Some(0));
        let _ = handle(GalleryEvent::KeyPressed("Enter".into()), &mut model);
        assert_eq!(model.gallery.current_index, Some(0));
        let _ = handle(GalleryEvent::KeyPressed("Escape".into()), &mut model);
        assert!(!model.gallery.is_detail_open());
    }

    #[test]
    fn select_date_requests_filtered_list_and_shows_loading() {
        let mut model = listing(&["a.jpg"]);

        let mut cmd = handle(
            GalleryEvent::SelectDate(DateFilter::Day("2024-05-01".into())),
            &mut model,
        );
        let request = single_request(&mut cmd);

        assert_eq!(
            request.url,
            "https://relative/api/gallery/photos?date=2024-05-01"
        );
        assert_eq!(model.gallery.status, ListingStatus::Loading);
        assert_eq!(model.gallery.photos.len(), 1, "in-flight fetch keeps photos");
    }

    #[test]
    fn select_date_closes_open_detail() {
        let mut model = listing(&["a.jpg"]);
        let _ = handle(GalleryEvent::Open(0), &mut model);

        let _ = handle(GalleryEvent::SelectDate(DateFilter::All), &mut model);

        assert!(!model.gallery.is_detail_open());
        assert_eq!(model.gallery.detail, None);
    }

    #[test]
    fn superseded_photo_list_is_discarded() {
        let mut model = Model::default();
        let first = DateFilter::Day("2024-05-01".into());
        let second = DateFilter::Day("2024-05-02".into());

        let _ = handle(GalleryEvent::SelectDate(first), &mut model);
        let first_request = model.gallery.latest_request;
        let _ = handle(GalleryEvent::SelectDate(second.clone()), &mut model);
        let second_request = model.gallery.latest_request;
        let _ = handle(
            GalleryEvent::PhotosResponse {
                request: second_request,
                result: Ok(vec![photo("second.jpg")]),
            },
            &mut model,
        );
        let _ = handle(
            GalleryEvent::PhotosResponse {
                request: first_request,
                result: Ok(vec![photo("first.jpg")]),
            },
            &mut model,
        );

        assert_eq!(model.gallery.selected_date, second);
        assert_eq!(model.gallery.photos, vec![photo("second.jpg")]);
        assert_eq!(model.gallery.status, ListingStatus::Ready);
    }

    #[test]
    fn older_list_for_same_filter_cannot_restore_deleted_photo() {
        let mut model = listing(&["x.jpg", "y.jpg"]);
        let _ = handle(GalleryEvent::Open(0), &mut model);

        // A dates refresh starts a list fetch that is still in flight
        let _ = handle(
            GalleryEvent::DatesResponse(Ok(vec!["2024-05-01".into()])),
            &mut model,
        );
        let before_delete = model.gallery.latest_request;

        let _ = handle(
            GalleryEvent::DeleteResponse {
                filename: "x.jpg".into(),
                result: Ok(()),
            },
            &mut model,
        );
        let after_delete = model.gallery.latest_request;
        assert!(after_delete > before_delete);

        let _ = handle(
            GalleryEvent::PhotosResponse {
                request: after_delete,
                result: Ok(vec![photo("y.jpg")]),
            },
            &mut model,
        );
        let _ = handle(
            GalleryEvent::PhotosResponse {
                request: before_delete,
                result: Ok(vec![photo("x.jpg"), photo("y.jpg")]),
            },
            &mut model,
        );

        assert_eq!(model.gallery.photos, vec![photo("y.jpg")]);
    }

    #[test]
    fn photos_of_previous_filter_cannot_be_opened_while_loading() {
        let mut model = listing(&["old-day.jpg"]);

        let _ = handle(
            GalleryEvent::SelectDate(DateFilter::Day("2024-05-02".into())),
            &mut model,
        );
        let mut cmd = handle(GalleryEvent::Open(0), &mut model);

        assert!(effects(&mut cmd).is_empty());
        assert!(!model.gallery.is_detail_open());
        assert_eq!(model.gallery.detail, None);

        let _ = handle(
            GalleryEvent::PhotosResponse {
                request: model.gallery.latest_request,
                result: Err(RequestError::server(500, "boom")),
            },
            &mut model,
        );
        let _ = handle(GalleryEvent::Open(0), &mut model);
        assert!(!model.gallery.is_detail_open());
    }

    #[test]
    fn empty_list_shows_empty_placeholder() {
        let mut model = Model::default();

        let _ = handle(
            GalleryEvent::PhotosResponse {
                request: model.gallery.latest_request,
                result: Ok(vec![]),
            },
            &mut model,
        );

        assert_eq!(model.gallery.status.placeholder(), Some("No photos found"));
    }

    #[test]
    fn failed_list_keeps_photos_and_notifies() {
        let mut model = listing(&["a.jpg"]);

        let _ = handle(
            GalleryEvent::PhotosResponse {
                request: model.gallery.latest_request,
                result: Err(RequestError::server(500, "boom")),
            },
            &mut model,
        );

        assert_eq!(model.gallery.status, ListingStatus::Failed);
        assert_eq!(model.gallery.photos, vec![photo("a.jpg")]);
        assert_eq!(model.notifications[0].message, "Error loading gallery photos");
        assert_eq!(model.notifications[0].severity, Severity::Error);
    }

    #[test]
    fn dates_response_refetches_current_filter() {
        let mut model = Model::default();
        model.gallery.selected_date = DateFilter::Day("2023-01-01".into());

        let mut cmd = handle(
            GalleryEvent::DatesResponse(Ok(vec!["2024-05-01".into()])),
            &mut model,
        );
        let request = single_request(&mut cmd);

        assert_eq!(model.gallery.dates, vec!["2024-05-01".to_string()]);
        assert_eq!(model.gallery.selected_date, DateFilter::All);
        assert_eq!(request.url, "https://relative/api/gallery/photos");
    }

    #[test]
    fn delete_asks_for_confirmation_first() {
        let mut model = listing(&["a.jpg"]);
        let _ = handle(GalleryEvent::Open(0), &mut model);

        let mut cmd = handle(GalleryEvent::DeleteCurrent, &mut model);
        let dialog = effects(&mut cmd).into_iter().find_map(|e| match e {
            Effect::Dialog(request) => Some(request.operation.clone()),
            _ => None,
        });

        assert_eq!(
            dialog,
            Some(DialogOperation::Confirm {
                message: "Are you sure you want to delete \"a.jpg\"?".to_string()
            })
        );
    }

    #[test]
    fn declined_delete_sends_nothing() {
        let mut model = listing(&["a.jpg"]);
        let _ = handle(GalleryEvent::Open(0), &mut model);

        let mut cmd = handle(
            GalleryEvent::DeleteConfirmed {
                filename: "a.jpg".into(),
                confirmed: false,
            },
            &mut model,
        );

        assert!(effects(&mut cmd).is_empty());
        assert!(model.gallery.is_detail_open());
    }

    #[test]
    fn deleting_open_photo_closes_detail_and_refetches() {
        let mut model = listing(&["a b.jpg", "c.jpg"]);
        let _ = handle(GalleryEvent::Open(0), &mut model);

        let mut cmd = handle(
            GalleryEvent::DeleteConfirmed {
                filename: "a b.jpg".into(),
                confirmed: true,
            },
            &mut model,
        );
        let request = single_request(&mut cmd);
        assert_eq!(request.method, "DELETE");
        assert_eq!(
            request.url,
            "https://relative/api/gallery/photos/a%20b.jpg"
        );

        let mut cmd = handle(
            GalleryEvent::DeleteResponse {
                filename: "a b.jpg".into(),
                result: Ok(()),
            },
            &mut model,
        );
        let refetch = single_request(&mut cmd);
        assert_eq!(refetch.url, "https://relative/api/gallery/photos");
        assert!(!model.gallery.is_detail_open());
        assert_eq!(model.notifications[0].message, "Photo deleted successfully");

        let _ = handle(
            GalleryEvent::PhotosResponse {
                request: model.gallery.latest_request,
                result: Ok(vec![photo("c.jpg")]),
            },
            &mut model,
        );
        assert!(model.gallery.photos.iter().all(|p| p.filename != "a b.jpg"));
    }

    #[test]
    fn failed_delete_keeps_detail_open() {
        let mut model = listing(&["a.jpg"]);
        let _ = handle(GalleryEvent::Open(0), &mut model);

        let _ = handle(
            GalleryEvent::DeleteResponse {
                filename: "a.jpg".into(),
                result: Err(RequestError::server(404, "Photo not found")),
            },
            &mut model,
        );

        assert!(model.gallery.is_detail_open());
        assert_eq!(
            model.notifications[0].message,
            "Error deleting photo: Photo not found"
        );
    }

    #[test]
    fn replaced_list_refreshes_open_detail() {
        let mut model = listing(&["a.jpg", "b.jpg"]);
        let _ = handle(GalleryEvent::Open(1), &mut model);

        let _ = handle(
            GalleryEvent::PhotosResponse {
                request: model.gallery.latest_request,
                result: Ok(vec![photo("a.jpg")]),
            },
            &mut model,
        );

        assert!(!model.gallery.is_detail_open());
    }

    #[test]
    fn download_targets_attachment_url() {
        let mut model = listing(&["a.jpg"]);
        let _ = handle(GalleryEvent::Open(0), &mut model);

        let mut cmd = handle(GalleryEvent::DownloadCurrent, &mut model);
        let navigation = effects(&mut cmd).into_iter().find_map(|e| match e {
            Effect::Navigation(request) => Some(request.operation.clone()),
            _ => None,
        });

        assert_eq!(
            navigation,
            Some(NavigationOperation::Download {
                url: "/photos/a.jpg?download=1".into(),
                filename: "a.jpg".into(),
            })
        );
    }
}
