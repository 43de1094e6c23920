/// Macro for model field updates with automatic rendering.
/// Supports both single and multiple field updates.
///
/// # Examples
///
/// Single field update:
/// ```ignore
/// update_field!(model.gallery.layout, layout)
/// ```
///
/// Multiple field updates:
/// ```ignore
/// update_field!(
///     model.camera.hdr_enabled, true;
///     model.camera.hdr_photos, "5".to_string()
/// )
/// ```
#[macro_export]
macro_rules! update_field {
    // Multiple field updates (must come first to match the pattern)
    ($($model_field:expr, $value:expr);+ $(;)?) => {{
        let mut changed = false;
        $(
            let value = $value;
            if $model_field != value {
                $model_field = value;
                changed = true;
            }
        )+
        if changed {
            crux_core::render::render()
        } else {
            crux_core::Command::done()
        }
    }};

    // Single field update
    ($model_field:expr, $value:expr) => {{
        update_field!($model_field, $value;)
    }};
}

/// Macro for GET requests expecting a JSON response.
///
/// The closure receives the decoded `RequestResult<T>` and builds the event sent
/// back into the core; it is `move`, so request tags can be captured by value.
///
/// # Example
/// ```ignore
/// api_get!(build_url("/gallery/dates"), |result: Vec<String>| {
///     Event::Gallery(GalleryEvent::DatesResponse(result))
/// })
/// ```
#[macro_export]
macro_rules! api_get {
    ($url:expr, |$result:ident: $response_type:ty| $event:expr) => {
        $crate::HttpCmd::get($url)
            .build()
            .then_send(move |response| {
                let $result: $crate::RequestResult<$response_type> =
                    $crate::process_json_response(response);
                $event
            })
    };
}

/// Macro for POST requests with standard error handling.
///
/// # Patterns
///
/// Pattern 1: POST without body (status only)
/// ```ignore
/// api_post!(build_url("/system/reboot"), |result| {
///     Event::Action(ActionEvent::Completed { action, result })
/// })
/// ```
///
/// Pattern 2: POST without body expecting JSON response
/// ```ignore
/// api_post!(build_url("/system/toggle-lights"), expect_json: ToggleLightsResponse, |result| {
///     Event::Action(ActionEvent::LightsToggled(result))
/// })
/// ```
///
/// Pattern 3: POST with JSON body (status only)
/// ```ignore
/// api_post!(build_url("/camera/settings"), body_json: &draft, |result| {
///     Event::Settings(SettingsEvent::Submitted { resource, result })
/// })
/// ```
///
/// A body that cannot be encoded never reaches the shell; the closure is
/// invoked right away with the error.
#[macro_export]
macro_rules! api_post {
    // Pattern 1: POST without body (status only)
    ($url:expr, |$result:ident| $event:expr) => {
        $crate::HttpCmd::post($url)
            .build()
            .then_send(move |response| {
                let $result: $crate::RequestResult<()> =
                    $crate::process_status_response(response);
                $event
            })
    };

    // Pattern 2: POST without body expecting JSON response
    ($url:expr, expect_json: $response_type:ty, |$result:ident| $event:expr) => {
        $crate::HttpCmd::post($url)
            .build()
            .then_send(move |response| {
                let $result: $crate::RequestResult<$response_type> =
                    $crate::process_json_response(response);
                $event
            })
    };

    // Pattern 3: POST with JSON body (status only)
    ($url:expr, body_json: $body:expr, |$result:ident| $event:expr) => {
        match $crate::HttpCmd::post($url)
            .header("Content-Type", "application/json")
            .body_json($body)
        {
            Ok(builder) => builder.build().then_send(move |response| {
                let $result: $crate::RequestResult<()> =
                    $crate::process_status_response(response);
                $event
            }),
            Err(e) => {
                log::error!("failed to encode request body: {e}");
                let $result: $crate::RequestResult<()> = Err($crate::map_http_error(e));
                crux_core::Command::event($event)
            }
        }
    };
}

/// Macro for DELETE requests (status only).
///
/// # Example
/// ```ignore
/// api_delete!(url, |result| Event::Gallery(GalleryEvent::DeleteResponse { filename, result }))
/// ```
#[macro_export]
macro_rules! api_delete {
    ($url:expr, |$result:ident| $event:expr) => {
        $crate::HttpCmd::delete($url)
            .build()
            .then_send(move |response| {
                let $result: $crate::RequestResult<()> =
                    $crate::process_status_response(response);
                $event
            })
    };
}
