use anyhow::Result;
use crux_core::typegen::TypeGen;
use std::path::PathBuf;
use trailcam_ui_core::{
    events::{
        ActionEvent, CameraEvent, GalleryEvent, LogEvent, NotificationEvent, SettingsEvent,
        TelemetryEvent,
    },
    types::{DateFilter, DeviceAction, GalleryLayout, ListingStatus, SettingsResource, Severity},
    App, DialogOutput, NavigationOperation, TimerOutput,
};

fn main() -> Result<()> {
    println!("cargo:rerun-if-changed=../app");

    let mut gen = TypeGen::new();

    gen.register_app::<App>()?;

    // Explicitly register domain event enums to ensure all variants are traced
    gen.register_type::<NotificationEvent>()?;
    gen.register_type::<TelemetryEvent>()?;
    gen.register_type::<GalleryEvent>()?;
    gen.register_type::<SettingsEvent>()?;
    gen.register_type::<CameraEvent>()?;
    gen.register_type::<ActionEvent>()?;
    gen.register_type::<LogEvent>()?;

    // Explicitly register other enums to ensure all variants are traced
    gen.register_type::<DateFilter>()?;
    gen.register_type::<ListingStatus>()?;
    gen.register_type::<GalleryLayout>()?;
    gen.register_type::<Severity>()?;
    gen.register_type::<DeviceAction>()?;
    gen.register_type::<SettingsResource>()?;

    // Shell command outputs
    gen.register_type::<TimerOutput>()?;
    gen.register_type::<DialogOutput>()?;
    gen.register_type::<NavigationOperation>()?;

    let output_root = PathBuf::from("./generated");

    gen.typescript("shared_types", output_root.join("typescript"))?;

    Ok(())
}
