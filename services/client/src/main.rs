use std::sync::Arc;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::FmtSubscriber;

use client::{
    ClientConfig, EquipTrack, NotificationKind,
    format::format_currency,
    icons::{EquipmentImage, load_equipment_icons},
    models::EquipmentFilters,
    notification::LogSurface,
    session::LogNavigator,
};

#[tokio::main]
async fn main() -> Result<()> {
    let config = ClientConfig::from_env()?;

    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.level())
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let app = EquipTrack::from_config(&config, Arc::new(LogNavigator), Arc::new(LogSurface))?;
    info!("EquipTrack initialized");

    // Check for user session
    if let Some(user) = app.session.current_user()? {
        info!(
            "User logged in: {}",
            user.email.as_deref().unwrap_or("<unknown>")
        );
    }

    let equipment = app.equipment.load_equipment(&EquipmentFilters::new()).await;

    let mut images: Vec<EquipmentImage> =
        equipment.iter().map(EquipmentImage::for_equipment).collect();
    load_equipment_icons(&mut images);

    for item in &equipment {
        let rate = item
            .daily_rate
            .map(format_currency)
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:<12} {:<32} {:>12}/day",
            item.equipment_code.as_deref().unwrap_or("-"),
            item.name.as_deref().unwrap_or("-"),
            rate
        );
    }

    app.notifications
        .show_notification(
            format!("{} items available", equipment.len()),
            NotificationKind::Info,
        )
        .await?;

    Ok(())
}
