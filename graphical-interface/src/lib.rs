pub mod geolocate;

mod colors;
mod map;
mod plugins;
mod state;
mod widgets;
mod windows;

use extractor::Shop;
use logger::Logger;
use map::MapApp;

/// Opens the map window over the given shop table.
///
/// The table is extracted once before this call and stays read-only for the
/// lifetime of the window. When `show_current_location` is set, the viewer's
/// approximate position is resolved once, before the event loop starts;
/// failure is logged and the marker omitted.
pub fn run(
    shops: Vec<Shop>,
    show_current_location: bool,
    logger: Logger,
) -> Result<(), eframe::Error> {
    let current_location = if show_current_location {
        let position = geolocate::current_position();
        if position.is_none() {
            let _ = logger.warn(
                "IP geolocation failed, current-location marker omitted",
                true,
            );
        }
        position
    } else {
        None
    };

    eframe::run_native(
        "沼津 まちあるき スタンプ 設置店舗",
        Default::default(),
        Box::new(move |cc| {
            Ok(Box::new(MapApp::new(
                cc.egui_ctx.clone(),
                shops,
                current_location,
            )))
        }),
    )
}
