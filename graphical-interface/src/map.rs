use std::{cell::RefCell, rc::Rc};

use egui::Context;
use egui_extras::install_image_loaders;
use walkers::{HttpOptions, HttpTiles, Map, MapMemory, Position, Tiles};

use extractor::Shop;

use crate::{plugins, state::HoverState, widgets::WidgetTooltip, windows};

// Numazu station area, the center of the stamp-rally course.
const INITIAL_LAT: f64 = 35.095974;
const INITIAL_LON: f64 = 138.863655;
const INITIAL_ZOOM: f64 = 12.;

/// The main application struct: the tile source, the immutable shop table
/// and the per-frame hover state feeding the tooltip.
pub struct MapApp {
    tiles: Box<dyn Tiles>,
    map_memory: MapMemory,
    hover_state: Rc<RefCell<HoverState>>,
    shops: Vec<Shop>,
    current_location: Option<Position>,
}

impl MapApp {
    /// Creates a new `MapApp` over an already-extracted shop table.
    pub fn new(egui_ctx: Context, shops: Vec<Shop>, current_location: Option<Position>) -> Self {
        install_image_loaders(&egui_ctx);
        let mut initial_map_memory = MapMemory::default();
        let _ = initial_map_memory.set_zoom(INITIAL_ZOOM);

        Self {
            tiles: Box::new(HttpTiles::with_options(
                walkers::sources::OpenStreetMap,
                HttpOptions::default(),
                egui_ctx.to_owned(),
            )),
            map_memory: initial_map_memory,
            hover_state: Rc::new(RefCell::new(HoverState::new())),
            shops,
            current_location,
        }
    }

    /// The shop to render a tooltip for, if any.
    ///
    /// An index that does not resolve into the table means no tooltip, never
    /// an error. A hovered point whose coordinates exactly equal the
    /// current-location marker is suppressed as well.
    fn hovered_shop(&self) -> Option<&Shop> {
        let index = self.hover_state.borrow().shop?;
        let shop = self.shops.get(index)?;

        if let Some(here) = self.current_location {
            if Position::from_lat_lon(shop.lat, shop.lon) == here {
                return None;
            }
        }

        Some(shop)
    }
}

impl eframe::App for MapApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Hover is re-reported by the plugin on every frame.
        self.hover_state.borrow_mut().clear();

        let rimless = egui::Frame {
            fill: ctx.style().visuals.panel_fill,
            ..Default::default()
        };

        egui::CentralPanel::default()
            .frame(rimless)
            .show(ctx, |ui| {
                let home = Position::from_lat_lon(INITIAL_LAT, INITIAL_LON);

                let tiles = self.tiles.as_mut();

                let shops_plugin = plugins::Shops::new(&self.shops, self.hover_state.clone());

                let mut map =
                    Map::new(Some(tiles), &mut self.map_memory, home).with_plugin(shops_plugin);

                if let Some(position) = self.current_location {
                    map = map.with_plugin(plugins::CurrentLocation::new(position));
                }

                ui.add(map);

                if let Some(shop) = self.hovered_shop() {
                    WidgetTooltip::new(shop).show(ctx);
                }

                windows::zoom(ui, &mut self.map_memory);
            });
    }
}
