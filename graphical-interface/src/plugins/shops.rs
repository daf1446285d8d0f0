use std::{cell::RefCell, rc::Rc};

use egui::{Color32, Rect, Response, Sense, Stroke, Vec2};
use walkers::{Plugin, Position, Projector};

use extractor::Shop;

use crate::state::HoverState;

const MARKER_RADIUS: f32 = 8.0;
const MARKER_FILL: Color32 = Color32::from_rgb(0, 0, 139);
const MARKER_FILL_HOVERED: Color32 = Color32::from_rgb(240, 162, 11);

/// Draws one hoverable marker per shop and reports the hovered row index
/// into the shared [`HoverState`].
pub struct Shops<'a> {
    shops: &'a [Shop],
    hover_state: Rc<RefCell<HoverState>>,
}

impl<'a> Shops<'a> {
    pub fn new(shops: &'a [Shop], hover_state: Rc<RefCell<HoverState>>) -> Self {
        Self { shops, hover_state }
    }
}

impl Plugin for Shops<'_> {
    fn run(self: Box<Self>, ui: &mut egui::Ui, _response: &Response, projector: &Projector) {
        for (index, shop) in self.shops.iter().enumerate() {
            draw_marker(
                ui,
                projector,
                index,
                shop,
                &mut self.hover_state.borrow_mut(),
            );
        }
    }
}

fn draw_marker(
    ui: &mut egui::Ui,
    projector: &Projector,
    index: usize,
    shop: &Shop,
    hover_state: &mut HoverState,
) {
    let screen_position = projector
        .project(Position::from_lat_lon(shop.lat, shop.lon))
        .to_pos2();

    let hover_area =
        Rect::from_center_size(screen_position, Vec2::splat(MARKER_RADIUS * 2.5));
    let response = ui.allocate_rect(hover_area, Sense::hover());

    let fill = if response.hovered() {
        MARKER_FILL_HOVERED
    } else {
        MARKER_FILL
    };

    ui.painter().circle(
        screen_position,
        MARKER_RADIUS,
        fill,
        Stroke::new(1.5, Color32::WHITE),
    );

    if response.hovered() {
        hover_state.hover(index);
    }
}
