use egui::{Color32, Response, Stroke};
use walkers::{Plugin, Position, Projector};

const MARKER_RADIUS: f32 = 9.0;
const MARKER_FILL: Color32 = Color32::from_rgb(231, 76, 60);

/// Marker for the viewer's approximate position.
///
/// Deliberately non-interactive: it allocates no hover sense, so it can
/// never produce a tooltip.
pub struct CurrentLocation {
    position: Position,
}

impl CurrentLocation {
    pub fn new(position: Position) -> Self {
        Self { position }
    }
}

impl Plugin for CurrentLocation {
    fn run(self: Box<Self>, ui: &mut egui::Ui, _response: &Response, projector: &Projector) {
        let screen_position = projector.project(self.position).to_pos2();

        ui.painter().circle(
            screen_position,
            MARKER_RADIUS,
            MARKER_FILL,
            Stroke::new(2.0, Color32::WHITE),
        );
    }
}
