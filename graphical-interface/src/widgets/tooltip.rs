use egui::{Color32, RichText};

use extractor::Shop;

use crate::colors::member_color;

const PANEL_WIDTH: f32 = 300.0;

/// The on-hover detail panel for one shop: photo, member name in the
/// member's color, shop name, and the address / hours / closed-days blocks.
pub struct WidgetTooltip<'a> {
    shop: &'a Shop,
}

impl<'a> WidgetTooltip<'a> {
    pub fn new(shop: &'a Shop) -> Self {
        Self { shop }
    }

    pub fn show(&self, ctx: &egui::Context) {
        egui::Window::new("shop_tooltip")
            .title_bar(false)
            .resizable(false)
            .collapsible(false)
            .fixed_pos([20.0, 20.0])
            .show(ctx, |ui| {
                ui.set_width(PANEL_WIDTH);
                ui.visuals_mut().override_text_color = Some(egui::Color32::WHITE);
                ui.visuals_mut().widgets.noninteractive.bg_fill = egui::Color32::from_gray(30);

                ui.add(
                    egui::Image::new(self.shop.image_url.as_str())
                        .max_width(PANEL_WIDTH)
                        .rounding(4.0),
                );

                ui.add_space(6.0);
                ui.label(
                    RichText::new(&self.shop.member)
                        .size(16.0)
                        .color(member_color(&self.shop.member)),
                );
                ui.label(
                    RichText::new(&self.shop.name)
                        .strong()
                        .size(20.0)
                        .color(Color32::from_rgb(100, 149, 237)),
                );

                section(ui, "[住所]", &self.shop.address);
                section(ui, "[営業時間]", &self.shop.hours);
                section(ui, "[定休日]", &self.shop.holidays);
            });
    }
}

/// One labeled block. Internal whitespace in the value becomes line breaks,
/// so both address variants (space-joined and newline-joined) wrap the same
/// way.
fn section(ui: &mut egui::Ui, label: &str, value: &str) {
    ui.add_space(8.0);
    ui.label(RichText::new(label).strong().size(14.0));
    for line in value.split_whitespace() {
        ui.label(RichText::new(line).size(14.0));
    }
}
