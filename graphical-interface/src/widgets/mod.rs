mod tooltip;

pub use tooltip::WidgetTooltip;
