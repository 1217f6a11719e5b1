pub mod rain_field;
pub mod stats_panel;
pub mod typing_area;
