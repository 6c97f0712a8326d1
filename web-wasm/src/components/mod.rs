pub mod header;
pub mod upload_area;
pub mod loading;
pub mod confidence_bar;
pub mod results_panel;
pub mod export_buttons;
pub mod notifications;
