pub mod helpers;
pub mod info;
pub mod menu_bar;
pub mod overlay;
pub mod status;
pub mod viewport;
