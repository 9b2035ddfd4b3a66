pub mod config;
pub mod consts;
pub mod dispatch;
pub mod error;
pub mod format;
pub mod geometry;
pub mod overlay;
pub mod payload;
pub mod record;
pub mod registry;
pub mod resize;
pub mod view;
