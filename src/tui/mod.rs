pub mod app;
pub mod events;
pub mod fetcher;
pub mod icons;
pub mod theme;
pub mod widgets;
