//! UI layer for the desktop catalog: app shell, filter panel, and product table.

pub mod app;
pub mod panels;
pub mod table;
pub mod theme;

pub use app::ProductTableApp;
