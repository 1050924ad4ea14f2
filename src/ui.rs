pub mod controls;
pub mod poly_plot;
pub mod schematic;
pub mod tick_history;
pub mod window;
