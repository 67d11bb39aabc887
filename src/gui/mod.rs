/*
 * The figure window: a scene description of both panels, the painter that
 * draws one panel, the edge listing, and the eframe app tying them together.
 */

pub mod app;
pub mod edge_table;
pub mod figure;
pub mod panel;
