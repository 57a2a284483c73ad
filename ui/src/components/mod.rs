//! The components module contains the building blocks of the converter: Pico.css
//! wrappers, the rate line, the quantity fields, the unit switch and the widget itself.
pub mod converter;
pub mod pico;
pub mod quantity_input;
pub mod rate_line;
pub mod unit_switch;
