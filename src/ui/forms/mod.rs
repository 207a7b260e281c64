//! Form rendering

mod contact_form;
mod field_renderer;

pub use contact_form::{contact_layout, draw as draw_contact, picker_rect, ContactLayout};
