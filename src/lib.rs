//! AIOH TUI - terminal front-end for the All in One Holdings site
//!
//! Header navigation with dropdown menus, service pages, location
//! carousels and a lead-generation contact form that posts through the
//! EmailJS REST API.
//!
//! The lead core in [`lead`] carries no UI types. It can be driven by any
//! front-end that supplies a [`relay::MailRelay`] and a [`relay::Notifier`].

pub mod app;
pub mod config;
pub mod content;
pub mod lead;
pub mod platform;
pub mod relay;
pub mod state;
pub mod ui;
