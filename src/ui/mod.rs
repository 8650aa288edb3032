//! Terminal front end: one page at a time, driven by key presses and
//! settled fetches.

pub mod app;
pub mod dashboard;
pub mod events;
pub mod footer;
pub mod form;
pub mod header;
pub mod home;
pub mod input;
pub mod layout;
pub mod movie_details;
pub mod mvi;
pub mod remote;
pub mod render;
pub mod route;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
