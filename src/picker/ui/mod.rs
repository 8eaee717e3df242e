pub mod app_state;
pub mod commands;
pub mod components;
pub mod events;
pub mod renderer;
pub mod view_model;
