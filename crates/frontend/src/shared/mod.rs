pub mod components;
pub mod config;
pub mod context;
pub mod date_utils;
pub mod icons;
