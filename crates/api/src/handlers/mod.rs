//! HTTP request handlers, one module per resource.

pub mod canvas;
pub mod component;
pub mod data_mode;
pub mod design_system;
pub mod project;
pub mod token;
