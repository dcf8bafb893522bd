// Module exports for models

pub mod cell;
pub mod selection;
pub mod settings;
pub mod view;
