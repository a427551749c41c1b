//! Type definitions for appswitch preferences and configured apps

mod app_types;
mod preference_types;

pub use app_types::*;
pub use preference_types::*;
