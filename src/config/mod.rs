// src/config/mod.rs

pub mod events;
pub mod plugin;
pub mod resource;

pub use events::{
    ApplyConfigEvent, ConfigChangedEvent, ConsultationRequestEvent, RandomizeRequestEvent,
};
pub use plugin::ConfigPlugin;
pub use resource::{ChangeScope, ConfigPatch, PotteryConfiguration};
