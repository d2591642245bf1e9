pub mod bindings;
pub mod defaults;
pub mod error;
pub mod message_log;
pub mod midi_events;
pub mod ui_events;
