use crate::bindings::ControlId;
use crate::midi_events::ControlValue;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MappingError {
    #[error("MIDI channel {0} is outside of the 1-16 range")]
    InvalidChannel(i32),

    #[error("Could not read a MIDI channel from {0:?}")]
    UnparsableChannel(String),

    #[error("Unknown control identifier {0:?}")]
    UnknownControl(String),

    #[error("Option {index} is out of range for {control}, which has {count} options")]
    IndexOutOfRange {
        control: ControlId,
        index: i32,
        count: usize,
    },

    #[error("{control} does not accept {value:?}")]
    ValueKindMismatch {
        control: ControlId,
        value: ControlValue,
    },
}
