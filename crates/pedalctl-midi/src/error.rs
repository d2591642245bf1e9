use pedalctl_types::error::MappingError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MidiError {
    #[error("Could not open MIDI output port {port:?}: {reason}")]
    PortOpenFailure { port: String, reason: String },

    #[error("No MIDI output port is open")]
    NoPortOpen,

    #[error("Could not send MIDI message: {0}")]
    SendFailure(String),

    #[error(transparent)]
    Mapping(#[from] MappingError),
}
