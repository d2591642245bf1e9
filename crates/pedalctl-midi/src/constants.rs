pub const MIDI_OUTPUT_CLIENT_NAME: &str = "Pedal Control MIDI Output";
pub const MIDI_OUTPUT_CONNECTION_NAME: &str = "Pedal Control MIDI Output Connection";
pub const PEDAL_EVENT_CHANNEL_CAPACITY: usize = 64;
pub const PORT_NOT_FOUND_REASON: &str = "the port is not available";
pub const UNKNOWN_MIDI_PORT_NAME_MESSAGE: &str = "Unknown";
