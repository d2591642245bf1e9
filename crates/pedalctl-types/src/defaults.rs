pub struct Defaults {}

impl Defaults {
    // MIDI Defaults
    pub const MIDI_CHANNEL_NUMBER: u8 = 1;
    pub const MIDI_CHANNEL_COUNT: u8 = 16;
    pub const NO_OUTPUT_PORT_NAME: &'static str = "None";
    pub const NO_OUTPUT_PORT_INDEX: i32 = 0;

    // Device Monitor Defaults
    pub const DEVICE_POLL_INTERVAL_MILLISECONDS: u64 = 2000;

    // Message Log Defaults
    pub const MESSAGE_LOG_CAPACITY: usize = 200;

    // Control Defaults
    pub const TOGGLE_OFF_VALUE: u8 = 0;
    pub const TOGGLE_ON_VALUE: u8 = 127;
    pub const MINIMUM_DATA_VALUE: i32 = 0;
    pub const MAXIMUM_DATA_VALUE: i32 = 127;
}

pub const MIDI_CHANNEL_LIST: [&str; 16] = [
    "1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11", "12", "13", "14", "15", "16",
];
