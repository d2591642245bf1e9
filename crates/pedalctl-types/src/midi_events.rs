use crate::bindings::{ChannelSource, ControlId};
use crate::defaults::Defaults;
use crate::error::MappingError;
use std::fmt;
use std::str::FromStr;

const CONTROL_CHANGE_STATUS: u8 = 0xB0;
const PROGRAM_CHANGE_STATUS: u8 = 0xC0;
const STATUS_BYTE_CHANNEL_MASK: u8 = 0x0F;
const DATA_BYTE_MASK: u8 = 0x7F;
const RAW_CHANNEL_TO_USER_READABLE_CHANNEL_OFFSET: u8 = 1;

/// A MIDI channel stored as its wire value (0-15) and shown to users as 1-16.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MidiChannel(u8);

impl MidiChannel {
    pub fn from_number(number: i32) -> Result<Self, MappingError> {
        if (1..=i32::from(Defaults::MIDI_CHANNEL_COUNT)).contains(&number) {
            Ok(Self(
                (number - i32::from(RAW_CHANNEL_TO_USER_READABLE_CHANNEL_OFFSET)) as u8,
            ))
        } else {
            Err(MappingError::InvalidChannel(number))
        }
    }

    pub fn number(self) -> u8 {
        self.0 + RAW_CHANNEL_TO_USER_READABLE_CHANNEL_OFFSET
    }

    pub fn wire(self) -> u8 {
        self.0
    }
}

impl Default for MidiChannel {
    fn default() -> Self {
        Self(Defaults::MIDI_CHANNEL_NUMBER - RAW_CHANNEL_TO_USER_READABLE_CHANNEL_OFFSET)
    }
}

impl FromStr for MidiChannel {
    type Err = MappingError;

    fn from_str(channel: &str) -> Result<Self, Self::Err> {
        let number = channel
            .trim()
            .parse::<i32>()
            .map_err(|_| MappingError::UnparsableChannel(channel.to_string()))?;
        Self::from_number(number)
    }
}

impl fmt::Display for MidiChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MidiMessage {
    ControlChange {
        channel: MidiChannel,
        controller: u8,
        value: u8,
    },
    ProgramChange {
        channel: MidiChannel,
        program: u8,
    },
}

impl MidiMessage {
    pub fn channel(&self) -> MidiChannel {
        match self {
            Self::ControlChange { channel, .. } | Self::ProgramChange { channel, .. } => *channel,
        }
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        match *self {
            Self::ControlChange {
                channel,
                controller,
                value,
            } => vec![
                CONTROL_CHANGE_STATUS | (channel.wire() & STATUS_BYTE_CHANNEL_MASK),
                controller & DATA_BYTE_MASK,
                value & DATA_BYTE_MASK,
            ],
            Self::ProgramChange { channel, program } => vec![
                PROGRAM_CHANGE_STATUS | (channel.wire() & STATUS_BYTE_CHANNEL_MASK),
                program & DATA_BYTE_MASK,
            ],
        }
    }
}

impl fmt::Display for MidiMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ControlChange {
                channel,
                controller,
                value,
            } => write!(f, "CC {controller} = {value} on channel {channel}"),
            Self::ProgramChange { channel, program } => {
                write!(f, "PC {program} on channel {channel}")
            }
        }
    }
}

/// The raw value a UI control reports when it changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlValue {
    Toggle(bool),
    Continuous(i32),
    Index(i32),
}

/// Events sent to the MIDI module from the UI and the device monitor.
#[derive(Debug, Clone, PartialEq)]
pub enum PedalEvents {
    UIOutputPort(Option<String>),
    UIChannel(ChannelSource, String),
    UIControl(ControlId, ControlValue),
    OutputPortList(Vec<String>),
    RefreshOutputPorts,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_number_maps_user_channel_to_wire_channel() {
        for number in 1..=16 {
            let channel = MidiChannel::from_number(number).unwrap();
            assert_eq!(i32::from(channel.wire()), number - 1);
            assert_eq!(i32::from(channel.number()), number);
        }
    }

    #[test]
    fn from_number_rejects_channels_outside_of_range() {
        assert_eq!(
            MidiChannel::from_number(0),
            Err(MappingError::InvalidChannel(0))
        );
        assert_eq!(
            MidiChannel::from_number(17),
            Err(MappingError::InvalidChannel(17))
        );
    }

    #[test]
    fn from_str_parses_dropdown_text() {
        let channel: MidiChannel = "10".parse().unwrap();
        assert_eq!(channel.wire(), 9);
        assert_eq!(
            "Omni".parse::<MidiChannel>(),
            Err(MappingError::UnparsableChannel("Omni".to_string()))
        );
    }

    #[test]
    fn default_channel_is_the_first_channel() {
        assert_eq!(MidiChannel::default().number(), 1);
        assert_eq!(MidiChannel::default().wire(), 0);
    }

    #[test]
    fn control_change_to_bytes_builds_three_byte_message() {
        let message = MidiMessage::ControlChange {
            channel: MidiChannel::from_number(3).unwrap(),
            controller: 103,
            value: 127,
        };
        assert_eq!(message.to_bytes(), vec![0xB2, 103, 127]);
    }

    #[test]
    fn program_change_to_bytes_builds_two_byte_message() {
        let message = MidiMessage::ProgramChange {
            channel: MidiChannel::from_number(16).unwrap(),
            program: 8,
        };
        assert_eq!(message.to_bytes(), vec![0xCF, 8]);
    }

    #[test]
    fn display_shows_user_readable_channel() {
        let message = MidiMessage::ControlChange {
            channel: MidiChannel::from_number(1).unwrap(),
            controller: 28,
            value: 43,
        };
        assert_eq!(message.to_string(), "CC 28 = 43 on channel 1");
    }
}
