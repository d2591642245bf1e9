use pedalctl_types::bindings::{ChannelSource, ControlBinding, ControlId};
use pedalctl_types::error::MappingError;
use pedalctl_types::midi_events::{ControlValue, MidiChannel, MidiMessage};

/// The channel currently selected for each pedal group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChannelState {
    pub looper: MidiChannel,
    pub walrus: MidiChannel,
}

impl ChannelState {
    pub fn get(&self, source: ChannelSource) -> MidiChannel {
        match source {
            ChannelSource::Looper => self.looper,
            ChannelSource::Walrus => self.walrus,
        }
    }

    pub fn set(&mut self, source: ChannelSource, channel: MidiChannel) {
        match source {
            ChannelSource::Looper => self.looper = channel,
            ChannelSource::Walrus => self.walrus = channel,
        }
    }
}

/// Resolves control changes into MIDI messages through the binding table.
#[derive(Debug, Clone, Default)]
pub struct ControlMapper {
    channels: ChannelState,
}

impl ControlMapper {
    pub fn new(channels: ChannelState) -> Self {
        Self { channels }
    }

    pub fn channels(&self) -> ChannelState {
        self.channels
    }

    pub fn set_channel(&mut self, source: ChannelSource, channel: MidiChannel) {
        log::debug!("set_channel(): {source} channel set to {channel}.");
        self.channels.set(source, channel);
    }

    pub fn resolve(
        &self,
        control: ControlId,
        value: ControlValue,
    ) -> Result<MidiMessage, MappingError> {
        let binding = control.binding();
        let data_value = binding.transform.apply(control, value)?;
        let channel = self.channels.get(binding.channel_source);
        Ok(binding.kind.message(channel, data_value))
    }
}

pub fn describe_control_message(
    binding: &ControlBinding,
    value: ControlValue,
    message: &MidiMessage,
) -> String {
    let setting = match value {
        ControlValue::Toggle(true) => "on".to_string(),
        ControlValue::Toggle(false) => "off".to_string(),
        ControlValue::Continuous(raw) => raw.to_string(),
        ControlValue::Index(index) => binding
            .transform
            .option_label(value)
            .map_or_else(|| index.to_string(), ToString::to_string),
    };

    format!("{} {} {setting}: {message}", binding.pedal, binding.label)
}
