use pedalctl_types::bindings::ChannelSource;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UIMidiPort {
    pub output_ports: Vec<String>,
    pub output_port_index: i32,
    pub channels: Vec<String>,
    pub looper_channel_index: i32,
    pub walrus_channel_index: i32,
}

impl UIMidiPort {
    pub fn set_channel_index(&mut self, source: ChannelSource, index: i32) {
        match source {
            ChannelSource::Looper => self.looper_channel_index = index,
            ChannelSource::Walrus => self.walrus_channel_index = index,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_channel_index_only_updates_the_matching_source() {
        let mut midi_port = UIMidiPort::default();

        midi_port.set_channel_index(ChannelSource::Walrus, 5);
        assert_eq!(midi_port.walrus_channel_index, 5);
        assert_eq!(midi_port.looper_channel_index, 0);

        midi_port.set_channel_index(ChannelSource::Looper, 15);
        assert_eq!(midi_port.looper_channel_index, 15);
        assert_eq!(midi_port.walrus_channel_index, 5);
    }
}
