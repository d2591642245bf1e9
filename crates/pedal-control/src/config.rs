use anyhow::Result;
use clap::Parser;
use pedalctl_midi::{ChannelState, MidiOptions};
use pedalctl_types::defaults::Defaults;
use pedalctl_types::midi_events::MidiChannel;
use std::time::Duration;

/// MIDI control panel for a LoopeRhino looper and a Walrus Mako D1 delay.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Config {
    /// Open this MIDI output port at start-up
    #[arg(long)]
    pub port: Option<String>,

    /// Initial LoopeRhino MIDI channel
    #[arg(long, default_value_t = Defaults::MIDI_CHANNEL_NUMBER, value_parser = clap::value_parser!(u8).range(1..=16))]
    pub looper_channel: u8,

    /// Initial Walrus Mako D1 MIDI channel
    #[arg(long, default_value_t = Defaults::MIDI_CHANNEL_NUMBER, value_parser = clap::value_parser!(u8).range(1..=16))]
    pub walrus_channel: u8,

    /// Number of sent messages kept in the on-screen log
    #[arg(long, default_value_t = Defaults::MESSAGE_LOG_CAPACITY)]
    pub log_capacity: usize,

    /// Milliseconds between output port scans, 0 disables scanning
    #[arg(long, default_value_t = Defaults::DEVICE_POLL_INTERVAL_MILLISECONDS)]
    pub device_poll_ms: u64,

    /// Print the available MIDI output ports and exit
    #[arg(long)]
    pub list_ports: bool,

    /// Print the control binding table as JSON and exit
    #[arg(long)]
    pub list_bindings: bool,

    /// Log filter in RUST_LOG syntax, overrides the environment
    #[arg(long)]
    pub log_level: Option<String>,
}

impl Config {
    pub fn init_logger(&self) {
        let mut builder = env_logger::Builder::from_default_env();
        if let Some(filters) = &self.log_level {
            builder.parse_filters(filters);
        }
        builder.init();
    }

    pub fn midi_options(&self) -> Result<MidiOptions> {
        let channels = ChannelState {
            looper: MidiChannel::from_number(i32::from(self.looper_channel))?,
            walrus: MidiChannel::from_number(i32::from(self.walrus_channel))?,
        };

        Ok(MidiOptions {
            initial_port: self.port.clone(),
            channels,
            device_poll_interval: (self.device_poll_ms > 0)
                .then(|| Duration::from_millis(self.device_poll_ms)),
        })
    }
}
