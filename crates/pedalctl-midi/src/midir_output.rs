use crate::constants::{
    MIDI_OUTPUT_CLIENT_NAME, MIDI_OUTPUT_CONNECTION_NAME, PORT_NOT_FOUND_REASON,
    UNKNOWN_MIDI_PORT_NAME_MESSAGE,
};
use crate::error::MidiError;
use crate::port_manager::{OutputBackend, OutputConnection};
use midir::{MidiOutput, MidiOutputConnection};

/// System MIDI outputs through midir. A fresh client is created for each call
/// because connecting consumes the midir client.
#[derive(Debug, Clone, Copy, Default)]
pub struct MidirOutputBackend;

impl OutputBackend for MidirOutputBackend {
    type Connection = MidiOutputConnection;

    fn port_names(&self) -> Vec<String> {
        let midi_output = match MidiOutput::new(MIDI_OUTPUT_CLIENT_NAME) {
            Ok(midi_output) => midi_output,
            Err(err) => {
                log::error!(
                    "port_names(): Could not create MIDI output. Returning no ports. Error: {err}."
                );
                return Vec::new();
            }
        };

        midi_output
            .ports()
            .iter()
            .map(|port| {
                midi_output
                    .port_name(port)
                    .unwrap_or(UNKNOWN_MIDI_PORT_NAME_MESSAGE.to_string())
            })
            .collect()
    }

    fn connect(&mut self, port_name: &str) -> Result<Self::Connection, MidiError> {
        let port_open_failure = |reason: String| MidiError::PortOpenFailure {
            port: port_name.to_string(),
            reason,
        };

        let midi_output = MidiOutput::new(MIDI_OUTPUT_CLIENT_NAME)
            .map_err(|err| port_open_failure(err.to_string()))?;

        let Some(output_port) = midi_output.ports().into_iter().find(|port| {
            midi_output
                .port_name(port)
                .is_ok_and(|name| name == port_name)
        }) else {
            log::error!("connect(): Could not find MIDI output port {port_name}.");
            return Err(port_open_failure(PORT_NOT_FOUND_REASON.to_string()));
        };

        midi_output
            .connect(&output_port, MIDI_OUTPUT_CONNECTION_NAME)
            .map_err(|err| {
                log::error!("connect(): Could not connect to MIDI output port {port_name}. Error: {err}.");
                port_open_failure(err.to_string())
            })
    }
}

impl OutputConnection for MidiOutputConnection {
    fn send(&mut self, bytes: &[u8]) -> Result<(), MidiError> {
        MidiOutputConnection::send(self, bytes).map_err(|err| MidiError::SendFailure(err.to_string()))
    }

    fn close(self) {
        drop(MidiOutputConnection::close(self));
    }
}
