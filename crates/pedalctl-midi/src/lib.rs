mod constants;
mod control_mapper;
mod device_monitor;
mod error;
mod midir_output;
mod pedal_controller;
mod port_manager;
#[cfg(test)]
mod test_backend;

pub use control_mapper::ChannelState;
pub use midir_output::MidirOutputBackend;
pub use port_manager::OutputBackend;

use crate::constants::PEDAL_EVENT_CHANNEL_CAPACITY;
use crate::control_mapper::ControlMapper;
use crate::device_monitor::DeviceMonitor;
use crate::pedal_controller::PedalController;
use crate::port_manager::PortManager;
use anyhow::Result;
use crossbeam_channel::{Receiver, Sender, bounded};
use pedalctl_types::midi_events::PedalEvents;
use pedalctl_types::ui_events::UIUpdates;
use std::thread;
use std::time::Duration;

const MIDI_OUTPUT_THREAD_NAME: &str = "midi-output";

#[derive(Debug, Clone, Default)]
pub struct MidiOptions {
    pub initial_port: Option<String>,
    pub channels: ChannelState,
    pub device_poll_interval: Option<Duration>,
}

pub struct Midi {
    pedal_event_sender: Sender<PedalEvents>,
    pedal_event_receiver: Receiver<PedalEvents>,
}

impl Midi {
    pub fn new() -> Self {
        log::info!("Constructing Midi Module");

        let (pedal_event_sender, pedal_event_receiver) = bounded(PEDAL_EVENT_CHANNEL_CAPACITY);

        Self {
            pedal_event_sender,
            pedal_event_receiver,
        }
    }

    pub fn get_pedal_event_sender(&self) -> Sender<PedalEvents> {
        self.pedal_event_sender.clone()
    }

    /// Starts the thread that owns the output port, and the device monitor when
    /// polling is enabled.
    pub fn run(&mut self, ui_update_sender: Sender<UIUpdates>, options: MidiOptions) -> Result<()> {
        let pedal_event_receiver = self.pedal_event_receiver.clone();
        let MidiOptions {
            initial_port,
            channels,
            device_poll_interval,
        } = options;

        thread::Builder::new()
            .name(MIDI_OUTPUT_THREAD_NAME.to_string())
            .spawn(move || {
                log::debug!("run(): spawned thread to process pedal events");
                let mut pedal_controller = PedalController::new(
                    PortManager::new(MidirOutputBackend),
                    ControlMapper::new(channels),
                    ui_update_sender,
                );
                pedal_controller.start(initial_port.as_deref());

                while let Ok(event) = pedal_event_receiver.recv() {
                    pedal_controller.handle_event(event);
                }
            })?;

        match device_poll_interval {
            Some(poll_interval) => {
                DeviceMonitor::new(
                    MidirOutputBackend,
                    self.pedal_event_sender.clone(),
                    poll_interval,
                )
                .run()?;
            }
            None => log::info!("run(): MIDI output device polling is disabled."),
        }

        Ok(())
    }
}

impl Default for Midi {
    fn default() -> Self {
        Self::new()
    }
}
