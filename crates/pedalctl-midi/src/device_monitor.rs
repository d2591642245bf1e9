use crate::port_manager::OutputBackend;
use anyhow::Result;
use crossbeam_channel::Sender;
use pedalctl_types::midi_events::PedalEvents;
use std::thread;
use std::thread::sleep;
use std::time::Duration;

const DEVICE_MONITOR_THREAD_NAME: &str = "midi-device-monitor";

/// Polls the output port list and reports it whenever it changes.
pub struct DeviceMonitor<B: OutputBackend> {
    backend: B,
    pedal_event_sender: Sender<PedalEvents>,
    poll_interval: Duration,
}

impl<B: OutputBackend + Send + 'static> DeviceMonitor<B> {
    pub fn new(backend: B, pedal_event_sender: Sender<PedalEvents>, poll_interval: Duration) -> Self {
        Self {
            backend,
            pedal_event_sender,
            poll_interval,
        }
    }

    pub fn run(self) -> Result<()> {
        let mut current_port_list = self.backend.port_names();

        thread::Builder::new()
            .name(DEVICE_MONITOR_THREAD_NAME.to_string())
            .spawn(move || {
                log::debug!("run(): spawned thread to monitor MIDI output ports");
                loop {
                    sleep(self.poll_interval);

                    if update_port_list_if_changed(&self.backend, &mut current_port_list)
                        && self
                            .pedal_event_sender
                            .send(PedalEvents::OutputPortList(current_port_list.clone()))
                            .is_err()
                    {
                        log::debug!("run(): MIDI module has stopped. Ending device monitor.");
                        break;
                    }
                }
            })?;

        Ok(())
    }
}

fn update_port_list_if_changed<B: OutputBackend>(
    backend: &B,
    current_port_list: &mut Vec<String>,
) -> bool {
    let new_port_list = backend.port_names();
    if *current_port_list != new_port_list {
        log::info!("run(): MIDI output port list changed. Updating current port list.");
        *current_port_list = new_port_list;
        return true;
    }
    false
}
