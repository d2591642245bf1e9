mod controls;
mod settings;

use crate::PedalControl;
use crate::ui::ParameterValues;
use crossbeam_channel::Sender;
use pedalctl_types::midi_events::PedalEvents;
use slint::Weak;
use std::sync::{Arc, Mutex};

pub fn register_callbacks(
    ui_weak: &Weak<PedalControl>,
    pedal_event_sender: &Sender<PedalEvents>,
    parameter_values: &Arc<Mutex<ParameterValues>>,
) {
    settings::callback_output_port_changed(ui_weak, pedal_event_sender.clone());
    settings::callback_refresh_output_ports(ui_weak, pedal_event_sender.clone());
    settings::callback_looper_channel_changed(ui_weak, pedal_event_sender.clone());
    settings::callback_walrus_channel_changed(ui_weak, pedal_event_sender.clone());
    settings::callback_clear_message_log(ui_weak, parameter_values.clone());
    controls::callback_control_toggled(ui_weak, pedal_event_sender.clone());
    controls::callback_control_value_changed(ui_weak, pedal_event_sender.clone());
    controls::callback_control_index_changed(ui_weak, pedal_event_sender.clone());
}

/// Hands an event to the MIDI thread, waiting for room in the queue.
fn send_pedal_event(pedal_event_sender: &Sender<PedalEvents>, event: PedalEvents) {
    if let Err(err) = pedal_event_sender.send(event) {
        log::error!(
            "send_pedal_event(): MIDI module has stopped. Could not send event: {:?}",
            err.into_inner()
        );
    }
}
