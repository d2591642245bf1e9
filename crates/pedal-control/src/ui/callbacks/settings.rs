use crate::PedalControl;
use crate::ui::callbacks::send_pedal_event;
use crate::ui::{ParameterValues, clear_message_log};
use crossbeam_channel::Sender;
use pedalctl_types::bindings::ChannelSource;
use pedalctl_types::defaults::Defaults;
use pedalctl_types::midi_events::PedalEvents;
use slint::Weak;
use std::sync::{Arc, Mutex};

pub fn callback_output_port_changed(
    ui_weak: &Weak<PedalControl>,
    pedal_event_sender: Sender<PedalEvents>,
) {
    if let Some(ui) = ui_weak.upgrade() {
        ui.on_output_port_changed(move |index, port| {
            send_pedal_event(&pedal_event_sender, output_port_event(index, &port));
        });
    }
}

pub fn callback_refresh_output_ports(
    ui_weak: &Weak<PedalControl>,
    pedal_event_sender: Sender<PedalEvents>,
) {
    if let Some(ui) = ui_weak.upgrade() {
        ui.on_refresh_output_ports(move || {
            send_pedal_event(&pedal_event_sender, PedalEvents::RefreshOutputPorts);
        });
    }
}

pub fn callback_looper_channel_changed(
    ui_weak: &Weak<PedalControl>,
    pedal_event_sender: Sender<PedalEvents>,
) {
    if let Some(ui) = ui_weak.upgrade() {
        ui.on_looper_channel_changed(move |channel| {
            send_pedal_event(
                &pedal_event_sender,
                PedalEvents::UIChannel(ChannelSource::Looper, channel.to_string()),
            );
        });
    }
}

pub fn callback_walrus_channel_changed(
    ui_weak: &Weak<PedalControl>,
    pedal_event_sender: Sender<PedalEvents>,
) {
    if let Some(ui) = ui_weak.upgrade() {
        ui.on_walrus_channel_changed(move |channel| {
            send_pedal_event(
                &pedal_event_sender,
                PedalEvents::UIChannel(ChannelSource::Walrus, channel.to_string()),
            );
        });
    }
}

pub fn callback_clear_message_log(
    ui_weak: &Weak<PedalControl>,
    parameter_values: Arc<Mutex<ParameterValues>>,
) {
    if let Some(ui) = ui_weak.upgrade() {
        let ui_weak = ui_weak.clone();
        ui.on_clear_message_log(move || {
            clear_message_log(&ui_weak, &parameter_values);
        });
    }
}

/// The first entry of the port menu is the "no port" choice.
fn output_port_event(index: i32, port: &str) -> PedalEvents {
    if index <= Defaults::NO_OUTPUT_PORT_INDEX {
        PedalEvents::UIOutputPort(None)
    } else {
        PedalEvents::UIOutputPort(Some(port.to_string()))
    }
}
