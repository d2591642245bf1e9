use crate::PedalControl;
use crate::ui::{
    ParameterValues, append_message_log, set_channel_index, set_output_port_index,
    set_output_port_list, show_notice,
};
use crossbeam_channel::Receiver;
use pedalctl_types::ui_events::UIUpdates;
use slint::Weak;
use std::sync::{Arc, Mutex};
use std::thread;

pub fn start_ui_update_listener(
    ui_update_receiver: Receiver<UIUpdates>,
    ui_weak: &Weak<PedalControl>,
    parameter_values: &Arc<Mutex<ParameterValues>>,
) {
    let parameter_values = parameter_values.clone();
    let ui_weak_thread = ui_weak.clone();

    thread::spawn(move || {
        log::debug!("start_ui_update_listener(): spawned thread to receive ui update events");
        while let Ok(update) = ui_update_receiver.recv() {
            match update {
                UIUpdates::OutputPortList(port_list) => {
                    set_output_port_list(&ui_weak_thread, &parameter_values, port_list);
                }
                UIUpdates::OutputPortIndex(index) => {
                    set_output_port_index(&ui_weak_thread, &parameter_values, index);
                }
                UIUpdates::ChannelIndex(source, index) => {
                    set_channel_index(&ui_weak_thread, &parameter_values, source, index);
                }
                UIUpdates::LogMessage(message) => {
                    append_message_log(&ui_weak_thread, &parameter_values, message);
                }
                UIUpdates::Notice(notice) => {
                    log::warn!("start_ui_update_listener(): {notice}");
                    show_notice(&ui_weak_thread, notice);
                }
            }
        }
        log::debug!("start_ui_update_listener(): ui update channel closed. Ending listener.");
    });
}
