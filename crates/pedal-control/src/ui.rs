mod callbacks;
mod constants;
mod structs;
mod update_listener;

use super::{ControlOptions, PedalControl};
use crate::ui::callbacks::register_callbacks;
use crate::ui::constants::UI_UPDATE_CHANNEL_CAPACITY;
use crate::ui::structs::UIMidiPort;
use crate::ui::update_listener::start_ui_update_listener;
use anyhow::Result;
use crossbeam_channel::{Receiver, Sender, bounded};
use pedalctl_types::bindings::{
    ChannelSource, LOOPER_BUFFER_OPTIONS, WALRUS_PRESET_OPTIONS, WALRUS_PROGRAM_OPTIONS,
    WALRUS_SUBDIVISION_OPTIONS,
};
use pedalctl_types::defaults::MIDI_CHANNEL_LIST;
use pedalctl_types::message_log::MessageLog;
use pedalctl_types::midi_events::PedalEvents;
use pedalctl_types::ui_events::UIUpdates;
use slint::{ModelRc, SharedString, VecModel, Weak};
use std::sync::{Arc, Mutex, PoisonError};

#[derive(Clone)]
struct ParameterValues {
    midi_port: UIMidiPort,
    message_log: MessageLog,
}

impl ParameterValues {
    fn new(log_capacity: usize) -> Self {
        Self {
            midi_port: UIMidiPort {
                channels: MIDI_CHANNEL_LIST.iter().map(ToString::to_string).collect(),
                ..Default::default()
            },
            message_log: MessageLog::new(log_capacity),
        }
    }
}

pub struct UI {
    ui_update_sender: Sender<UIUpdates>,
    ui_update_receiver: Receiver<UIUpdates>,
    parameter_values: Arc<Mutex<ParameterValues>>,
}

impl UI {
    pub fn new(log_capacity: usize) -> Self {
        log::info!("Constructing UI Module");

        let (ui_update_sender, ui_update_receiver) = bounded(UI_UPDATE_CHANNEL_CAPACITY);

        Self {
            ui_update_sender,
            ui_update_receiver,
            parameter_values: Arc::new(Mutex::new(ParameterValues::new(log_capacity))),
        }
    }

    pub fn get_ui_update_sender(&self) -> Sender<UIUpdates> {
        self.ui_update_sender.clone()
    }

    pub fn run(
        &mut self,
        ui_weak: &Weak<PedalControl>,
        pedal_event_sender: &Sender<PedalEvents>,
    ) -> Result<()> {
        let ui_update_receiver = self.ui_update_receiver.clone();
        register_callbacks(ui_weak, pedal_event_sender, &self.parameter_values);
        set_ui_default_values(ui_weak, &self.parameter_values)?;
        start_ui_update_listener(ui_update_receiver, ui_weak, &self.parameter_values);

        Ok(())
    }
}

fn set_ui_default_values(
    ui_weak: &Weak<PedalControl>,
    parameter_values: &Arc<Mutex<ParameterValues>>,
) -> Result<()> {
    let ui_default_values = parameter_values
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .clone();

    ui_weak.upgrade_in_event_loop(move |ui| {
        ui.set_version(SharedString::from(version_text()));
        ui.set_control_options(slint_control_options());
        set_slint_midi_port_values(&ui, &ui_default_values.midi_port);
        ui.set_message_log(vec_to_model_rc(&ui_default_values.message_log.lines()));
    })?;

    Ok(())
}

fn set_output_port_list(
    ui_weak_thread: &Weak<PedalControl>,
    parameter_values: &Arc<Mutex<ParameterValues>>,
    port_list: Vec<String>,
) {
    let mut values = parameter_values
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    values.midi_port.output_ports = port_list;
    push_midi_port_values(ui_weak_thread, values.midi_port.clone());
}

fn set_output_port_index(
    ui_weak_thread: &Weak<PedalControl>,
    parameter_values: &Arc<Mutex<ParameterValues>>,
    port_index: i32,
) {
    let mut values = parameter_values
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    values.midi_port.output_port_index = port_index;
    push_midi_port_values(ui_weak_thread, values.midi_port.clone());
}

fn set_channel_index(
    ui_weak_thread: &Weak<PedalControl>,
    parameter_values: &Arc<Mutex<ParameterValues>>,
    source: ChannelSource,
    channel_index: i32,
) {
    let mut values = parameter_values
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    values.midi_port.set_channel_index(source, channel_index);
    push_midi_port_values(ui_weak_thread, values.midi_port.clone());
}

fn append_message_log(
    ui_weak_thread: &Weak<PedalControl>,
    parameter_values: &Arc<Mutex<ParameterValues>>,
    message: String,
) {
    let mut values = parameter_values
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    values.message_log.push(message);
    push_message_log(ui_weak_thread, values.message_log.lines());
}

fn clear_message_log(
    ui_weak: &Weak<PedalControl>,
    parameter_values: &Arc<Mutex<ParameterValues>>,
) {
    let mut values = parameter_values
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    values.message_log.clear();
    push_message_log(ui_weak, values.message_log.lines());
}

fn show_notice(ui_weak_thread: &Weak<PedalControl>, notice: String) {
    let _ = ui_weak_thread.upgrade_in_event_loop(move |ui| {
        ui.set_notice_text(SharedString::from(notice));
        ui.set_notice_visible(true);
    });
}

fn push_midi_port_values(ui_weak: &Weak<PedalControl>, midi_port_values: UIMidiPort) {
    let _ = ui_weak.upgrade_in_event_loop(move |ui| {
        set_slint_midi_port_values(&ui, &midi_port_values);
    });
}

fn push_message_log(ui_weak: &Weak<PedalControl>, lines: Vec<String>) {
    let _ = ui_weak.upgrade_in_event_loop(move |ui| {
        ui.set_message_log(vec_to_model_rc(&lines));
    });
}

fn set_slint_midi_port_values(ui: &PedalControl, midi_port_values: &UIMidiPort) {
    ui.set_output_ports(vec_to_model_rc(&midi_port_values.output_ports));
    ui.set_output_port_index(midi_port_values.output_port_index);
    ui.set_channels(vec_to_model_rc(&midi_port_values.channels));
    ui.set_looper_channel_index(midi_port_values.looper_channel_index);
    ui.set_walrus_channel_index(midi_port_values.walrus_channel_index);
}

fn slint_control_options() -> ControlOptions {
    ControlOptions {
        looper_buffer: str_slice_to_model_rc(&LOOPER_BUFFER_OPTIONS),
        walrus_presets: str_slice_to_model_rc(&WALRUS_PRESET_OPTIONS),
        walrus_programs: str_slice_to_model_rc(&WALRUS_PROGRAM_OPTIONS),
        walrus_subdivisions: str_slice_to_model_rc(&WALRUS_SUBDIVISION_OPTIONS),
    }
}

fn version_text() -> String {
    format!(
        "{} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("VERGEN_BUILD_DATE")
    )
}

fn str_slice_to_model_rc(input_values: &[&str]) -> ModelRc<SharedString> {
    ModelRc::new(VecModel::from(
        input_values
            .iter()
            .map(|value| SharedString::from(*value))
            .collect::<Vec<SharedString>>(),
    ))
}

fn vec_to_model_rc(input_values: &[String]) -> ModelRc<SharedString> {
    ModelRc::new(VecModel::from(
        input_values
            .iter()
            .map(SharedString::from)
            .collect::<Vec<SharedString>>(),
    ))
}
