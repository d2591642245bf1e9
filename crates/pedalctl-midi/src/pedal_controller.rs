use crate::control_mapper::{ControlMapper, describe_control_message};
use crate::error::MidiError;
use crate::port_manager::{OutputBackend, PortManager};
use crossbeam_channel::Sender;
use pedalctl_types::bindings::{ChannelSource, ControlId};
use pedalctl_types::defaults::Defaults;
use pedalctl_types::midi_events::{ControlValue, MidiChannel, MidiMessage, PedalEvents};
use pedalctl_types::ui_events::UIUpdates;
use std::iter::once;
use strum::IntoEnumIterator;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    Sent(MidiMessage),
    Dropped(MidiMessage),
}

/// Resolves a control change and sends it if a port is open. Sends with no
/// open port are dropped without an error.
pub fn dispatch_control<B: OutputBackend>(
    control_mapper: &ControlMapper,
    port_manager: &mut PortManager<B>,
    control: ControlId,
    value: ControlValue,
) -> Result<DispatchOutcome, MidiError> {
    let message = control_mapper.resolve(control, value)?;

    match port_manager.send(&message) {
        Ok(()) => Ok(DispatchOutcome::Sent(message)),
        Err(MidiError::NoPortOpen) => Ok(DispatchOutcome::Dropped(message)),
        Err(err) => Err(err),
    }
}

/// Port selector entries with "None" first, and the index of `current_port`.
pub fn output_port_menu(ports: &[String], current_port: Option<&str>) -> (Vec<String>, i32) {
    let menu = once(Defaults::NO_OUTPUT_PORT_NAME)
        .chain(ports.iter().map(String::as_str))
        .map(ToString::to_string)
        .collect();

    let index = current_port
        .and_then(|current| ports.iter().position(|port| port == current))
        .map_or(Defaults::NO_OUTPUT_PORT_INDEX, |position| position as i32 + 1);

    (menu, index)
}

/// Owns the port manager and control mapper on the MIDI module thread.
pub struct PedalController<B: OutputBackend> {
    port_manager: PortManager<B>,
    control_mapper: ControlMapper,
    ui_update_sender: Sender<UIUpdates>,
    available_ports: Vec<String>,
}

impl<B: OutputBackend> PedalController<B> {
    pub fn new(
        port_manager: PortManager<B>,
        control_mapper: ControlMapper,
        ui_update_sender: Sender<UIUpdates>,
    ) -> Self {
        Self {
            port_manager,
            control_mapper,
            ui_update_sender,
            available_ports: Vec::new(),
        }
    }

    pub fn start(&mut self, initial_port: Option<&str>) {
        let channels = self.control_mapper.channels();
        for source in ChannelSource::iter() {
            self.notify(UIUpdates::ChannelIndex(
                source,
                i32::from(channels.get(source).wire()),
            ));
        }

        self.refresh_output_ports();

        if let Some(port_name) = initial_port {
            self.select_output_port(Some(port_name.to_string()));
        }
    }

    pub fn handle_event(&mut self, event: PedalEvents) {
        log::debug!("handle_event(): {event:?}");
        match event {
            PedalEvents::UIOutputPort(port_name) => self.select_output_port(port_name),
            PedalEvents::UIChannel(source, channel) => self.set_channel(source, &channel),
            PedalEvents::UIControl(control, value) => self.send_control(control, value),
            PedalEvents::OutputPortList(port_list) => self.update_output_port_list(port_list),
            PedalEvents::RefreshOutputPorts => self.refresh_output_ports(),
        }
    }

    fn select_output_port(&mut self, port_name: Option<String>) {
        match self.port_manager.select_port(port_name.as_deref()) {
            Ok(()) => {
                if let Some(port_name) = port_name {
                    self.notify(UIUpdates::LogMessage(format!(
                        "Opened output port {port_name}"
                    )));
                }
            }
            Err(err) => {
                log::error!("select_output_port(): {err}");
                self.notify(UIUpdates::Notice(err.to_string()));
            }
        }

        self.publish_output_port_index();
    }

    fn set_channel(&mut self, source: ChannelSource, channel: &str) {
        match channel.parse::<MidiChannel>() {
            Ok(channel) => self.control_mapper.set_channel(source, channel),
            Err(err) => log::warn!("set_channel(): Ignoring {source} channel change. {err}."),
        }
    }

    fn send_control(&mut self, control: ControlId, value: ControlValue) {
        match dispatch_control(&self.control_mapper, &mut self.port_manager, control, value) {
            Ok(DispatchOutcome::Sent(message)) => {
                let text = describe_control_message(&control.binding(), value, &message);
                log::debug!("send_control(): {text}");
                self.notify(UIUpdates::LogMessage(text));
            }
            Ok(DispatchOutcome::Dropped(message)) => {
                log::debug!("send_control(): No output port open. Dropping {message}.");
            }
            Err(MidiError::Mapping(err)) => {
                log::warn!("send_control(): Ignoring {control} change. {err}.");
            }
            Err(err) => {
                log::error!("send_control(): {err}");
                self.notify(UIUpdates::Notice(err.to_string()));
            }
        }
    }

    fn refresh_output_ports(&mut self) {
        let port_list = self.port_manager.list_ports();
        self.update_output_port_list(port_list);
    }

    fn update_output_port_list(&mut self, port_list: Vec<String>) {
        let disconnected_port = self
            .port_manager
            .current_port()
            .filter(|current| !port_list.iter().any(|port| port == current))
            .map(ToString::to_string);

        if let Some(port_name) = disconnected_port {
            log::warn!("update_output_port_list(): Output port {port_name} is no longer available.");
            self.port_manager.close_port();
            self.notify(UIUpdates::LogMessage(format!(
                "Output port {port_name} disconnected"
            )));
        }

        self.available_ports = port_list;
        let (menu, _) = output_port_menu(&self.available_ports, None);
        self.notify(UIUpdates::OutputPortList(menu));
        self.publish_output_port_index();
    }

    fn publish_output_port_index(&self) {
        let (_, index) =
            output_port_menu(&self.available_ports, self.port_manager.current_port());
        self.notify(UIUpdates::OutputPortIndex(index));
    }

    fn notify(&self, update: UIUpdates) {
        if let Err(err) = self.ui_update_sender.send(update) {
            log::error!("notify(): Could not send update to the UI. Error: {err}.");
        }
    }
}
