mod config;
mod ui;

slint::include_modules!();

use crate::config::Config;
use crate::ui::UI;
use anyhow::Result;
use clap::Parser;
use pedalctl_midi::{Midi, MidirOutputBackend, OutputBackend};
use pedalctl_types::bindings::control_bindings;

fn main() -> Result<()> {
    let config = Config::parse();
    config.init_logger();
    log::info!("Starting Pedal Control");

    if config.list_ports {
        for port_name in MidirOutputBackend.port_names() {
            println!("{port_name}");
        }
        return Ok(());
    }

    if config.list_bindings {
        println!("{}", serde_json::to_string_pretty(&control_bindings())?);
        return Ok(());
    }

    let pedal_control = PedalControl::new()?;
    let ui_weak = pedal_control.as_weak();

    log::debug!("Initialize the UI module");
    let mut ui = UI::new(config.log_capacity);

    log::debug!("Initialize the midi module");
    let mut midi = Midi::new();

    log::debug!("Run the main modules");
    midi.run(ui.get_ui_update_sender(), config.midi_options()?)?;
    ui.run(&ui_weak, &midi.get_pedal_event_sender())?;

    pedal_control.run()?;

    log::info!("Pedal Control window closed. Exiting.");
    Ok(())
}
