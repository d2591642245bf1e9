use crate::PedalControl;
use crate::ui::callbacks::send_pedal_event;
use crossbeam_channel::Sender;
use pedalctl_types::bindings::ControlId;
use pedalctl_types::error::MappingError;
use pedalctl_types::midi_events::{ControlValue, PedalEvents};
use slint::Weak;
use std::str::FromStr;

pub fn callback_control_toggled(
    ui_weak: &Weak<PedalControl>,
    pedal_event_sender: Sender<PedalEvents>,
) {
    if let Some(ui) = ui_weak.upgrade() {
        ui.on_control_toggled(move |control_id, is_on| {
            send_control_event(&pedal_event_sender, &control_id, ControlValue::Toggle(is_on));
        });
    }
}

pub fn callback_control_value_changed(
    ui_weak: &Weak<PedalControl>,
    pedal_event_sender: Sender<PedalEvents>,
) {
    if let Some(ui) = ui_weak.upgrade() {
        ui.on_control_value_changed(move |control_id, value| {
            send_control_event(&pedal_event_sender, &control_id, ControlValue::Continuous(value));
        });
    }
}

pub fn callback_control_index_changed(
    ui_weak: &Weak<PedalControl>,
    pedal_event_sender: Sender<PedalEvents>,
) {
    if let Some(ui) = ui_weak.upgrade() {
        ui.on_control_index_changed(move |control_id, index| {
            send_control_event(&pedal_event_sender, &control_id, ControlValue::Index(index));
        });
    }
}

fn send_control_event(pedal_event_sender: &Sender<PedalEvents>, control_id: &str, value: ControlValue) {
    match control_event(control_id, value) {
        Ok(event) => send_pedal_event(pedal_event_sender, event),
        Err(err) => log::warn!("send_control_event(): {err}"),
    }
}

fn control_event(control_id: &str, value: ControlValue) -> Result<PedalEvents, MappingError> {
    let control = ControlId::from_str(control_id)
        .map_err(|_| MappingError::UnknownControl(control_id.to_string()))?;
    Ok(PedalEvents::UIControl(control, value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    const MAIN_WINDOW_MARKUP: &str = include_str!("../../../ui/main.slint");
    const CONTROL_ID_PREFIXES: [&str; 3] = ["looper-", "walrus-", "pedalboard-"];

    fn markup_control_ids() -> Vec<&'static str> {
        MAIN_WINDOW_MARKUP
            .split('"')
            .skip(1)
            .step_by(2)
            .filter(|literal| {
                CONTROL_ID_PREFIXES
                    .iter()
                    .any(|prefix| literal.starts_with(prefix))
            })
            .collect()
    }

    #[test]
    fn control_event_parses_known_control_ids() {
        assert_eq!(
            control_event("walrus-mix", ControlValue::Continuous(64)),
            Ok(PedalEvents::UIControl(
                ControlId::WalrusMix,
                ControlValue::Continuous(64)
            ))
        );
        assert_eq!(
            control_event("pedalboard-d1", ControlValue::Toggle(true)),
            Ok(PedalEvents::UIControl(
                ControlId::PedalboardD1,
                ControlValue::Toggle(true)
            ))
        );
    }

    #[test]
    fn control_event_rejects_unknown_control_ids() {
        assert_eq!(
            control_event("walrus-reverb", ControlValue::Continuous(1)),
            Err(MappingError::UnknownControl("walrus-reverb".to_string()))
        );
    }

    #[test]
    fn every_markup_control_id_parses() {
        let ids = markup_control_ids();
        assert!(!ids.is_empty());
        for id in ids {
            assert!(ControlId::from_str(id).is_ok(), "unknown control id {id}");
        }
    }

    #[test]
    fn every_control_appears_in_the_markup() {
        let ids = markup_control_ids();
        for control in ControlId::iter() {
            assert!(
                ids.contains(&control.to_string().as_str()),
                "{control} has no widget"
            );
        }
    }
}
