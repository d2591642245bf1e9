use crate::defaults::Defaults;
use crate::error::MappingError;
use crate::midi_events::{ControlValue, MidiChannel, MidiMessage};
use serde::Serialize;
use strum_macros::{Display, EnumCount, EnumIter, EnumString};

pub const LOOPER_BUFFER_OPTIONS: [&str; 2] = ["OFF", "ON"];
pub const LOOPER_BUFFER_VALUES: [u8; 2] = [Defaults::TOGGLE_OFF_VALUE, Defaults::TOGGLE_ON_VALUE];
pub const WALRUS_PRESET_OPTIONS: [&str; 9] = [
    "Preset 1", "Preset 2", "Preset 3", "Preset 4", "Preset 5", "Preset 6", "Preset 7",
    "Preset 8", "Preset 9",
];
pub const WALRUS_PROGRAM_OPTIONS: [&str; 5] = ["Digital", "Analog", "Tape", "Lo-Fi", "Reverse"];
pub const WALRUS_SUBDIVISION_OPTIONS: [&str; 3] = ["Quarter", "Dotted Eighth", "Eighth Triplet"];
pub const WALRUS_SUBDIVISION_VALUES: [u8; 3] = [0, 43, 86];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize)]
pub enum Pedal {
    #[strum(serialize = "LoopeRhino")]
    Looper,
    #[strum(serialize = "Walrus Mako D1")]
    Walrus,
    #[strum(serialize = "Pedalboard")]
    Pedalboard,
}

/// Which channel dropdown a control takes its MIDI channel from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumCount, EnumIter, Serialize)]
pub enum ChannelSource {
    Looper,
    Walrus,
}

/// Identifiers shared with the slint markup, where they appear in kebab case.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumCount,
    EnumIter,
    EnumString,
    Serialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum ControlId {
    LooperBuffer,
    LooperL1,
    LooperL2,
    LooperL3,
    LooperL4,
    LooperL5,
    LooperC1,
    LooperC2,
    WalrusPreset,
    WalrusBypass,
    WalrusTime,
    WalrusRepeats,
    WalrusMix,
    WalrusMod,
    WalrusTone,
    WalrusAge,
    WalrusAttack,
    WalrusProgram,
    WalrusSubdivision,
    PedalboardL1,
    PedalboardL2,
    PedalboardL3,
    PedalboardL4,
    PedalboardL5,
    PedalboardD1,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MessageKind {
    ControlChange { controller: u8 },
    ProgramChange,
}

impl MessageKind {
    pub fn message(self, channel: MidiChannel, value: u8) -> MidiMessage {
        match self {
            Self::ControlChange { controller } => MidiMessage::ControlChange {
                channel,
                controller,
                value,
            },
            Self::ProgramChange => MidiMessage::ProgramChange {
                channel,
                program: value,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ValueTransform {
    /// Checked sends 127, unchecked sends 0.
    Toggle,
    /// Slider position passed through, clamped to 0-127.
    Continuous,
    /// Dropdown index sent as is.
    Index { options: &'static [&'static str] },
    /// Dropdown index looked up in a literal value table.
    Lookup {
        options: &'static [&'static str],
        values: &'static [u8],
    },
}

impl ValueTransform {
    pub fn apply(self, control: ControlId, value: ControlValue) -> Result<u8, MappingError> {
        match (self, value) {
            (Self::Toggle, ControlValue::Toggle(is_on)) => Ok(if is_on {
                Defaults::TOGGLE_ON_VALUE
            } else {
                Defaults::TOGGLE_OFF_VALUE
            }),
            (Self::Continuous, ControlValue::Continuous(raw)) => Ok(raw.clamp(
                Defaults::MINIMUM_DATA_VALUE,
                Defaults::MAXIMUM_DATA_VALUE,
            ) as u8),
            (Self::Index { options }, ControlValue::Index(index)) => {
                option_position(control, options.len(), index).map(|position| position as u8)
            }
            (Self::Lookup { options, values }, ControlValue::Index(index)) => {
                let position = option_position(control, options.len().min(values.len()), index)?;
                Ok(values[position])
            }
            _ => Err(MappingError::ValueKindMismatch { control, value }),
        }
    }

    pub fn option_label(self, value: ControlValue) -> Option<&'static str> {
        let ControlValue::Index(index) = value else {
            return None;
        };
        let options = match self {
            Self::Index { options } | Self::Lookup { options, .. } => options,
            Self::Toggle | Self::Continuous => return None,
        };
        usize::try_from(index)
            .ok()
            .and_then(|position| options.get(position).copied())
    }
}

fn option_position(control: ControlId, count: usize, index: i32) -> Result<usize, MappingError> {
    usize::try_from(index)
        .ok()
        .filter(|position| *position < count)
        .ok_or(MappingError::IndexOutOfRange {
            control,
            index,
            count,
        })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ControlBinding {
    pub control: ControlId,
    pub pedal: Pedal,
    pub label: &'static str,
    pub channel_source: ChannelSource,
    pub kind: MessageKind,
    pub transform: ValueTransform,
}

impl ControlBinding {
    const fn new(
        control: ControlId,
        pedal: Pedal,
        label: &'static str,
        channel_source: ChannelSource,
        kind: MessageKind,
        transform: ValueTransform,
    ) -> Self {
        Self {
            control,
            pedal,
            label,
            channel_source,
            kind,
            transform,
        }
    }

    const fn cc(
        control: ControlId,
        pedal: Pedal,
        label: &'static str,
        channel_source: ChannelSource,
        controller: u8,
        transform: ValueTransform,
    ) -> Self {
        Self::new(
            control,
            pedal,
            label,
            channel_source,
            MessageKind::ControlChange { controller },
            transform,
        )
    }
}

impl ControlId {
    pub const fn binding(self) -> ControlBinding {
        use ChannelSource as Ch;
        use ControlId as Id;
        use Pedal::{Looper, Pedalboard, Walrus};
        use ValueTransform::{Continuous, Toggle};

        match self {
            Id::LooperBuffer => ControlBinding::cc(
                self,
                Looper,
                "Buffer",
                Ch::Looper,
                102,
                ValueTransform::Lookup {
                    options: &LOOPER_BUFFER_OPTIONS,
                    values: &LOOPER_BUFFER_VALUES,
                },
            ),
            Id::LooperL1 => ControlBinding::cc(self, Looper, "L1", Ch::Looper, 103, Toggle),
            Id::LooperL2 => ControlBinding::cc(self, Looper, "L2", Ch::Looper, 104, Toggle),
            Id::LooperL3 => ControlBinding::cc(self, Looper, "L3", Ch::Looper, 105, Toggle),
            Id::LooperL4 => ControlBinding::cc(self, Looper, "L4", Ch::Looper, 106, Toggle),
            Id::LooperL5 => ControlBinding::cc(self, Looper, "L5", Ch::Looper, 107, Toggle),
            Id::LooperC1 => ControlBinding::cc(self, Looper, "C1", Ch::Looper, 108, Toggle),
            Id::LooperC2 => ControlBinding::cc(self, Looper, "C2", Ch::Looper, 109, Toggle),
            Id::WalrusPreset => ControlBinding::new(
                self,
                Walrus,
                "Preset",
                Ch::Walrus,
                MessageKind::ProgramChange,
                ValueTransform::Index {
                    options: &WALRUS_PRESET_OPTIONS,
                },
            ),
            Id::WalrusBypass => ControlBinding::cc(self, Walrus, "Bypass", Ch::Walrus, 29, Toggle),
            Id::WalrusTime => ControlBinding::cc(self, Walrus, "Time", Ch::Walrus, 14, Continuous),
            Id::WalrusRepeats => {
                ControlBinding::cc(self, Walrus, "Repeat", Ch::Walrus, 15, Continuous)
            }
            Id::WalrusMix => ControlBinding::cc(self, Walrus, "Mix", Ch::Walrus, 20, Continuous),
            Id::WalrusMod => ControlBinding::cc(self, Walrus, "Mod", Ch::Walrus, 21, Continuous),
            Id::WalrusTone => ControlBinding::cc(self, Walrus, "Tone", Ch::Walrus, 22, Continuous),
            Id::WalrusAge => ControlBinding::cc(self, Walrus, "Age", Ch::Walrus, 23, Continuous),
            Id::WalrusAttack => {
                ControlBinding::cc(self, Walrus, "Attack", Ch::Walrus, 25, Continuous)
            }
            Id::WalrusProgram => ControlBinding::cc(
                self,
                Walrus,
                "Progr",
                Ch::Walrus,
                24,
                ValueTransform::Index {
                    options: &WALRUS_PROGRAM_OPTIONS,
                },
            ),
            Id::WalrusSubdivision => ControlBinding::cc(
                self,
                Walrus,
                "SubDiv",
                Ch::Walrus,
                28,
                ValueTransform::Lookup {
                    options: &WALRUS_SUBDIVISION_OPTIONS,
                    values: &WALRUS_SUBDIVISION_VALUES,
                },
            ),
            Id::PedalboardL1 => ControlBinding::cc(self, Pedalboard, "L1", Ch::Looper, 103, Toggle),
            Id::PedalboardL2 => ControlBinding::cc(self, Pedalboard, "L2", Ch::Looper, 104, Toggle),
            Id::PedalboardL3 => ControlBinding::cc(self, Pedalboard, "L3", Ch::Looper, 105, Toggle),
            Id::PedalboardL4 => ControlBinding::cc(self, Pedalboard, "L4", Ch::Looper, 106, Toggle),
            Id::PedalboardL5 => ControlBinding::cc(self, Pedalboard, "L5", Ch::Looper, 107, Toggle),
            Id::PedalboardD1 => ControlBinding::cc(self, Pedalboard, "D1", Ch::Walrus, 29, Toggle),
        }
    }
}

pub fn control_bindings() -> Vec<ControlBinding> {
    use strum::IntoEnumIterator;
    ControlId::iter().map(ControlId::binding).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::{EnumCount, IntoEnumIterator};

    #[test]
    fn control_bindings_covers_every_control_once() {
        let bindings = control_bindings();
        assert_eq!(bindings.len(), ControlId::COUNT);
        for (control, binding) in ControlId::iter().zip(bindings) {
            assert_eq!(binding.control, control);
        }
    }

    #[test]
    fn control_id_round_trips_through_markup_identifier() {
        assert_eq!(ControlId::LooperL1.to_string(), "looper-l1");
        assert_eq!(ControlId::WalrusSubdivision.to_string(), "walrus-subdivision");
        assert_eq!(
            ControlId::from_str("pedalboard-d1"),
            Ok(ControlId::PedalboardD1)
        );
        for control in ControlId::iter() {
            assert_eq!(ControlId::from_str(&control.to_string()), Ok(control));
        }
    }

    #[test]
    fn looper_toggles_use_consecutive_controllers() {
        let looper_toggles = [
            (ControlId::LooperL1, 103),
            (ControlId::LooperL2, 104),
            (ControlId::LooperL3, 105),
            (ControlId::LooperL4, 106),
            (ControlId::LooperL5, 107),
            (ControlId::LooperC1, 108),
            (ControlId::LooperC2, 109),
        ];
        for (control, controller) in looper_toggles {
            let binding = control.binding();
            assert_eq!(binding.kind, MessageKind::ControlChange { controller });
            assert_eq!(binding.transform, ValueTransform::Toggle);
            assert_eq!(binding.channel_source, ChannelSource::Looper);
        }
    }

    #[test]
    fn walrus_sliders_use_documented_controllers() {
        let sliders = [
            (ControlId::WalrusTime, 14),
            (ControlId::WalrusRepeats, 15),
            (ControlId::WalrusMix, 20),
            (ControlId::WalrusMod, 21),
            (ControlId::WalrusTone, 22),
            (ControlId::WalrusAge, 23),
            (ControlId::WalrusAttack, 25),
        ];
        for (control, controller) in sliders {
            let binding = control.binding();
            assert_eq!(binding.kind, MessageKind::ControlChange { controller });
            assert_eq!(binding.transform, ValueTransform::Continuous);
            assert_eq!(binding.channel_source, ChannelSource::Walrus);
        }
    }

    #[test]
    fn pedalboard_d1_routes_to_walrus_bypass() {
        let binding = ControlId::PedalboardD1.binding();
        assert_eq!(binding.channel_source, ChannelSource::Walrus);
        assert_eq!(binding.kind, ControlId::WalrusBypass.binding().kind);
    }

    #[test]
    fn apply_toggle_returns_full_scale_values() {
        let transform = ValueTransform::Toggle;
        assert_eq!(
            transform.apply(ControlId::LooperL1, ControlValue::Toggle(true)),
            Ok(127)
        );
        assert_eq!(
            transform.apply(ControlId::LooperL1, ControlValue::Toggle(false)),
            Ok(0)
        );
    }

    #[test]
    fn apply_continuous_clamps_to_data_byte_range() {
        let transform = ValueTransform::Continuous;
        assert_eq!(
            transform.apply(ControlId::WalrusMix, ControlValue::Continuous(64)),
            Ok(64)
        );
        assert_eq!(
            transform.apply(ControlId::WalrusMix, ControlValue::Continuous(300)),
            Ok(127)
        );
        assert_eq!(
            transform.apply(ControlId::WalrusMix, ControlValue::Continuous(-5)),
            Ok(0)
        );
    }

    #[test]
    fn apply_lookup_maps_subdivision_indexes() {
        let transform = ControlId::WalrusSubdivision.binding().transform;
        let values: Vec<_> = (0..3)
            .map(|index| transform.apply(ControlId::WalrusSubdivision, ControlValue::Index(index)))
            .collect();
        assert_eq!(values, vec![Ok(0), Ok(43), Ok(86)]);
    }

    #[test]
    fn apply_index_rejects_out_of_range_positions() {
        let transform = ControlId::WalrusProgram.binding().transform;
        assert_eq!(
            transform.apply(ControlId::WalrusProgram, ControlValue::Index(5)),
            Err(MappingError::IndexOutOfRange {
                control: ControlId::WalrusProgram,
                index: 5,
                count: 5,
            })
        );
        assert!(
            transform
                .apply(ControlId::WalrusProgram, ControlValue::Index(-1))
                .is_err()
        );
    }

    #[test]
    fn apply_rejects_mismatched_value_kind() {
        let transform = ValueTransform::Toggle;
        assert_eq!(
            transform.apply(ControlId::WalrusBypass, ControlValue::Index(1)),
            Err(MappingError::ValueKindMismatch {
                control: ControlId::WalrusBypass,
                value: ControlValue::Index(1),
            })
        );
    }

    #[test]
    fn option_label_returns_dropdown_text() {
        let transform = ControlId::LooperBuffer.binding().transform;
        assert_eq!(transform.option_label(ControlValue::Index(1)), Some("ON"));
        assert_eq!(transform.option_label(ControlValue::Index(2)), None);
        assert_eq!(ValueTransform::Toggle.option_label(ControlValue::Index(0)), None);
    }
}
