use crate::bindings::ChannelSource;

#[derive(Debug, Clone, PartialEq)]
pub enum UIUpdates {
    OutputPortList(Vec<String>),
    OutputPortIndex(i32),
    ChannelIndex(ChannelSource, i32),
    LogMessage(String),
    Notice(String),
}
