use crate::error::MidiError;
use crate::port_manager::{OutputBackend, OutputConnection};
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportCall {
    Connect(String),
    Send(String, Vec<u8>),
    Close(String),
}

pub type CallLog = Arc<Mutex<Vec<TransportCall>>>;

/// In-memory backend that records every transport call.
#[derive(Clone, Default)]
pub struct RecordingBackend {
    ports: Arc<Mutex<Vec<String>>>,
    calls: CallLog,
    fail_sends: bool,
}

impl RecordingBackend {
    pub fn with_ports(ports: &[&str]) -> Self {
        Self {
            ports: Arc::new(Mutex::new(ports.iter().map(ToString::to_string).collect())),
            ..Default::default()
        }
    }

    pub fn failing_sends(mut self) -> Self {
        self.fail_sends = true;
        self
    }

    pub fn calls(&self) -> CallLog {
        self.calls.clone()
    }

    pub fn set_ports(&self, ports: &[&str]) {
        *self.ports.lock().unwrap() = ports.iter().map(ToString::to_string).collect();
    }
}

impl OutputBackend for RecordingBackend {
    type Connection = RecordingConnection;

    fn port_names(&self) -> Vec<String> {
        self.ports.lock().unwrap().clone()
    }

    fn connect(&mut self, port_name: &str) -> Result<Self::Connection, MidiError> {
        if !self.ports.lock().unwrap().iter().any(|port| port == port_name) {
            return Err(MidiError::PortOpenFailure {
                port: port_name.to_string(),
                reason: "not found".to_string(),
            });
        }

        self.calls
            .lock()
            .unwrap()
            .push(TransportCall::Connect(port_name.to_string()));

        Ok(RecordingConnection {
            port_name: port_name.to_string(),
            calls: self.calls.clone(),
            fail_sends: self.fail_sends,
        })
    }
}

pub struct RecordingConnection {
    port_name: String,
    calls: CallLog,
    fail_sends: bool,
}

impl OutputConnection for RecordingConnection {
    fn send(&mut self, bytes: &[u8]) -> Result<(), MidiError> {
        if self.fail_sends {
            return Err(MidiError::SendFailure("device unplugged".to_string()));
        }

        self.calls
            .lock()
            .unwrap()
            .push(TransportCall::Send(self.port_name.clone(), bytes.to_vec()));
        Ok(())
    }

    fn close(self) {
        self.calls
            .lock()
            .unwrap()
            .push(TransportCall::Close(self.port_name));
    }
}
