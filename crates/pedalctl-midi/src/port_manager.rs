use crate::error::MidiError;
use pedalctl_types::midi_events::MidiMessage;

/// One open MIDI destination.
pub trait OutputConnection {
    fn send(&mut self, bytes: &[u8]) -> Result<(), MidiError>;
    fn close(self);
}

/// Enumerates output ports and opens connections to them.
pub trait OutputBackend {
    type Connection: OutputConnection;

    fn port_names(&self) -> Vec<String>;
    fn connect(&mut self, port_name: &str) -> Result<Self::Connection, MidiError>;
}

struct OpenPort<C> {
    name: String,
    connection: C,
}

/// Owns at most one open output connection at a time.
pub struct PortManager<B: OutputBackend> {
    backend: B,
    open_port: Option<OpenPort<B::Connection>>,
}

impl<B: OutputBackend> PortManager<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            open_port: None,
        }
    }

    pub fn list_ports(&self) -> Vec<String> {
        self.backend.port_names()
    }

    pub fn current_port(&self) -> Option<&str> {
        self.open_port.as_ref().map(|open_port| open_port.name.as_str())
    }

    /// Closes the current connection, then opens `port_name` if one is given.
    /// A failed open leaves no port open.
    pub fn select_port(&mut self, port_name: Option<&str>) -> Result<(), MidiError> {
        self.close_port();

        let Some(port_name) = port_name else {
            log::info!("select_port(): No MIDI output port selected.");
            return Ok(());
        };

        let connection = self.backend.connect(port_name)?;
        log::info!("select_port(): Opened MIDI output port {port_name}.");
        self.open_port = Some(OpenPort {
            name: port_name.to_string(),
            connection,
        });

        Ok(())
    }

    pub fn close_port(&mut self) {
        if let Some(open_port) = self.open_port.take() {
            log::info!("close_port(): Closing MIDI output port {}.", open_port.name);
            open_port.connection.close();
        }
    }

    pub fn send(&mut self, message: &MidiMessage) -> Result<(), MidiError> {
        let Some(open_port) = self.open_port.as_mut() else {
            return Err(MidiError::NoPortOpen);
        };

        open_port.connection.send(&message.to_bytes())
    }
}

impl<B: OutputBackend> Drop for PortManager<B> {
    fn drop(&mut self) {
        self.close_port();
    }
}
