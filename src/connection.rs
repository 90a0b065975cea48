use serde_json::{json, Map, Value};

use crate::error::Result;
use crate::response::SubmitOutcome;
use crate::rest::{bool_str, OctoClient};

/// Optional settings for a printer connection request.
///
/// Only fields that were explicitly set are included in the outgoing
/// payload; the server falls back to its saved preferences for the rest.
#[derive(Debug, Clone, Default)]
pub struct ConnectOptions {
    /// Serial port to connect to (e.g. "/dev/ttyUSB0" or "COM3")
    pub port: Option<String>,
    /// Serial baud rate
    pub baudrate: Option<u32>,
    /// Identifier of the printer profile to use
    pub printer_profile: Option<String>,
    /// Save the supplied settings as the new preference
    pub save: Option<bool>,
    /// Connect to the printer automatically on server startup from now on
    pub autoconnect: Option<bool>,
}

impl ConnectOptions {
    /// Create an empty set of options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the serial port
    pub fn with_port(mut self, port: String) -> Self {
        self.port = Some(port);
        self
    }

    /// Set the baud rate
    pub fn with_baudrate(mut self, baudrate: u32) -> Self {
        self.baudrate = Some(baudrate);
        self
    }

    /// Set the printer profile
    pub fn with_printer_profile(mut self, profile: String) -> Self {
        self.printer_profile = Some(profile);
        self
    }

    /// Save the settings as the new preference
    pub fn with_save(mut self, save: bool) -> Self {
        self.save = Some(save);
        self
    }

    /// Enable or disable autoconnect
    pub fn with_autoconnect(mut self, autoconnect: bool) -> Self {
        self.autoconnect = Some(autoconnect);
        self
    }

    /// Build the connect command payload. Set fields are stringified
    /// (lowercase booleans, decimal baud rate); unset fields are left out.
    fn payload(&self) -> Value {
        let mut payload = Map::new();
        payload.insert("command".to_string(), Value::String("connect".to_string()));

        if let Some(ref port) = self.port {
            payload.insert("port".to_string(), Value::String(port.clone()));
        }
        if let Some(baudrate) = self.baudrate {
            payload.insert("baudrate".to_string(), Value::String(baudrate.to_string()));
        }
        if let Some(ref profile) = self.printer_profile {
            payload.insert(
                "printerProfile".to_string(),
                Value::String(profile.clone()),
            );
        }
        if let Some(save) = self.save {
            payload.insert("save".to_string(), Value::String(bool_str(save).to_string()));
        }
        if let Some(autoconnect) = self.autoconnect {
            payload.insert(
                "autoconnect".to_string(),
                Value::String(bool_str(autoconnect).to_string()),
            );
        }

        Value::Object(payload)
    }
}

impl OctoClient {
    /// Retrieve the current connection settings and state
    pub fn get_connection_status(&self) -> Result<Value> {
        self.fetch("/connection", None)
    }

    /// Instruct the server to connect to the printer
    pub fn connect(&self, options: &ConnectOptions) -> Result<SubmitOutcome> {
        self.submit("/connection", options.payload())
    }

    /// Instruct the server to disconnect from the printer
    pub fn disconnect(&self) -> Result<SubmitOutcome> {
        self.submit("/connection", json!({ "command": "disconnect" }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_defaults_to_command_only() {
        let payload = ConnectOptions::new().payload();
        let map = payload.as_object().unwrap();
        assert_eq!(map.len(), 1);
        assert_eq!(map["command"], "connect");
    }

    #[test]
    fn test_payload_includes_only_set_fields() {
        let payload = ConnectOptions::new().with_port("COM3".to_string()).payload();
        let map = payload.as_object().unwrap();
        assert_eq!(map["command"], "connect");
        assert_eq!(map["port"], "COM3");
        assert!(!map.contains_key("baudrate"));
        assert!(!map.contains_key("printerProfile"));
        assert!(!map.contains_key("save"));
        assert!(!map.contains_key("autoconnect"));
    }

    #[test]
    fn test_payload_stringifies_typed_fields() {
        let payload = ConnectOptions::new()
            .with_port("/dev/ttyACM0".to_string())
            .with_baudrate(115200)
            .with_printer_profile("_default".to_string())
            .with_save(true)
            .with_autoconnect(false)
            .payload();
        let map = payload.as_object().unwrap();
        assert_eq!(map["baudrate"], "115200");
        assert_eq!(map["printerProfile"], "_default");
        assert_eq!(map["save"], "true");
        assert_eq!(map["autoconnect"], "false");
    }
}
