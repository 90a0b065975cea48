use serde_json::Value;
use std::collections::HashMap;

use crate::error::Result;
use crate::rest::{bool_str, OctoClient};

impl OctoClient {
    /// Retrieve the full printer state, including temperature information.
    ///
    /// With `history` set the server includes its temperature history,
    /// truncated to `limit` entries when a limit is given.
    pub fn get_printer_status(&self, history: bool, limit: Option<u32>) -> Result<Value> {
        self.fetch("/printer", Some(&self.history_query(history, limit)))
    }

    /// Retrieve the state of the hotend tool(s)
    pub fn get_tool_status(&self, history: bool, limit: Option<u32>) -> Result<Value> {
        self.fetch("/printer/tool", Some(&self.history_query(history, limit)))
    }

    /// Retrieve the state of the heated bed
    pub fn get_bed_status(&self, history: bool, limit: Option<u32>) -> Result<Value> {
        self.fetch("/printer/bed", Some(&self.history_query(history, limit)))
    }

    /// Retrieve the state of the printer's SD card
    pub fn get_sd_card_status(&self) -> Result<Value> {
        self.fetch("/printer/sd", None)
    }

    /// Build the query map shared by the temperature status endpoints.
    ///
    /// An unset limit is sent as the literal value `None` unless the
    /// configuration asks for it to be omitted.
    fn history_query(&self, history: bool, limit: Option<u32>) -> HashMap<String, String> {
        let mut query = HashMap::new();
        query.insert("history".to_string(), bool_str(history).to_string());
        match limit {
            Some(limit) => {
                query.insert("limit".to_string(), limit.to_string());
            }
            None if !self.config.omit_unset_limit => {
                query.insert("limit".to_string(), "None".to_string());
            }
            None => {}
        }
        query
    }
}
