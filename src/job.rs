use serde_json::{json, Value};

use crate::error::Result;
use crate::response::SubmitOutcome;
use crate::rest::OctoClient;

impl OctoClient {
    /// Retrieve information about the current print job
    pub fn get_job_status(&self) -> Result<Value> {
        self.fetch("/job", None)
    }

    /// Start printing the currently selected file
    pub fn start_job(&self) -> Result<SubmitOutcome> {
        self.submit("/job", json!({ "command": "start" }))
    }

    /// Cancel the current print job
    pub fn cancel_job(&self) -> Result<SubmitOutcome> {
        self.submit("/job", json!({ "command": "cancel" }))
    }

    /// Restart the current print job from the beginning.
    /// Only valid while a job is paused.
    pub fn restart_job(&self) -> Result<SubmitOutcome> {
        self.submit("/job", json!({ "command": "restart" }))
    }

    /// Pause the current print job
    pub fn pause_job(&self) -> Result<SubmitOutcome> {
        self.submit("/job", json!({ "command": "pause", "action": "pause" }))
    }

    /// Resume a paused print job
    pub fn resume_job(&self) -> Result<SubmitOutcome> {
        self.submit("/job", json!({ "command": "pause", "action": "resume" }))
    }

    /// Toggle the pause state of the current print job
    pub fn toggle_job(&self) -> Result<SubmitOutcome> {
        self.submit("/job", json!({ "command": "pause", "action": "toggle" }))
    }
}
