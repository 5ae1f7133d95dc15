use crate::domain::ScheduleConfig;
use std::fs;

pub struct ConfigRepository;

impl ConfigRepository {
    pub fn save_schedule(config: &ScheduleConfig, filename: &str) -> Result<String, String> {
        match serde_json::to_string_pretty(config) {
            Ok(json) => match fs::write(filename, &json) {
                Ok(_) => Ok(filename.to_string()),
                Err(e) => Err(e.to_string()),
            },
            Err(e) => Err(format!("Serialization failed: {}", e)),
        }
    }

    pub fn load_schedule(filename: &str) -> Result<(ScheduleConfig, String), String> {
        match fs::read_to_string(filename) {
            Ok(content) => match serde_json::from_str::<ScheduleConfig>(&content) {
                Ok(config) => Ok((config, filename.to_string())),
                Err(e) => Err(format!("Invalid file format - {}", e)),
            },
            Err(e) => Err(e.to_string()),
        }
    }
}
