use crate::mvi::Intent;

use super::state::Settings;

#[derive(Debug, Clone)]
pub enum SettingsIntent {
    /// Replace all settings at once.
    UpdateSetting(Settings),
}

impl Intent for SettingsIntent {}
