use std::collections::BTreeMap;

use crate::model::{Greeting, UserInfo};
use crate::services::SessionTokens;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionState {
    pub tokens: Option<SessionTokens>,
    pub user: Option<UserInfo>,
    pub user_loading: bool,
    pub greeting: Option<Greeting>,
    pub greeting_loading: bool,
    pub favorite_names: BTreeMap<i32, String>,
    pub favorite_names_loading: bool,
}

impl SessionState {
    pub fn is_logged_in(&self) -> bool {
        self.tokens.is_some()
    }

    pub fn member_id(&self) -> Option<&str> {
        self.tokens.as_ref().map(|tokens| tokens.member_id.as_str())
    }

    /// Display name for a favorites category, falling back to a generic label.
    pub fn favorite_name(&self, index: i32) -> String {
        self.favorite_names
            .get(&index)
            .cloned()
            .unwrap_or_else(|| format!("Favorites {}", index))
    }
}
