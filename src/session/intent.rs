use std::collections::BTreeMap;

use crate::error::ErrorKind;
use crate::model::{Greeting, UserInfo};
use crate::mvi::Intent;
use crate::services::SessionTokens;

#[derive(Debug, Clone)]
pub enum SessionIntent {
    /// Credentials became available (login finished elsewhere).
    SignedIn { tokens: SessionTokens },

    /// Tear down everything that belongs to the user.
    Logout,

    FetchUserInfo,
    FetchUserInfoDone(Result<UserInfo, ErrorKind>),

    FetchGreeting,
    FetchGreetingDone(Result<Greeting, ErrorKind>),

    FetchFavoriteNames,
    FetchFavoriteNamesDone(Result<BTreeMap<i32, String>, ErrorKind>),
}

impl Intent for SessionIntent {}
