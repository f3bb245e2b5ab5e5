use crate::error::ErrorKind;
use crate::model::ListPage;
use crate::mvi::Intent;

use super::state::{ListDomain, RequestId};

/// Intents driving the pagination records.
#[derive(Debug, Clone)]
pub enum ListIntent {
    /// Store the keyword and fetch the first search page.
    Search { keyword: String },

    /// Fetch the first page of a domain.
    Fetch { domain: ListDomain },

    /// Fetch the page after the record's current one.
    FetchMore { domain: ListDomain },

    /// Scheduled `FetchMore` after an empty page. Dropped unless `after` is
    /// still the record's latest request.
    Continue { domain: ListDomain, after: RequestId },

    FetchDone {
        domain: ListDomain,
        request: RequestId,
        result: Result<ListPage, ErrorKind>,
    },

    FetchMoreDone {
        domain: ListDomain,
        request: RequestId,
        result: Result<ListPage, ErrorKind>,
    },
}

impl Intent for ListIntent {}
