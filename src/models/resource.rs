//! Resource descriptors and cursor-paginated list results.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Describes where a resource lives in the API.
///
/// `PATH` is the collection path relative to the API root and `KEY` is the
/// envelope key the API wraps the resource (or a page of them) in.
pub trait Resource: DeserializeOwned {
    /// Collection path, e.g. `/mandate_imports`.
    const PATH: &'static str;
    /// Envelope key, e.g. `mandate_imports`.
    const KEY: &'static str;

    /// Path segments of a single member, relative to `PATH`.
    ///
    /// Segments are escaped when appended to the URL, so an id can never
    /// change the request target.
    fn member_segments(id: &str) -> Vec<&str> {
        vec![id]
    }

    /// Path segments of an action on a member, e.g. `IM1/actions/submit`.
    fn action_segments<'a>(id: &'a str, action: &'a str) -> Vec<&'a str> {
        vec![id, "actions", action]
    }
}

/// One page of a cursor-paginated listing.
#[derive(Debug, Clone, PartialEq)]
pub struct ListResult<T> {
    /// Records on this page, in API order
    pub items: Vec<T>,
    /// Pagination metadata
    pub meta: ListMeta,
}

impl<T> ListResult<T> {
    /// The cursor for the following page, if there is one.
    pub fn next_cursor(&self) -> Option<&str> {
        self.meta.cursors.after.as_deref().filter(|c| !c.is_empty())
    }

    /// Returns `true` if the API reported a further page.
    pub fn has_more(&self) -> bool {
        self.next_cursor().is_some()
    }
}

/// Pagination metadata returned alongside list results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListMeta {
    /// Cursors bracketing this page
    #[serde(default)]
    pub cursors: Cursors,
    /// Page size the API applied
    #[serde(default)]
    pub limit: Option<u32>,
}

/// Forward and backward pagination cursors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cursors {
    /// ID to pass as `after` to fetch the next page
    #[serde(default)]
    pub after: Option<String>,
    /// ID to pass as `before` to fetch the previous page
    #[serde(default)]
    pub before: Option<String>,
}
