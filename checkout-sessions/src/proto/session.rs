//! The session credential pair.

use serde::{Deserialize, Serialize};

/// A server-side checkout session, identified by a stable `id` and a rotating
/// opaque `sessionData` credential.
///
/// The server returns a fresh `sessionData` in every response; the next call
/// on the same session must carry that value. The credential is mutated
/// exclusively by [`SessionInteractor`](crate::interactor::SessionInteractor);
/// UI layers never read it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Stable session identifier, used as a path segment in API calls.
    pub id: String,

    /// Opaque rotating credential.
    pub session_data: String,
}

impl Session {
    /// Creates a session handle from the values the host received when it
    /// created the session on its backend.
    #[must_use]
    pub fn new(id: impl Into<String>, session_data: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            session_data: session_data.into(),
        }
    }
}
