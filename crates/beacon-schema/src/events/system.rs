//! System events not tied to a user gesture.

use serde::{Deserialize, Serialize};

use crate::vocabulary::PageOwnerType;

/// A user has spent a fixed interval on a page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TimeOnPage {
    /// Kind of page.
    pub context_owner_type: PageOwnerType,
    /// ID of the page owner.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context_owner_id: Option<String>,
    /// Slug of the page owner.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context_owner_slug: Option<String>,
}
