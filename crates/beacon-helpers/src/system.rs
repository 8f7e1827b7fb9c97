//! System factories.

use beacon_schema::{PageOwnerType, TimeOnPage};
use serde::Deserialize;

/// Arguments for [`time_on_page`].
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TimeOnPageArgs {
    /// Kind of page.
    pub context_owner_type: PageOwnerType,
    /// ID of the page owner.
    pub context_owner_id: Option<String>,
    /// Slug of the page owner.
    pub context_owner_slug: Option<String>,
}

impl TimeOnPageArgs {
    /// Required arguments only; optional ones start absent.
    #[must_use]
    pub fn new(context_owner_type: PageOwnerType) -> Self {
        Self {
            context_owner_type,
            context_owner_id: None,
            context_owner_slug: None,
        }
    }
}

/// A user has spent a fixed interval on a page.
#[must_use]
pub fn time_on_page(args: TimeOnPageArgs) -> TimeOnPage {
    let TimeOnPageArgs {
        context_owner_type,
        context_owner_id,
        context_owner_slug,
    } = args;

    TimeOnPage {
        context_owner_type,
        context_owner_id,
        context_owner_slug,
    }
}
