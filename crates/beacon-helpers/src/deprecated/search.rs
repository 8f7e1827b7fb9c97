//! Legacy search factories.

use beacon_schema::legacy::{FocusedOnSearchInput, SearchedWithNoResults, SelectedItemFromSearch};
use beacon_schema::{ContextModule, OwnerType};
use serde::Deserialize;

/// Screen-convention arguments for [`focused_on_search_input`].
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FocusedOnSearchInputArgs {
    /// Region holding the search box.
    pub context_module: ContextModule,
    /// Free-form screen name. Read from the snake_case key.
    #[serde(rename = "context_screen")]
    pub context_screen: Option<String>,
    /// Kind of screen the user was on.
    pub context_screen_owner_type: OwnerType,
    /// ID of the screen owner.
    pub context_screen_owner_id: Option<String>,
    /// Slug of the screen owner.
    pub context_screen_owner_slug: Option<String>,
}

impl FocusedOnSearchInputArgs {
    /// Required arguments only; optional ones start absent.
    #[must_use]
    pub fn new(context_module: ContextModule, context_screen_owner_type: OwnerType) -> Self {
        Self {
            context_module,
            context_screen: None,
            context_screen_owner_type,
            context_screen_owner_id: None,
            context_screen_owner_slug: None,
        }
    }
}

/// A user focuses on a search box (screen convention).
#[deprecated(note = "use beacon_helpers::focused_on_search_input")]
#[must_use]
pub fn focused_on_search_input(args: FocusedOnSearchInputArgs) -> FocusedOnSearchInput {
    let FocusedOnSearchInputArgs {
        context_module,
        context_screen,
        context_screen_owner_type,
        context_screen_owner_id,
        context_screen_owner_slug,
    } = args;

    FocusedOnSearchInput {
        context_module,
        context_screen,
        context_screen_owner_type,
        context_screen_owner_id,
        context_screen_owner_slug,
    }
}

/// Screen-convention arguments for [`selected_item_from_search`].
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SelectedItemFromSearchArgs {
    /// Region holding the search box.
    pub context_module: ContextModule,
    /// Kind of screen the user was on.
    pub context_screen_owner_type: OwnerType,
    /// ID of the screen owner.
    pub context_screen_owner_id: Option<String>,
    /// Slug of the screen owner.
    pub context_screen_owner_slug: Option<String>,
    /// Kind of screen the selection navigates to.
    pub destination_screen_owner_type: Option<OwnerType>,
    /// ID of the destination owner.
    pub destination_screen_owner_id: Option<String>,
    /// Slug of the destination owner.
    pub destination_screen_owner_slug: Option<String>,
    /// Kind of the selected entity.
    pub owner_type: OwnerType,
    /// ID of the selected entity.
    pub owner_id: String,
    /// Slug of the selected entity.
    pub owner_slug: String,
    /// Text typed before selecting.
    pub query: String,
}

impl SelectedItemFromSearchArgs {
    /// Required arguments only; optional ones start absent.
    pub fn new(
        context_module: ContextModule,
        context_screen_owner_type: OwnerType,
        owner_type: OwnerType,
        owner_id: impl Into<String>,
        owner_slug: impl Into<String>,
        query: impl Into<String>,
    ) -> Self {
        Self {
            context_module,
            context_screen_owner_type,
            context_screen_owner_id: None,
            context_screen_owner_slug: None,
            destination_screen_owner_type: None,
            destination_screen_owner_id: None,
            destination_screen_owner_slug: None,
            owner_type,
            owner_id: owner_id.into(),
            owner_slug: owner_slug.into(),
            query: query.into(),
        }
    }
}

/// A user selects an item from search (screen convention).
#[deprecated(note = "use beacon_helpers::selected_item_from_search")]
#[must_use]
pub fn selected_item_from_search(args: SelectedItemFromSearchArgs) -> SelectedItemFromSearch {
    let SelectedItemFromSearchArgs {
        context_module,
        context_screen_owner_type,
        context_screen_owner_id,
        context_screen_owner_slug,
        destination_screen_owner_type,
        destination_screen_owner_id,
        destination_screen_owner_slug,
        owner_type,
        owner_id,
        owner_slug,
        query,
    } = args;

    SelectedItemFromSearch {
        context_module,
        context_screen_owner_type,
        context_screen_owner_id,
        context_screen_owner_slug,
        destination_screen_owner_type,
        destination_screen_owner_id,
        destination_screen_owner_slug,
        owner_type,
        owner_id,
        owner_slug,
        query,
    }
}

/// Screen-convention arguments for [`searched_with_no_results`].
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SearchedWithNoResultsArgs {
    /// Region holding the search box.
    pub context_module: ContextModule,
    /// Kind of screen the user was on.
    pub context_screen_owner_type: OwnerType,
    /// ID of the screen owner.
    pub context_screen_owner_id: Option<String>,
    /// Slug of the screen owner.
    pub context_screen_owner_slug: Option<String>,
    /// Kind of screen the search navigated to.
    pub destination_screen_owner_type: Option<OwnerType>,
    /// Text that produced no results.
    pub query: String,
}

impl SearchedWithNoResultsArgs {
    /// Required arguments only; optional ones start absent.
    pub fn new(
        context_module: ContextModule,
        context_screen_owner_type: OwnerType,
        query: impl Into<String>,
    ) -> Self {
        Self {
            context_module,
            context_screen_owner_type,
            context_screen_owner_id: None,
            context_screen_owner_slug: None,
            destination_screen_owner_type: None,
            query: query.into(),
        }
    }
}

/// A user searches with no results (screen convention).
#[deprecated(note = "use beacon_helpers::searched_with_no_results")]
#[must_use]
pub fn searched_with_no_results(args: SearchedWithNoResultsArgs) -> SearchedWithNoResults {
    let SearchedWithNoResultsArgs {
        context_module,
        context_screen_owner_type,
        context_screen_owner_id,
        context_screen_owner_slug,
        destination_screen_owner_type,
        query,
    } = args;

    SearchedWithNoResults {
        context_module,
        context_screen_owner_type,
        context_screen_owner_id,
        context_screen_owner_slug,
        destination_screen_owner_type,
        query,
    }
}
