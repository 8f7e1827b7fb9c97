//! Search events, including the price database search.

use serde::{Deserialize, Serialize};

use crate::pinned::{
    ArtistAuctionResultsOwner, ArtistOwner, ConsignOwner, ConsignSubmissionFlowModule,
    PriceDatabaseLandingModule, PriceDatabaseOwner,
};
use crate::vocabulary::{ContextModule, OwnerType, PageOwnerType};

/// A user focuses on a search box.
///
/// ```json
/// {
///   "action": "focusedOnSearchInput",
///   "context_module": "header",
///   "context_owner_type": "home"
/// }
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FocusedOnSearchInput {
    /// Region holding the search box.
    pub context_module: ContextModule,
    /// Kind of page the user was on.
    pub context_owner_type: PageOwnerType,
    /// ID of the page owner.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context_owner_id: Option<String>,
    /// Slug of the page owner.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context_owner_slug: Option<String>,
}

/// A user selects an item from search.
///
/// ```json
/// {
///   "action": "selectedItemFromSearch",
///   "context_module": "topTab",
///   "context_owner_type": "consign",
///   "owner_type": "artist",
///   "owner_id": "5df3e3fa485efe0012c37055",
///   "owner_slug": "andy-warhol",
///   "query": "andy warhol"
/// }
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SelectedItemFromSearch {
    /// Region holding the search box.
    pub context_module: ContextModule,
    /// Kind of page the user was on.
    pub context_owner_type: PageOwnerType,
    /// ID of the page owner.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context_owner_id: Option<String>,
    /// Slug of the page owner.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context_owner_slug: Option<String>,
    /// Kind of page the selection navigates to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_owner_type: Option<PageOwnerType>,
    /// ID of the destination owner.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_owner_id: Option<String>,
    /// Slug of the destination owner.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_owner_slug: Option<String>,
    /// Kind of the selected entity.
    pub owner_type: OwnerType,
    /// ID of the selected entity.
    pub owner_id: String,
    /// Slug of the selected entity.
    pub owner_slug: String,
    /// Text typed before selecting.
    pub query: String,
}

/// A user searches with no results.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SearchedWithNoResults {
    /// Region holding the search box.
    pub context_module: ContextModule,
    /// Kind of page the user was on.
    pub context_owner_type: PageOwnerType,
    /// ID of the page owner.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context_owner_id: Option<String>,
    /// Slug of the page owner.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context_owner_slug: Option<String>,
    /// Kind of page the search navigated to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_owner_type: Option<PageOwnerType>,
    /// Text that produced no results.
    pub query: String,
}

/// A user queries the price database.
///
/// Context and destination types are pinned to the price database landing
/// page and the artist auction results page respectively.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SearchedPriceDatabase {
    /// The price database landing page.
    pub context_module: PriceDatabaseLandingModule,
    /// The price database.
    pub context_owner_type: PriceDatabaseOwner,
    /// Auction results of the searched artist.
    pub destination_owner_type: ArtistAuctionResultsOwner,
    /// ID of the searched artist.
    pub destination_owner_id: String,
    /// Slug of the searched artist.
    pub destination_owner_slug: String,
    /// Applied filters, serialized as a JSON string.
    pub filters: String,
    /// Text typed into the search box.
    pub query: String,
}

/// A user focuses on the price database search box.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FocusedOnPriceDatabaseSearchInput {
    /// The price database landing page.
    pub context_module: PriceDatabaseLandingModule,
    /// The price database.
    pub context_owner_type: PriceDatabaseOwner,
}

/// A user selects an artist from the price database artist search.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SelectedItemFromPriceDatabaseSearch {
    /// The price database landing page.
    pub context_module: PriceDatabaseLandingModule,
    /// The price database.
    pub context_owner_type: PriceDatabaseOwner,
    /// Kind of the selected entity.
    pub owner_type: ArtistOwner,
    /// ID of the selected artist.
    pub owner_id: String,
    /// Slug of the selected artist.
    pub owner_slug: String,
    /// Text typed before selecting.
    pub query: String,
}

/// A user searches for an artist in the consignment flow but cannot submit
/// works by that artist.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConsignmentArtistFailed {
    /// The consignment submission flow.
    pub context_module: ConsignSubmissionFlowModule,
    /// The consignment flow.
    pub context_owner_type: ConsignOwner,
    /// Artist name that was searched.
    pub query: String,
}

/// Label of a quick navigation item inside a search suggestion.
///
/// These are display labels, not identifiers, so their wire values keep
/// their original capitalization and spacing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuickNavigationLabel {
    /// Jump to the artist's artworks.
    #[serde(rename = "Artworks")]
    Artworks,
    /// Jump to the artist's auction results.
    #[serde(rename = "Auction Results")]
    AuctionResults,
}

/// A user selects a quick navigation item within a search suggestion.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SelectedSearchSuggestionQuickNavigationItem {
    /// Region holding the search box.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context_module: Option<ContextModule>,
    /// Path the item navigates to.
    pub destination_path: String,
    /// Label shown on the item.
    pub label: QuickNavigationLabel,
}
