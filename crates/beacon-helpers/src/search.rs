//! Search factories, including the price database.

use beacon_schema::{
    ArtistAuctionResultsOwner, ArtistOwner, ConsignOwner, ConsignSubmissionFlowModule,
    ConsignmentArtistFailed, ContextModule, FocusedOnPriceDatabaseSearchInput,
    FocusedOnSearchInput, OwnerType, PageOwnerType, PriceDatabaseLandingModule,
    PriceDatabaseOwner, QuickNavigationLabel, SearchedPriceDatabase, SearchedWithNoResults,
    SelectedItemFromPriceDatabaseSearch, SelectedItemFromSearch,
    SelectedSearchSuggestionQuickNavigationItem,
};
use serde::Deserialize;

/// Arguments for [`focused_on_search_input`].
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FocusedOnSearchInputArgs {
    /// Region holding the search box.
    pub context_module: ContextModule,
    /// Kind of page the user was on.
    pub context_owner_type: PageOwnerType,
    /// ID of the page owner.
    pub context_owner_id: Option<String>,
    /// Slug of the page owner.
    pub context_owner_slug: Option<String>,
}

impl FocusedOnSearchInputArgs {
    /// Required arguments only; optional ones start absent.
    #[must_use]
    pub fn new(context_module: ContextModule, context_owner_type: PageOwnerType) -> Self {
        Self {
            context_module,
            context_owner_type,
            context_owner_id: None,
            context_owner_slug: None,
        }
    }
}

/// A user focuses on a search box.
#[must_use]
pub fn focused_on_search_input(args: FocusedOnSearchInputArgs) -> FocusedOnSearchInput {
    let FocusedOnSearchInputArgs {
        context_module,
        context_owner_type,
        context_owner_id,
        context_owner_slug,
    } = args;

    FocusedOnSearchInput {
        context_module,
        context_owner_type,
        context_owner_id,
        context_owner_slug,
    }
}

/// Arguments for [`selected_item_from_search`].
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SelectedItemFromSearchArgs {
    /// Region holding the search box.
    pub context_module: ContextModule,
    /// Kind of page the user was on.
    pub context_owner_type: PageOwnerType,
    /// ID of the page owner.
    pub context_owner_id: Option<String>,
    /// Slug of the page owner.
    pub context_owner_slug: Option<String>,
    /// Kind of page the selection navigates to.
    pub destination_owner_type: Option<PageOwnerType>,
    /// ID of the destination owner.
    pub destination_owner_id: Option<String>,
    /// Slug of the destination owner.
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

impl SelectedItemFromSearchArgs {
    /// Required arguments only; optional ones start absent.
    pub fn new(
        context_module: ContextModule,
        context_owner_type: PageOwnerType,
        owner_type: OwnerType,
        owner_id: impl Into<String>,
        owner_slug: impl Into<String>,
        query: impl Into<String>,
    ) -> Self {
        Self {
            context_module,
            context_owner_type,
            context_owner_id: None,
            context_owner_slug: None,
            destination_owner_type: None,
            destination_owner_id: None,
            destination_owner_slug: None,
            owner_type,
            owner_id: owner_id.into(),
            owner_slug: owner_slug.into(),
            query: query.into(),
        }
    }
}

/// A user selects an item from search.
#[must_use]
pub fn selected_item_from_search(args: SelectedItemFromSearchArgs) -> SelectedItemFromSearch {
    let SelectedItemFromSearchArgs {
        context_module,
        context_owner_type,
        context_owner_id,
        context_owner_slug,
        destination_owner_type,
        destination_owner_id,
        destination_owner_slug,
        owner_type,
        owner_id,
        owner_slug,
        query,
    } = args;

    SelectedItemFromSearch {
        context_module,
        context_owner_type,
        context_owner_id,
        context_owner_slug,
        destination_owner_type,
        destination_owner_id,
        destination_owner_slug,
        owner_type,
        owner_id,
        owner_slug,
        query,
    }
}

/// Arguments for [`searched_with_no_results`].
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SearchedWithNoResultsArgs {
    /// Region holding the search box.
    pub context_module: ContextModule,
    /// Kind of page the user was on.
    pub context_owner_type: PageOwnerType,
    /// ID of the page owner.
    pub context_owner_id: Option<String>,
    /// Slug of the page owner.
    pub context_owner_slug: Option<String>,
    /// Kind of page the search navigated to.
    pub destination_owner_type: Option<PageOwnerType>,
    /// Text that produced no results.
    pub query: String,
}

impl SearchedWithNoResultsArgs {
    /// Required arguments only; optional ones start absent.
    pub fn new(
        context_module: ContextModule,
        context_owner_type: PageOwnerType,
        query: impl Into<String>,
    ) -> Self {
        Self {
            context_module,
            context_owner_type,
            context_owner_id: None,
            context_owner_slug: None,
            destination_owner_type: None,
            query: query.into(),
        }
    }
}

/// A user searches with no results.
#[must_use]
pub fn searched_with_no_results(args: SearchedWithNoResultsArgs) -> SearchedWithNoResults {
    let SearchedWithNoResultsArgs {
        context_module,
        context_owner_type,
        context_owner_id,
        context_owner_slug,
        destination_owner_type,
        query,
    } = args;

    SearchedWithNoResults {
        context_module,
        context_owner_type,
        context_owner_id,
        context_owner_slug,
        destination_owner_type,
        query,
    }
}

/// Arguments for [`searched_price_database`].
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SearchedPriceDatabaseArgs {
    /// ID of the searched artist.
    pub destination_owner_id: String,
    /// Slug of the searched artist.
    pub destination_owner_slug: String,
    /// Applied filters, serialized as a JSON string.
    pub filters: String,
    /// Text typed into the search box.
    pub query: String,
}

/// A user queries the price database.
///
/// Context is pinned to the price database landing page and the destination
/// to the artist's auction results.
#[must_use]
pub fn searched_price_database(args: SearchedPriceDatabaseArgs) -> SearchedPriceDatabase {
    let SearchedPriceDatabaseArgs {
        destination_owner_id,
        destination_owner_slug,
        filters,
        query,
    } = args;

    SearchedPriceDatabase {
        context_module: PriceDatabaseLandingModule,
        context_owner_type: PriceDatabaseOwner,
        destination_owner_type: ArtistAuctionResultsOwner,
        destination_owner_id,
        destination_owner_slug,
        filters,
        query,
    }
}

/// A user focuses on the price database search box. Every field is fixed.
#[must_use]
pub fn focused_on_price_database_search_input() -> FocusedOnPriceDatabaseSearchInput {
    FocusedOnPriceDatabaseSearchInput {
        context_module: PriceDatabaseLandingModule,
        context_owner_type: PriceDatabaseOwner,
    }
}

/// Arguments for [`selected_item_from_price_database_search`].
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SelectedItemFromPriceDatabaseSearchArgs {
    /// ID of the selected artist.
    pub owner_id: String,
    /// Slug of the selected artist.
    pub owner_slug: String,
    /// Text typed before selecting.
    pub query: String,
}

/// A user selects an artist from the price database artist search.
#[must_use]
pub fn selected_item_from_price_database_search(
    args: SelectedItemFromPriceDatabaseSearchArgs,
) -> SelectedItemFromPriceDatabaseSearch {
    let SelectedItemFromPriceDatabaseSearchArgs {
        owner_id,
        owner_slug,
        query,
    } = args;

    SelectedItemFromPriceDatabaseSearch {
        context_module: PriceDatabaseLandingModule,
        context_owner_type: PriceDatabaseOwner,
        owner_type: ArtistOwner,
        owner_id,
        owner_slug,
        query,
    }
}

/// Arguments for [`consignment_artist_failed`].
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ConsignmentArtistFailedArgs {
    /// Artist name that was searched.
    pub query: String,
}

/// A user searches for an artist whose works cannot be consigned.
#[must_use]
pub fn consignment_artist_failed(args: ConsignmentArtistFailedArgs) -> ConsignmentArtistFailed {
    let ConsignmentArtistFailedArgs { query } = args;
    ConsignmentArtistFailed {
        context_module: ConsignSubmissionFlowModule,
        context_owner_type: ConsignOwner,
        query,
    }
}

/// Arguments for [`selected_search_suggestion_quick_navigation_item`].
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SelectedSearchSuggestionQuickNavigationItemArgs {
    /// Region holding the search box.
    pub context_module: Option<ContextModule>,
    /// Path the item navigates to.
    pub destination_path: String,
    /// Label shown on the item.
    pub label: QuickNavigationLabel,
}

impl SelectedSearchSuggestionQuickNavigationItemArgs {
    /// Required arguments only; optional ones start absent.
    pub fn new(destination_path: impl Into<String>, label: QuickNavigationLabel) -> Self {
        Self {
            context_module: None,
            destination_path: destination_path.into(),
            label,
        }
    }
}

/// A user selects a quick navigation item within a search suggestion.
#[must_use]
pub fn selected_search_suggestion_quick_navigation_item(
    args: SelectedSearchSuggestionQuickNavigationItemArgs,
) -> SelectedSearchSuggestionQuickNavigationItem {
    let SelectedSearchSuggestionQuickNavigationItemArgs {
        context_module,
        destination_path,
        label,
    } = args;

    SelectedSearchSuggestionQuickNavigationItem {
        context_module,
        destination_path,
        label,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::test_support::{keys, wire};

    #[test]
    fn focused_on_search_input_minimal() {
        let event = focused_on_search_input(FocusedOnSearchInputArgs::new(
            ContextModule::Header,
            PageOwnerType::Home,
        ));
        assert_eq!(
            wire(event),
            json!({
                "action": "focusedOnSearchInput",
                "context_module": "header",
                "context_owner_type": "home",
            })
        );
    }

    #[test]
    fn selected_item_from_search_with_destination() {
        let event = selected_item_from_search(SelectedItemFromSearchArgs {
            destination_owner_type: Some(PageOwnerType::Artist),
            destination_owner_id: Some("5df3e3fa485efe0012c37055".into()),
            destination_owner_slug: Some("andy-warhol".into()),
            ..SelectedItemFromSearchArgs::new(
                ContextModule::TopTab,
                PageOwnerType::Consign,
                OwnerType::Artist,
                "5df3e3fa485efe0012c37055",
                "andy-warhol",
                "andy warhol",
            )
        });
        assert_eq!(
            wire(event),
            json!({
                "action": "selectedItemFromSearch",
                "context_module": "topTab",
                "context_owner_type": "consign",
                "destination_owner_type": "artist",
                "destination_owner_id": "5df3e3fa485efe0012c37055",
                "destination_owner_slug": "andy-warhol",
                "owner_type": "artist",
                "owner_id": "5df3e3fa485efe0012c37055",
                "owner_slug": "andy-warhol",
                "query": "andy warhol",
            })
        );
    }

    #[test]
    fn searched_with_no_results_omits_absent_destination() {
        let wire = wire(searched_with_no_results(SearchedWithNoResultsArgs::new(
            ContextModule::Header,
            PageOwnerType::Search,
            "zzzz",
        )));
        assert_eq!(
            keys(&wire),
            ["action", "context_module", "context_owner_type", "query"]
        );
    }

    #[test]
    fn price_database_fixed_fields() {
        let event = searched_price_database(SearchedPriceDatabaseArgs {
            destination_owner_id: "4d8b92b34eb68a1b2c0003f4".into(),
            destination_owner_slug: "banksy".into(),
            filters: r#"{"categories":["Print"]}"#.into(),
            query: "banksy".into(),
        });
        let wire = wire(event);
        assert_eq!(wire["context_module"], "priceDatabaseLanding");
        assert_eq!(wire["context_owner_type"], "priceDatabase");
        assert_eq!(wire["destination_owner_type"], "artistAuctionResults");
        assert_eq!(wire["filters"], r#"{"categories":["Print"]}"#);
    }

    #[test]
    fn focused_on_price_database_search_input_is_constant() {
        assert_eq!(
            wire(focused_on_price_database_search_input()),
            json!({
                "action": "focusedOnPriceDatabaseSearchInput",
                "context_module": "priceDatabaseLanding",
                "context_owner_type": "priceDatabase",
            })
        );
    }

    #[test]
    fn selected_item_from_price_database_search_pins_artist() {
        let wire = wire(selected_item_from_price_database_search(
            SelectedItemFromPriceDatabaseSearchArgs {
                owner_id: "4d8b92b34eb68a1b2c0003f4".into(),
                owner_slug: "banksy".into(),
                query: "bank".into(),
            },
        ));
        assert_eq!(wire["owner_type"], "artist");
        assert_eq!(wire["context_owner_type"], "priceDatabase");
    }

    #[test]
    fn consignment_artist_failed_fixed_fields() {
        assert_eq!(
            wire(consignment_artist_failed(ConsignmentArtistFailedArgs {
                query: "Unknown Artist".into(),
            })),
            json!({
                "action": "consignmentArtistFailed",
                "context_module": "consignSubmissionFlow",
                "context_owner_type": "consign",
                "query": "Unknown Artist",
            })
        );
    }

    #[test]
    fn quick_navigation_label_keeps_display_text() {
        let event = selected_search_suggestion_quick_navigation_item(
            SelectedSearchSuggestionQuickNavigationItemArgs::new(
                "/artist/banksy/auction-results",
                QuickNavigationLabel::AuctionResults,
            ),
        );
        assert_eq!(
            wire(event),
            json!({
                "action": "selectedSearchSuggestionQuickNavigationItem",
                "destination_path": "/artist/banksy/auction-results",
                "label": "Auction Results",
            })
        );
    }
}
