//! # beacon-helpers
//!
//! Normalization factories: one pure function per action kind, mapping a
//! call site's arguments onto the canonical event record.
//!
//! Each factory takes an `…Args` struct holding only the fields the caller
//! chooses. Values the schema pins (`context_module` on the artwork grid,
//! `destination_owner_type`, `type`, …) are written by the factory and are
//! not on the args type, so they cannot be overridden. Args with optional
//! fields have a `new` constructor taking the required ones, meant for
//! struct update syntax:
//!
//! ```ignore
//! let event = tapped_main_artwork_grid(TappedMainArtworkGridArgs {
//!     position: Some(3),
//!     ..TappedMainArtworkGridArgs::new(PageOwnerType::Artist, id, slug)
//! });
//! ```
//!
//! On the serde side args read camelCase keys (`contextOwnerType`, …) so
//! bridged call sites can pass their argument objects straight through.
//!
//! Factories for the superseded screen convention live in [`deprecated`].

#![deny(unsafe_code)]

pub mod auth;
pub mod click;
pub mod conversation;
pub mod deprecated;
pub mod follow;
pub mod group;
pub mod impression;
pub mod search;
pub mod system;
pub mod tap;

#[cfg(test)]
mod test_support;

pub use auth::{
    AuthImpressionArgs, CreatedAccountArgs, ResetYourPasswordArgs, SuccessfullyLoggedInArgs,
    auth_impression, created_account, reset_your_password, successfully_logged_in,
};
pub use click::{ClickedMainArtworkGridArgs, clicked_main_artwork_grid};
pub use conversation::{
    ConversationArgs, focused_on_conversation_message_input, sent_conversation_message,
};
pub use follow::{FollowArgs, followed_artist, followed_gene, unfollowed_artist, unfollowed_gene};
pub use group::{
    EntityGroupArgs, clicked_artist_group, clicked_artist_series_group, clicked_artwork_group,
    clicked_auction_group, clicked_collection_group, clicked_fair_group, entity_group,
    tapped_artist_group, tapped_artist_series_group, tapped_artwork_group, tapped_auction_group,
    tapped_collection_group, tapped_explore_group, tapped_fair_group, tapped_viewing_room_group,
};
pub use impression::{
    ErrorMessageViewedArgs, ItemViewedArgs, RailViewedArgs, SendOffersBannerViewedArgs,
    SendOffersErrorMessageArgs, SendOffersModalViewedArgs, TooltipViewedArgs,
    ValidationAddressViewedArgs, error_message_viewed, item_viewed, rail_viewed,
    send_offers_banner_viewed, send_offers_error_message, send_offers_modal_viewed,
    tooltip_viewed, validation_address_viewed,
};
pub use search::{
    ConsignmentArtistFailedArgs, FocusedOnSearchInputArgs, SearchedPriceDatabaseArgs,
    SearchedWithNoResultsArgs, SelectedItemFromPriceDatabaseSearchArgs,
    SelectedItemFromSearchArgs, SelectedSearchSuggestionQuickNavigationItemArgs,
    consignment_artist_failed, focused_on_price_database_search_input, focused_on_search_input,
    searched_price_database, searched_with_no_results, selected_item_from_price_database_search,
    selected_item_from_search, selected_search_suggestion_quick_navigation_item,
};
pub use system::{TimeOnPageArgs, time_on_page};
pub use tap::{
    TappedConsignArgs, TappedMainArtworkGridArgs, TappedPromoSpaceArgs, TappedTabBarArgs,
    tapped_consign, tapped_main_artwork_grid, tapped_promo_space, tapped_tab_bar,
};
