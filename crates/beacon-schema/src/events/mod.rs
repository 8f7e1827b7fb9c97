//! Canonical event schemas, one record type per [`ActionType`](crate::ActionType).
//!
//! Field names are the literal wire keys. Optional fields are omitted from
//! the wire when `None`; they are never emitted as `null` or an empty value.
//! Every schema rejects unknown fields on decode.
//!
//! The `action` discriminant is bound to the type through
//! [`EventSchema::ACTION`](crate::EventSchema::ACTION) and written when the
//! record is serialized as part of an [`Event`](crate::Event).

pub mod auth;
pub mod click;
pub mod conversation;
pub mod follow;
pub mod group;
pub mod impression;
pub mod search;
pub mod system;
pub mod tap;

pub use auth::{AuthImpression, CreatedAccount, ResetYourPassword, SuccessfullyLoggedIn};
pub use click::ClickedMainArtworkGrid;
pub use conversation::{FocusedOnConversationMessageInput, SentConversationMessage};
pub use follow::{FollowedArtist, FollowedGene, UnfollowedArtist, UnfollowedGene};
pub use group::{
    ClickedArtistGroup, ClickedArtistSeriesGroup, ClickedArtworkGroup, ClickedAuctionGroup,
    ClickedCollectionGroup, ClickedFairGroup, EntityGroup, TappedArtistGroup,
    TappedArtistSeriesGroup, TappedArtworkGroup, TappedAuctionGroup, TappedCollectionGroup,
    TappedExploreGroup, TappedFairGroup, TappedViewingRoomGroup,
};
pub use impression::{
    ErrorMessageViewed, ItemViewed, RailViewed, SendOffersBannerViewed, SendOffersErrorMessage,
    SendOffersModalViewed, TooltipViewed, ValidationAddressViewed,
};
pub use search::{
    ConsignmentArtistFailed, FocusedOnPriceDatabaseSearchInput, FocusedOnSearchInput,
    QuickNavigationLabel, SearchedPriceDatabase, SearchedWithNoResults,
    SelectedItemFromPriceDatabaseSearch, SelectedItemFromSearch,
    SelectedSearchSuggestionQuickNavigationItem,
};
pub use system::TimeOnPage;
pub use tap::{TappedConsign, TappedMainArtworkGrid, TappedPromoSpace, TappedTabBar};
