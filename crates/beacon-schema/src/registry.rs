//! The event registry.
//!
//! All definitions are produced by [`define_events!`] from a single
//! source-of-truth table. Add an event kind by adding one row with a
//! previously unused wire tag; existing rows never change shape.
//!
//! Tags are camel case except `rail_viewed` and `item_viewed`, which
//! downstream consumers already key on in snake case.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::Result;
use crate::events::{auth, click, conversation, follow, group, impression, search, system, tap};

/// A record type bound to exactly one [`ActionType`].
///
/// Implemented by every canonical schema. The tag lives on the type rather
/// than in a field, so a schema value can never carry the wrong tag.
pub trait EventSchema: Into<Event> {
    /// Action tag written as the `action` key on the wire.
    const ACTION: ActionType;

    /// Wrap this record in the [`Event`] union.
    fn into_event(self) -> Event {
        self.into()
    }
}

/// Kind of user interaction an event records.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventDomain {
    /// iOS taps.
    Tap,
    /// Web clicks.
    Click,
    /// Search boxes, including the price database.
    Search,
    /// Things the user saw.
    Impression,
    /// Saves and follows.
    Follow,
    /// Inbox conversations.
    Conversation,
    /// Sign-up and login.
    Auth,
    /// Not tied to a gesture.
    System,
}

define_events! {
    events {
        /// Corresponds to [`auth::AuthImpression`].
        AuthImpression => "authImpression" => "auth_impression" => auth::AuthImpression,
        /// Corresponds to [`group::ClickedArtistGroup`].
        ClickedArtistGroup => "clickedArtistGroup" => "clicked_artist_group" => group::ClickedArtistGroup,
        /// Corresponds to [`group::ClickedArtistSeriesGroup`].
        ClickedArtistSeriesGroup => "clickedArtistSeriesGroup" => "clicked_artist_series_group" => group::ClickedArtistSeriesGroup,
        /// Corresponds to [`group::ClickedArtworkGroup`].
        ClickedArtworkGroup => "clickedArtworkGroup" => "clicked_artwork_group" => group::ClickedArtworkGroup,
        /// Corresponds to [`group::ClickedAuctionGroup`].
        ClickedAuctionGroup => "clickedAuctionGroup" => "clicked_auction_group" => group::ClickedAuctionGroup,
        /// Corresponds to [`group::ClickedCollectionGroup`].
        ClickedCollectionGroup => "clickedCollectionGroup" => "clicked_collection_group" => group::ClickedCollectionGroup,
        /// Corresponds to [`group::ClickedFairGroup`].
        ClickedFairGroup => "clickedFairGroup" => "clicked_fair_group" => group::ClickedFairGroup,
        /// Corresponds to [`click::ClickedMainArtworkGrid`].
        ClickedMainArtworkGrid => "clickedMainArtworkGrid" => "clicked_main_artwork_grid" => click::ClickedMainArtworkGrid,
        /// Corresponds to [`search::ConsignmentArtistFailed`].
        ConsignmentArtistFailed => "consignmentArtistFailed" => "consignment_artist_failed" => search::ConsignmentArtistFailed,
        /// Corresponds to [`auth::CreatedAccount`].
        CreatedAccount => "createdAccount" => "created_account" => auth::CreatedAccount,
        /// Corresponds to [`impression::ErrorMessageViewed`].
        ErrorMessageViewed => "errorMessageViewed" => "error_message_viewed" => impression::ErrorMessageViewed,
        /// Corresponds to [`conversation::FocusedOnConversationMessageInput`].
        FocusedOnConversationMessageInput => "focusedOnConversationMessageInput" => "focused_on_conversation_message_input" => conversation::FocusedOnConversationMessageInput,
        /// Corresponds to [`search::FocusedOnPriceDatabaseSearchInput`].
        FocusedOnPriceDatabaseSearchInput => "focusedOnPriceDatabaseSearchInput" => "focused_on_price_database_search_input" => search::FocusedOnPriceDatabaseSearchInput,
        /// Corresponds to [`search::FocusedOnSearchInput`].
        FocusedOnSearchInput => "focusedOnSearchInput" => "focused_on_search_input" => search::FocusedOnSearchInput,
        /// Corresponds to [`follow::FollowedArtist`].
        FollowedArtist => "followedArtist" => "followed_artist" => follow::FollowedArtist,
        /// Corresponds to [`follow::FollowedGene`].
        FollowedGene => "followedGene" => "followed_gene" => follow::FollowedGene,
        /// Corresponds to [`impression::ItemViewed`].
        ItemViewed => "item_viewed" => "item_viewed" => impression::ItemViewed,
        /// Corresponds to [`impression::RailViewed`].
        RailViewed => "rail_viewed" => "rail_viewed" => impression::RailViewed,
        /// Corresponds to [`auth::ResetYourPassword`].
        ResetYourPassword => "resetYourPassword" => "reset_your_password" => auth::ResetYourPassword,
        /// Corresponds to [`search::SearchedPriceDatabase`].
        SearchedPriceDatabase => "searchedPriceDatabase" => "searched_price_database" => search::SearchedPriceDatabase,
        /// Corresponds to [`search::SearchedWithNoResults`].
        SearchedWithNoResults => "searchedWithNoResults" => "searched_with_no_results" => search::SearchedWithNoResults,
        /// Corresponds to [`search::SelectedItemFromPriceDatabaseSearch`].
        SelectedItemFromPriceDatabaseSearch => "selectedItemFromPriceDatabaseSearch" => "selected_item_from_price_database_search" => search::SelectedItemFromPriceDatabaseSearch,
        /// Corresponds to [`search::SelectedItemFromSearch`].
        SelectedItemFromSearch => "selectedItemFromSearch" => "selected_item_from_search" => search::SelectedItemFromSearch,
        /// Corresponds to [`search::SelectedSearchSuggestionQuickNavigationItem`].
        SelectedSearchSuggestionQuickNavigationItem => "selectedSearchSuggestionQuickNavigationItem" => "selected_search_suggestion_quick_navigation_item" => search::SelectedSearchSuggestionQuickNavigationItem,
        /// Corresponds to [`impression::SendOffersBannerViewed`].
        SendOffersBannerViewed => "sendOffersBannerViewed" => "send_offers_banner_viewed" => impression::SendOffersBannerViewed,
        /// Corresponds to [`impression::SendOffersErrorMessage`].
        SendOffersErrorMessage => "sendOffersErrorMessage" => "send_offers_error_message" => impression::SendOffersErrorMessage,
        /// Corresponds to [`impression::SendOffersModalViewed`].
        SendOffersModalViewed => "sendOffersModalViewed" => "send_offers_modal_viewed" => impression::SendOffersModalViewed,
        /// Corresponds to [`conversation::SentConversationMessage`].
        SentConversationMessage => "sentConversationMessage" => "sent_conversation_message" => conversation::SentConversationMessage,
        /// Corresponds to [`auth::SuccessfullyLoggedIn`].
        SuccessfullyLoggedIn => "successfullyLoggedIn" => "successfully_logged_in" => auth::SuccessfullyLoggedIn,
        /// Corresponds to [`group::TappedArtistGroup`].
        TappedArtistGroup => "tappedArtistGroup" => "tapped_artist_group" => group::TappedArtistGroup,
        /// Corresponds to [`group::TappedArtistSeriesGroup`].
        TappedArtistSeriesGroup => "tappedArtistSeriesGroup" => "tapped_artist_series_group" => group::TappedArtistSeriesGroup,
        /// Corresponds to [`group::TappedArtworkGroup`].
        TappedArtworkGroup => "tappedArtworkGroup" => "tapped_artwork_group" => group::TappedArtworkGroup,
        /// Corresponds to [`group::TappedAuctionGroup`].
        TappedAuctionGroup => "tappedAuctionGroup" => "tapped_auction_group" => group::TappedAuctionGroup,
        /// Corresponds to [`group::TappedCollectionGroup`].
        TappedCollectionGroup => "tappedCollectionGroup" => "tapped_collection_group" => group::TappedCollectionGroup,
        /// Corresponds to [`tap::TappedConsign`].
        TappedConsign => "tappedConsign" => "tapped_consign" => tap::TappedConsign,
        /// Corresponds to [`group::TappedExploreGroup`].
        TappedExploreGroup => "tappedExploreGroup" => "tapped_explore_group" => group::TappedExploreGroup,
        /// Corresponds to [`group::TappedFairGroup`].
        TappedFairGroup => "tappedFairGroup" => "tapped_fair_group" => group::TappedFairGroup,
        /// Corresponds to [`tap::TappedMainArtworkGrid`].
        TappedMainArtworkGrid => "tappedMainArtworkGrid" => "tapped_main_artwork_grid" => tap::TappedMainArtworkGrid,
        /// Corresponds to [`tap::TappedPromoSpace`].
        TappedPromoSpace => "tappedPromoSpace" => "tapped_promo_space" => tap::TappedPromoSpace,
        /// Corresponds to [`tap::TappedTabBar`].
        TappedTabBar => "tappedTabBar" => "tapped_tab_bar" => tap::TappedTabBar,
        /// Corresponds to [`group::TappedViewingRoomGroup`].
        TappedViewingRoomGroup => "tappedViewingRoomGroup" => "tapped_viewing_room_group" => group::TappedViewingRoomGroup,
        /// Corresponds to [`system::TimeOnPage`].
        TimeOnPage => "timeOnPage" => "time_on_page" => system::TimeOnPage,
        /// Corresponds to [`impression::TooltipViewed`].
        TooltipViewed => "tooltipViewed" => "tooltip_viewed" => impression::TooltipViewed,
        /// Corresponds to [`follow::UnfollowedArtist`].
        UnfollowedArtist => "unfollowedArtist" => "unfollowed_artist" => follow::UnfollowedArtist,
        /// Corresponds to [`follow::UnfollowedGene`].
        UnfollowedGene => "unfollowedGene" => "unfollowed_gene" => follow::UnfollowedGene,
        /// Corresponds to [`impression::ValidationAddressViewed`].
        ValidationAddressViewed => "validationAddressViewed" => "validation_address_viewed" => impression::ValidationAddressViewed,
    }
    domain_groups {
        /// Whether this is an iOS tap event.
        is_tap_type => Tap => [
            TappedArtistGroup,
            TappedArtistSeriesGroup,
            TappedArtworkGroup,
            TappedAuctionGroup,
            TappedCollectionGroup,
            TappedConsign,
            TappedExploreGroup,
            TappedFairGroup,
            TappedMainArtworkGrid,
            TappedPromoSpace,
            TappedTabBar,
            TappedViewingRoomGroup,
        ],
        /// Whether this is a web click event.
        is_click_type => Click => [
            ClickedArtistGroup,
            ClickedArtistSeriesGroup,
            ClickedArtworkGroup,
            ClickedAuctionGroup,
            ClickedCollectionGroup,
            ClickedFairGroup,
            ClickedMainArtworkGrid,
        ],
        /// Whether this is a search event, including the price database.
        is_search_type => Search => [
            ConsignmentArtistFailed,
            FocusedOnPriceDatabaseSearchInput,
            FocusedOnSearchInput,
            SearchedPriceDatabase,
            SearchedWithNoResults,
            SelectedItemFromPriceDatabaseSearch,
            SelectedItemFromSearch,
            SelectedSearchSuggestionQuickNavigationItem,
        ],
        /// Whether this is an impression (something the user saw).
        is_impression_type => Impression => [
            ErrorMessageViewed,
            ItemViewed,
            RailViewed,
            SendOffersBannerViewed,
            SendOffersErrorMessage,
            SendOffersModalViewed,
            TooltipViewed,
            ValidationAddressViewed,
        ],
        /// Whether this is a save or follow event.
        is_follow_type => Follow => [
            FollowedArtist,
            FollowedGene,
            UnfollowedArtist,
            UnfollowedGene,
        ],
        /// Whether this is an inbox conversation event.
        is_conversation_type => Conversation => [
            FocusedOnConversationMessageInput,
            SentConversationMessage,
        ],
        /// Whether this is an authentication event.
        is_auth_type => Auth => [
            AuthImpression,
            CreatedAccount,
            ResetYourPassword,
            SuccessfullyLoggedIn,
        ],
        /// Whether this is a system event.
        is_system_type => System => [
            TimeOnPage,
        ],
    }
}

impl Event {
    /// The record sent downstream: the `action` tag plus the schema's fields.
    pub fn to_wire(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use serde_json::json;

    use super::*;
    use crate::pinned::TabBarModule;
    use crate::vocabulary::{ContextModule, GridItemType, OwnerType, PageOwnerType};

    fn snake_case(tag: &str) -> String {
        let mut out = String::with_capacity(tag.len() + 8);
        for c in tag.chars() {
            if c.is_ascii_uppercase() {
                out.push('_');
                out.push(c.to_ascii_lowercase());
            } else {
                out.push(c);
            }
        }
        out
    }

    fn domain_flags(action: ActionType) -> [bool; 8] {
        [
            action.is_tap_type(),
            action.is_click_type(),
            action.is_search_type(),
            action.is_impression_type(),
            action.is_follow_type(),
            action.is_conversation_type(),
            action.is_auth_type(),
            action.is_system_type(),
        ]
    }

    #[test]
    fn all_action_types_constant_has_46_variants() {
        assert_eq!(ALL_ACTION_TYPES.len(), 46);
    }

    #[test]
    fn wire_tags_are_unique() {
        let mut seen = HashSet::new();
        for action in &ALL_ACTION_TYPES {
            assert!(seen.insert(action.as_str()), "duplicate tag: {action}");
        }
    }

    #[test]
    fn table_names_are_unique() {
        let mut seen = HashSet::new();
        for action in &ALL_ACTION_TYPES {
            assert!(seen.insert(action.table_name()), "duplicate table: {action}");
        }
    }

    #[test]
    fn table_name_is_snake_case_of_tag() {
        for action in &ALL_ACTION_TYPES {
            assert_eq!(action.table_name(), snake_case(action.as_str()));
        }
        assert_eq!(ActionType::RailViewed.table_name(), "rail_viewed");
        assert_eq!(
            ActionType::TappedMainArtworkGrid.table_name(),
            "tapped_main_artwork_grid"
        );
    }

    #[test]
    fn tag_equals_lowered_variant_name() {
        for action in &ALL_ACTION_TYPES {
            if matches!(action, ActionType::RailViewed | ActionType::ItemViewed) {
                assert_eq!(action.as_str(), action.table_name());
                continue;
            }
            let name = format!("{action:?}");
            let lowered = name[..1].to_lowercase() + &name[1..];
            assert_eq!(action.as_str(), lowered);
        }
    }

    #[test]
    fn as_str_matches_serde() {
        for action in &ALL_ACTION_TYPES {
            let json = serde_json::to_value(action).unwrap();
            assert_eq!(json.as_str().unwrap(), action.as_str());
            let back: ActionType = serde_json::from_value(json).unwrap();
            assert_eq!(*action, back);
        }
    }

    #[test]
    fn display_matches_as_str() {
        for action in &ALL_ACTION_TYPES {
            assert_eq!(format!("{action}"), action.as_str());
        }
    }

    #[test]
    fn from_str_roundtrip() {
        for action in &ALL_ACTION_TYPES {
            let parsed: ActionType = action.as_str().parse().unwrap();
            assert_eq!(*action, parsed);
        }
    }

    #[test]
    fn from_str_rejects_unknown() {
        let err = "tapped_main_artwork_grid".parse::<ActionType>().unwrap_err();
        assert!(err.to_string().contains("unknown action"));
        assert!("".parse::<ActionType>().is_err());
    }

    #[test]
    fn every_action_belongs_to_exactly_one_domain() {
        for action in &ALL_ACTION_TYPES {
            let count = domain_flags(*action).iter().filter(|f| **f).count();
            assert_eq!(count, 1, "{action} is in {count} domains");
        }
    }

    #[test]
    fn impression_tags_are_snake_case() {
        assert_eq!(ActionType::RailViewed.as_str(), "rail_viewed");
        assert_eq!(ActionType::ItemViewed.as_str(), "item_viewed");
        assert_eq!("rail_viewed".parse::<ActionType>().unwrap(), ActionType::RailViewed);
        assert!("railViewed".parse::<ActionType>().is_err());
    }

    #[test]
    fn domain_predicates() {
        assert!(ActionType::TappedMainArtworkGrid.is_tap_type());
        assert!(!ActionType::ClickedMainArtworkGrid.is_tap_type());
        assert!(ActionType::ClickedMainArtworkGrid.is_click_type());
        assert!(ActionType::SearchedPriceDatabase.is_search_type());
        assert!(ActionType::RailViewed.is_impression_type());
        assert!(ActionType::UnfollowedArtist.is_follow_type());
        assert!(ActionType::SentConversationMessage.is_conversation_type());
        assert!(ActionType::SuccessfullyLoggedIn.is_auth_type());
        assert!(ActionType::TimeOnPage.is_system_type());
    }

    #[test]
    fn domain_agrees_with_predicates() {
        for action in &ALL_ACTION_TYPES {
            let expected = match action.domain() {
                EventDomain::Tap => action.is_tap_type(),
                EventDomain::Click => action.is_click_type(),
                EventDomain::Search => action.is_search_type(),
                EventDomain::Impression => action.is_impression_type(),
                EventDomain::Follow => action.is_follow_type(),
                EventDomain::Conversation => action.is_conversation_type(),
                EventDomain::Auth => action.is_auth_type(),
                EventDomain::System => action.is_system_type(),
            };
            assert!(expected, "{action} predicate disagrees with domain()");
        }
        assert_eq!(ActionType::ItemViewed.domain(), EventDomain::Impression);
    }

    #[test]
    fn into_event_wraps_schema() {
        let event = conversation::FocusedOnConversationMessageInput {
            impulse_conversation_id: "conv-2".into(),
        }
        .into_event();
        assert_eq!(event.action(), ActionType::FocusedOnConversationMessageInput);
    }

    #[test]
    fn schema_constant_matches_event_action() {
        let schema = tap::TappedTabBar {
            context_module: TabBarModule,
            tab: OwnerType::Inbox,
            badge: true,
        };
        assert_eq!(tap::TappedTabBar::ACTION, ActionType::TappedTabBar);
        assert_eq!(Event::from(schema).action(), tap::TappedTabBar::ACTION);
    }

    #[test]
    fn event_serializes_with_action_tag() {
        let event = Event::from(system::TimeOnPage {
            context_owner_type: PageOwnerType::Artist,
            context_owner_id: None,
            context_owner_slug: Some("andy-warhol".into()),
        });
        assert_eq!(
            event.to_wire().unwrap(),
            json!({
                "action": "timeOnPage",
                "context_owner_type": "artist",
                "context_owner_slug": "andy-warhol",
            })
        );
    }

    #[test]
    fn event_roundtrips_through_wire() {
        let event = Event::from(conversation::SentConversationMessage {
            impulse_conversation_id: "conv-1".into(),
        });
        let back: Event = serde_json::from_value(event.to_wire().unwrap()).unwrap();
        assert_eq!(back, event);
    }

    #[test]
    fn event_rejects_extra_field() {
        let result = serde_json::from_value::<Event>(json!({
            "action": "sentConversationMessage",
            "impulse_conversation_id": "conv-1",
            "context_module": "inboxConversation",
        }));
        assert!(result.is_err());
    }

    #[test]
    fn event_rejects_missing_required_field() {
        let result = serde_json::from_value::<Event>(json!({
            "action": "tappedTabBar",
            "context_module": "tabBar",
            "tab": "home",
        }));
        assert!(result.is_err());
    }

    #[test]
    fn event_accepts_absent_optional_field() {
        let event: Event = serde_json::from_value(json!({
            "action": "rail_viewed",
            "context_module": "newWorksForYouRail",
            "context_screen": "home",
        }))
        .unwrap();
        assert_eq!(event.action(), ActionType::RailViewed);
    }

    #[test]
    fn entity_groups_split_by_platform() {
        let groups: Vec<_> = ALL_ACTION_TYPES
            .iter()
            .filter(|a| a.as_str().ends_with("Group"))
            .collect();
        assert_eq!(groups.len(), 14);
        for action in groups {
            let expected = if action.as_str().starts_with("tapped") {
                EventDomain::Tap
            } else {
                EventDomain::Click
            };
            assert_eq!(action.domain(), expected, "{action}");
        }
    }

    #[test]
    fn entity_group_kinds_share_one_shape() {
        let shape = group::EntityGroup {
            context_module: ContextModule::ArtistRail,
            context_owner_type: PageOwnerType::Home,
            context_owner_id: None,
            context_owner_slug: None,
            destination_owner_type: OwnerType::Artist,
            destination_owner_id: Some("4d8b92b34eb68a1b2c0003f4".into()),
            destination_owner_slug: Some("andy-warhol".into()),
            horizontal_slide_position: Some(2),
            module_height: None,
            curation_boost: None,
            item_type: GridItemType::Thumbnail,
        };
        let tapped = Event::from(group::TappedArtistGroup(shape.clone())).to_wire().unwrap();
        let clicked = Event::from(group::ClickedArtistGroup(shape)).to_wire().unwrap();
        assert_eq!(tapped["action"], "tappedArtistGroup");
        assert_eq!(clicked["action"], "clickedArtistGroup");

        let strip = |mut wire: Value| {
            let _ = wire.as_object_mut().unwrap().remove("action");
            wire
        };
        assert_eq!(strip(tapped), strip(clicked));
    }

    #[test]
    fn entity_group_decodes_through_union() {
        let event: Event = serde_json::from_value(json!({
            "action": "tappedViewingRoomGroup",
            "context_module": "viewingRoomRail",
            "context_owner_type": "home",
            "destination_owner_type": "viewingRoom",
            "type": "viewAll",
        }))
        .unwrap();
        match event {
            Event::TappedViewingRoomGroup(group) => {
                assert_eq!(group.item_type, GridItemType::ViewAll);
                assert!(group.destination_owner_id.is_none());
            }
            other => panic!("decoded as {}", other.action()),
        }
    }

    #[test]
    fn entity_group_rejects_unknown_field() {
        let result = serde_json::from_value::<Event>(json!({
            "action": "clickedFairGroup",
            "context_module": "fairRail",
            "context_owner_type": "home",
            "destination_owner_type": "fair",
            "type": "thumbnail",
            "position": 3,
        }));
        assert!(result.is_err());
    }
}
