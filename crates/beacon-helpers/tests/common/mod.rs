//! One sample per factory, shared by the integration tests.

#![allow(dead_code)]

use beacon_helpers::*;
use beacon_schema::{
    AuthIntent, AuthModalType, AuthService, AuthTrigger, ContextModule, Event, GridItemType,
    LegacyEvent, OwnerType, PageOwnerType, QuickNavigationLabel,
};

pub const ARTWORK_ID: &str = "5359794d1a1e86c3740001f7";
pub const ARTWORK_SLUG: &str = "andy-warhol-flower";

fn group_args() -> EntityGroupArgs {
    EntityGroupArgs::new(
        ContextModule::ArtistRail,
        PageOwnerType::Home,
        OwnerType::Artist,
        GridItemType::Thumbnail,
    )
}

/// Every current factory, called with required arguments only.
pub fn current_samples() -> Vec<Event> {
    vec![
        tapped_artist_group(group_args()).into(),
        tapped_artist_series_group(group_args()).into(),
        tapped_artwork_group(group_args()).into(),
        tapped_auction_group(group_args()).into(),
        tapped_collection_group(group_args()).into(),
        tapped_explore_group(group_args()).into(),
        tapped_fair_group(group_args()).into(),
        tapped_viewing_room_group(group_args()).into(),
        tapped_promo_space(TappedPromoSpaceArgs::new(
            ContextModule::PromoSpace,
            PageOwnerType::Home,
            "/viewing-room/alex-katz",
            "Alex Katz: Flowers",
        ))
        .into(),
        clicked_artist_group(group_args()).into(),
        clicked_artist_series_group(group_args()).into(),
        clicked_artwork_group(group_args()).into(),
        clicked_auction_group(group_args()).into(),
        clicked_collection_group(group_args()).into(),
        clicked_fair_group(group_args()).into(),
        followed_gene(FollowArgs::new(
            ContextModule::Header,
            PageOwnerType::Gene,
            "4d90d18edcdd5f44a5000010",
            "pop-art",
        ))
        .into(),
        unfollowed_gene(FollowArgs::new(
            ContextModule::Header,
            PageOwnerType::Gene,
            "4d90d18edcdd5f44a5000010",
            "pop-art",
        ))
        .into(),
        auth_impression(AuthImpressionArgs::new(
            ContextModule::Header,
            AuthIntent::SignUp,
            AuthTrigger::Timed,
            AuthModalType::Login,
        ))
        .into(),
        reset_your_password(ResetYourPasswordArgs {
            auth_redirect: "/".into(),
            context_module: ContextModule::Login,
            intent: AuthIntent::SignUp,
            trigger: AuthTrigger::Click,
        })
        .into(),
        tapped_main_artwork_grid(TappedMainArtworkGridArgs::new(
            PageOwnerType::Home,
            ARTWORK_ID,
            ARTWORK_SLUG,
        ))
        .into(),
        tapped_consign(TappedConsignArgs::new(
            ContextModule::Header,
            PageOwnerType::Home,
            "Sell with Artsy",
        ))
        .into(),
        tapped_tab_bar(TappedTabBarArgs {
            tab: OwnerType::Home,
            badge: false,
        })
        .into(),
        clicked_main_artwork_grid(ClickedMainArtworkGridArgs::new(
            PageOwnerType::Collection,
            ARTWORK_ID,
            ARTWORK_SLUG,
        ))
        .into(),
        focused_on_search_input(FocusedOnSearchInputArgs::new(
            ContextModule::Header,
            PageOwnerType::Home,
        ))
        .into(),
        selected_item_from_search(SelectedItemFromSearchArgs::new(
            ContextModule::Header,
            PageOwnerType::Home,
            OwnerType::Artist,
            "4d8b92b34eb68a1b2c0003f4",
            "andy-warhol",
            "warhol",
        ))
        .into(),
        searched_with_no_results(SearchedWithNoResultsArgs::new(
            ContextModule::Header,
            PageOwnerType::Home,
            "zzzz",
        ))
        .into(),
        searched_price_database(SearchedPriceDatabaseArgs {
            destination_owner_id: "4d8b92b34eb68a1b2c0003f4".into(),
            destination_owner_slug: "andy-warhol".into(),
            filters: "{}".into(),
            query: "warhol".into(),
        })
        .into(),
        focused_on_price_database_search_input().into(),
        selected_item_from_price_database_search(SelectedItemFromPriceDatabaseSearchArgs {
            owner_id: "4d8b92b34eb68a1b2c0003f4".into(),
            owner_slug: "andy-warhol".into(),
            query: "warhol".into(),
        })
        .into(),
        consignment_artist_failed(ConsignmentArtistFailedArgs {
            query: "Nobody".into(),
        })
        .into(),
        selected_search_suggestion_quick_navigation_item(
            SelectedSearchSuggestionQuickNavigationItemArgs::new(
                "/artist/andy-warhol/works-for-sale",
                QuickNavigationLabel::Artworks,
            ),
        )
        .into(),
        rail_viewed(RailViewedArgs::new(
            ContextModule::NewWorksForYouRail,
            OwnerType::Home,
        ))
        .into(),
        item_viewed(ItemViewedArgs::new(
            OwnerType::Home,
            ContextModule::NewWorksForYouRail,
            ARTWORK_ID,
        ))
        .into(),
        tooltip_viewed(TooltipViewedArgs {
            context_owner_id: "4d8b92b34eb68a1b2c0003f4".into(),
            context_owner_slug: "andy-warhol".into(),
            context_owner_type: PageOwnerType::Artist,
            tooltip_type: "follow".into(),
        })
        .into(),
        error_message_viewed(ErrorMessageViewedArgs::new(
            "order-1",
            OwnerType::Orders,
            "Payment failed",
            "Card declined",
            "Buy now",
        ))
        .into(),
        validation_address_viewed(ValidationAddressViewedArgs {
            context_module: ContextModule::OrdersShipping,
            context_page_owner_type: PageOwnerType::Orders,
            context_page_owner_id: "order-1".into(),
            user_id: "user-1".into(),
            flow: "user selected address".into(),
            subject: "Check your delivery address".into(),
            option: "suggested".into(),
        })
        .into(),
        send_offers_banner_viewed(SendOffersBannerViewedArgs {
            context_module: ContextModule::SendOffersBanner,
            context_page_owner_type: PageOwnerType::Artwork,
            partner_id: "partner-1".into(),
        })
        .into(),
        send_offers_modal_viewed(SendOffersModalViewedArgs {
            context_module: ContextModule::SendOffersModal,
            context_page_owner_type: PageOwnerType::Artwork,
            context_page_owner_id: ARTWORK_ID.into(),
            context_page_owner_slug: ARTWORK_SLUG.into(),
            partner_id: "partner-1".into(),
            artwork_id: ARTWORK_ID.into(),
            price: 1000.0,
            collectors: 3,
        })
        .into(),
        send_offers_error_message(SendOffersErrorMessageArgs {
            context_module: ContextModule::SendOffersModal,
            context_page_owner_type: PageOwnerType::Artwork,
            context_page_owner_id: ARTWORK_ID.into(),
            context_page_owner_slug: ARTWORK_SLUG.into(),
            partner_id: "partner-1".into(),
            artwork_id: ARTWORK_ID.into(),
            price: 99_999.0,
            collectors: 3,
            message: "Offer must be lower than list price".into(),
        })
        .into(),
        followed_artist(FollowArgs::new(
            ContextModule::ArtistHeader,
            PageOwnerType::Artist,
            "4d8b92b34eb68a1b2c0003f4",
            "andy-warhol",
        ))
        .into(),
        unfollowed_artist(FollowArgs::new(
            ContextModule::ArtistHeader,
            PageOwnerType::Artist,
            "4d8b92b34eb68a1b2c0003f4",
            "andy-warhol",
        ))
        .into(),
        focused_on_conversation_message_input(ConversationArgs {
            impulse_conversation_id: "conv-1".into(),
        })
        .into(),
        sent_conversation_message(ConversationArgs {
            impulse_conversation_id: "conv-1".into(),
        })
        .into(),
        created_account(CreatedAccountArgs::new(AuthService::Email, "user-1")).into(),
        successfully_logged_in(SuccessfullyLoggedInArgs::new(
            AuthService::Apple,
            "user-1",
            "/",
        ))
        .into(),
        time_on_page(TimeOnPageArgs::new(PageOwnerType::Artwork)).into(),
    ]
}

/// Every legacy factory, called with required arguments only.
#[allow(deprecated)]
pub fn legacy_samples() -> Vec<LegacyEvent> {
    use beacon_helpers::deprecated as legacy;

    vec![
        legacy::tapped_main_artwork_grid(legacy::TappedMainArtworkGridArgs::new(
            OwnerType::Home,
            ARTWORK_ID,
            ARTWORK_SLUG,
        ))
        .into(),
        legacy::tapped_consign(legacy::TappedConsignArgs::new(
            ContextModule::Header,
            OwnerType::Home,
            "Sell with Artsy",
        ))
        .into(),
        legacy::focused_on_search_input(legacy::FocusedOnSearchInputArgs::new(
            ContextModule::Header,
            OwnerType::Home,
        ))
        .into(),
        legacy::selected_item_from_search(legacy::SelectedItemFromSearchArgs::new(
            ContextModule::Header,
            OwnerType::Home,
            OwnerType::Artist,
            "4d8b92b34eb68a1b2c0003f4",
            "andy-warhol",
            "warhol",
        ))
        .into(),
        legacy::searched_with_no_results(legacy::SearchedWithNoResultsArgs::new(
            ContextModule::Header,
            OwnerType::Home,
            "zzzz",
        ))
        .into(),
    ]
}
