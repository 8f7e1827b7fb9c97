//! Closed vocabularies referenced by event schemas.
//!
//! Every member's wire string equals its symbolic name with the leading
//! capital lowered (`OwnerType::ArtistSeries` ↔ `"artistSeries"`). The wire
//! string *is* the value stored downstream, so members may be added but
//! never renamed or removed.

use serde::{Deserialize, Serialize};

use crate::errors::SchemaError;

define_vocabulary! {
    /// Kind of entity that owns a page, a destination, or a search result.
    OwnerType {
        /// Artist page.
        Artist => "artist",
        /// Auction results for a single artist.
        ArtistAuctionResults => "artistAuctionResults",
        /// Artist series page.
        ArtistSeries => "artistSeries",
        /// Artwork page.
        Artwork => "artwork",
        /// Auction page.
        Auction => "auction",
        /// Collection page.
        Collection => "collection",
        /// Consignment landing page.
        Consign => "consign",
        /// Single inbox conversation.
        Conversation => "conversation",
        /// Fair page.
        Fair => "fair",
        /// Gene (category) page.
        Gene => "gene",
        /// Home feed.
        Home => "home",
        /// Inbox.
        Inbox => "inbox",
        /// My Collection.
        MyCollection => "myCollection",
        /// Checkout and order pages.
        Orders => "orders",
        /// Partner (gallery) page.
        Partner => "partner",
        /// Price database.
        PriceDatabase => "priceDatabase",
        /// User profile.
        Profile => "profile",
        /// Sale page.
        Sale => "sale",
        /// A saved search.
        SavedSearch => "savedSearch",
        /// Search results.
        Search => "search",
        /// Partner CMS send-offers page.
        SendOffers => "sendOffers",
        /// Show page.
        Show => "show",
        /// Tag page.
        Tag => "tag",
        /// Viewing room.
        ViewingRoom => "viewingRoom",
    }
}

define_vocabulary! {
    /// Kind of entity that can own a page a user is on.
    ///
    /// A strict subset of [`OwnerType`]; converts into it losslessly.
    PageOwnerType {
        /// Artist page.
        Artist => "artist",
        /// Artist series page.
        ArtistSeries => "artistSeries",
        /// Artwork page.
        Artwork => "artwork",
        /// Auction page.
        Auction => "auction",
        /// Collection page.
        Collection => "collection",
        /// Consignment landing page.
        Consign => "consign",
        /// Single inbox conversation.
        Conversation => "conversation",
        /// Fair page.
        Fair => "fair",
        /// Gene (category) page.
        Gene => "gene",
        /// Home feed.
        Home => "home",
        /// Inbox.
        Inbox => "inbox",
        /// My Collection.
        MyCollection => "myCollection",
        /// Checkout and order pages.
        Orders => "orders",
        /// Partner (gallery) page.
        Partner => "partner",
        /// Price database.
        PriceDatabase => "priceDatabase",
        /// User profile.
        Profile => "profile",
        /// Sale page.
        Sale => "sale",
        /// Search results.
        Search => "search",
        /// Partner CMS send-offers page.
        SendOffers => "sendOffers",
        /// Show page.
        Show => "show",
        /// Tag page.
        Tag => "tag",
        /// Viewing room.
        ViewingRoom => "viewingRoom",
    }
}

define_vocabulary! {
    /// Named UI region an event fired from.
    ///
    /// Shared by every schema carrying `context_module`, so warehouse
    /// queries keyed on it aggregate across event kinds.
    ContextModule {
        /// Header of an artist page.
        ArtistHeader => "artistHeader",
        /// Rail of artists.
        ArtistRail => "artistRail",
        /// Rail of artist series.
        ArtistSeriesRail => "artistSeriesRail",
        /// Main artwork grid.
        ArtworkGrid => "artworkGrid",
        /// Rail of artworks.
        ArtworkRail => "artworkRail",
        /// Rail of auctions.
        AuctionRail => "auctionRail",
        /// Rail of collections.
        CollectionRail => "collectionRail",
        /// Consignment submission flow.
        ConsignSubmissionFlow => "consignSubmissionFlow",
        /// Rail of fairs.
        FairRail => "fairRail",
        /// Global header.
        Header => "header",
        /// Home feed header.
        HomeHeader => "homeHeader",
        /// Conversation view in the inbox.
        InboxConversation => "inboxConversation",
        /// Login modal or screen.
        Login => "login",
        /// "New works for you" rail.
        NewWorksForYouRail => "newWorksForYouRail",
        /// Shipping step of checkout.
        OrdersShipping => "ordersShipping",
        /// Landing page of the price database.
        PriceDatabaseLanding => "priceDatabaseLanding",
        /// Popular artists rail.
        PopularArtistsRail => "popularArtistsRail",
        /// Promotional banner space.
        PromoSpace => "promoSpace",
        /// Recently viewed rail.
        RecentlyViewedRail => "recentlyViewedRail",
        /// Recommended artists rail.
        RecommendedArtistsRail => "recommendedArtistsRail",
        /// Search results list.
        SearchResults => "searchResults",
        /// Send-offers banner in the partner CMS.
        SendOffersBanner => "sendOffersBanner",
        /// Send-offers modal in the partner CMS.
        SendOffersModal => "sendOffersModal",
        /// Sign-up modal or screen.
        SignUp => "signUp",
        /// Bottom tab bar.
        TabBar => "tabBar",
        /// Top tab of a page.
        TopTab => "topTab",
        /// Rail of viewing rooms.
        ViewingRoomRail => "viewingRoomRail",
    }
}

define_vocabulary! {
    /// Presentation of a tapped or clicked item in a grid or rail.
    GridItemType {
        /// Thumbnail tile.
        Thumbnail => "thumbnail",
        /// "View all" link at the end of a rail.
        ViewAll => "viewAll",
    }
}

define_vocabulary! {
    /// Kind of item reported by an impression.
    ViewedItemType {
        /// An artwork.
        Artwork => "artwork",
    }
}

define_vocabulary! {
    /// Authentication provider used to sign up or log in.
    AuthService {
        /// Sign in with Apple.
        Apple => "apple",
        /// Email and password.
        Email => "email",
        /// Facebook login.
        Facebook => "facebook",
        /// Google login.
        Google => "google",
    }
}

define_vocabulary! {
    /// What the user was trying to do when authentication was requested.
    AuthIntent {
        /// Place a bid.
        Bid => "bid",
        /// Buy an artwork now.
        BuyNow => "buyNow",
        /// Submit a consignment.
        Consign => "consign",
        /// Create a saved-search alert.
        CreateAlert => "createAlert",
        /// Follow an artist.
        FollowArtist => "followArtist",
        /// Make an offer.
        MakeOffer => "makeOffer",
        /// Save an artwork.
        SaveArtwork => "saveArtwork",
        /// Plain sign-up with no other intent.
        SignUp => "signUp",
    }
}

define_vocabulary! {
    /// Which authentication form was shown.
    AuthModalType {
        /// Log in.
        Login => "login",
        /// Sign up.
        Signup => "signup",
        /// Forgot password.
        Forgot => "forgot",
    }
}

define_vocabulary! {
    /// Height of a rail module.
    ModuleHeight {
        /// Single row.
        Single => "single",
        /// Double row.
        Double => "double",
    }
}

define_vocabulary! {
    /// How the authentication prompt was triggered.
    AuthTrigger {
        /// User clicked a call to action.
        Click => "click",
        /// Prompt appeared after a scroll threshold.
        Scroll => "scroll",
        /// Prompt appeared after a delay.
        Timed => "timed",
    }
}

impl From<PageOwnerType> for OwnerType {
    fn from(page: PageOwnerType) -> Self {
        match page {
            PageOwnerType::Artist => Self::Artist,
            PageOwnerType::ArtistSeries => Self::ArtistSeries,
            PageOwnerType::Artwork => Self::Artwork,
            PageOwnerType::Auction => Self::Auction,
            PageOwnerType::Collection => Self::Collection,
            PageOwnerType::Consign => Self::Consign,
            PageOwnerType::Conversation => Self::Conversation,
            PageOwnerType::Fair => Self::Fair,
            PageOwnerType::Gene => Self::Gene,
            PageOwnerType::Home => Self::Home,
            PageOwnerType::Inbox => Self::Inbox,
            PageOwnerType::MyCollection => Self::MyCollection,
            PageOwnerType::Orders => Self::Orders,
            PageOwnerType::Partner => Self::Partner,
            PageOwnerType::PriceDatabase => Self::PriceDatabase,
            PageOwnerType::Profile => Self::Profile,
            PageOwnerType::Sale => Self::Sale,
            PageOwnerType::Search => Self::Search,
            PageOwnerType::SendOffers => Self::SendOffers,
            PageOwnerType::Show => Self::Show,
            PageOwnerType::Tag => Self::Tag,
            PageOwnerType::ViewingRoom => Self::ViewingRoom,
        }
    }
}

impl TryFrom<OwnerType> for PageOwnerType {
    type Error = SchemaError;

    fn try_from(owner: OwnerType) -> Result<Self, Self::Error> {
        owner.as_str().parse()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use assert_matches::assert_matches;
    use proptest::prelude::*;

    use super::*;

    /// Symbolic name of a member with its leading capital lowered.
    fn lowered_name(member: &impl std::fmt::Debug) -> String {
        let name = format!("{member:?}");
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => first.to_lowercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    macro_rules! assert_identity_vocabulary {
        ($($vocab:ty),* $(,)?) => {
            $(
                let mut seen = HashSet::new();
                for member in <$vocab>::ALL {
                    assert_eq!(member.as_str(), lowered_name(member), "{}", stringify!($vocab));
                    assert!(seen.insert(member.as_str()), "duplicate wire value {member}");
                    assert_eq!(member.as_str().parse::<$vocab>().unwrap(), *member);
                    assert_eq!(serde_json::to_value(member).unwrap(), member.as_str());
                    assert_eq!(format!("{member}"), member.as_str());
                }
            )*
        };
    }

    #[test]
    fn every_vocabulary_maps_names_to_identical_wire_values() {
        assert_identity_vocabulary!(
            OwnerType,
            PageOwnerType,
            ContextModule,
            GridItemType,
            ViewedItemType,
            AuthService,
            AuthIntent,
            AuthModalType,
            AuthTrigger,
            ModuleHeight,
        );
    }

    #[test]
    fn from_str_rejects_unknown_member() {
        let err = "spaceship".parse::<OwnerType>().unwrap_err();
        assert_matches!(
            err,
            SchemaError::UnknownMember { vocabulary: "OwnerType", ref value } if value == "spaceship"
        );
    }

    #[test]
    fn from_str_is_case_sensitive() {
        assert!("ArtworkGrid".parse::<ContextModule>().is_err());
        assert!("artworkgrid".parse::<ContextModule>().is_err());
        assert!("".parse::<ContextModule>().is_err());
    }

    #[test]
    fn deserialize_rejects_out_of_vocabulary() {
        let err = serde_json::from_str::<PageOwnerType>("\"artistAuctionResults\"");
        assert!(err.is_err());
    }

    #[test]
    fn page_owner_type_converts_to_same_owner_type() {
        for page in PageOwnerType::ALL {
            let owner = OwnerType::from(*page);
            assert_eq!(owner.as_str(), page.as_str());
            assert_eq!(PageOwnerType::try_from(owner).unwrap(), *page);
        }
    }

    #[test]
    fn owner_type_outside_pages_does_not_convert() {
        assert_matches!(
            PageOwnerType::try_from(OwnerType::ArtistAuctionResults),
            Err(SchemaError::UnknownMember { vocabulary: "PageOwnerType", .. })
        );
        assert!(PageOwnerType::try_from(OwnerType::SavedSearch).is_err());
    }

    #[test]
    fn page_owner_type_is_strict_subset() {
        assert!(PageOwnerType::ALL.len() < OwnerType::ALL.len());
    }

    fn member_or_noise() -> impl Strategy<Value = String> {
        prop_oneof![
            prop::sample::select(ContextModule::ALL).prop_map(|m| m.as_str().to_owned()),
            "[a-zA-Z]{0,24}",
        ]
    }

    proptest! {
        #[test]
        fn parse_accepts_exactly_the_members(input in member_or_noise()) {
            let is_member = ContextModule::ALL.iter().any(|m| m.as_str() == input);
            match input.parse::<ContextModule>() {
                Ok(member) => prop_assert_eq!(member.as_str(), input.as_str()),
                Err(_) => prop_assert!(!is_member, "{input} is a member but did not parse"),
            }
        }

        #[test]
        fn serde_roundtrips_every_owner(owner in prop::sample::select(OwnerType::ALL)) {
            let json = serde_json::to_string(&owner).unwrap();
            prop_assert_eq!(json.trim_matches('"'), owner.as_str());
            prop_assert_eq!(serde_json::from_str::<OwnerType>(&json).unwrap(), owner);
        }
    }
}
