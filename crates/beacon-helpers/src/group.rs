//! Entity group factories: taps (iOS) and clicks (web) on an item of a rail
//! or grid holding one kind of entity.
//!
//! Every group kind takes the same [`EntityGroupArgs`]; the factory picks the
//! action tag.

use beacon_schema::{
    ClickedArtistGroup, ClickedArtistSeriesGroup, ClickedArtworkGroup, ClickedAuctionGroup,
    ClickedCollectionGroup, ClickedFairGroup, ContextModule, EntityGroup, GridItemType,
    ModuleHeight, OwnerType, PageOwnerType, TappedArtistGroup, TappedArtistSeriesGroup,
    TappedArtworkGroup, TappedAuctionGroup, TappedCollectionGroup, TappedExploreGroup,
    TappedFairGroup, TappedViewingRoomGroup,
};
use serde::Deserialize;

/// Arguments shared by every entity group factory.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct EntityGroupArgs {
    /// The rail or grid holding the group.
    pub context_module: ContextModule,
    /// Kind of page the user was on.
    pub context_owner_type: PageOwnerType,
    /// ID of the page owner.
    pub context_owner_id: Option<String>,
    /// Slug of the page owner.
    pub context_owner_slug: Option<String>,
    /// Kind of page the item leads to.
    pub destination_owner_type: OwnerType,
    /// ID of the destination owner.
    pub destination_owner_id: Option<String>,
    /// Slug of the destination owner.
    pub destination_owner_slug: Option<String>,
    /// Index of the item within the rail.
    pub horizontal_slide_position: Option<u32>,
    /// Height of the rail.
    pub module_height: Option<ModuleHeight>,
    /// Whether the group was boosted by curation.
    pub curation_boost: Option<bool>,
    /// Tapped item, or the "view all" link.
    #[serde(rename = "type")]
    pub item_type: GridItemType,
}

impl EntityGroupArgs {
    /// Required arguments only; optional ones start absent.
    pub fn new(
        context_module: ContextModule,
        context_owner_type: PageOwnerType,
        destination_owner_type: OwnerType,
        item_type: GridItemType,
    ) -> Self {
        Self {
            context_module,
            context_owner_type,
            context_owner_id: None,
            context_owner_slug: None,
            destination_owner_type,
            destination_owner_id: None,
            destination_owner_slug: None,
            horizontal_slide_position: None,
            module_height: None,
            curation_boost: None,
            item_type,
        }
    }
}

/// The shared group record, before it is bound to an action.
#[must_use]
pub fn entity_group(args: EntityGroupArgs) -> EntityGroup {
    let EntityGroupArgs {
        context_module,
        context_owner_type,
        context_owner_id,
        context_owner_slug,
        destination_owner_type,
        destination_owner_id,
        destination_owner_slug,
        horizontal_slide_position,
        module_height,
        curation_boost,
        item_type,
    } = args;

    EntityGroup {
        context_module,
        context_owner_type,
        context_owner_id,
        context_owner_slug,
        destination_owner_type,
        destination_owner_id,
        destination_owner_slug,
        horizontal_slide_position,
        module_height,
        curation_boost,
        item_type,
    }
}

macro_rules! group_factories {
    ($($(#[doc = $doc:literal])* $factory:ident => $schema:ident),* $(,)?) => {
        $(
            $(#[doc = $doc])*
            #[must_use]
            pub fn $factory(args: EntityGroupArgs) -> $schema {
                $schema(entity_group(args))
            }
        )*
    };
}

group_factories! {
    /// A user clicks an item in an artist group.
    clicked_artist_group => ClickedArtistGroup,
    /// A user clicks an item in an artist series group.
    clicked_artist_series_group => ClickedArtistSeriesGroup,
    /// A user clicks an item in an artwork group.
    clicked_artwork_group => ClickedArtworkGroup,
    /// A user clicks an item in an auction group.
    clicked_auction_group => ClickedAuctionGroup,
    /// A user clicks an item in a collection group.
    clicked_collection_group => ClickedCollectionGroup,
    /// A user clicks an item in a fair group.
    clicked_fair_group => ClickedFairGroup,
    /// A user taps an item in an artist group.
    tapped_artist_group => TappedArtistGroup,
    /// A user taps an item in an artist series group.
    tapped_artist_series_group => TappedArtistSeriesGroup,
    /// A user taps an item in an artwork group.
    tapped_artwork_group => TappedArtworkGroup,
    /// A user taps an item in an auction group.
    tapped_auction_group => TappedAuctionGroup,
    /// A user taps an item in a collection group.
    tapped_collection_group => TappedCollectionGroup,
    /// A user taps an item in an explore group.
    tapped_explore_group => TappedExploreGroup,
    /// A user taps an item in a fair group.
    tapped_fair_group => TappedFairGroup,
    /// A user taps an item in a viewing room group.
    tapped_viewing_room_group => TappedViewingRoomGroup,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::test_support::{keys, wire};

    fn artwork_rail() -> EntityGroupArgs {
        EntityGroupArgs::new(
            ContextModule::ArtworkRail,
            PageOwnerType::Home,
            OwnerType::Artwork,
            GridItemType::Thumbnail,
        )
    }

    #[test]
    fn minimal_group_has_required_keys_only() {
        let wire = wire(tapped_artwork_group(artwork_rail()));
        assert_eq!(
            keys(&wire),
            [
                "action",
                "context_module",
                "context_owner_type",
                "destination_owner_type",
                "type",
            ]
        );
        assert_eq!(wire["action"], "tappedArtworkGroup");
    }

    #[test]
    fn group_with_all_args() {
        let event = clicked_artwork_group(EntityGroupArgs {
            context_owner_id: Some("5359794d2a1e86c3741001f8".into()),
            context_owner_slug: Some("andy-warhol".into()),
            destination_owner_id: Some("5359794d1a1e86c3740001f7".into()),
            destination_owner_slug: Some("andy-warhol-flower".into()),
            horizontal_slide_position: Some(3),
            module_height: Some(ModuleHeight::Double),
            curation_boost: Some(true),
            context_owner_type: PageOwnerType::Artist,
            ..artwork_rail()
        });
        assert_eq!(
            wire(event),
            json!({
                "action": "clickedArtworkGroup",
                "context_module": "artworkRail",
                "context_owner_type": "artist",
                "context_owner_id": "5359794d2a1e86c3741001f8",
                "context_owner_slug": "andy-warhol",
                "destination_owner_type": "artwork",
                "destination_owner_id": "5359794d1a1e86c3740001f7",
                "destination_owner_slug": "andy-warhol-flower",
                "horizontal_slide_position": 3,
                "module_height": "double",
                "curation_boost": true,
                "type": "thumbnail",
            })
        );
    }

    #[test]
    fn view_all_leads_to_listing_page() {
        let event = tapped_viewing_room_group(EntityGroupArgs::new(
            ContextModule::ViewingRoomRail,
            PageOwnerType::Home,
            OwnerType::ViewingRoom,
            GridItemType::ViewAll,
        ));
        let wire = wire(event);
        assert_eq!(wire["type"], "viewAll");
        assert!(wire.get("destination_owner_id").is_none());
    }

    #[test]
    fn every_group_factory_shares_the_record() {
        let records = [
            clicked_artist_group(artwork_rail()).0,
            clicked_artist_series_group(artwork_rail()).0,
            clicked_auction_group(artwork_rail()).0,
            clicked_collection_group(artwork_rail()).0,
            clicked_fair_group(artwork_rail()).0,
            tapped_artist_group(artwork_rail()).0,
            tapped_artist_series_group(artwork_rail()).0,
            tapped_auction_group(artwork_rail()).0,
            tapped_collection_group(artwork_rail()).0,
            tapped_explore_group(artwork_rail()).0,
            tapped_fair_group(artwork_rail()).0,
        ];
        let expected = entity_group(artwork_rail());
        for record in records {
            assert_eq!(record, expected);
        }
    }

    #[test]
    fn args_read_type_key() {
        let args: EntityGroupArgs = serde_json::from_value(json!({
            "contextModule": "artworkRail",
            "contextOwnerType": "home",
            "destinationOwnerType": "artwork",
            "type": "thumbnail",
        }))
        .unwrap();
        assert_eq!(args, artwork_rail());
    }
}
