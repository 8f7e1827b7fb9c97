//! Entity group taps and clicks: a user picks an item, or "view all", from a
//! rail or grid of one kind of entity.
//!
//! Every group kind shares the [`EntityGroup`] shape. Each kind still gets
//! its own record type so that the type alone determines the `action` tag.

use std::ops::Deref;

use serde::{Deserialize, Serialize};

use crate::vocabulary::{ContextModule, GridItemType, ModuleHeight, OwnerType, PageOwnerType};

/// Fields common to every entity group event.
///
/// ```json
/// {
///   "action": "tappedArtworkGroup",
///   "context_module": "newWorksForYouRail",
///   "context_owner_type": "home",
///   "destination_owner_type": "artwork",
///   "destination_owner_id": "5359794d1a1e86c3740001f7",
///   "destination_owner_slug": "andy-warhol-flower",
///   "horizontal_slide_position": 1,
///   "type": "thumbnail"
/// }
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EntityGroup {
    /// The rail or grid holding the group.
    pub context_module: ContextModule,
    /// Kind of page the user was on.
    pub context_owner_type: PageOwnerType,
    /// ID of the page owner.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context_owner_id: Option<String>,
    /// Slug of the page owner.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context_owner_slug: Option<String>,
    /// Kind of page the item leads to. For "view all" this is the listing
    /// page rather than the group's entity kind.
    pub destination_owner_type: OwnerType,
    /// ID of the destination owner.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_owner_id: Option<String>,
    /// Slug of the destination owner.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_owner_slug: Option<String>,
    /// Index of the item within the rail.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub horizontal_slide_position: Option<u32>,
    /// Height of the rail.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub module_height: Option<ModuleHeight>,
    /// Whether the group was boosted by curation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub curation_boost: Option<bool>,
    /// Tapped item, or the "view all" link.
    #[serde(rename = "type")]
    pub item_type: GridItemType,
}

macro_rules! entity_groups {
    ($($(#[doc = $doc:literal])* $name:ident),* $(,)?) => {
        $(
            $(#[doc = $doc])*
            #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
            #[serde(transparent)]
            pub struct $name(pub EntityGroup);

            impl From<EntityGroup> for $name {
                fn from(group: EntityGroup) -> Self {
                    Self(group)
                }
            }

            impl Deref for $name {
                type Target = EntityGroup;

                fn deref(&self) -> &EntityGroup {
                    &self.0
                }
            }
        )*
    };
}

entity_groups! {
    /// A user clicks an item in an artist group (web).
    ClickedArtistGroup,
    /// A user clicks an item in an artist series group (web).
    ClickedArtistSeriesGroup,
    /// A user clicks an item in an artwork group (web).
    ClickedArtworkGroup,
    /// A user clicks an item in an auction group (web).
    ClickedAuctionGroup,
    /// A user clicks an item in a collection group (web).
    ClickedCollectionGroup,
    /// A user clicks an item in a fair group (web).
    ClickedFairGroup,
    /// A user taps an item in an artist group (iOS).
    TappedArtistGroup,
    /// A user taps an item in an artist series group (iOS).
    TappedArtistSeriesGroup,
    /// A user taps an item in an artwork group (iOS).
    TappedArtworkGroup,
    /// A user taps an item in an auction group (iOS).
    TappedAuctionGroup,
    /// A user taps an item in a collection group (iOS).
    TappedCollectionGroup,
    /// A user taps an item in an explore group (iOS).
    TappedExploreGroup,
    /// A user taps an item in a fair group (iOS).
    TappedFairGroup,
    /// A user taps an item in a viewing room group (iOS).
    TappedViewingRoomGroup,
}
