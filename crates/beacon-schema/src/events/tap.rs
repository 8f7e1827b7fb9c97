//! Tap events (iOS).

use serde::{Deserialize, Serialize};

use crate::pinned::{ArtworkGridModule, ArtworkOwner, ConsignOwner, TabBarModule, ThumbnailItem};
use crate::vocabulary::{ContextModule, OwnerType, PageOwnerType};

/// A user taps an artwork in the main artwork grid.
///
/// ```json
/// {
///   "action": "tappedMainArtworkGrid",
///   "context_module": "artworkGrid",
///   "context_owner_type": "artist",
///   "context_owner_id": "5359794d2a1e86c3741001f8",
///   "context_owner_slug": "andy-warhol",
///   "destination_owner_type": "artwork",
///   "destination_owner_id": "5359794d1a1e86c3740001f7",
///   "destination_owner_slug": "andy-warhol-skull",
///   "type": "thumbnail"
/// }
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TappedMainArtworkGrid {
    /// Region of the grid.
    pub context_module: ArtworkGridModule,
    /// Kind of page hosting the grid.
    pub context_owner_type: PageOwnerType,
    /// ID of the page owner.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context_owner_id: Option<String>,
    /// Slug of the page owner.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context_owner_slug: Option<String>,
    /// Kind of the destination.
    pub destination_owner_type: ArtworkOwner,
    /// ID of the tapped artwork.
    pub destination_owner_id: String,
    /// Slug of the tapped artwork.
    pub destination_owner_slug: String,
    /// Index of the artwork within the grid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<u32>,
    /// Sort applied to the grid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    /// Search query that produced the grid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    /// Presentation of the tapped item.
    #[serde(rename = "type")]
    pub item_type: ThumbnailItem,
}

/// A user taps a call to action that leads to the consignment flow.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TappedConsign {
    /// Region holding the call to action.
    pub context_module: ContextModule,
    /// Kind of page the user was on.
    pub context_owner_type: PageOwnerType,
    /// ID of the page owner.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context_owner_id: Option<String>,
    /// Slug of the page owner.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context_owner_slug: Option<String>,
    /// Kind of the destination.
    pub destination_owner_type: ConsignOwner,
    /// Copy of the call to action.
    pub subject: String,
}

/// A user taps a tab in the bottom tab bar.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TappedTabBar {
    /// The tab bar.
    pub context_module: TabBarModule,
    /// Destination of the tab.
    pub tab: OwnerType,
    /// Whether the tab showed a notification badge.
    pub badge: bool,
}

/// A user taps a promotional banner.
///
/// ```json
/// {
///   "action": "tappedPromoSpace",
///   "context_module": "promoSpace",
///   "context_owner_type": "home",
///   "destination_path": "/viewing-room/alex-katz",
///   "subject": "Alex Katz: Flowers"
/// }
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TappedPromoSpace {
    /// Region holding the banner.
    pub context_module: ContextModule,
    /// Kind of page the user was on.
    pub context_owner_type: PageOwnerType,
    /// ID of the page owner.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context_owner_id: Option<String>,
    /// Slug of the page owner.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context_owner_slug: Option<String>,
    /// Path the banner links to.
    pub destination_path: String,
    /// Headline of the banner.
    pub subject: String,
}
