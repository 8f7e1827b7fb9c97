//! Click events (web).

use serde::{Deserialize, Serialize};

use crate::pinned::{ArtworkGridModule, ArtworkOwner, ThumbnailItem};
use crate::vocabulary::PageOwnerType;

/// A user clicks an artwork in the main artwork grid.
///
/// Web twin of [`TappedMainArtworkGrid`](crate::TappedMainArtworkGrid).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClickedMainArtworkGrid {
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
    /// ID of the clicked artwork.
    pub destination_owner_id: String,
    /// Slug of the clicked artwork.
    pub destination_owner_slug: String,
    /// Index of the artwork within the grid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<u32>,
    /// Sort applied to the grid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    /// Presentation of the clicked item.
    #[serde(rename = "type")]
    pub item_type: ThumbnailItem,
}
