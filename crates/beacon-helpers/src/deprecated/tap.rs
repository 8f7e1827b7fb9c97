//! Legacy tap factories.

use beacon_schema::legacy::{TappedConsign, TappedMainArtworkGrid};
use beacon_schema::{
    ArtworkGridModule, ArtworkOwner, ConsignOwner, ContextModule, OwnerType, ThumbnailItem,
};
use serde::Deserialize;

/// Screen-convention arguments for [`tapped_main_artwork_grid`].
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TappedMainArtworkGridArgs {
    /// Free-form screen name. Read from the snake_case key.
    #[serde(rename = "context_screen")]
    pub context_screen: Option<String>,
    /// Kind of screen hosting the grid.
    pub context_screen_owner_type: OwnerType,
    /// ID of the screen owner.
    pub context_screen_owner_id: Option<String>,
    /// Slug of the screen owner.
    pub context_screen_owner_slug: Option<String>,
    /// ID of the tapped artwork.
    pub destination_screen_owner_id: String,
    /// Slug of the tapped artwork.
    pub destination_screen_owner_slug: String,
    /// Index of the artwork within the grid.
    pub position: Option<u32>,
    /// Sort applied to the grid.
    pub sort: Option<String>,
    /// Search query that produced the grid.
    pub query: Option<String>,
}

impl TappedMainArtworkGridArgs {
    /// Required arguments only; optional ones start absent.
    pub fn new(
        context_screen_owner_type: OwnerType,
        destination_screen_owner_id: impl Into<String>,
        destination_screen_owner_slug: impl Into<String>,
    ) -> Self {
        Self {
            context_screen: None,
            context_screen_owner_type,
            context_screen_owner_id: None,
            context_screen_owner_slug: None,
            destination_screen_owner_id: destination_screen_owner_id.into(),
            destination_screen_owner_slug: destination_screen_owner_slug.into(),
            position: None,
            sort: None,
            query: None,
        }
    }
}

/// A user taps an artwork in the main artwork grid (screen convention).
#[deprecated(note = "use beacon_helpers::tapped_main_artwork_grid")]
#[must_use]
pub fn tapped_main_artwork_grid(args: TappedMainArtworkGridArgs) -> TappedMainArtworkGrid {
    let TappedMainArtworkGridArgs {
        context_screen,
        context_screen_owner_type,
        context_screen_owner_id,
        context_screen_owner_slug,
        destination_screen_owner_id,
        destination_screen_owner_slug,
        position,
        sort,
        query,
    } = args;

    TappedMainArtworkGrid {
        context_module: ArtworkGridModule,
        context_screen,
        context_screen_owner_id,
        context_screen_owner_slug,
        context_screen_owner_type,
        destination_screen_owner_id,
        destination_screen_owner_slug,
        destination_screen_owner_type: ArtworkOwner,
        position,
        query,
        sort,
        item_type: ThumbnailItem,
    }
}

/// Screen-convention arguments for [`tapped_consign`].
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TappedConsignArgs {
    /// Region holding the call to action.
    pub context_module: ContextModule,
    /// Kind of screen the user was on.
    pub context_screen_owner_type: OwnerType,
    /// ID of the screen owner.
    pub context_screen_owner_id: Option<String>,
    /// Slug of the screen owner.
    pub context_screen_owner_slug: Option<String>,
    /// Copy of the call to action.
    pub subject: String,
}

impl TappedConsignArgs {
    /// Required arguments only; optional ones start absent.
    pub fn new(
        context_module: ContextModule,
        context_screen_owner_type: OwnerType,
        subject: impl Into<String>,
    ) -> Self {
        Self {
            context_module,
            context_screen_owner_type,
            context_screen_owner_id: None,
            context_screen_owner_slug: None,
            subject: subject.into(),
        }
    }
}

/// A user taps a consignment call to action (screen convention).
#[deprecated(note = "use beacon_helpers::tapped_consign")]
#[must_use]
pub fn tapped_consign(args: TappedConsignArgs) -> TappedConsign {
    let TappedConsignArgs {
        context_module,
        context_screen_owner_type,
        context_screen_owner_id,
        context_screen_owner_slug,
        subject,
    } = args;

    TappedConsign {
        context_module,
        context_screen_owner_type,
        context_screen_owner_id,
        context_screen_owner_slug,
        destination_screen_owner_type: ConsignOwner,
        subject,
    }
}
