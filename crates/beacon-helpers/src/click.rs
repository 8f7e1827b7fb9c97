//! Click factories (web).

use beacon_schema::{
    ArtworkGridModule, ArtworkOwner, ClickedMainArtworkGrid, PageOwnerType, ThumbnailItem,
};
use serde::Deserialize;

/// Arguments for [`clicked_main_artwork_grid`].
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ClickedMainArtworkGridArgs {
    /// Kind of page hosting the grid.
    pub context_owner_type: PageOwnerType,
    /// ID of the page owner.
    pub context_owner_id: Option<String>,
    /// Slug of the page owner.
    pub context_owner_slug: Option<String>,
    /// ID of the clicked artwork.
    pub destination_owner_id: String,
    /// Slug of the clicked artwork.
    pub destination_owner_slug: String,
    /// Index of the artwork within the grid.
    pub position: Option<u32>,
    /// Sort applied to the grid.
    pub sort: Option<String>,
}

impl ClickedMainArtworkGridArgs {
    /// Required arguments only; optional ones start absent.
    pub fn new(
        context_owner_type: PageOwnerType,
        destination_owner_id: impl Into<String>,
        destination_owner_slug: impl Into<String>,
    ) -> Self {
        Self {
            context_owner_type,
            context_owner_id: None,
            context_owner_slug: None,
            destination_owner_id: destination_owner_id.into(),
            destination_owner_slug: destination_owner_slug.into(),
            position: None,
            sort: None,
        }
    }
}

/// A user clicks an artwork in the main artwork grid.
#[must_use]
pub fn clicked_main_artwork_grid(args: ClickedMainArtworkGridArgs) -> ClickedMainArtworkGrid {
    let ClickedMainArtworkGridArgs {
        context_owner_type,
        context_owner_id,
        context_owner_slug,
        destination_owner_id,
        destination_owner_slug,
        position,
        sort,
    } = args;

    ClickedMainArtworkGrid {
        context_module: ArtworkGridModule,
        context_owner_type,
        context_owner_id,
        context_owner_slug,
        destination_owner_type: ArtworkOwner,
        destination_owner_id,
        destination_owner_slug,
        position,
        sort,
        item_type: ThumbnailItem,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::test_support::wire;

    #[test]
    fn fixed_fields_match_tapped_twin() {
        let event = clicked_main_artwork_grid(ClickedMainArtworkGridArgs {
            position: Some(0),
            ..ClickedMainArtworkGridArgs::new(PageOwnerType::Collection, "a1", "a-slug")
        });
        assert_eq!(
            wire(event),
            json!({
                "action": "clickedMainArtworkGrid",
                "context_module": "artworkGrid",
                "context_owner_type": "collection",
                "destination_owner_id": "a1",
                "destination_owner_slug": "a-slug",
                "destination_owner_type": "artwork",
                "position": 0,
                "type": "thumbnail",
            })
        );
    }

    #[test]
    fn args_have_no_query() {
        let result = serde_json::from_value::<ClickedMainArtworkGridArgs>(json!({
            "contextOwnerType": "collection",
            "destinationOwnerId": "a1",
            "destinationOwnerSlug": "a-slug",
            "query": "warhol",
        }));
        assert!(result.is_err());
    }
}
