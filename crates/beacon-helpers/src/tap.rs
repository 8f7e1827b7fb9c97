//! Tap factories (iOS).

use beacon_schema::{
    ArtworkGridModule, ArtworkOwner, ConsignOwner, ContextModule, OwnerType, PageOwnerType,
    TabBarModule, TappedConsign, TappedMainArtworkGrid, TappedPromoSpace, TappedTabBar,
    ThumbnailItem,
};
use serde::Deserialize;

/// Arguments for [`tapped_main_artwork_grid`].
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TappedMainArtworkGridArgs {
    /// Kind of page hosting the grid.
    pub context_owner_type: PageOwnerType,
    /// ID of the page owner.
    pub context_owner_id: Option<String>,
    /// Slug of the page owner.
    pub context_owner_slug: Option<String>,
    /// ID of the tapped artwork.
    pub destination_owner_id: String,
    /// Slug of the tapped artwork.
    pub destination_owner_slug: String,
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
            query: None,
        }
    }
}

/// A user taps an artwork in the main artwork grid.
///
/// `context_module`, `destination_owner_type` and `type` are fixed.
///
/// ```ignore
/// tapped_main_artwork_grid(TappedMainArtworkGridArgs {
///     context_owner_id: Some("5359794d2a1e86c3741001f8".into()),
///     context_owner_slug: Some("andy-warhol".into()),
///     ..TappedMainArtworkGridArgs::new(
///         PageOwnerType::Artist,
///         "5359794d1a1e86c3740001f7",
///         "andy-warhol-skull",
///     )
/// })
/// ```
#[must_use]
pub fn tapped_main_artwork_grid(args: TappedMainArtworkGridArgs) -> TappedMainArtworkGrid {
    let TappedMainArtworkGridArgs {
        context_owner_type,
        context_owner_id,
        context_owner_slug,
        destination_owner_id,
        destination_owner_slug,
        position,
        sort,
        query,
    } = args;

    TappedMainArtworkGrid {
        context_module: ArtworkGridModule,
        context_owner_type,
        context_owner_id,
        context_owner_slug,
        destination_owner_type: ArtworkOwner,
        destination_owner_id,
        destination_owner_slug,
        position,
        sort,
        query,
        item_type: ThumbnailItem,
    }
}

/// Arguments for [`tapped_consign`].
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TappedConsignArgs {
    /// Region holding the call to action.
    pub context_module: ContextModule,
    /// Kind of page the user was on.
    pub context_owner_type: PageOwnerType,
    /// ID of the page owner.
    pub context_owner_id: Option<String>,
    /// Slug of the page owner.
    pub context_owner_slug: Option<String>,
    /// Copy of the call to action.
    pub subject: String,
}

impl TappedConsignArgs {
    /// Required arguments only; optional ones start absent.
    pub fn new(
        context_module: ContextModule,
        context_owner_type: PageOwnerType,
        subject: impl Into<String>,
    ) -> Self {
        Self {
            context_module,
            context_owner_type,
            context_owner_id: None,
            context_owner_slug: None,
            subject: subject.into(),
        }
    }
}

/// A user taps a call to action leading to the consignment flow.
#[must_use]
pub fn tapped_consign(args: TappedConsignArgs) -> TappedConsign {
    let TappedConsignArgs {
        context_module,
        context_owner_type,
        context_owner_id,
        context_owner_slug,
        subject,
    } = args;

    TappedConsign {
        context_module,
        context_owner_type,
        context_owner_id,
        context_owner_slug,
        destination_owner_type: ConsignOwner,
        subject,
    }
}

/// Arguments for [`tapped_tab_bar`].
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TappedTabBarArgs {
    /// Destination of the tab.
    pub tab: OwnerType,
    /// Whether the tab showed a notification badge.
    pub badge: bool,
}

/// A user taps a tab in the bottom tab bar.
#[must_use]
pub fn tapped_tab_bar(args: TappedTabBarArgs) -> TappedTabBar {
    let TappedTabBarArgs { tab, badge } = args;
    TappedTabBar {
        context_module: TabBarModule,
        tab,
        badge,
    }
}

/// Arguments for [`tapped_promo_space`].
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TappedPromoSpaceArgs {
    /// Region holding the banner.
    pub context_module: ContextModule,
    /// Kind of page the user was on.
    pub context_owner_type: PageOwnerType,
    /// ID of the page owner.
    pub context_owner_id: Option<String>,
    /// Slug of the page owner.
    pub context_owner_slug: Option<String>,
    /// Path the banner links to.
    pub destination_path: String,
    /// Headline of the banner.
    pub subject: String,
}

impl TappedPromoSpaceArgs {
    /// Required arguments only; optional ones start absent.
    pub fn new(
        context_module: ContextModule,
        context_owner_type: PageOwnerType,
        destination_path: impl Into<String>,
        subject: impl Into<String>,
    ) -> Self {
        Self {
            context_module,
            context_owner_type,
            context_owner_id: None,
            context_owner_slug: None,
            destination_path: destination_path.into(),
            subject: subject.into(),
        }
    }
}

/// A user taps a promotional banner.
#[must_use]
pub fn tapped_promo_space(args: TappedPromoSpaceArgs) -> TappedPromoSpace {
    let TappedPromoSpaceArgs {
        context_module,
        context_owner_type,
        context_owner_id,
        context_owner_slug,
        destination_path,
        subject,
    } = args;

    TappedPromoSpace {
        context_module,
        context_owner_type,
        context_owner_id,
        context_owner_slug,
        destination_path,
        subject,
    }
}
