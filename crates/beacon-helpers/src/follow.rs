//! Follow factories.

use beacon_schema::{
    ArtistOwner, ContextModule, FollowedArtist, FollowedGene, GeneOwner, PageOwnerType,
    UnfollowedArtist, UnfollowedGene,
};
use serde::Deserialize;

/// Arguments for the follow and unfollow factories. The followed entity's
/// kind is fixed by the factory.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FollowArgs {
    /// Region holding the follow button.
    pub context_module: ContextModule,
    /// Kind of page the user was on.
    pub context_owner_type: PageOwnerType,
    /// ID of the page owner.
    pub context_owner_id: Option<String>,
    /// Slug of the page owner.
    pub context_owner_slug: Option<String>,
    /// ID of the followed entity.
    pub owner_id: String,
    /// Slug of the followed entity.
    pub owner_slug: String,
}

impl FollowArgs {
    /// Required arguments only; optional ones start absent.
    pub fn new(
        context_module: ContextModule,
        context_owner_type: PageOwnerType,
        owner_id: impl Into<String>,
        owner_slug: impl Into<String>,
    ) -> Self {
        Self {
            context_module,
            context_owner_type,
            context_owner_id: None,
            context_owner_slug: None,
            owner_id: owner_id.into(),
            owner_slug: owner_slug.into(),
        }
    }
}

/// A user follows an artist.
#[must_use]
pub fn followed_artist(args: FollowArgs) -> FollowedArtist {
    let FollowArgs {
        context_module,
        context_owner_type,
        context_owner_id,
        context_owner_slug,
        owner_id,
        owner_slug,
    } = args;

    FollowedArtist {
        context_module,
        context_owner_type,
        context_owner_id,
        context_owner_slug,
        owner_type: ArtistOwner,
        owner_id,
        owner_slug,
    }
}

/// A user unfollows an artist.
#[must_use]
pub fn unfollowed_artist(args: FollowArgs) -> UnfollowedArtist {
    let FollowArgs {
        context_module,
        context_owner_type,
        context_owner_id,
        context_owner_slug,
        owner_id,
        owner_slug,
    } = args;

    UnfollowedArtist {
        context_module,
        context_owner_type,
        context_owner_id,
        context_owner_slug,
        owner_type: ArtistOwner,
        owner_id,
        owner_slug,
    }
}

/// A user follows a gene.
#[must_use]
pub fn followed_gene(args: FollowArgs) -> FollowedGene {
    let FollowArgs {
        context_module,
        context_owner_type,
        context_owner_id,
        context_owner_slug,
        owner_id,
        owner_slug,
    } = args;

    FollowedGene {
        context_module,
        context_owner_type,
        context_owner_id,
        context_owner_slug,
        owner_type: GeneOwner,
        owner_id,
        owner_slug,
    }
}

/// A user unfollows a gene.
#[must_use]
pub fn unfollowed_gene(args: FollowArgs) -> UnfollowedGene {
    let FollowArgs {
        context_module,
        context_owner_type,
        context_owner_id,
        context_owner_slug,
        owner_id,
        owner_slug,
    } = args;

    UnfollowedGene {
        context_module,
        context_owner_type,
        context_owner_id,
        context_owner_slug,
        owner_type: GeneOwner,
        owner_id,
        owner_slug,
    }
}
