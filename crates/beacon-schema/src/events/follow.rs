//! Saves and follows.

use serde::{Deserialize, Serialize};

use crate::pinned::{ArtistOwner, GeneOwner};
use crate::vocabulary::{ContextModule, PageOwnerType};

/// A user follows an artist.
///
/// ```json
/// {
///   "action": "followedArtist",
///   "context_module": "artistHeader",
///   "context_owner_type": "artist",
///   "context_owner_id": "4d8b926a4eb68a1b2c0000ae",
///   "context_owner_slug": "damien-hirst",
///   "owner_type": "artist",
///   "owner_id": "4d8b926a4eb68a1b2c0000ae",
///   "owner_slug": "damien-hirst"
/// }
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FollowedArtist {
    /// Region holding the follow button.
    pub context_module: ContextModule,
    /// Kind of page the user was on.
    pub context_owner_type: PageOwnerType,
    /// ID of the page owner.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context_owner_id: Option<String>,
    /// Slug of the page owner.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context_owner_slug: Option<String>,
    /// Kind of the followed entity.
    pub owner_type: ArtistOwner,
    /// ID of the followed artist.
    pub owner_id: String,
    /// Slug of the followed artist.
    pub owner_slug: String,
}

/// A user unfollows an artist. Same fields as [`FollowedArtist`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UnfollowedArtist {
    /// Region holding the follow button.
    pub context_module: ContextModule,
    /// Kind of page the user was on.
    pub context_owner_type: PageOwnerType,
    /// ID of the page owner.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context_owner_id: Option<String>,
    /// Slug of the page owner.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context_owner_slug: Option<String>,
    /// Kind of the unfollowed entity.
    pub owner_type: ArtistOwner,
    /// ID of the unfollowed artist.
    pub owner_id: String,
    /// Slug of the unfollowed artist.
    pub owner_slug: String,
}

/// A user follows a gene (category).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FollowedGene {
    /// Region holding the follow button.
    pub context_module: ContextModule,
    /// Kind of page the user was on.
    pub context_owner_type: PageOwnerType,
    /// ID of the page owner.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context_owner_id: Option<String>,
    /// Slug of the page owner.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context_owner_slug: Option<String>,
    /// Kind of the followed entity.
    pub owner_type: GeneOwner,
    /// ID of the followed gene.
    pub owner_id: String,
    /// Slug of the followed gene.
    pub owner_slug: String,
}

/// A user unfollows a gene. Same fields as [`FollowedGene`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UnfollowedGene {
    /// Region holding the follow button.
    pub context_module: ContextModule,
    /// Kind of page the user was on.
    pub context_owner_type: PageOwnerType,
    /// ID of the page owner.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context_owner_id: Option<String>,
    /// Slug of the page owner.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context_owner_slug: Option<String>,
    /// Kind of the unfollowed entity.
    pub owner_type: GeneOwner,
    /// ID of the unfollowed gene.
    pub owner_id: String,
    /// Slug of the unfollowed gene.
    pub owner_slug: String,
}
