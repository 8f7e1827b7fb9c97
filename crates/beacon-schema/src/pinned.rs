//! Fields fixed to one vocabulary member.
//!
//! A schema that always sends `context_module: "artworkGrid"` types that
//! field as [`ArtworkGridModule`] rather than [`ContextModule`]. The value is
//! then written by construction, and a payload carrying any other member is
//! rejected on decode.

use serde::{Deserialize, Serialize};

use crate::vocabulary::{AuthModalType, AuthService, ContextModule, GridItemType, OwnerType};

define_pinned! {
    /// `context_module` of the main artwork grid events.
    ArtworkGridModule => ContextModule::ArtworkGrid,
    /// `context_module` of tab bar taps.
    TabBarModule => ContextModule::TabBar,
    /// `context_module` of the price database search events.
    PriceDatabaseLandingModule => ContextModule::PriceDatabaseLanding,
    /// `context_module` of consignment search failures.
    ConsignSubmissionFlowModule => ContextModule::ConsignSubmissionFlow,

    /// An artist, as followed entity or price database selection.
    ArtistOwner => OwnerType::Artist,
    /// Auction results of a single artist.
    ArtistAuctionResultsOwner => OwnerType::ArtistAuctionResults,
    /// An artwork, as destination of the main artwork grid.
    ArtworkOwner => OwnerType::Artwork,
    /// The consignment flow.
    ConsignOwner => OwnerType::Consign,
    /// A gene, as followed entity.
    GeneOwner => OwnerType::Gene,
    /// The price database.
    PriceDatabaseOwner => OwnerType::PriceDatabase,

    /// Thumbnail tiles of the main artwork grid.
    ThumbnailItem => GridItemType::Thumbnail,

    /// Password resets always go through email.
    EmailService => AuthService::Email,
    /// The forgot-password form.
    ForgotPasswordModal => AuthModalType::Forgot,
}
