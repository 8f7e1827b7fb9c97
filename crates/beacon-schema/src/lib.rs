//! # beacon-schema
//!
//! Typed registry of analytics event shapes.
//!
//! - **Action types**: [`ActionType`], one wire tag per event kind, each mapped
//!   to the warehouse table its events land in
//! - **Event union**: [`Event`], one variant per action type, serialized with an
//!   internal `action` tag so field names are the literal wire keys
//! - **Vocabularies**: closed string enumerations ([`OwnerType`],
//!   [`PageOwnerType`], [`ContextModule`], …) whose wire value equals the
//!   member name
//! - **Pinned fields**: zero-sized [`pinned`] types for fields that only ever
//!   hold one vocabulary member
//! - **Legacy shapes**: [`legacy`] records in the superseded "screen"
//!   convention, sharing action tags with their current twins
//! - **Wire guard**: [`wire::decode`] validates payloads of unknown origin
//!   against the registry at run time

#![deny(unsafe_code)]

#[macro_use]
mod macros;

pub mod errors;
pub mod events;
pub mod legacy;
pub mod pinned;
pub mod registry;
pub mod vocabulary;
pub mod wire;

pub use errors::{Result, SchemaError};
pub use events::*;
pub use legacy::{LEGACY_ACTION_TYPES, LegacyEvent, LegacySchema};
pub use registry::{ALL_ACTION_TYPES, ActionType, Event, EventDomain, EventSchema};
pub use pinned::{
    ArtistAuctionResultsOwner, ArtistOwner, ArtworkGridModule, ArtworkOwner, ConsignOwner,
    ConsignSubmissionFlowModule, EmailService, ForgotPasswordModal, GeneOwner,
    PriceDatabaseLandingModule, PriceDatabaseOwner, TabBarModule, ThumbnailItem,
};
pub use vocabulary::{
    AuthIntent, AuthModalType, AuthService, AuthTrigger, ContextModule, GridItemType,
    ModuleHeight, OwnerType, PageOwnerType, ViewedItemType,
};
pub use wire::{DecodeOptions, DecodedEvent};
