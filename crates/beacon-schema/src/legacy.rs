//! Superseded "screen" convention shapes.
//!
//! Before context fields were renamed to the page/owner convention, the
//! same events were sent with `context_screen_owner_*` and
//! `destination_screen_owner_*` keys. Call sites that have not migrated still
//! produce these shapes, so for the kinds listed in
//! [`LEGACY_ACTION_TYPES`] one action tag maps to two physically different
//! payloads. Consumers must accept either shape for those tags during the
//! migration window. No other tag has more than one shape.
//!
//! Legacy records live in their own [`LegacyEvent`] union and are never
//! mixed into [`Event`](crate::Event).

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::Result;
use crate::registry::ActionType;
use crate::pinned::{ArtworkGridModule, ArtworkOwner, ConsignOwner, ThumbnailItem};
use crate::vocabulary::{ContextModule, OwnerType};

/// A legacy record bound to the [`ActionType`] of its current twin.
pub trait LegacySchema: Into<LegacyEvent> {
    /// Action tag shared with the current-convention schema.
    const ACTION: ActionType;
}

macro_rules! legacy_events {
    ($($variant:ident => $wire:literal),* $(,)?) => {
        /// Action types that have a legacy shape in addition to their
        /// current one.
        pub const LEGACY_ACTION_TYPES: [ActionType; { [$($wire,)*].len() }] = [
            $(ActionType::$variant,)*
        ];

        /// Union of legacy event shapes, tagged with the same `action`
        /// literals as [`Event`](crate::Event).
        #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
        #[serde(tag = "action")]
        pub enum LegacyEvent {
            $(
                #[allow(missing_docs)]
                #[serde(rename = $wire)]
                $variant($variant),
            )*
        }

        impl LegacyEvent {
            /// Action tag of this event.
            #[must_use]
            pub fn action(&self) -> ActionType {
                match self {
                    $(Self::$variant(_) => ActionType::$variant,)*
                }
            }
        }

        $(
            impl LegacySchema for $variant {
                const ACTION: ActionType = ActionType::$variant;
            }

            impl From<$variant> for LegacyEvent {
                fn from(schema: $variant) -> Self {
                    Self::$variant(schema)
                }
            }
        )*
    };
}

legacy_events! {
    FocusedOnSearchInput => "focusedOnSearchInput",
    SearchedWithNoResults => "searchedWithNoResults",
    SelectedItemFromSearch => "selectedItemFromSearch",
    TappedConsign => "tappedConsign",
    TappedMainArtworkGrid => "tappedMainArtworkGrid",
}

impl LegacyEvent {
    /// The legacy record sent downstream.
    pub fn to_wire(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }
}

impl ActionType {
    /// Whether payloads tagged with this action may arrive in the legacy
    /// screen convention.
    #[must_use]
    pub fn has_legacy_shape(self) -> bool {
        LEGACY_ACTION_TYPES.contains(&self)
    }
}

/// Legacy shape of [`crate::TappedMainArtworkGrid`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TappedMainArtworkGrid {
    /// Region of the grid.
    pub context_module: ArtworkGridModule,
    /// Free-form screen name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context_screen: Option<String>,
    /// ID of the screen owner.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context_screen_owner_id: Option<String>,
    /// Slug of the screen owner.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context_screen_owner_slug: Option<String>,
    /// Kind of screen hosting the grid.
    pub context_screen_owner_type: OwnerType,
    /// ID of the tapped artwork.
    pub destination_screen_owner_id: String,
    /// Slug of the tapped artwork.
    pub destination_screen_owner_slug: String,
    /// Kind of the destination.
    pub destination_screen_owner_type: ArtworkOwner,
    /// Index of the artwork within the grid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<u32>,
    /// Search query that produced the grid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    /// Sort applied to the grid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    /// Presentation of the tapped item.
    #[serde(rename = "type")]
    pub item_type: ThumbnailItem,
}

/// Legacy shape of [`crate::TappedConsign`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TappedConsign {
    /// Region holding the call to action.
    pub context_module: ContextModule,
    /// Kind of screen the user was on.
    pub context_screen_owner_type: OwnerType,
    /// ID of the screen owner.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context_screen_owner_id: Option<String>,
    /// Slug of the screen owner.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context_screen_owner_slug: Option<String>,
    /// Kind of the destination.
    pub destination_screen_owner_type: ConsignOwner,
    /// Copy of the call to action.
    pub subject: String,
}

/// Legacy shape of [`crate::FocusedOnSearchInput`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FocusedOnSearchInput {
    /// Region holding the search box.
    pub context_module: ContextModule,
    /// Free-form screen name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context_screen: Option<String>,
    /// Kind of screen the user was on.
    pub context_screen_owner_type: OwnerType,
    /// ID of the screen owner.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context_screen_owner_id: Option<String>,
    /// Slug of the screen owner.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context_screen_owner_slug: Option<String>,
}

/// Legacy shape of [`crate::SelectedItemFromSearch`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SelectedItemFromSearch {
    /// Region holding the search box.
    pub context_module: ContextModule,
    /// Kind of screen the user was on.
    pub context_screen_owner_type: OwnerType,
    /// ID of the screen owner.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context_screen_owner_id: Option<String>,
    /// Slug of the screen owner.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context_screen_owner_slug: Option<String>,
    /// Kind of screen the selection navigates to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_screen_owner_type: Option<OwnerType>,
    /// ID of the destination owner.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_screen_owner_id: Option<String>,
    /// Slug of the destination owner.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_screen_owner_slug: Option<String>,
    /// Kind of the selected entity.
    pub owner_type: OwnerType,
    /// ID of the selected entity.
    pub owner_id: String,
    /// Slug of the selected entity.
    pub owner_slug: String,
    /// Text typed before selecting.
    pub query: String,
}

/// Legacy shape of [`crate::SearchedWithNoResults`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SearchedWithNoResults {
    /// Region holding the search box.
    pub context_module: ContextModule,
    /// Kind of screen the user was on.
    pub context_screen_owner_type: OwnerType,
    /// ID of the screen owner.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context_screen_owner_id: Option<String>,
    /// Slug of the screen owner.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context_screen_owner_slug: Option<String>,
    /// Kind of screen the search navigated to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_screen_owner_type: Option<OwnerType>,
    /// Text that produced no results.
    pub query: String,
}
