//! Impression tracking: rails, items, tooltips, and error messages seen by
//! a user.
//!
//! Rail and item impressions still describe their context with a bare
//! `context_screen`, and the partner CMS impressions use the page-prefixed
//! `context_page_owner_*` family. Those names are the current wire contract
//! for these kinds, not legacy drift. Rail and item impressions are also the
//! only kinds whose `action` tag is snake case (`rail_viewed`,
//! `item_viewed`).

use serde::{Deserialize, Serialize, Serializer};

use crate::vocabulary::{ContextModule, OwnerType, PageOwnerType, ViewedItemType};

/// A user sees a rail of content.
///
/// ```json
/// {
///   "action": "rail_viewed",
///   "context_module": "newWorksForYouRail",
///   "context_screen": "home",
///   "position_y": 2
/// }
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RailViewed {
    /// The rail that was seen.
    pub context_module: ContextModule,
    /// Kind of screen hosting the rail.
    pub context_screen: OwnerType,
    /// Vertical index of the rail on the screen.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position_y: Option<u32>,
}

/// A user sees an artwork in a rail.
///
/// ```json
/// {
///   "action": "item_viewed",
///   "context_screen": "home",
///   "context_module": "newWorksForYouRail",
///   "item_id": "5359794d1a1e86c3740001f7",
///   "item_type": "artwork",
///   "position": 2
/// }
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ItemViewed {
    /// Kind of screen hosting the rail.
    pub context_screen: OwnerType,
    /// The rail holding the item.
    pub context_module: ContextModule,
    /// ID of the seen item.
    pub item_id: String,
    /// Always [`ViewedItemType::Artwork`].
    pub item_type: ViewedItemType,
    /// Horizontal index of the item in the rail.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<u32>,
}

/// A user views a tooltip. `type` names the tooltip (`follow`,
/// `edit-follows`, …).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TooltipViewed {
    /// ID of the page owner.
    pub context_owner_id: String,
    /// Slug of the page owner.
    pub context_owner_slug: String,
    /// Kind of page the tooltip appeared on.
    pub context_owner_type: PageOwnerType,
    /// Which tooltip was shown.
    #[serde(rename = "type")]
    pub tooltip_type: String,
}

/// A user sees an error message.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ErrorMessageViewed {
    /// ID of the page owner (e.g. the order).
    pub context_owner_id: String,
    /// Kind of page the error appeared on.
    pub context_owner_type: OwnerType,
    /// Error title.
    pub title: String,
    /// Error body.
    pub message: String,
    /// Machine-readable error code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
    /// Flow the user was in.
    pub flow: String,
}

/// A user sees an address validation modal.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ValidationAddressViewed {
    /// Region of the page.
    pub context_module: ContextModule,
    /// Kind of page the user was on.
    pub context_page_owner_type: PageOwnerType,
    /// ID of the page owner.
    pub context_page_owner_id: String,
    /// User seeing the modal.
    pub user_id: String,
    /// Flow the user was in.
    pub flow: String,
    /// Modal heading.
    pub subject: String,
    /// Option presented to the user.
    pub option: String,
}

/// A partner sees the "make an offer" banner in the CMS.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SendOffersBannerViewed {
    /// Region of the page.
    pub context_module: ContextModule,
    /// Kind of page the user was on.
    pub context_page_owner_type: PageOwnerType,
    /// Partner seeing the banner.
    pub partner_id: String,
}

/// A partner sees the send-offers modal in the CMS.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SendOffersModalViewed {
    /// Region of the page.
    pub context_module: ContextModule,
    /// Kind of page the user was on.
    pub context_page_owner_type: PageOwnerType,
    /// ID of the page owner.
    pub context_page_owner_id: String,
    /// Slug of the page owner.
    pub context_page_owner_slug: String,
    /// Partner sending offers.
    pub partner_id: String,
    /// Artwork the offer is for.
    pub artwork_id: String,
    /// Offered price. Must be finite; encoding fails otherwise.
    #[serde(serialize_with = "finite_price")]
    pub price: f64,
    /// Number of collectors receiving the offer.
    pub collectors: u32,
}

/// A partner sees an error after entering an unacceptable offer price.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SendOffersErrorMessage {
    /// Region of the page.
    pub context_module: ContextModule,
    /// Kind of page the user was on.
    pub context_page_owner_type: PageOwnerType,
    /// ID of the page owner.
    pub context_page_owner_id: String,
    /// Slug of the page owner.
    pub context_page_owner_slug: String,
    /// Partner sending offers.
    pub partner_id: String,
    /// Artwork the offer is for.
    pub artwork_id: String,
    /// Rejected price. Must be finite; encoding fails otherwise.
    #[serde(serialize_with = "finite_price")]
    pub price: f64,
    /// Number of collectors that would have received the offer.
    pub collectors: u32,
    /// Error shown to the partner.
    pub message: String,
}

// JSON has no NaN or infinity; serde_json would write `null` instead.
#[allow(clippy::trivially_copy_pass_by_ref)]
fn finite_price<S: Serializer>(price: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if price.is_finite() {
        serializer.serialize_f64(*price)
    } else {
        Err(serde::ser::Error::custom(format!(
            "price must be a finite number, got {price}"
        )))
    }
}
