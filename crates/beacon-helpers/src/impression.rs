//! Impression factories.
//!
//! Rail and item impressions describe their context with `context_screen`,
//! and the partner CMS impressions with `context_page_owner_*`. Both are the
//! current keys for these kinds.

use beacon_schema::{
    ContextModule, ErrorMessageViewed, ItemViewed, OwnerType, PageOwnerType, RailViewed,
    SendOffersBannerViewed, SendOffersErrorMessage, SendOffersModalViewed, TooltipViewed,
    ValidationAddressViewed, ViewedItemType,
};
use serde::Deserialize;

/// Arguments for [`rail_viewed`].
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RailViewedArgs {
    /// The rail that was seen.
    pub context_module: ContextModule,
    /// Kind of screen hosting the rail.
    pub context_screen: OwnerType,
    /// Vertical index of the rail on the screen.
    pub position_y: Option<u32>,
}

impl RailViewedArgs {
    /// Required arguments only; optional ones start absent.
    #[must_use]
    pub fn new(context_module: ContextModule, context_screen: OwnerType) -> Self {
        Self {
            context_module,
            context_screen,
            position_y: None,
        }
    }
}

/// A user sees a rail of content.
#[must_use]
pub fn rail_viewed(args: RailViewedArgs) -> RailViewed {
    let RailViewedArgs {
        context_module,
        context_screen,
        position_y,
    } = args;

    RailViewed {
        context_module,
        context_screen,
        position_y,
    }
}

/// Arguments for [`item_viewed`].
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ItemViewedArgs {
    /// Kind of screen hosting the rail.
    pub context_screen: OwnerType,
    /// The rail holding the item.
    pub context_module: ContextModule,
    /// ID of the seen artwork.
    pub item_id: String,
    /// Horizontal index of the item in the rail.
    pub position: Option<u32>,
}

impl ItemViewedArgs {
    /// Required arguments only; optional ones start absent.
    pub fn new(
        context_screen: OwnerType,
        context_module: ContextModule,
        item_id: impl Into<String>,
    ) -> Self {
        Self {
            context_screen,
            context_module,
            item_id: item_id.into(),
            position: None,
        }
    }
}

/// A user sees an artwork in a rail. `item_type` is fixed to `artwork`.
#[must_use]
pub fn item_viewed(args: ItemViewedArgs) -> ItemViewed {
    let ItemViewedArgs {
        context_screen,
        context_module,
        item_id,
        position,
    } = args;

    ItemViewed {
        context_screen,
        context_module,
        item_id,
        item_type: ViewedItemType::Artwork,
        position,
    }
}

/// Arguments for [`tooltip_viewed`].
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TooltipViewedArgs {
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

/// A user views a tooltip.
#[must_use]
pub fn tooltip_viewed(args: TooltipViewedArgs) -> TooltipViewed {
    let TooltipViewedArgs {
        context_owner_id,
        context_owner_slug,
        context_owner_type,
        tooltip_type,
    } = args;

    TooltipViewed {
        context_owner_id,
        context_owner_slug,
        context_owner_type,
        tooltip_type,
    }
}

/// Arguments for [`error_message_viewed`].
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ErrorMessageViewedArgs {
    /// ID of the page owner.
    pub context_owner_id: String,
    /// Kind of page the error appeared on.
    pub context_owner_type: OwnerType,
    /// Error title.
    pub title: String,
    /// Error body.
    pub message: String,
    /// Machine-readable error code.
    pub error_code: Option<String>,
    /// Flow the user was in.
    pub flow: String,
}

impl ErrorMessageViewedArgs {
    /// Required arguments only; optional ones start absent.
    pub fn new(
        context_owner_id: impl Into<String>,
        context_owner_type: OwnerType,
        title: impl Into<String>,
        message: impl Into<String>,
        flow: impl Into<String>,
    ) -> Self {
        Self {
            context_owner_id: context_owner_id.into(),
            context_owner_type,
            title: title.into(),
            message: message.into(),
            error_code: None,
            flow: flow.into(),
        }
    }
}

/// A user sees an error message.
#[must_use]
pub fn error_message_viewed(args: ErrorMessageViewedArgs) -> ErrorMessageViewed {
    let ErrorMessageViewedArgs {
        context_owner_id,
        context_owner_type,
        title,
        message,
        error_code,
        flow,
    } = args;

    ErrorMessageViewed {
        context_owner_id,
        context_owner_type,
        title,
        message,
        error_code,
        flow,
    }
}

/// Arguments for [`validation_address_viewed`].
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ValidationAddressViewedArgs {
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

/// A user sees an address validation modal.
#[must_use]
pub fn validation_address_viewed(args: ValidationAddressViewedArgs) -> ValidationAddressViewed {
    let ValidationAddressViewedArgs {
        context_module,
        context_page_owner_type,
        context_page_owner_id,
        user_id,
        flow,
        subject,
        option,
    } = args;

    ValidationAddressViewed {
        context_module,
        context_page_owner_type,
        context_page_owner_id,
        user_id,
        flow,
        subject,
        option,
    }
}

/// Arguments for [`send_offers_banner_viewed`].
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SendOffersBannerViewedArgs {
    /// Region of the page.
    pub context_module: ContextModule,
    /// Kind of page the user was on.
    pub context_page_owner_type: PageOwnerType,
    /// Partner seeing the banner.
    pub partner_id: String,
}

/// A partner sees the "make an offer" banner in the CMS.
#[must_use]
pub fn send_offers_banner_viewed(args: SendOffersBannerViewedArgs) -> SendOffersBannerViewed {
    let SendOffersBannerViewedArgs {
        context_module,
        context_page_owner_type,
        partner_id,
    } = args;

    SendOffersBannerViewed {
        context_module,
        context_page_owner_type,
        partner_id,
    }
}

/// Arguments for [`send_offers_modal_viewed`].
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SendOffersModalViewedArgs {
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
    /// Offered price.
    pub price: f64,
    /// Number of collectors receiving the offer.
    pub collectors: u32,
}

/// A partner sees the send-offers modal in the CMS.
#[must_use]
pub fn send_offers_modal_viewed(args: SendOffersModalViewedArgs) -> SendOffersModalViewed {
    let SendOffersModalViewedArgs {
        context_module,
        context_page_owner_type,
        context_page_owner_id,
        context_page_owner_slug,
        partner_id,
        artwork_id,
        price,
        collectors,
    } = args;

    SendOffersModalViewed {
        context_module,
        context_page_owner_type,
        context_page_owner_id,
        context_page_owner_slug,
        partner_id,
        artwork_id,
        price,
        collectors,
    }
}

/// Arguments for [`send_offers_error_message`].
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SendOffersErrorMessageArgs {
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
    /// Rejected price.
    pub price: f64,
    /// Number of collectors that would have received the offer.
    pub collectors: u32,
    /// Error shown to the partner.
    pub message: String,
}

/// A partner enters an offer price that is not accepted.
#[must_use]
pub fn send_offers_error_message(args: SendOffersErrorMessageArgs) -> SendOffersErrorMessage {
    let SendOffersErrorMessageArgs {
        context_module,
        context_page_owner_type,
        context_page_owner_id,
        context_page_owner_slug,
        partner_id,
        artwork_id,
        price,
        collectors,
        message,
    } = args;

    SendOffersErrorMessage {
        context_module,
        context_page_owner_type,
        context_page_owner_id,
        context_page_owner_slug,
        partner_id,
        artwork_id,
        price,
        collectors,
        message,
    }
}
