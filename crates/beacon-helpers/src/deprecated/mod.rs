//! Legacy factories in the superseded "screen" convention.
//!
//! These produce [`beacon_schema::legacy`] records, tagged with the same
//! action literals as their current twins. Every factory is
//! `#[deprecated]` so remaining call sites warn at compile time; migrate
//! them to the factory of the same name at the crate root.

pub mod search;
pub mod tap;

#[allow(deprecated)]
pub use search::{
    FocusedOnSearchInputArgs, SearchedWithNoResultsArgs, SelectedItemFromSearchArgs,
    focused_on_search_input, searched_with_no_results, selected_item_from_search,
};
#[allow(deprecated)]
pub use tap::{TappedConsignArgs, TappedMainArtworkGridArgs, tapped_consign, tapped_main_artwork_grid};
