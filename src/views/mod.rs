pub mod place_details;
pub mod place_list;

pub use place_details::render_place_details;
pub use place_list::{apply_price_filter, populate_price_filter, render_places, setup_price_filter};
