pub mod filter_tag;
pub mod page_header;
pub mod status_badge;
pub mod status_card;
