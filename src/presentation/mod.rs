/// Module containing card layout resolution for rendering
pub mod layout;

pub use layout::{
    ResolvedLayout, STARTER_FIELDS, is_starter_card_type, preview_fields, resolve_layout,
    visible_fields,
};
