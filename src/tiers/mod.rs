/// Tier domain layer: table, loading, cascading, text views, suggestions.
pub mod cascade;
pub mod errors;
pub mod loader;
pub mod render;
pub mod suggest;
pub mod table;

pub use cascade::{CascadeMode, cascade};
pub use errors::TierError;
pub use loader::{DEFAULT_MARKER, load_tiers};
pub use render::ListingStyle;
pub use suggest::suggest;
pub use table::{Tier, TierTable};
