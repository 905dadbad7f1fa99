/// Self-care recommendation selection
///
/// Suggestions come from fixed per-tier tables in [`catalog`]; the
/// [`Recommender`] draws one entry per category uniformly at random.
pub mod catalog;
pub mod engine;

pub use catalog::URGENT_NOTICE;
pub use engine::Recommender;
