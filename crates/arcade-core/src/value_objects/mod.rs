//! Value objects - immutable types that represent domain concepts

mod embed;
mod scoring;
mod slug;
mod snowflake;

pub use embed::{check_embed_url, EmbedCheck};
pub use scoring::{
    apply_reaction_change, compute_tier, ReactionCounts, ReactionKind, ScoreBreakdown, Tier,
};
pub use slug::{slug_suffix, slugify};
pub use snowflake::{Snowflake, SnowflakeGenerator, SnowflakeParseError};
