//! PostgreSQL repository implementations

mod bookmark;
mod collection;
mod comment;
mod contact;
mod error;
mod follow;
mod game;
mod profile;
mod reaction;
mod report;
mod score;

pub use bookmark::PgBookmarkRepository;
pub use collection::PgCollectionRepository;
pub use comment::PgCommentRepository;
pub use contact::PgContactRepository;
pub use follow::PgFollowRepository;
pub use game::PgGameRepository;
pub use profile::PgProfileRepository;
pub use reaction::PgReactionRepository;
pub use report::PgReportRepository;
pub use score::PgScoreRepository;
