//! Repository traits (ports) for the infrastructure layer

mod repositories;

pub use repositories::{
    BookmarkRepository, CollectionRepository, CommentRepository, ContactRepository,
    FollowRepository, GameQuery, GameRepository, ProfileRepository, ReactionRepository,
    RepoResult, ReportRepository, ScoreRepository,
};
