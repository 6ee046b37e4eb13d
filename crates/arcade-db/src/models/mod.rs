//! Database models - row structs with SQLx FromRow derives

mod bookmark;
mod collection;
mod comment;
mod contact;
mod follow;
mod game;
mod profile;
mod reaction;
mod report;
mod score;

pub use bookmark::BookmarkModel;
pub use collection::{CollectionEntryModel, CollectionModel, CollectionWithCountModel};
pub use comment::CommentModel;
pub use contact::ContactMessageModel;
pub use follow::FollowModel;
pub use game::GameModel;
pub use profile::ProfileModel;
pub use reaction::ReactionModel;
pub use report::ReportModel;
pub use score::GameScoreModel;
