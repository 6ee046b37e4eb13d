//! Business services

mod auth;
mod collection;
mod comment;
mod contact;
mod context;
mod error;
mod follow;
mod game;
mod library;
mod mailer;
mod profile;
mod reaction;
mod report;

pub use auth::AuthService;
pub use collection::CollectionService;
pub use comment::CommentService;
pub use contact::ContactService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use follow::FollowService;
pub use game::GameService;
pub use library::LibraryService;
pub use mailer::Mailer;
pub use profile::ProfileService;
pub use reaction::ReactionService;
pub use report::ReportService;
