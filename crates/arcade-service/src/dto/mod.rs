//! Data transfer objects for the API surface

mod mappers;
mod requests;
mod responses;

pub use requests::{
    AddCollectionGameRequest, ContactRequest, CreateCollectionRequest, CreateCommentRequest,
    CreateGameRequest, CreateReportRequest, LoginRequest, RefreshTokenRequest, RegisterRequest,
    ResolveReportRequest, SetReactionRequest, UpdateCollectionRequest, UpdateGameRequest,
    UpdateProfileRequest,
};
pub use responses::{
    AuthResponse, BookmarkStateResponse, CollectionDetailResponse, CollectionResponse,
    CommentResponse, CurrentProfileResponse, FollowStateResponse, GameCreatedResponse,
    GameResponse, HealthResponse, ProfileDetailResponse, ProfileResponse, ProfileSummary,
    ReactionStateResponse, ReadinessResponse, ReportResponse, ScoreResponse,
};
