//! Entity -> response DTO mappers

use arcade_core::entities::{Collection, Comment, Game, GameScore, Profile, Report};

use super::responses::{
    CollectionResponse, CommentResponse, CurrentProfileResponse, GameResponse, ProfileResponse,
    ProfileSummary, ReportResponse, ScoreResponse,
};

impl From<&Profile> for ProfileSummary {
    fn from(profile: &Profile) -> Self {
        Self {
            id: profile.id.to_string(),
            handle: profile.handle.clone(),
            display_name: profile.display_name.clone(),
            avatar_url: profile.avatar_url.clone(),
        }
    }
}

impl From<&Profile> for ProfileResponse {
    fn from(profile: &Profile) -> Self {
        Self {
            id: profile.id.to_string(),
            handle: profile.handle.clone(),
            display_name: profile.display_name.clone(),
            avatar_url: profile.avatar_url.clone(),
            banner_url: profile.banner_url.clone(),
            bio: profile.bio.clone(),
            is_creator: profile.is_creator,
            created_at: profile.created_at,
        }
    }
}

impl From<&Profile> for CurrentProfileResponse {
    fn from(profile: &Profile) -> Self {
        Self {
            id: profile.id.to_string(),
            handle: profile.handle.clone(),
            display_name: profile.display_name.clone(),
            email: profile.email.clone(),
            avatar_url: profile.avatar_url.clone(),
            banner_url: profile.banner_url.clone(),
            bio: profile.bio.clone(),
            is_creator: profile.is_creator,
            is_admin: profile.is_admin,
            created_at: profile.created_at,
        }
    }
}

impl From<&GameScore> for ScoreResponse {
    fn from(score: &GameScore) -> Self {
        Self {
            like_count: score.counts.like,
            love_count: score.counts.love,
            favorite_count: score.counts.favorite,
            total_reactions: score.total_reactions,
            weighted_score: score.weighted_score,
            tier: score.tier.to_string(),
            play_count: score.play_count,
        }
    }
}

impl GameResponse {
    /// Assemble a game response from its parts; a missing score row reads as
    /// a fresh NEW-tier block.
    pub fn assemble(game: &Game, score: Option<&GameScore>, creator: Option<&Profile>) -> Self {
        Self {
            id: game.id.to_string(),
            creator_id: game.creator_id.to_string(),
            title: game.title.clone(),
            slug: game.slug.clone(),
            short_description: game.short_description.clone(),
            long_description: game.long_description.clone(),
            thumbnail_url: game.thumbnail_url.clone(),
            embed_url: game.embed_url.clone(),
            status: game.status.to_string(),
            genres: game.genres.clone(),
            tags: game.tags.clone(),
            published_at: game.published_at,
            created_at: game.created_at,
            score: score.map(ScoreResponse::from).unwrap_or_default(),
            creator: creator.map(ProfileSummary::from),
        }
    }
}

impl CommentResponse {
    /// Assemble a comment response with its author
    pub fn assemble(comment: &Comment, author: &Profile) -> Self {
        Self {
            id: comment.id.to_string(),
            game_id: comment.game_id.to_string(),
            parent_id: comment.parent_id.map(|id| id.to_string()),
            body: comment.body.clone(),
            created_at: comment.created_at,
            author: ProfileSummary::from(author),
        }
    }
}

impl CollectionResponse {
    /// Assemble a collection response with its game count
    pub fn assemble(collection: &Collection, game_count: i64) -> Self {
        Self {
            id: collection.id.to_string(),
            owner_id: collection.owner_id.to_string(),
            title: collection.title.clone(),
            slug: collection.slug.clone(),
            description: collection.description.clone(),
            cover_url: collection.cover_url.clone(),
            is_public: collection.is_public,
            game_count,
            created_at: collection.created_at,
        }
    }
}

impl From<&Report> for ReportResponse {
    fn from(report: &Report) -> Self {
        Self {
            id: report.id.to_string(),
            reporter_id: report.reporter_id.to_string(),
            target_type: report.target.to_string(),
            target_id: report.target_id.to_string(),
            reason: report.reason.clone(),
            details: report.details.clone(),
            status: report.status.to_string(),
            resolved_at: report.resolved_at,
            created_at: report.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arcade_core::{ReactionKind, Snowflake};

    #[test]
    fn test_game_without_score_defaults_to_new_tier() {
        let game = Game::new(
            Snowflake::new(10),
            Snowflake::new(1),
            "Star Hopper".to_string(),
            "star-hopper".to_string(),
            "Hop between stars".to_string(),
            "https://games.example.dev/star-hopper/".to_string(),
        );

        let response = GameResponse::assemble(&game, None, None);
        assert_eq!(response.score.tier, "NEW");
        assert_eq!(response.score.weighted_score, 0);
        assert!(response.creator.is_none());
    }

    #[test]
    fn test_score_response_mirrors_aggregate() {
        let score = GameScore::fresh(Snowflake::new(10))
            .apply_reaction(ReactionKind::None, ReactionKind::Favorite);

        let response = ScoreResponse::from(&score);
        assert_eq!(response.favorite_count, 1);
        assert_eq!(response.weighted_score, 3);
        assert_eq!(response.tier, "NEW");
    }
}
