//! Profile service
//!
//! Public profile pages, profile updates, and the creator upgrade.

use arcade_core::traits::GameQuery;
use arcade_core::Snowflake;
use tracing::{info, instrument};

use crate::dto::{
    CurrentProfileResponse, GameResponse, ProfileDetailResponse, ProfileResponse,
    UpdateProfileRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Profile service
pub struct ProfileService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ProfileService<'a> {
    /// Create a new ProfileService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Public profile page by handle: profile, follower count, published games
    #[instrument(skip(self))]
    pub async fn get_by_handle(&self, handle: &str) -> ServiceResult<ProfileDetailResponse> {
        let profile = self
            .ctx
            .profile_repo()
            .find_by_handle(handle)
            .await?
            .ok_or_else(|| ServiceError::not_found("Profile", handle))?;

        let follower_count = self.ctx.follow_repo().count_followers(profile.id).await?;

        let games = self
            .ctx
            .game_repo()
            .list(GameQuery {
                creator_id: Some(profile.id),
                limit: 50,
                ..GameQuery::default()
            })
            .await?;

        let game_ids: Vec<Snowflake> = games.iter().map(|g| g.id).collect();
        let scores = self.ctx.score_repo().find_many(&game_ids).await?;

        let games = games
            .iter()
            .map(|game| {
                let score = scores.iter().find(|s| s.game_id == game.id);
                GameResponse::assemble(game, score, Some(&profile))
            })
            .collect();

        Ok(ProfileDetailResponse {
            profile: ProfileResponse::from(&profile),
            follower_count,
            games,
        })
    }

    /// List creator profiles
    #[instrument(skip(self))]
    pub async fn list_creators(&self, limit: i64) -> ServiceResult<Vec<ProfileResponse>> {
        let creators = self.ctx.profile_repo().list_creators(limit).await?;
        Ok(creators.iter().map(ProfileResponse::from).collect())
    }

    /// Update the caller's own profile
    #[instrument(skip(self, request))]
    pub async fn update_own(
        &self,
        profile_id: Snowflake,
        request: UpdateProfileRequest,
    ) -> ServiceResult<CurrentProfileResponse> {
        let mut profile = self
            .ctx
            .profile_repo()
            .find_by_id(profile_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Profile", profile_id.to_string()))?;

        if let Some(display_name) = request.display_name {
            profile.set_display_name(display_name);
        }
        if let Some(bio) = request.bio {
            profile.set_bio(if bio.is_empty() { None } else { Some(bio) });
        }
        if let Some(avatar_url) = request.avatar_url {
            profile.avatar_url = Some(avatar_url);
        }
        if let Some(banner_url) = request.banner_url {
            profile.banner_url = Some(banner_url);
        }

        self.ctx.profile_repo().update(&profile).await?;

        info!(profile_id = %profile_id, "profile updated");

        Ok(CurrentProfileResponse::from(&profile))
    }

    /// Upgrade the caller to a creator account
    #[instrument(skip(self))]
    pub async fn become_creator(
        &self,
        profile_id: Snowflake,
    ) -> ServiceResult<CurrentProfileResponse> {
        let mut profile = self
            .ctx
            .profile_repo()
            .find_by_id(profile_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Profile", profile_id.to_string()))?;

        if !profile.is_creator {
            profile.make_creator();
            self.ctx.profile_repo().update(&profile).await?;
            info!(profile_id = %profile_id, "account upgraded to creator");
        }

        Ok(CurrentProfileResponse::from(&profile))
    }
}
