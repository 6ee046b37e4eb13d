//! Follow service

use arcade_core::entities::Follow;
use arcade_core::{DomainError, Snowflake};
use tracing::{info, instrument};

use crate::dto::FollowStateResponse;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Follow service
pub struct FollowService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> FollowService<'a> {
    /// Create a new FollowService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Follow state between the caller and a profile
    #[instrument(skip(self))]
    pub async fn get_state(
        &self,
        caller_id: Option<Snowflake>,
        target_id: Snowflake,
    ) -> ServiceResult<FollowStateResponse> {
        let following = match caller_id {
            Some(follower_id) => self
                .ctx
                .follow_repo()
                .find(follower_id, target_id)
                .await?
                .is_some(),
            None => false,
        };

        let follower_count = self.ctx.follow_repo().count_followers(target_id).await?;

        Ok(FollowStateResponse {
            following,
            follower_count,
        })
    }

    /// Toggle following a profile
    #[instrument(skip(self))]
    pub async fn toggle(
        &self,
        follower_id: Snowflake,
        target_id: Snowflake,
    ) -> ServiceResult<FollowStateResponse> {
        if follower_id == target_id {
            return Err(ServiceError::Domain(DomainError::CannotFollowSelf));
        }

        // Target must exist
        self.ctx
            .profile_repo()
            .find_by_id(target_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Profile", target_id.to_string()))?;

        let following = match self.ctx.follow_repo().find(follower_id, target_id).await? {
            Some(_) => {
                self.ctx.follow_repo().delete(follower_id, target_id).await?;
                info!(follower = %follower_id, followed = %target_id, "unfollowed");
                false
            }
            None => {
                let follow = Follow::new(follower_id, target_id);
                self.ctx.follow_repo().create(&follow).await?;
                info!(follower = %follower_id, followed = %target_id, "followed");
                true
            }
        };

        let follower_count = self.ctx.follow_repo().count_followers(target_id).await?;

        Ok(FollowStateResponse {
            following,
            follower_count,
        })
    }
}
