//! Profile entity <-> model mapper

use arcade_core::entities::Profile;
use arcade_core::Snowflake;

use crate::models::ProfileModel;

impl From<ProfileModel> for Profile {
    fn from(model: ProfileModel) -> Self {
        Profile {
            id: Snowflake::new(model.id),
            handle: model.handle,
            display_name: model.display_name,
            email: model.email,
            avatar_url: model.avatar_url,
            banner_url: model.banner_url,
            bio: model.bio,
            is_creator: model.is_creator,
            is_admin: model.is_admin,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
