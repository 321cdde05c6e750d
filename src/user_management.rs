use crate::entity::users::{
    ActiveModel as UserActiveModel, Column, Entity as Users, Model as User,
};
use crate::jwt::Claims;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

/// Upsert the authenticated user by the token subject. Called by the JWT
/// middleware on every authenticated request.
pub async fn ensure_user_exists(
    db: &DatabaseConnection,
    claims: &Claims,
) -> Result<User, sea_orm::DbErr> {
    let existing_user = Users::find()
        .filter(Column::ExternalId.eq(&claims.sub))
        .one(db)
        .await?;

    if let Some(user) = existing_user {
        return Ok(user);
    }

    let new_user = UserActiveModel {
        id: Set(Uuid::new_v4()),
        external_id: Set(claims.sub.clone()),
        email: Set(claims.email.clone()),
        name: Set(None),
        created_at: Set(Utc::now().into()),
        updated_at: Set(Utc::now().into()),
    };

    new_user.insert(db).await
}
