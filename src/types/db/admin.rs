use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "admins")]
pub struct Model {
    /// Same identifier as the source user record, assigned externally
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    // Projected user fields; any of them may be absent on the source record
    pub email: Option<String>,
    pub school_id: Option<String>,
    pub school_name: Option<String>,
    pub full_name: Option<String>,
    pub is_mentor: Option<bool>,

    // Row timestamps; created_at is outside the projection and survives
    // merge-upserts
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
