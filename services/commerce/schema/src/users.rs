use sea_orm::entity::prelude::*;

/// Local mirror of an identity-provider user. The id is the opaque string
/// issued by the provider; rows are upserted on login and never hard-deleted.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    #[sea_orm(unique)]
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub profile_image_url: Option<String>,
    pub role: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::businesses::Entity")]
    Businesses,
    #[sea_orm(has_many = "super::business_employees::Entity")]
    BusinessEmployees,
    #[sea_orm(has_many = "super::sales::Entity")]
    Sales,
}

impl Related<super::businesses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Businesses.def()
    }
}

impl Related<super::business_employees::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BusinessEmployees.def()
    }
}

impl Related<super::sales::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Sales.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
