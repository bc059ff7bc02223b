//! `prop_firms` table model
//!
//! Field names are the domain attribute names; `column_name` gives the
//! storage layout explicitly rather than through naming conventions.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "prop_firms")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    #[sea_orm(column_name = "logo_url")]
    pub logo_url: Option<String>,
    #[sea_orm(column_name = "website_url")]
    pub website_url: Option<String>,
    #[sea_orm(column_name = "profit_split")]
    pub profit_split: Option<String>,
    #[sea_orm(column_name = "min_funding")]
    pub min_funding: Option<i32>,
    #[sea_orm(column_name = "max_funding")]
    pub max_funding: Option<i32>,
    #[sea_orm(column_name = "evaluation_fee")]
    pub evaluation_fee: Option<Decimal>,
    pub rating: Option<Decimal>,
    #[sea_orm(column_name = "review_count")]
    pub review_count: Option<i32>,
    #[sea_orm(column_name = "is_featured")]
    pub is_featured: Option<bool>,
    pub platforms: Option<Vec<String>>,
    #[sea_orm(column_name = "affiliate_link")]
    pub affiliate_link: Option<String>,
    #[sea_orm(column_name = "affiliate_code")]
    pub affiliate_code: Option<String>,
    #[sea_orm(column_name = "created_at")]
    pub created_at: Option<DateTimeWithTimeZone>,
    #[sea_orm(column_name = "updated_at")]
    pub updated_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
