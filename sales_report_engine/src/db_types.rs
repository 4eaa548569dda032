use std::{fmt::Display, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use thiserror::Error;

//--------------------------------------        User        ----------------------------------------------------

/// A local account record. The account directory owns these; the authorization gate only ever reads them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl User {
    pub fn new<S1, S2, S3>(id: S1, name: S2, email: S3) -> Self
    where
        S1: Into<String>,
        S2: Into<String>,
        S3: Into<String>,
    {
        Self { id: id.into(), name: name.into(), email: email.into() }
    }
}

impl Display for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "User {} <{}>", self.id, self.email)
    }
}

//--------------------------------------   UserAttributeKind  --------------------------------------------------

/// The set of user columns a directory lookup may match against. Keeping this a closed enum (rather than a raw
/// column-name string) is what keeps the lookup queries injection-free.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserAttributeKind {
    Id,
    Name,
    Email,
}

impl UserAttributeKind {
    /// The column this attribute kind matches against.
    pub fn column(&self) -> &'static str {
        match self {
            UserAttributeKind::Id => "id",
            UserAttributeKind::Name => "name",
            UserAttributeKind::Email => "email",
        }
    }
}

impl Display for UserAttributeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.column())
    }
}

#[derive(Debug, Clone, Error)]
#[error("{0} is not a valid user attribute kind")]
pub struct InvalidUserAttributeKind(String);

impl FromStr for UserAttributeKind {
    type Err = InvalidUserAttributeKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "id" => Ok(UserAttributeKind::Id),
            "name" => Ok(UserAttributeKind::Name),
            "email" => Ok(UserAttributeKind::Email),
            _ => Err(InvalidUserAttributeKind(s.to_string())),
        }
    }
}

//--------------------------------------        Sales       ----------------------------------------------------

/// One sale, as stored in the `sales` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Sale {
    pub id: String,
    pub reference: String,
    pub status: String,
    pub amount: i64,
    pub total_price: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub user_id: String,
}

/// A sale joined with the name of the customer it belongs to. This is the shape the reporting endpoints return.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct CustomerSale {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub sale: Sale,
    pub user_name: String,
}

/// One line item of a sale, as stored in the `sales_products` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct SaleProduct {
    pub id: String,
    pub sale_id: String,
    pub product_id: String,
    pub user_id: String,
    pub quantity: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A line item joined with its product and purchaser. `amount` is the purchased quantity and `total_price` is
/// `quantity * price`, both computed in the query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct SaleProductDetail {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub amount: i64,
    pub total_price: f64,
    pub user_name: String,
}
