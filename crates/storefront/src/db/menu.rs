//! Menu repository.
//!
//! Reads sections and products. Rows are decoded into private row types and
//! converted into [`Section`] / [`Product`] right after the read, so a bad
//! row surfaces as [`RepositoryError::DataCorruption`] instead of travelling
//! further as untyped data.
//!
//! Runtime queries are used throughout to avoid `SQLx` offline cache
//! requirements.

use rust_decimal::Decimal;
use sqlx::PgPool;
use tracing::instrument;

use navegante_core::{Price, Product, ProductId, Section, SectionId};

use super::RepositoryError;

/// Repository for menu reads.
pub struct MenuRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> MenuRepository<'a> {
    /// Create a new menu repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Read every section in storage order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if a row is invalid.
    #[instrument(skip(self))]
    pub async fn list_sections(&self) -> Result<Vec<Section>, RepositoryError> {
        let rows = sqlx::query_as::<_, SectionRow>(
            r"
            SELECT id, name
            FROM navegante.section
            ORDER BY id
            ",
        )
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(Section::try_from).collect()
    }

    /// Read every product in storage order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if a row is invalid.
    #[instrument(skip(self))]
    pub async fn list_products(&self) -> Result<Vec<Product>, RepositoryError> {
        let rows = sqlx::query_as::<_, ProductRow>(
            r"
            SELECT id, name, price, description, section_id
            FROM navegante.product
            ORDER BY id
            ",
        )
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(Product::try_from).collect()
    }

    /// Get a single product by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the row is invalid.
    #[instrument(skip(self), fields(product_id = %id))]
    pub async fn get_product(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        let row = sqlx::query_as::<_, ProductRow>(
            r"
            SELECT id, name, price, description, section_id
            FROM navegante.product
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        row.map(Product::try_from).transpose()
    }
}

/// Internal row type for section queries.
#[derive(Debug, sqlx::FromRow)]
struct SectionRow {
    id: i32,
    name: String,
}

/// Internal row type for product queries.
#[derive(Debug, sqlx::FromRow)]
struct ProductRow {
    id: i32,
    name: String,
    price: Decimal,
    description: Option<String>,
    section_id: i32,
}

impl TryFrom<SectionRow> for Section {
    type Error = RepositoryError;

    fn try_from(row: SectionRow) -> Result<Self, Self::Error> {
        let name = non_blank(row.name).ok_or_else(|| {
            RepositoryError::DataCorruption(format!("section {} has a blank name", row.id))
        })?;

        Ok(Self {
            id: SectionId::new(row.id),
            name,
        })
    }
}

impl TryFrom<ProductRow> for Product {
    type Error = RepositoryError;

    fn try_from(row: ProductRow) -> Result<Self, Self::Error> {
        let name = non_blank(row.name).ok_or_else(|| {
            RepositoryError::DataCorruption(format!("product {} has a blank name", row.id))
        })?;
        let price = Price::new(row.price).map_err(|e| {
            RepositoryError::DataCorruption(format!("product {}: {e}", row.id))
        })?;

        Ok(Self {
            id: ProductId::new(row.id),
            name,
            price,
            description: row.description.and_then(non_blank),
            section_id: SectionId::new(row.section_id),
        })
    }
}

fn non_blank(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}
