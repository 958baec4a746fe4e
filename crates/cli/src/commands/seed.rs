//! Seed the menu from a YAML file.
//!
//! ```yaml
//! sections:
//!   - name: Entradas
//!     products:
//!       - name: Ceviche de Camarón
//!         price: 12.99
//!         description: Camarones frescos marinados en limón
//! ```
//!
//! The whole file is validated before connecting to the database, and all
//! rows are inserted in one transaction.

use std::path::Path;

use navegante_core::Price;
use navegante_storefront::config::{ConfigError, database_url_from_env};
use navegante_storefront::db::create_pool;
use rust_decimal::Decimal;
use serde::Deserialize;
use sqlx::{Postgres, Transaction};
use thiserror::Error;
use tracing::{error, info};

/// Errors from seeding the menu.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("{0} validation errors found")]
    Invalid(usize),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Menu file contents.
#[derive(Debug, Deserialize)]
pub struct MenuSeed {
    pub sections: Vec<SectionSeed>,
}

/// One menu section and its products, in display order.
#[derive(Debug, Deserialize)]
pub struct SectionSeed {
    pub name: String,
    #[serde(default)]
    pub products: Vec<ProductSeed>,
}

#[derive(Debug, Deserialize)]
pub struct ProductSeed {
    pub name: String,
    pub price: Decimal,
    #[serde(default)]
    pub description: Option<String>,
}

/// Rows written by a seeding run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub sections: usize,
    pub products: usize,
}

/// Check a menu file for problems, returning one message per problem.
#[must_use]
pub fn validate_menu(menu: &MenuSeed) -> Vec<String> {
    let mut errors = Vec::new();

    if menu.sections.is_empty() {
        errors.push("menu has no sections".to_string());
    }

    for (i, section) in menu.sections.iter().enumerate() {
        let section_label = if section.name.trim().is_empty() {
            errors.push(format!("section {} has no name", i + 1));
            format!("section {}", i + 1)
        } else {
            section.name.clone()
        };

        for (j, product) in section.products.iter().enumerate() {
            if product.name.trim().is_empty() {
                errors.push(format!("{section_label}: product {} has no name", j + 1));
            }
            if let Err(e) = Price::new(product.price) {
                errors.push(format!("{section_label}: {}: {e}", product.name));
            }
        }
    }

    errors
}

/// Seed the menu from a YAML file.
///
/// # Arguments
///
/// * `file_path` - Path to the menu YAML file
/// * `clear_existing` - If true, delete the current menu first
///
/// # Errors
///
/// Returns `SeedError` if the file cannot be read or fails validation, the
/// database URL is missing, or an insert fails.
pub async fn menu(file_path: &str, clear_existing: bool) -> Result<(), SeedError> {
    dotenvy::dotenv().ok();

    let path = Path::new(file_path);
    if !path.exists() {
        return Err(SeedError::FileNotFound(file_path.to_string()));
    }

    info!(path = %file_path, "Loading menu from file");

    let content = tokio::fs::read_to_string(path).await?;
    let menu: MenuSeed = serde_yaml::from_str(&content)?;

    info!(sections = menu.sections.len(), "Parsed menu");

    let errors = validate_menu(&menu);
    if !errors.is_empty() {
        error!("Menu validation failed:");
        for err in &errors {
            error!("  - {err}");
        }
        return Err(SeedError::Invalid(errors.len()));
    }

    let database_url = database_url_from_env()?;
    let pool = create_pool(&database_url).await?;
    info!("Connected to database");

    let mut tx = pool.begin().await?;
    if clear_existing {
        clear_menu(&mut tx).await?;
    }
    let summary = insert_menu(&mut tx, &menu).await?;
    tx.commit().await?;

    info!("Seeding complete!");
    info!("  Sections inserted: {}", summary.sections);
    info!("  Products inserted: {}", summary.products);

    Ok(())
}

/// Delete every product and section.
async fn clear_menu(tx: &mut Transaction<'_, Postgres>) -> Result<(), sqlx::Error> {
    let products = sqlx::query("DELETE FROM navegante.product")
        .execute(&mut **tx)
        .await?;
    let sections = sqlx::query("DELETE FROM navegante.section")
        .execute(&mut **tx)
        .await?;

    info!(
        products = products.rows_affected(),
        sections = sections.rows_affected(),
        "Cleared existing menu"
    );
    Ok(())
}

async fn insert_menu(
    tx: &mut Transaction<'_, Postgres>,
    menu: &MenuSeed,
) -> Result<SeedSummary, sqlx::Error> {
    let mut summary = SeedSummary::default();

    for section in &menu.sections {
        let section_id: i32 =
            sqlx::query_scalar("INSERT INTO navegante.section (name) VALUES ($1) RETURNING id")
                .bind(section.name.trim())
                .fetch_one(&mut **tx)
                .await?;
        summary.sections += 1;

        for product in &section.products {
            let description = product
                .description
                .as_deref()
                .map(str::trim)
                .filter(|d| !d.is_empty());

            sqlx::query(
                r"
                INSERT INTO navegante.product (name, price, description, section_id)
                VALUES ($1, $2, $3, $4)
                ",
            )
            .bind(product.name.trim())
            .bind(product.price)
            .bind(description)
            .bind(section_id)
            .execute(&mut **tx)
            .await?;
            summary.products += 1;
        }
    }

    Ok(summary)
}
