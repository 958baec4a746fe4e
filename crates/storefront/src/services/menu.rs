//! Menu aggregation.
//!
//! Every call performs one full read of each relation and joins them in
//! memory. Both tables are menu-sized; there is no caching or pagination.

use sqlx::PgPool;
use tracing::{debug, instrument};

use navegante_core::{MenuSection, group_by_section, orphaned_products};

use crate::db::{MenuRepository, RepositoryError};

/// Load the menu as a list of sections, each carrying its products.
///
/// An empty store yields `Ok(vec![])`; only a failed read is an error.
///
/// # Errors
///
/// Returns `RepositoryError` if either read fails or a row is invalid.
#[instrument(skip(pool))]
pub async fn load_menu(pool: &PgPool) -> Result<Vec<MenuSection>, RepositoryError> {
    let repo = MenuRepository::new(pool);
    let sections = repo.list_sections().await?;
    let products = repo.list_products().await?;

    let orphans = orphaned_products(&sections, &products);
    if !orphans.is_empty() {
        let ids: Vec<i32> = orphans.iter().map(|p| p.id.as_i32()).collect();
        debug!(?ids, "Dropping products without a listed section");
    }

    let menu = group_by_section(&sections, &products);
    debug!(
        sections = menu.len(),
        products = products.len() - orphans.len(),
        "Menu loaded"
    );
    Ok(menu)
}
