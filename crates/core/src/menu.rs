//! Menu sections and products.
//!
//! The store keeps sections and products in two independent relations; a
//! product names its section by id. [`group_by_section`] joins them into the
//! nested shape served at `GET /api/sections` and rendered on the menu page.

use serde::{Deserialize, Serialize};

use crate::types::{Price, ProductId, SectionId, price};

/// A named grouping of menu products (e.g. "Entradas").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub id: SectionId,
    pub name: String,
}

/// A purchasable menu item as stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    pub description: Option<String>,
    pub section_id: SectionId,
}

/// A section together with its products, as served to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuSection {
    pub id: SectionId,
    pub title: String,
    pub products: Vec<MenuItem>,
}

/// A product as served inside a [`MenuSection`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: ProductId,
    pub name: String,
    #[serde(with = "price::as_number")]
    pub price: Price,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl From<&Product> for MenuItem {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            price: product.price,
            description: product.description.clone(),
        }
    }
}

/// Group products under their owning sections.
///
/// Sections keep their input order. Each section lists exactly the products
/// whose `section_id` equals its id, in product input order. Products that
/// reference no listed section are left out.
///
/// Both inputs are menu-sized, so this is a plain linear filter per section.
#[must_use]
pub fn group_by_section(sections: &[Section], products: &[Product]) -> Vec<MenuSection> {
    sections
        .iter()
        .map(|section| MenuSection {
            id: section.id,
            title: section.name.clone(),
            products: products
                .iter()
                .filter(|product| product.section_id == section.id)
                .map(MenuItem::from)
                .collect(),
        })
        .collect()
}

/// Products whose section is not among `sections`.
///
/// These are the rows [`group_by_section`] drops.
#[must_use]
pub fn orphaned_products<'a>(sections: &[Section], products: &'a [Product]) -> Vec<&'a Product> {
    products
        .iter()
        .filter(|product| !sections.iter().any(|s| s.id == product.section_id))
        .collect()
}
