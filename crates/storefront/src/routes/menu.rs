//! Menu page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use tracing::instrument;

use navegante_core::{MenuItem, MenuSection};

use crate::error::Result;
use crate::services::load_menu;
use crate::state::AppState;

/// Menu item display data for templates.
#[derive(Clone)]
pub struct MenuItemView {
    pub id: i32,
    pub name: String,
    pub price: String,
    pub description: Option<String>,
}

/// Menu section display data for templates.
#[derive(Clone)]
pub struct MenuSectionView {
    pub id: i32,
    pub title: String,
    pub products: Vec<MenuItemView>,
}

impl From<&MenuItem> for MenuItemView {
    fn from(item: &MenuItem) -> Self {
        Self {
            id: item.id.as_i32(),
            name: item.name.clone(),
            price: item.price.display(),
            description: item.description.clone(),
        }
    }
}

impl From<&MenuSection> for MenuSectionView {
    fn from(section: &MenuSection) -> Self {
        Self {
            id: section.id.as_i32(),
            title: section.title.clone(),
            products: section.products.iter().map(MenuItemView::from).collect(),
        }
    }
}

/// Build section views for a loaded menu.
#[must_use]
pub fn section_views(menu: &[MenuSection]) -> Vec<MenuSectionView> {
    menu.iter().map(MenuSectionView::from).collect()
}

/// Menu page template.
#[derive(Template, WebTemplate)]
#[template(path = "menu.html")]
pub struct MenuTemplate {
    pub sections: Vec<MenuSectionView>,
}

/// Display the full menu.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> Result<MenuTemplate> {
    let menu = load_menu(state.pool()).await?;
    Ok(MenuTemplate {
        sections: section_views(&menu),
    })
}
