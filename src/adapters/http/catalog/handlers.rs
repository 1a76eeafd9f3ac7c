//! HTTP handlers for catalog and health endpoints.
//!
//! These serve presentation data and never fail: unknown areas, categories
//! and concepts fall back to generic content.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::domain::plan::{
    catalog, subsidies_for, AreaArchetype, Category, CategoryScope, MainCategory, PlanEngine,
};

use super::dto::{CategoriesResponse, HealthResponse, MenuSuggestionsResponse, SubsidiesResponse};

/// GET / and GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

/// GET /api/categories
pub async fn list_categories() -> Json<CategoriesResponse> {
    Json(CategoriesResponse {
        categories: catalog(),
    })
}

/// GET /api/subsidies/:area
pub async fn list_subsidies(Path(area): Path<String>) -> Json<SubsidiesResponse> {
    let archetype = AreaArchetype::parse(&area).ok();
    if archetype.is_none() {
        tracing::debug!(area = %area, "Unknown area, serving generic subsidies");
    }

    Json(SubsidiesResponse {
        area: archetype.map(|a| a.label().to_string()),
        subsidies: subsidies_for(archetype),
    })
}

/// GET /api/menus/:category/:concept
pub async fn suggest_menus(
    State(engine): State<Arc<PlanEngine>>,
    Path((category, concept)): Path<(String, String)>,
) -> Json<MenuSuggestionsResponse> {
    let scope = resolve_scope(&category);
    let concept = concept.trim().to_string();

    Json(MenuSuggestionsResponse {
        menu_examples: engine.content().menu_suggestions(scope.as_ref(), &concept),
        category: category.trim().to_string(),
        concept,
    })
}

/// Accepts either a `"Main - Sub"` key or a bare main label.
fn resolve_scope(raw: &str) -> Option<CategoryScope> {
    match Category::parse(raw) {
        Ok(category) => Some(CategoryScope::of(&category)),
        Err(_) => MainCategory::from_label(raw.trim()).map(CategoryScope::Main),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composite_key_keeps_the_sub_category() {
        assert_eq!(
            resolve_scope("カフェ・スイーツ - パンケーキ"),
            Some(CategoryScope::Sub(MainCategory::CafeSweets, "パンケーキ".to_string()))
        );
    }

    #[test]
    fn bare_label_resolves_to_main_scope() {
        assert_eq!(
            resolve_scope(" ラーメン・麺 "),
            Some(CategoryScope::Main(MainCategory::Noodles))
        );
    }

    #[test]
    fn unknown_category_resolves_to_none() {
        assert_eq!(resolve_scope("宇宙食"), None);
    }

    #[tokio::test]
    async fn unknown_area_gets_generic_subsidies() {
        let Json(response) = list_subsidies(Path("moon".to_string())).await;
        assert!(response.area.is_none());
        assert_eq!(response.subsidies.len(), 3);
    }

    #[tokio::test]
    async fn categories_list_every_main() {
        let Json(response) = list_categories().await;
        assert_eq!(response.categories.len(), MainCategory::ALL.len());
    }
}
