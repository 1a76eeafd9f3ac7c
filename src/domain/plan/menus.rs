//! Curated menu examples and concept-specific suggestions.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::catalog::MainCategory;

/// One suggested menu item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuExample {
    pub name: String,
    /// Price in yen.
    pub price: i64,
    pub description: String,
}

impl MenuExample {
    pub fn new(name: impl Into<String>, price: i64, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price,
            description: description.into(),
        }
    }
}

pub(crate) fn items(list: &[(&str, i64, &str)]) -> Vec<MenuExample> {
    list.iter()
        .map(|(name, price, description)| MenuExample::new(*name, *price, *description))
        .collect()
}

/// Menu shown when nothing more specific is known.
pub fn default_menu() -> Vec<MenuExample> {
    items(&[
        ("おすすめメニュー1", 800, "お店の特色を活かした一品"),
        ("おすすめメニュー2", 900, "人気の定番メニュー"),
        ("おすすめメニュー3", 1000, "特別な日のメニュー"),
    ])
}

/// Concept keywords with curated suggestions.
pub const CONCEPTS: [&str; 2] = ["ヘルシー", "SNS映え"];

type ConceptMenus = HashMap<MainCategory, HashMap<&'static str, Vec<MenuExample>>>;

static CONCEPT_MENUS: Lazy<ConceptMenus> = Lazy::new(|| {
    let mut map: ConceptMenus = HashMap::new();
    map.entry(MainCategory::CafeSweets).or_default().extend([
        (
            "ヘルシー",
            items(&[
                ("アサイーボウル", 880, "スーパーフード満載、SNS映え抜群"),
                ("グリーンスムージー", 680, "野菜と果物のバランス◎"),
                ("キヌアサラダボウル", 950, "低GI、高タンパク質"),
            ]),
        ),
        (
            "SNS映え",
            items(&[
                ("レインボーラテ", 750, "7色のグラデーションラテアート"),
                ("フルーツタワーパンケーキ", 1380, "フォトジェニックな盛り付け"),
                ("ユニコーンフラペチーノ", 820, "カラフルで可愛い限定ドリンク"),
            ]),
        ),
    ]);
    map.entry(MainCategory::Grill).or_default().insert(
        "ヘルシー",
        items(&[
            ("野菜巻き串盛り合わせ", 980, "アスパラ・トマト・なすの野菜串"),
            ("むね肉の塩焼き", 380, "低脂質・高タンパク"),
        ]),
    );
    map.entry(MainCategory::Noodles).or_default().insert(
        "ヘルシー",
        items(&[
            ("鶏白湯ラーメン（麺半分）", 850, "コラーゲンたっぷり、低糖質"),
            ("野菜たっぷりタンメン", 880, "シャキシャキ野菜山盛り"),
        ]),
    );
    map
});

/// Curated suggestions for a main category and concept keyword, if any.
pub fn concept_menu(main: MainCategory, concept: &str) -> Option<&'static [MenuExample]> {
    CONCEPT_MENUS
        .get(&main)
        .and_then(|by_concept| by_concept.get(concept.trim()))
        .map(Vec::as_slice)
}
