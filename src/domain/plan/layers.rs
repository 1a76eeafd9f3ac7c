//! Layered lookup shared by the rate and content tables.
//!
//! A table is a map from `LayerKey` to a partial layer plus a complete
//! default. Lookup walks `(Main - Sub, area)`, `(Main - Sub, *)`,
//! `(Main, area)`, `(Main, *)` and finally the default, field by field.

use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

use super::catalog::{Category, MainCategory};
use super::request::AreaArchetype;

/// Which part of the category taxonomy a layer applies to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CategoryScope {
    Main(MainCategory),
    Sub(MainCategory, String),
}

impl CategoryScope {
    /// The sub-category scope of a parsed `"Main - Sub"` category.
    pub fn of(category: &Category) -> Self {
        Self::Sub(category.main(), category.sub().to_string())
    }

    pub fn main(&self) -> MainCategory {
        match self {
            Self::Main(main) | Self::Sub(main, _) => *main,
        }
    }
}

/// Key of one table layer. `area: None` applies to every area.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LayerKey {
    pub scope: CategoryScope,
    pub area: Option<AreaArchetype>,
}

impl LayerKey {
    pub fn main(main: MainCategory) -> Self {
        Self {
            scope: CategoryScope::Main(main),
            area: None,
        }
    }

    pub fn sub(main: MainCategory, sub: impl Into<String>) -> Self {
        Self {
            scope: CategoryScope::Sub(main, sub.into()),
            area: None,
        }
    }

    /// Narrows this key to one area.
    pub fn in_area(mut self, area: AreaArchetype) -> Self {
        self.area = Some(area);
        self
    }
}

/// The most specific layer that contributed to a resolved profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileSource {
    SubCategoryArea,
    SubCategory,
    MainCategoryArea,
    MainCategory,
    Default,
}

impl fmt::Display for ProfileSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ProfileSource::SubCategoryArea => "sub_category_area",
            ProfileSource::SubCategory => "sub_category",
            ProfileSource::MainCategoryArea => "main_category_area",
            ProfileSource::MainCategory => "main_category",
            ProfileSource::Default => "default",
        };
        f.write_str(s)
    }
}

/// The lookup chain for a category and area, most specific first.
pub fn chain(category: &Category, area: AreaArchetype) -> [(LayerKey, ProfileSource); 4] {
    let main = category.main();
    [
        (
            LayerKey::sub(main, category.sub()).in_area(area),
            ProfileSource::SubCategoryArea,
        ),
        (LayerKey::sub(main, category.sub()), ProfileSource::SubCategory),
        (LayerKey::main(main).in_area(area), ProfileSource::MainCategoryArea),
        (LayerKey::main(main), ProfileSource::MainCategory),
    ]
}

/// Layers present for a category and area, most specific first, with the
/// source each one stands for.
pub fn matching<'a, L>(
    layers: &'a HashMap<LayerKey, L>,
    category: &Category,
    area: AreaArchetype,
) -> Vec<(ProfileSource, &'a L)> {
    chain(category, area)
        .into_iter()
        .filter_map(|(key, source)| layers.get(&key).map(|layer| (source, layer)))
        .collect()
}

/// Area-independent layers for a scope, most specific first. Used where no
/// area is known; a sub scope also falls back to its main layer.
pub fn matching_any_area<'a, L>(
    layers: &'a HashMap<LayerKey, L>,
    scope: &CategoryScope,
) -> Vec<(ProfileSource, &'a L)> {
    let main = scope.main();
    let sub = match scope {
        CategoryScope::Sub(_, sub) => {
            Some((LayerKey::sub(main, sub.as_str()), ProfileSource::SubCategory))
        }
        CategoryScope::Main(_) => None,
    };
    sub.into_iter()
        .chain([(LayerKey::main(main), ProfileSource::MainCategory)])
        .filter_map(|(key, source)| layers.get(&key).map(|layer| (source, layer)))
        .collect()
}

/// First value a layer supplies, walking the chain; `None` means the
/// default answers.
pub fn first<'a, L, T>(
    found: &[(ProfileSource, &'a L)],
    field: impl Fn(&'a L) -> Option<T>,
) -> Option<T> {
    found.iter().find_map(|(_, layer)| field(*layer))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chain_runs_from_most_to_least_specific() {
        let category = Category::parse("和食 - 居酒屋").unwrap();
        let keys = chain(&category, AreaArchetype::Residential);

        assert_eq!(
            keys[0].0,
            LayerKey::sub(MainCategory::Japanese, "居酒屋").in_area(AreaArchetype::Residential)
        );
        assert_eq!(keys[1].0, LayerKey::sub(MainCategory::Japanese, "居酒屋"));
        assert_eq!(
            keys[2].0,
            LayerKey::main(MainCategory::Japanese).in_area(AreaArchetype::Residential)
        );
        assert_eq!(keys[3].0, LayerKey::main(MainCategory::Japanese));
        assert!(keys.windows(2).all(|w| w[0].1 < w[1].1));
    }

    #[test]
    fn first_prefers_specific_layer_and_skips_gaps() {
        let mut layers: HashMap<LayerKey, (Option<u32>, Option<u32>)> = HashMap::new();
        layers.insert(LayerKey::main(MainCategory::Bar), (Some(1), Some(10)));
        layers.insert(LayerKey::sub(MainCategory::Bar, "ワインバー"), (Some(2), None));

        let category = Category::parse("バー・酒場 - ワインバー").unwrap();
        let found = matching(&layers, &category, AreaArchetype::TouristArea);

        assert_eq!(found[0].0, ProfileSource::SubCategory);
        assert_eq!(first(&found, |l| l.0), Some(2));
        assert_eq!(first(&found, |l| l.1), Some(10));
    }

    #[test]
    fn area_free_lookup_skips_area_layers() {
        let mut layers: HashMap<LayerKey, u32> = HashMap::new();
        layers.insert(LayerKey::main(MainCategory::Bar), 1);
        layers.insert(LayerKey::sub(MainCategory::Bar, "ワインバー"), 2);
        layers.insert(
            LayerKey::sub(MainCategory::Bar, "ワインバー").in_area(AreaArchetype::Residential),
            3,
        );

        let category = Category::parse("バー・酒場 - ワインバー").unwrap();
        let found = matching_any_area(&layers, &CategoryScope::of(&category));
        assert_eq!(
            found,
            vec![(ProfileSource::SubCategory, &2), (ProfileSource::MainCategory, &1)]
        );

        let main_only = matching_any_area(&layers, &CategoryScope::Main(MainCategory::Bar));
        assert_eq!(main_only, vec![(ProfileSource::MainCategory, &1)]);
    }

    #[test]
    fn nothing_matches_for_unlisted_category() {
        let layers: HashMap<LayerKey, u32> = HashMap::new();
        let category = Category::parse("キッチンカー - その他").unwrap();
        assert!(matching(&layers, &category, AreaArchetype::Residential).is_empty());
    }
}
