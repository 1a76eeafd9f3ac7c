//! Category catalog - the closed Main → Sub taxonomy of business types.
//!
//! A category travels on the wire as `"Main - Sub"` (e.g. `"和食 - 寿司"`).
//! The catalog is presentation data as much as engine input: the UI lists
//! it, and the validator only accepts pairs that appear in it.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// Separator between main and sub category in the composite key.
pub const CATEGORY_SEPARATOR: &str = " - ";

/// Top-level business category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MainCategory {
    Japanese,
    Western,
    Chinese,
    AsianEthnic,
    CafeSweets,
    Bar,
    Noodles,
    Grill,
    FastFood,
    Bakery,
    KitchenCar,
}

impl MainCategory {
    /// All main categories in display order.
    pub const ALL: [MainCategory; 11] = [
        MainCategory::Japanese,
        MainCategory::Western,
        MainCategory::Chinese,
        MainCategory::AsianEthnic,
        MainCategory::CafeSweets,
        MainCategory::Bar,
        MainCategory::Noodles,
        MainCategory::Grill,
        MainCategory::FastFood,
        MainCategory::Bakery,
        MainCategory::KitchenCar,
    ];

    /// Display label, also the wire spelling.
    pub fn label(&self) -> &'static str {
        match self {
            MainCategory::Japanese => "和食",
            MainCategory::Western => "洋食",
            MainCategory::Chinese => "中華",
            MainCategory::AsianEthnic => "アジア・エスニック",
            MainCategory::CafeSweets => "カフェ・スイーツ",
            MainCategory::Bar => "バー・酒場",
            MainCategory::Noodles => "ラーメン・麺",
            MainCategory::Grill => "焼肉・焼き鳥・肉",
            MainCategory::FastFood => "ファストフード・軽食",
            MainCategory::Bakery => "ベーカリー・惣菜",
            MainCategory::KitchenCar => "キッチンカー",
        }
    }

    /// Sub-categories offered under this main category.
    pub fn subcategories(&self) -> &'static [&'static str] {
        match self {
            MainCategory::Japanese => &[
                "寿司",
                "うどん・そば",
                "天ぷら",
                "焼き鳥",
                "居酒屋",
                "定食・丼",
                "懐石・会席",
                "その他和食",
            ],
            MainCategory::Western => &[
                "イタリアン",
                "フレンチ",
                "ステーキハウス",
                "ハンバーガー",
                "パスタ専門店",
                "ピザ",
                "その他洋食",
            ],
            MainCategory::Chinese => &[
                "四川料理",
                "広東料理",
                "北京料理",
                "上海料理",
                "餃子専門店",
                "その他中華",
            ],
            MainCategory::AsianEthnic => &[
                "タイ料理",
                "ベトナム料理",
                "韓国料理",
                "インド料理",
                "シンガポール料理",
                "その他アジア",
            ],
            MainCategory::CafeSweets => &[
                "コーヒー専門店",
                "スイーツ・ケーキ",
                "パンケーキ",
                "アイスクリーム",
                "和スイーツ",
                "その他カフェ",
            ],
            MainCategory::Bar => &[
                "ビアバー",
                "ワインバー",
                "カクテルバー",
                "日本酒バー",
                "立ち飲み",
                "その他酒場",
            ],
            MainCategory::Noodles => &["ラーメン", "つけ麺", "油そば", "担々麺", "その他麺類"],
            MainCategory::Grill => &[
                "焼肉",
                "焼き鳥",
                "ホルモン",
                "ステーキ",
                "ハンバーグ",
                "その他肉料理",
            ],
            MainCategory::FastFood => &[
                "フライドチキン",
                "サンドイッチ",
                "お好み焼き・たこ焼き",
                "その他軽食",
            ],
            MainCategory::Bakery => &[
                "パン屋",
                "惣菜パン",
                "サンドイッチ専門",
                "デリカテッセン",
                "その他",
            ],
            MainCategory::KitchenCar => &["タコス", "クレープ", "コーヒースタンド", "その他"],
        }
    }

    /// Looks up a main category by its label.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|m| m.label() == label)
    }

    pub fn has_subcategory(&self, sub: &str) -> bool {
        self.subcategories().contains(&sub)
    }
}

impl fmt::Display for MainCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A validated Main/Sub category pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Category {
    main: MainCategory,
    sub: String,
}

impl Category {
    /// Parses and resolves a `"Main - Sub"` key against the catalog.
    ///
    /// Surrounding whitespace is ignored on both parts.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(ValidationError::empty_field("category"));
        }

        let (main, sub) = raw.split_once(CATEGORY_SEPARATOR).ok_or_else(|| {
            ValidationError::invalid_format("category", "expected 'Main - Sub'")
        })?;
        let (main, sub) = (main.trim(), sub.trim());

        let main = MainCategory::from_label(main)
            .ok_or_else(|| ValidationError::unknown_value("category", raw))?;
        if !main.has_subcategory(sub) {
            return Err(ValidationError::unknown_value("category", raw));
        }

        Ok(Self {
            main,
            sub: sub.to_string(),
        })
    }

    pub fn main(&self) -> MainCategory {
        self.main
    }

    pub fn sub(&self) -> &str {
        &self.sub
    }

    /// The canonical composite key, e.g. `"和食 - 寿司"`.
    pub fn key(&self) -> String {
        format!("{}{}{}", self.main.label(), CATEGORY_SEPARATOR, self.sub)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.main.label(), CATEGORY_SEPARATOR, self.sub)
    }
}

/// One main category with its leaves, as listed to the UI.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogEntry {
    pub id: MainCategory,
    pub name: &'static str,
    pub subcategories: &'static [&'static str],
}

/// The full taxonomy in display order.
pub fn catalog() -> Vec<CatalogEntry> {
    MainCategory::ALL
        .iter()
        .map(|main| CatalogEntry {
            id: *main,
            name: main.label(),
            subcategories: main.subcategories(),
        })
        .collect()
}
