//! Content selection: qualitative plan sections per category and area.
//!
//! Text fields are templates. `{area}`, `{main}` and `{sub}` are replaced
//! with the area label, main category label and sub-category when a
//! profile is selected. Staffing, peak-time guidance and funding are
//! derived from the request itself rather than looked up.

use serde::Serialize;
use std::collections::HashMap;

use super::catalog::{Category, MainCategory};
use super::errors::ConfigurationGap;
use super::funding;
use super::hours::{OpeningSlot, TimeOfDay};
use super::layers::{self, CategoryScope, LayerKey, ProfileSource};
use super::menus::{self, items, MenuExample};
use super::request::{AreaArchetype, PlanRequest};

const TABLE: &str = "content";

const MORNING_PEAK: &str = "朝のピークタイム（8:00-10:00）は、準備を前日から進め、スタッフを多めに配置。テイクアウト対応も並行して行うと効率的です。";
const LUNCH_PEAK: &str = "ランチタイム（11:30-14:00）は、事前準備を徹底し、回転率を上げるため簡易メニューも用意。スタッフを最大限配置します。";
const DINNER_PEAK: &str = "夜のピークタイム（18:00-21:00）は、接客と調理を効率化し、予約とウォークインのバランスを取ります。";

/// Resolved qualitative content for one plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentProfile {
    pub concept: String,
    pub catch_copy: String,
    pub target_audience: String,
    pub menu_examples: Vec<MenuExample>,
    pub sns_strategy: String,
    /// One concrete next step for the founder.
    pub first_action: String,
    pub staff_count: u32,
    pub peak_operation: String,
    pub funding_methods: Vec<String>,
    #[serde(skip)]
    pub source: ProfileSource,
}

/// A partial content profile. Unset fields fall through to the next layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentLayer {
    pub concept: Option<String>,
    pub catch_copy: Option<String>,
    pub target_audience: Option<String>,
    pub menu_examples: Option<Vec<MenuExample>>,
    pub sns_strategy: Option<String>,
    pub first_action: Option<String>,
}

impl ContentLayer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn concept(mut self, text: &str) -> Self {
        self.concept = Some(text.to_string());
        self
    }

    pub fn catch_copy(mut self, text: &str) -> Self {
        self.catch_copy = Some(text.to_string());
        self
    }

    pub fn audience(mut self, text: &str) -> Self {
        self.target_audience = Some(text.to_string());
        self
    }

    pub fn menu(mut self, menu: Vec<MenuExample>) -> Self {
        self.menu_examples = Some(menu);
        self
    }

    pub fn sns(mut self, text: &str) -> Self {
        self.sns_strategy = Some(text.to_string());
        self
    }

    pub fn action(mut self, text: &str) -> Self {
        self.first_action = Some(text.to_string());
        self
    }
}

#[derive(Debug, Clone)]
struct ContentDefaults {
    concept: String,
    catch_copy: String,
    target_audience: String,
    menu_examples: Vec<MenuExample>,
    sns_strategy: String,
    first_action: String,
}

/// Immutable, layered content table.
#[derive(Debug, Clone)]
pub struct ContentTable {
    layers: HashMap<LayerKey, ContentLayer>,
    default: ContentDefaults,
}

impl ContentTable {
    /// Builds a table; the default layer must define every text field.
    pub fn new(
        default: ContentLayer,
        layers: impl IntoIterator<Item = (LayerKey, ContentLayer)>,
    ) -> Result<Self, ConfigurationGap> {
        let missing = |field| ConfigurationGap::missing(TABLE, field);
        let default = ContentDefaults {
            concept: default.concept.ok_or_else(|| missing("concept"))?,
            catch_copy: default.catch_copy.ok_or_else(|| missing("catch_copy"))?,
            target_audience: default
                .target_audience
                .ok_or_else(|| missing("target_audience"))?,
            menu_examples: default.menu_examples.ok_or_else(|| missing("menu_examples"))?,
            sns_strategy: default.sns_strategy.ok_or_else(|| missing("sns_strategy"))?,
            first_action: default.first_action.ok_or_else(|| missing("first_action"))?,
        };
        Ok(Self {
            layers: layers.into_iter().collect(),
            default,
        })
    }

    /// Selects the content for a validated request.
    pub fn select(&self, request: &PlanRequest) -> ContentProfile {
        let category = request.category();
        let area = request.area();
        let found = layers::matching(&self.layers, category, area);
        let d = &self.default;
        let text = |field: fn(&ContentLayer) -> Option<&String>, fallback: &str| {
            let template = layers::first(&found, field).map_or(fallback, String::as_str);
            render(template, category, area)
        };

        ContentProfile {
            concept: text(|l| l.concept.as_ref(), &d.concept),
            catch_copy: text(|l| l.catch_copy.as_ref(), &d.catch_copy),
            target_audience: text(|l| l.target_audience.as_ref(), &d.target_audience),
            menu_examples: layers::first(&found, |l| l.menu_examples.clone())
                .unwrap_or_else(|| d.menu_examples.clone()),
            sns_strategy: text(|l| l.sns_strategy.as_ref(), &d.sns_strategy),
            first_action: text(|l| l.first_action.as_ref(), &d.first_action),
            staff_count: staff_count(request.seats(), request.operating_minutes()),
            peak_operation: peak_guidance(request.slots()).to_string(),
            funding_methods: funding::funding_methods(area),
            source: found
                .first()
                .map(|(source, _)| *source)
                .unwrap_or(ProfileSource::Default),
        }
    }

    /// Menu suggestions for a concept keyword.
    ///
    /// Curated concept menus win. Otherwise the scope's standard menu is
    /// resolved through the area-free layers, so a category gets the same
    /// menu its plans show; the default menu answers last.
    pub fn menu_suggestions(
        &self,
        scope: Option<&CategoryScope>,
        concept: &str,
    ) -> Vec<MenuExample> {
        let Some(scope) = scope else {
            return self.default.menu_examples.clone();
        };
        if let Some(curated) = menus::concept_menu(scope.main(), concept) {
            return curated.to_vec();
        }
        let found = layers::matching_any_area(&self.layers, scope);
        layers::first(&found, |l| l.menu_examples.clone())
            .unwrap_or_else(|| self.default.menu_examples.clone())
    }

    /// The built-in table.
    pub fn standard() -> Result<Self, ConfigurationGap> {
        use MainCategory::*;

        let default = ContentLayer::new()
            .concept("{area}の{main}として、地域に愛される、こだわりの味と心地よい空間を提供するお店")
            .catch_copy("{area}で、{main}の新しいスタイルを")
            .audience("幅広い年齢層、地域住民")
            .menu(menus::default_menu())
            .sns("{area}での{main}店では、定期的なSNS投稿、Googleマップの最適化、口コミ獲得が重要です。")
            .action("看板商品1つを試作し、SNSで反応をチェックする");

        let mut layers = Vec::new();

        layers.push((
            LayerKey::main(CafeSweets),
            ContentLayer::new()
                .menu(items(&[
                    ("スペシャルブレンドコーヒー", 480, "自家焙煎のこだわりブレンド"),
                    ("季節のフルーツタルト", 680, "旬のフルーツをたっぷり使用"),
                    ("モーニングセット", 850, "トースト・サラダ・ドリンク付き"),
                ]))
                .sns("{area}でのカフェ開業では、Instagramでの写真投稿、Googleマップのレビュー獲得、地域SNSでの情報発信が効果的。特に朝のコーヒーやスイーツの写真はSNS映えしやすく、リピーター獲得に繋がります。")
                .action("看板メニュー1品を試作し、友人3人に味見してもらう"),
        ));
        layers.extend(by_area(
            LayerKey::main(CafeSweets),
            [
                ("通勤客が立ち寄りたくなる、香り高いコーヒーと焼き立てペストリーの朝カフェ", "朝の一杯で、今日もいい1日を", "通勤・通学客（20-40代）、朝のコーヒー需要"),
                ("地域のリビングルームとして、親子が集う居心地の良いコミュニティカフェ", "地域のリビングルーム、いつでもあなたの居場所", "主婦層、子育て世代、シニア層"),
                ("ランチ需要を捉える、本格コーヒーと軽食が充実したワークカフェ", "仕事の合間に、本格コーヒーでリフレッシュ", "ビジネスパーソン、ランチ需要"),
                ("旅の思い出になる、地元食材を使った特別なスイーツが人気のカフェ", "旅の思い出に、地元の味を", "観光客、地元住民、SNSユーザー"),
            ],
        ));

        for key in [LayerKey::sub(Grill, "焼き鳥"), LayerKey::sub(Japanese, "焼き鳥")] {
            layers.push((
                key.clone(),
                ContentLayer::new()
                    .menu(items(&[
                        ("もも肉（塩）", 180, "ジューシーなもも肉を塩でシンプルに"),
                        ("ねぎま", 200, "定番のねぎま、タレで濃厚に"),
                        ("つくね", 220, "手作りつくね、卵黄と一緒に"),
                    ]))
                    .sns("{area}での焼鳥店では、炭火で焼く様子の動画投稿、メニュー写真、お酒とのペアリング情報をSNSで発信。特に夜の時間帯の投稿が集客に効果的です。")
                    .action("仕入れ候補の鶏肉卸3社に連絡し、見積もりを取る"),
            ));
            layers.extend(by_area(
                key,
                [
                    ("サラリーマンが仕事帰りにサクッと一杯、気軽に立ち寄れる立ち飲み焼鳥", "仕事帰りに、サクッと一杯", "サラリーマン（30-50代）、仕事帰りの一杯"),
                    ("家族連れも安心、座敷完備で地元に愛される炭火焼鳥専門店", "家族で楽しむ、本格炭火焼鳥", "家族連れ、地元住民、週末の集まり"),
                    ("ランチは丼もの、夜は焼鳥で二毛作、効率重視の焼鳥ダイニング", "ランチも夜も、焼鳥で二毛作", "ビジネスパーソン、ランチ・飲み会需要"),
                    ("地鶏にこだわった、観光客が行列する名物焼鳥店", "地鶏にこだわる、名物焼鳥店", "観光客、地元の常連客"),
                ],
            ));
        }

        layers.push((
            LayerKey::main(Noodles),
            ContentLayer::new()
                .menu(items(&[
                    ("醤油ラーメン", 780, "こだわりの醤油スープ"),
                    ("味玉ラーメン", 880, "味玉2個付き、ボリューム満点"),
                    ("チャーシュー麺", 980, "厚切りチャーシュー3枚"),
                ]))
                .sns("{area}でのラーメン店では、スープの動画、トッピングの写真、食べ方のコツなどをSNSで発信。ランチタイムの混雑状況や待ち時間情報も共有すると良いでしょう。")
                .action("スープレシピを1つ完成させ、Instagramに投稿する"),
        ));
        layers.extend(by_area(
            LayerKey::main(Noodles),
            [
                ("駅前立地を活かした、回転率重視の王道醤油ラーメン", "駅前の名物、濃厚スープの一杯", "通勤客、学生、ランチ需要"),
                ("ファミリー層も来店しやすい、優しい味わいの地域密着型ラーメン店", "地域に愛される、優しい味わい", "家族連れ、地元住民"),
                ("ランチタイム一本勝負、濃厚スープで満足度の高い二郎系ラーメン", "ランチタイム、満足の一杯", "ビジネスパーソン、ランチ需要"),
                ("ご当地食材を使った、SNS映えする創作ラーメンが人気の店", "ご当地食材で、SNS映えする一杯", "観光客、ラーメン好き"),
            ],
        ));

        layers.push((
            LayerKey::main(Japanese),
            ContentLayer::new()
                .menu(items(&[
                    ("定食", 850, "ご飯・味噌汁・おかず3品付き"),
                    ("丼もの", 680, "ボリューム満点の丼もの"),
                    ("お造り", 1200, "新鮮な魚介類の刺身"),
                ]))
                .sns("{area}での和食店では、料理の美しい盛り付け写真、季節感のあるメニュー、伝統的な調理法の動画などをSNSで発信。特にランチタイムの情報発信が集客に効果的です。")
                .action("看板メニュー1品を試作し、友人3人に味見してもらう"),
        ));
        layers.extend(by_area(
            LayerKey::main(Japanese),
            [
                ("駅前立地を活かした、手軽に楽しめる本格和食", "駅前で、本格和食を", "通勤客、学生、ランチ需要"),
                ("家族で楽しめる、地域に愛される和食店", "家族で楽しむ、心温まる和食", "家族連れ、地元住民"),
                ("ランチ需要を捉える、定食や丼ものが充実した和食店", "ランチタイム、満足の和食", "ビジネスパーソン、ランチ需要"),
                ("地元の食材を活かした、観光客に人気の和食店", "地元の味、本格和食", "観光客、和食好き"),
            ],
        ));

        layers.push((
            LayerKey::main(Western),
            ContentLayer::new()
                .menu(items(&[
                    ("ハンバーグ定食", 1200, "手作りハンバーグとサラダ"),
                    ("オムライス", 980, "ふわふわ卵のオムライス"),
                    ("パスタ", 1100, "本格的なイタリアンパスタ"),
                ]))
                .sns("{area}での洋食店では、本格的な料理の写真、特別感のあるメニュー、店内の雰囲気などをSNSで発信。デートや特別な日の利用を意識した投稿が効果的です。")
                .action("看板メニュー1品を試作し、友人3人に味見してもらう"),
        ));
        layers.extend(by_area(
            LayerKey::main(Western),
            [
                ("駅前立地を活かした、気軽に楽しめる洋食店", "駅前で、本格洋食を", "通勤客、学生、ランチ需要"),
                ("家族で楽しめる、本格的な洋食店", "家族で楽しむ、心温まる洋食", "家族連れ、地元住民"),
                ("ランチ需要を捉える、ビジネスパーソン向けの洋食店", "ランチタイム、満足の洋食", "ビジネスパーソン、ランチ需要"),
                ("観光客に人気の、特別感のある洋食店", "特別な日、本格洋食", "観光客、洋食好き"),
            ],
        ));

        layers.push((
            LayerKey::main(Chinese),
            ContentLayer::new()
                .menu(items(&[
                    ("ラーメン", 780, "こだわりのスープ"),
                    ("餃子", 480, "手作り餃子6個"),
                    ("麻婆豆腐定食", 850, "本格四川風麻婆豆腐"),
                ]))
                .sns("{area}での中華料理店では、ボリューム満点の料理写真、本格的な調理の様子、ランチメニューの情報などをSNSで発信。特にランチタイムの情報発信が集客に効果的です。")
                .action("看板メニュー1品を試作し、友人3人に味見してもらう"),
        ));
        layers.extend(by_area(
            LayerKey::main(Chinese),
            [
                ("駅前立地を活かした、手軽に楽しめる中華料理店", "駅前で、本格中華を", "通勤客、学生、ランチ需要"),
                ("家族で楽しめる、地域に愛される中華料理店", "家族で楽しむ、心温まる中華", "家族連れ、地元住民"),
                ("ランチ需要を捉える、定食やランチメニューが充実した中華料理店", "ランチタイム、満足の中華", "ビジネスパーソン、ランチ需要"),
                ("本格的な中華料理が楽しめる、観光客に人気の店", "本格中華、観光客に人気", "観光客、中華好き"),
            ],
        ));

        Self::new(default, layers)
    }
}

/// Per-area concept, catch copy and audience, in `AreaArchetype::ALL` order.
fn by_area(
    base: LayerKey,
    rows: [(&'static str, &'static str, &'static str); 4],
) -> impl Iterator<Item = (LayerKey, ContentLayer)> {
    AreaArchetype::ALL
        .into_iter()
        .zip(rows)
        .map(move |(area, (concept, catch_copy, audience))| {
            (
                base.clone().in_area(area),
                ContentLayer::new()
                    .concept(concept)
                    .catch_copy(catch_copy)
                    .audience(audience),
            )
        })
}

fn render(template: &str, category: &Category, area: AreaArchetype) -> String {
    template
        .replace("{area}", area.label())
        .replace("{main}", category.main().label())
        .replace("{sub}", category.sub())
}

/// Recommended staff on shift: 2 up to 20 seats, 3 up to 40, else 4, plus
/// one when the shop opens more than 10 hours a day.
pub fn staff_count(seats: u32, operating_minutes: u32) -> u32 {
    let base = match seats {
        0..=20 => 2,
        21..=40 => 3,
        _ => 4,
    };
    if operating_minutes > 10 * 60 {
        base + 1
    } else {
        base
    }
}

/// Peak-time guidance chosen from the shape of the opening hours.
pub fn peak_guidance(slots: &[OpeningSlot]) -> &'static str {
    let at = TimeOfDay::on_the_hour;
    if slots.iter().any(|s| s.start < at(10)) {
        MORNING_PEAK
    } else if slots.iter().any(|s| s.overlaps(at(11), at(14))) {
        LUNCH_PEAK
    } else {
        DINNER_PEAK
    }
}
