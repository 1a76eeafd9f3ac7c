//! Public funding programmes suggested to founders.
//!
//! Every plan lists the two national programmes plus one local programme
//! chosen by area.

use serde::Serialize;

use super::request::AreaArchetype;

/// A subsidy programme as shown on the funding page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Subsidy {
    pub name: &'static str,
    pub amount: &'static str,
    pub detail: &'static str,
    pub requirement: &'static str,
    pub badge: Option<&'static str>,
}

const NATIONAL: [Subsidy; 2] = [
    Subsidy {
        name: "小規模事業者持続化補助金",
        amount: "上限：50万円（条件により200万円）",
        detail: "販路開拓・生産性向上の取り組みを支援。",
        requirement: "従業員5人以下の小規模事業者",
        badge: Some("募集中"),
    },
    Subsidy {
        name: "IT導入補助金",
        amount: "上限：50～450万円",
        detail: "POSレジ、予約システム、会計ソフトなどのITツール導入費用を補助。",
        requirement: "中小企業・小規模事業者",
        badge: None,
    },
];

const LOCAL_BADGE: Option<&str> = Some("地域限定");

fn local(area: Option<AreaArchetype>) -> Subsidy {
    match area {
        Some(AreaArchetype::TouristArea) => Subsidy {
            name: "観光振興・商店街活性化補助金",
            amount: "上限：50～300万円",
            detail: "観光地での新規出店を支援。",
            requirement: "観光地での新規創業者",
            badge: LOCAL_BADGE,
        },
        Some(AreaArchetype::StationAdjacent) => Subsidy {
            name: "駅前活性化・創業支援補助金",
            amount: "上限：50～300万円",
            detail: "駅前エリアの活性化を目的とした創業支援。",
            requirement: "駅前での新規創業者",
            badge: LOCAL_BADGE,
        },
        _ => Subsidy {
            name: "地方自治体の創業支援補助金",
            amount: "上限：50～300万円",
            detail: "開業時の設備投資、広告宣伝費などを支援。",
            requirement: "新規創業者",
            badge: LOCAL_BADGE,
        },
    }
}

/// Subsidies for an area. An unrecognized area gets the generic local
/// programme.
pub fn subsidies_for(area: Option<AreaArchetype>) -> Vec<Subsidy> {
    let mut subsidies = NATIONAL.to_vec();
    subsidies.push(local(area));
    subsidies
}

/// Programme names, in the order they are suggested.
pub fn funding_methods(area: AreaArchetype) -> Vec<String> {
    subsidies_for(Some(area))
        .into_iter()
        .map(|s| s.name.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tourist_area_gets_tourism_programme() {
        assert_eq!(
            funding_methods(AreaArchetype::TouristArea),
            vec![
                "小規模事業者持続化補助金",
                "IT導入補助金",
                "観光振興・商店街活性化補助金"
            ]
        );
    }

    #[test]
    fn residential_and_office_get_municipal_programme() {
        for area in [AreaArchetype::Residential, AreaArchetype::OfficeDistrict] {
            assert_eq!(funding_methods(area)[2], "地方自治体の創業支援補助金");
        }
    }

    #[test]
    fn unknown_area_gets_generic_programme() {
        let subsidies = subsidies_for(None);
        assert_eq!(subsidies.len(), 3);
        assert_eq!(subsidies[2].name, "地方自治体の創業支援補助金");
        assert_eq!(subsidies[2].badge, Some("地域限定"));
    }

    #[test]
    fn subsidy_details_match_plan_funding_names() {
        for area in AreaArchetype::ALL {
            let names: Vec<&str> = subsidies_for(Some(area)).iter().map(|s| s.name).collect();
            assert_eq!(names, funding_methods(area));
        }
    }
}
