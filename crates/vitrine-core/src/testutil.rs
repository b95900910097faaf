//! Shared fixtures for unit tests.
//!
//! The three-record fixture mirrors the reference scenario used across the
//! filter, stats, and session tests: two ceramics in the art hall (one a
//! national treasure), one sculpture in the archaeology hall.

use crate::types::{
    DesignationTier, Hall, Language, LocalizedText, Record, RecordId,
};

/// A five-language mapping from explicit values.
pub(crate) fn text(ko: &str, en: &str, zh: &str, ja: &str, th: &str) -> LocalizedText {
    [
        (Language::Ko, ko.to_string()),
        (Language::En, en.to_string()),
        (Language::Zh, zh.to_string()),
        (Language::Ja, ja.to_string()),
        (Language::Th, th.to_string()),
    ]
    .into_iter()
    .collect()
}

/// A five-language mapping with generated filler values.
pub(crate) fn filler(prefix: &str, id: u32) -> LocalizedText {
    [
        Language::Ko,
        Language::En,
        Language::Zh,
        Language::Ja,
        Language::Th,
    ]
    .into_iter()
    .map(|lang| (lang, format!("{prefix}-{id}-{}", lang.code())))
    .collect()
}

/// A minimal valid record with filler translations.
pub(crate) fn record(id: u32, category: &str, hall: Hall) -> Record {
    Record {
        id: RecordId(id),
        name: filler("name", id),
        period: filler("period", id),
        category: category.to_string(),
        description: filler("description", id),
        detailed_info: filler("info", id),
        hall,
        designation: DesignationTier::None,
        cultural_property: None,
        featured: false,
        exhibition_room: None,
        artifact_number: None,
        material: None,
        dimensions: None,
        location: None,
        image: None,
    }
}

/// The reference three-record fixture.
pub(crate) fn records_fixture() -> Vec<Record> {
    vec![
        Record {
            id: RecordId(1),
            name: text(
                "청자 상감운학문 매병",
                "Celadon Maebyeong",
                "青瓷象嵌云鹤纹梅瓶",
                "青磁象嵌雲鶴文梅瓶",
                "แจกันเซลาดอน",
            ),
            period: text("고려", "Goryeo", "高丽", "高麗", "โกรยอ"),
            category: "ceramics".to_string(),
            description: text(
                "고려청자의 대표작",
                "Masterpiece of Goryeo celadon",
                "高丽青瓷代表作",
                "高麗青磁の代表作",
                "ผลงานชิ้นเอกของเซลาดอนโกรยอ",
            ),
            detailed_info: filler("info", 1),
            hall: Hall::Art,
            designation: DesignationTier::NationalTreasure,
            cultural_property: Some("국보 제68호".to_string()),
            featured: true,
            exhibition_room: Some("3층".to_string()),
            artifact_number: None,
            material: None,
            dimensions: None,
            location: None,
            image: Some("/test1.jpg".to_string()),
        },
        Record {
            id: RecordId(2),
            name: text(
                "금동미륵보살반가사유상",
                "Gilt-bronze Maitreya",
                "金铜弥勒菩萨半跏思惟像",
                "金銅弥勒菩薩半跏思惟像",
                "รูปพระโพธิสัตว์",
            ),
            period: text("삼국시대", "Three Kingdoms", "三国时代", "三国時代", "สามอาณาจักร"),
            category: "sculpture".to_string(),
            description: text(
                "삼국시대 불교 조각의 걸작",
                "Masterpiece of Three Kingdoms Buddhist sculpture",
                "三国时代佛教雕塑杰作",
                "三国時代仏教彫刻の傑作",
                "ผลงานชิ้นเอกของประติมากรรมพุทธศาสนา",
            ),
            detailed_info: filler("info", 2),
            hall: Hall::Archaeology,
            designation: DesignationTier::NationalTreasure,
            cultural_property: Some("국보 제83호".to_string()),
            featured: false,
            exhibition_room: Some("2층".to_string()),
            artifact_number: None,
            material: None,
            dimensions: None,
            location: None,
            image: Some("/test2.jpg".to_string()),
        },
        Record {
            id: RecordId(3),
            name: text(
                "백자 달항아리",
                "White Porcelain Moon Jar",
                "白瓷月罐",
                "白磁月壺",
                "ไหดวงจันทร์",
            ),
            period: text("조선", "Joseon", "朝鲜", "朝鮮", "โชซอน"),
            category: "ceramics".to_string(),
            description: text(
                "조선시대 백자의 정수",
                "Essence of Joseon white porcelain",
                "朝鲜白瓷精髓",
                "朝鮮白磁の精髄",
                "แก่นแท้ของเครื่องเคลือบขาวโชซอน",
            ),
            detailed_info: filler("info", 3),
            hall: Hall::Art,
            designation: DesignationTier::None,
            cultural_property: None,
            featured: false,
            exhibition_room: Some("3층".to_string()),
            artifact_number: None,
            material: None,
            dimensions: None,
            location: None,
            image: Some("/test3.jpg".to_string()),
        },
    ]
}
