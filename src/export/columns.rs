//! CSV列の導出と行の組み立て

use crate::convert;
use crate::scanner::{PhotoGps, TagValue};
use std::collections::BTreeSet;

/// ヘッダから除外するGPSタグ
const EXCLUDED_KEYS: &[&str] = &["GPSAltitudeRef", "GPSVersionID"];

const LATITUDE_KEY: &str = "GPSLatitude";
const LONGITUDE_KEY: &str = "GPSLongitude";

/// CSVの1列
#[derive(Debug, Clone, PartialEq)]
pub enum Column {
    /// 生値をそのまま出力するGPSタグ
    Scalar(String),
    LatitudeDegree,
    LatitudeMinutes,
    LatitudeSeconds,
    LatitudeDecimal,
    LongitudeDegree,
    LongitudeMinutes,
    LongitudeSeconds,
    LongitudeDecimal,
}

impl Column {
    pub fn header(&self) -> &str {
        match self {
            Column::Scalar(name) => name,
            Column::LatitudeDegree => "GPSLatitudeDegree",
            Column::LatitudeMinutes => "GPSLatitudeMinutes",
            Column::LatitudeSeconds => "GPSLatitudeSeconds",
            Column::LatitudeDecimal => "GPSLatitudeDecimal",
            // 経度側はGPSLong*とGPSLongitudeDecimalが混在する固定の列名
            Column::LongitudeDegree => "GPSLongDegree",
            Column::LongitudeMinutes => "GPSLongMinutes",
            Column::LongitudeSeconds => "GPSLongSeconds",
            Column::LongitudeDecimal => "GPSLongitudeDecimal",
        }
    }
}

/// 全写真から観測されたタグ名を集計してCSVの列を決める
///
/// 除外タグを引いた残りを辞書順に並べ、GPSLatitude / GPSLongitude は
/// それぞれ4つの派生列（度・分・秒・十進度）として末尾に展開する。
pub fn derive_columns(photos: &[PhotoGps]) -> Vec<Column> {
    let mut keys = BTreeSet::new();
    for photo in photos {
        keys.extend(photo.tags.keys().cloned());
    }
    for excluded in EXCLUDED_KEYS {
        keys.remove(*excluded);
    }

    let has_latitude = keys.remove(LATITUDE_KEY);
    let has_longitude = keys.remove(LONGITUDE_KEY);

    let mut columns: Vec<Column> = keys.into_iter().map(Column::Scalar).collect();

    if has_latitude {
        columns.extend([
            Column::LatitudeDegree,
            Column::LatitudeMinutes,
            Column::LatitudeSeconds,
            Column::LatitudeDecimal,
        ]);
    }
    if has_longitude {
        columns.extend([
            Column::LongitudeDegree,
            Column::LongitudeMinutes,
            Column::LongitudeSeconds,
            Column::LongitudeDecimal,
        ]);
    }

    columns
}

/// 1枚分のCSV行を組み立てる（先頭はファイル名）
pub fn build_row(photo: &PhotoGps, columns: &[Column]) -> Vec<String> {
    // 座標の分解は緯度・経度それぞれ行ごとに1回だけ
    let latitude = split_logged(photo, LATITUDE_KEY);
    let longitude = split_logged(photo, LONGITUDE_KEY);

    let mut row = Vec::with_capacity(columns.len() + 1);
    row.push(photo.file_name.clone());

    for column in columns {
        let cell = match column {
            Column::Scalar(name) => match photo.tags.get(name) {
                Some(TagValue::Scalar(text)) => text.clone(),
                _ => String::new(),
            },
            Column::LatitudeDegree => number_cell(latitude.map(|(d, _, _)| d)),
            Column::LatitudeMinutes => number_cell(latitude.map(|(_, m, _)| m)),
            Column::LatitudeSeconds => number_cell(latitude.map(|(_, _, s)| s)),
            Column::LatitudeDecimal => {
                number_cell(latitude.map(|(d, m, s)| convert::to_decimal(d, m, s)))
            }
            Column::LongitudeDegree => number_cell(longitude.map(|(d, _, _)| d)),
            Column::LongitudeMinutes => number_cell(longitude.map(|(_, m, _)| m)),
            Column::LongitudeSeconds => number_cell(longitude.map(|(_, _, s)| s)),
            Column::LongitudeDecimal => {
                number_cell(longitude.map(|(d, m, s)| convert::to_decimal(d, m, s)))
            }
        };
        row.push(cell);
    }

    row
}

/// 座標タグを分解し、タグはあるのに分解できない場合だけログを出す
fn split_logged(photo: &PhotoGps, key: &str) -> Option<(f64, f64, f64)> {
    let value = photo.tags.get(key);
    let split = convert::split_coordinate(value);

    if value.is_some() && split.is_none() {
        eprintln!("GPS座標の解析に失敗: {} {}", photo.file_name, key);
    }

    split
}

fn number_cell(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::TagMap;

    fn photo(file_name: &str, entries: &[(&str, TagValue)]) -> PhotoGps {
        let mut tags = TagMap::new();
        for (key, value) in entries {
            tags.insert(key.to_string(), value.clone());
        }
        PhotoGps {
            file_name: file_name.to_string(),
            tags,
        }
    }

    #[test]
    fn test_derive_columns_expands_coordinates_last() {
        let photos = vec![photo(
            "a.jpg",
            &[
                ("GPSLatitude", TagValue::Coordinate(vec![10.0, 30.0, 0.0])),
                ("GPSLongitude", TagValue::Coordinate(vec![20.0, 15.0, 0.0])),
                ("GPSLatitudeRef", TagValue::Scalar("N".into())),
                ("GPSMapDatum", TagValue::Scalar("WGS-84".into())),
            ],
        )];

        let columns = derive_columns(&photos);
        let headers: Vec<&str> = columns.iter().map(|c| c.header()).collect();
        assert_eq!(
            headers,
            vec![
                "GPSLatitudeRef",
                "GPSMapDatum",
                "GPSLatitudeDegree",
                "GPSLatitudeMinutes",
                "GPSLatitudeSeconds",
                "GPSLatitudeDecimal",
                "GPSLongDegree",
                "GPSLongMinutes",
                "GPSLongSeconds",
                "GPSLongitudeDecimal",
            ]
        );
    }

    #[test]
    fn test_derive_columns_excludes_fixed_keys() {
        let photos = vec![photo(
            "a.jpg",
            &[
                ("GPSAltitudeRef", TagValue::Scalar("0".into())),
                ("GPSVersionID", TagValue::Scalar("2.3.0.0".into())),
                ("GPSAltitude", TagValue::Scalar("12.3".into())),
            ],
        )];

        let columns = derive_columns(&photos);
        assert_eq!(columns, vec![Column::Scalar("GPSAltitude".into())]);
    }

    #[test]
    fn test_derive_columns_longitude_only() {
        let photos = vec![photo(
            "a.jpg",
            &[("GPSLongitude", TagValue::Coordinate(vec![1.0, 2.0, 3.0]))],
        )];

        let columns = derive_columns(&photos);
        let headers: Vec<&str> = columns.iter().map(|c| c.header()).collect();
        assert_eq!(
            headers,
            vec!["GPSLongDegree", "GPSLongMinutes", "GPSLongSeconds", "GPSLongitudeDecimal"]
        );
    }

    #[test]
    fn test_derive_columns_union_across_photos() {
        let photos = vec![
            photo("a.jpg", &[("GPSMapDatum", TagValue::Scalar("WGS-84".into()))]),
            photo("b.jpg", &[("GPSDateStamp", TagValue::Scalar("2026:08:30".into()))]),
        ];

        let columns = derive_columns(&photos);
        let headers: Vec<&str> = columns.iter().map(|c| c.header()).collect();
        assert_eq!(headers, vec!["GPSDateStamp", "GPSMapDatum"]);
    }

    #[test]
    fn test_build_row_values() {
        let p = photo(
            "a.jpg",
            &[
                ("GPSLatitude", TagValue::Coordinate(vec![10.0, 30.0, 0.0])),
                ("GPSLongitude", TagValue::Coordinate(vec![20.0, 15.0, 0.0])),
            ],
        );
        let columns = derive_columns(std::slice::from_ref(&p));

        let row = build_row(&p, &columns);
        assert_eq!(
            row,
            vec!["a.jpg", "10", "30", "0", "10.5", "20", "15", "0", "20.25"]
        );
    }

    #[test]
    fn test_build_row_missing_tag_is_empty() {
        let a = photo(
            "a.jpg",
            &[
                ("GPSLatitude", TagValue::Coordinate(vec![10.0, 30.0, 0.0])),
                ("GPSMapDatum", TagValue::Scalar("WGS-84".into())),
            ],
        );
        let b = photo("b.jpg", &[("GPSMapDatum", TagValue::Scalar("WGS-84".into()))]);
        let photos = vec![a.clone(), b.clone()];
        let columns = derive_columns(&photos);

        // bは座標を持たないので派生4列はすべて空欄
        let row = build_row(&b, &columns);
        assert_eq!(row, vec!["b.jpg", "WGS-84", "", "", "", ""]);
    }

    #[test]
    fn test_build_row_malformed_coordinate() {
        // 2要素の座標：セルは空欄、ゼロやエラーにはしない
        let p = photo(
            "a.jpg",
            &[("GPSLatitude", TagValue::Coordinate(vec![10.0, 30.0]))],
        );
        let columns = derive_columns(std::slice::from_ref(&p));

        let row = build_row(&p, &columns);
        assert_eq!(row, vec!["a.jpg", "", "", "", ""]);
    }

    #[test]
    fn test_build_row_fractional_precision() {
        let p = photo(
            "a.jpg",
            &[("GPSLatitude", TagValue::Coordinate(vec![35.0, 41.0, 22.2]))],
        );
        let columns = derive_columns(std::slice::from_ref(&p));

        let row = build_row(&p, &columns);
        assert_eq!(row[1], "35");
        assert_eq!(row[2], "41");
        assert_eq!(row[3], "22.2");
        assert_eq!(row[4], (35.0 + 41.0 / 60.0 + 22.2 / 3600.0).to_string());
    }
}
