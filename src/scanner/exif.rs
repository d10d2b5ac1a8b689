use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use exif::{Context, In, Tag, Value};

/// 1枚の画像から取り出したGPSタグ一覧（タグ名 → 生値）
pub type TagMap = BTreeMap<String, TagValue>;

/// GPSタグの生値
#[derive(Debug, Clone, PartialEq)]
pub enum TagValue {
    /// GPSLatitude / GPSLongitude の度・分・秒列
    Coordinate(Vec<f64>),
    /// それ以外のタグの表示文字列
    Scalar(String),
}

/// 画像からGPSタグを読み込む
///
/// EXIFが無い画像は空のTagMapを返す。読み込みエラーも
/// ログを出して空のTagMapを返し、バッチ全体は止めない。
pub fn read_gps_tags(path: &Path) -> TagMap {
    match try_read_gps_tags(path) {
        Ok(tags) => tags,
        // EXIFコンテナ自体が無いのは正常（GPS無し写真）
        Err(exif::Error::NotFound(_)) => TagMap::new(),
        Err(e) => {
            eprintln!("GPSInfoの読み込みエラー {}: {}", path.display(), e);
            TagMap::new()
        }
    }
}

fn try_read_gps_tags(path: &Path) -> std::result::Result<TagMap, exif::Error> {
    let file = File::open(path)?;
    let mut bufreader = BufReader::new(file);
    let exif = exif::Reader::new().read_from_container(&mut bufreader)?;

    let mut tags = TagMap::new();

    for field in exif.fields() {
        // 主画像のGPS IFDのみ対象
        if field.ifd_num != In::PRIMARY || field.tag.context() != Context::Gps {
            continue;
        }
        tags.insert(tag_name(field.tag), tag_value(field));
    }

    Ok(tags)
}

/// GPSタグIDを人間可読名に変換（未知のタグは数値のまま）
fn tag_name(tag: Tag) -> String {
    if tag.description().is_some() {
        tag.to_string()
    } else {
        tag.number().to_string()
    }
}

fn tag_value(field: &exif::Field) -> TagValue {
    if field.tag == Tag::GPSLatitude || field.tag == Tag::GPSLongitude {
        // Rational以外で格納された座標は分解不能として空列で保持
        let parts = match field.value {
            Value::Rational(ref v) => v.iter().map(|r| r.to_f64()).collect(),
            _ => Vec::new(),
        };
        return TagValue::Coordinate(parts);
    }

    TagValue::Scalar(field.display_value().to_string())
}
