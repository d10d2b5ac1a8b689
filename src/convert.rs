//! GPS座標の度分秒変換

use crate::scanner::TagValue;

/// 座標の生値を（度, 分, 秒）に分解
///
/// ちょうど3要素の座標列だけをSomeで返す。欠損・要素数違い・
/// 型違いはすべてNone（セルは空欄になる）。値域の検証はしない。
pub fn split_coordinate(value: Option<&TagValue>) -> Option<(f64, f64, f64)> {
    match value {
        Some(TagValue::Coordinate(parts)) if parts.len() == 3 => {
            Some((parts[0], parts[1], parts[2]))
        }
        _ => None,
    }
}

/// 度分秒 → 十進度
///
/// 丸めは行わない（EXIFのRationalは小数を含むことがある）。
pub fn to_decimal(degrees: f64, minutes: f64, seconds: f64) -> f64 {
    degrees + minutes / 60.0 + seconds / 3600.0
}
