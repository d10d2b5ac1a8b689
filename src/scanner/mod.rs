mod exif;

pub use exif::{read_gps_tags, TagMap, TagValue};

use crate::error::{PhotoGpsError, Result};
use std::path::Path;
use walkdir::WalkDir;

/// GPSタグを持つ1枚の写真
#[derive(Debug, Clone)]
pub struct PhotoGps {
    pub file_name: String,
    pub tags: TagMap,
}

/// フォルダ直下の.jpg画像からGPSタグを収集
///
/// GPSタグの無い写真は結果に含めない。行順はディレクトリの
/// 列挙順をそのまま保持する（ソートしない）。
pub fn scan_folder(folder: &Path) -> Result<Vec<PhotoGps>> {
    if !folder.exists() {
        return Err(PhotoGpsError::FolderNotFound(folder.display().to_string()));
    }

    let mut photos = Vec::new();

    for entry in WalkDir::new(folder)
        .max_depth(1)  // 直下のみ（再帰しない）
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        if !is_jpg(path) {
            continue;
        }

        let tags = read_gps_tags(path);
        if tags.is_empty() {
            continue;
        }

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        photos.push(PhotoGps { file_name, tags });
    }

    Ok(photos)
}

/// 拡張子が.jpgか（大文字小文字は区別しない）
fn is_jpg(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().eq_ignore_ascii_case("jpg"))
        .unwrap_or(false)
}
