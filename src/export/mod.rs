//! GPSタグのCSV出力

mod columns;

pub use columns::{derive_columns, Column};

use crate::error::Result;
use crate::scanner::PhotoGps;
use std::fs::File;
use std::io;
use std::path::Path;

/// 収集済みの写真GPSタグをCSVとして書き出す
///
/// 既存の出力ファイルは無条件に上書きする。
pub fn export_csv(photos: &[PhotoGps], output_path: &Path) -> Result<()> {
    let file = File::create(output_path)?;
    write_csv(photos, file)
}

/// ヘッダ1行 + 写真1枚につき1行を書き込む
pub fn write_csv<W: io::Write>(photos: &[PhotoGps], writer: W) -> Result<()> {
    let columns = columns::derive_columns(photos);

    let mut csv_writer = csv::Writer::from_writer(writer);

    let mut header = Vec::with_capacity(columns.len() + 1);
    header.push("Image Name".to_string());
    header.extend(columns.iter().map(|c| c.header().to_string()));
    csv_writer.write_record(&header)?;

    for photo in photos {
        csv_writer.write_record(columns::build_row(photo, &columns))?;
    }

    csv_writer.flush()?;
    Ok(())
}
