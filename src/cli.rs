use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "photo-gps")]
#[command(about = "写真GPSメタデータCSV出力ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 写真フォルダのGPSメタデータをCSVに出力
    Export {
        /// 写真フォルダのパス（省略時は対話入力）
        folder: Option<PathBuf>,

        /// 出力CSVファイル（省略時は対話入力）
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 設定を表示/編集
    Config {
        /// デフォルトの出力CSVファイル名を設定
        #[arg(long)]
        set_output_name: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
