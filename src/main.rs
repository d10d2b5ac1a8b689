use clap::Parser;
use dialoguer::Input;
use photo_gps_rust::{cli, config, error, export, scanner};

use cli::{Cli, Commands};
use config::Config;
use error::{PhotoGpsError, Result};
use std::path::PathBuf;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Export { folder, output } => {
            println!("📍 photo-gps - GPSメタデータCSV出力\n");

            let folder = match folder {
                Some(folder) => folder,
                None => prompt_path("写真フォルダのパス")?,
            };

            if !folder.is_dir() {
                println!("指定されたフォルダが存在しません: {}", folder.display());
                return Ok(());
            }

            let output = match output {
                Some(output) => output,
                None => prompt_output(&config.default_output_name)?,
            };

            // 1. スキャン
            println!("[1/2] 写真をスキャン中...");
            let photos = scanner::scan_folder(&folder)?;
            println!("✔ GPSタグ付き写真: {}枚\n", photos.len());

            // 2. CSV出力
            println!("[2/2] CSVを出力中...");
            export::export_csv(&photos, &output)?;
            println!("✔ CSV出力: {}", output.display());

            println!("\n✅ 完了");
        }

        Commands::Config { set_output_name, show } => {
            let mut config = config;

            if let Some(name) = set_output_name {
                config.set_output_name(name)?;
                println!("✔ 出力ファイル名を設定しました");
            }

            if show {
                println!("設定:");
                println!("  出力ファイル名: {}", config.default_output_name);
                println!("  設定ファイル: {}", Config::config_path()?.display());
            }
        }
    }

    Ok(())
}

fn prompt_path(prompt: &str) -> Result<PathBuf> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .interact_text()
        .map_err(|e| PhotoGpsError::Prompt(e.to_string()))?;

    Ok(PathBuf::from(input.trim()))
}

fn prompt_output(default_name: &str) -> Result<PathBuf> {
    let input: String = Input::new()
        .with_prompt("出力CSVファイル名")
        .default(default_name.to_string())
        .interact_text()
        .map_err(|e| PhotoGpsError::Prompt(e.to_string()))?;

    Ok(PathBuf::from(input.trim()))
}
