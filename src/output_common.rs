use crate::error::AppError;
use serde::Serialize;
use serde_json::Value;
use std::path::Path;
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;

/// 汎用ヘッダー生成: こちらは非同期要素がないのでそのまま
pub fn make_header(now_str: &str, command: &str) -> String {
    format!("# Generated at: {}\n# Command: {}\n\n", now_str, command)
}

/// レポートを "key: value" 形式の行に変換する
pub fn render_txt<T: Serialize>(report: &T) -> Result<String, AppError> {
    let value = serde_json::to_value(report)?;
    let mut body = String::new();

    match value {
        Value::Object(map) => {
            for (key, v) in map {
                body.push_str(&format!("{}: {}\n", key, scalar_to_string(&v)));
            }
        }
        other => {
            body.push_str(&scalar_to_string(&other));
            body.push('\n');
        }
    }

    Ok(body)
}

/// JSON値を1行分の文字列にする (配列はカンマ区切り、null は "none")
fn scalar_to_string(v: &Value) -> String {
    match v {
        Value::Null => "none".to_string(),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(scalar_to_string)
            .collect::<Vec<_>>()
            .join(", "),
        other => other.to_string(),
    }
}

pub fn render_json<T: Serialize>(report: &T) -> Result<String, AppError> {
    let mut s = serde_json::to_string_pretty(report)?;
    s.push('\n');
    Ok(s)
}

/// ファイル出力用の共通ヘルパー
pub async fn write_text<P: AsRef<Path>>(
    path: P,
    content: &str,
    mode: &str,
) -> Result<(), AppError> {
    match mode {
        "append" => {
            // 非同期OpenOptions
            let mut file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .await?;
            file.write_all(content.as_bytes()).await?;
        }
        _ => {
            // まるごと書き込む場合
            fs::write(path, content).await?;
        }
    }

    Ok(())
}
