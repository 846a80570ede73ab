use crate::common::OutputFormat;
use crate::error::AppError;
use crate::output_common::{make_header, render_json, render_txt, write_text};
use chrono::Local;
use serde::Serialize;
use std::path::Path;

/// レポートを標準出力、または指定ファイルへ書き出す
pub async fn emit_report<T: Serialize>(
    command: &str,
    report: &T,
    format_enum: OutputFormat,
    output: Option<&Path>,
    mode: &str,
) -> Result<(), AppError> {
    let body = match format_enum {
        OutputFormat::Txt => render_txt(report)?,
        OutputFormat::Json => render_json(report)?,
    };

    let Some(path) = output else {
        print!("{}", body);
        return Ok(());
    };

    let content = match format_enum {
        OutputFormat::Txt => {
            let now_str = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
            format!("{}{}", make_header(&now_str, command), body)
        }
        // JSONはヘッダーを付けると壊れるのでそのまま
        OutputFormat::Json => body,
    };

    write_text(path, &content, mode).await?;
    println!(
        "[output] Wrote/append {} for {} to {}",
        format_enum.as_str().to_uppercase(),
        command,
        path.display()
    );
    Ok(())
}
