/// 出力形式を管理するためのenum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Txt,
    Json,
}

impl OutputFormat {
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => OutputFormat::Json,
            _ => OutputFormat::Txt, // デフォルトは Txt
        }
    }

    /// ログやファイル拡張子で使うラベル用
    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Txt => "txt",
            OutputFormat::Json => "json",
        }
    }
}

/// デバッグログ出力 (RUST_LOG=debug で表示される)
pub fn debug_log<S: AsRef<str>>(msg: S) {
    log::debug!("{}", msg.as_ref());
}
