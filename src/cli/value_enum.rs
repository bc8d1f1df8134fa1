use clap::ValueEnum;
use wc_domain::options::DecodePolicy;

use crate::presentation::OutputFormat;

#[derive(Clone, Copy, Debug, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CliOutputFormat {
    Table,
    Json,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(value: CliOutputFormat) -> Self {
        match value {
            CliOutputFormat::Table => OutputFormat::Table,
            CliOutputFormat::Json => OutputFormat::Json,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CliDecodePolicy {
    /// 不正なバイト列で計測を打ち切る（既定）
    Truncate,
    /// 不正なバイト列をエラーとして扱う
    Strict,
    /// 不正なバイト列を1文字として数え続ける
    Lossy,
}

impl From<CliDecodePolicy> for DecodePolicy {
    fn from(value: CliDecodePolicy) -> Self {
        match value {
            CliDecodePolicy::Truncate => DecodePolicy::Truncate,
            CliDecodePolicy::Strict => DecodePolicy::Strict,
            CliDecodePolicy::Lossy => DecodePolicy::Lossy,
        }
    }
}
