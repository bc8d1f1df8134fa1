// src/cli/args.rs
use clap::{ArgAction, Parser};
use wc_domain::config::DEFAULT_CHUNK_SIZE;

use super::{
    parsers::{parse_chunk_size, parse_jobs},
    value_enum::{CliDecodePolicy, CliOutputFormat},
};

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "wc",
    version = crate::VERSION,
    about = "行数/単語数/バイト数の集計ツール",
    long_about = "Print line, word and byte counts for each FILE, and a total line if more than one FILE is given. \
                  With no FILE, or when FILE is -, read standard input."
)]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// 行数を表示
    #[arg(short = 'l', long = "lines", help_heading = "表示")]
    pub lines: bool,

    /// 単語数を表示
    #[arg(short = 'w', long = "words", help_heading = "表示")]
    pub words: bool,

    /// バイト数を表示
    #[arg(short = 'c', long = "bytes", help_heading = "表示")]
    pub bytes: bool,

    /// 出力フォーマット
    #[arg(long, value_enum, default_value = "table", help_heading = "表示")]
    pub format: CliOutputFormat,

    /// 並列ワーカー数（既定: CPU数）
    #[arg(short = 'j', long, env = "WC_JOBS", value_parser = parse_jobs, help_heading = "動作")]
    pub jobs: Option<usize>,

    /// 1回の読み取りサイズ（例: 4096, 64k, 1MiB）
    #[arg(long, default_value_t = DEFAULT_CHUNK_SIZE, value_parser = parse_chunk_size, help_heading = "動作")]
    pub chunk_size: usize,

    /// 不正なUTF-8の扱い
    #[arg(long, value_enum, default_value = "truncate", help_heading = "動作")]
    pub decode: CliDecodePolicy,

    /// ログの詳細度（-v, -vv, -vvv）。WC_LOG が設定されていればそちらを優先
    #[arg(short, long, action = ArgAction::Count, help_heading = "動作")]
    pub verbose: u8,

    /// 対象ファイル（省略時は標準入力、`-` も標準入力）
    #[arg(value_name = "FILE")]
    pub files: Vec<String>,
}
