use clap::Parser;

use crate::model::DifficultyFilter;

#[derive(Parser, Debug)]
#[command(name = "quizgenius", version, about = "Terminal quiz application")]
pub struct Cli {
    /// Search the question catalog and print matches without entering TUI
    #[arg(long, value_name = "term")]
    pub search: Option<String>,

    /// Restrict --search to one subject
    #[arg(long, value_name = "subject")]
    pub subject: Option<String>,

    /// Restrict --search to one difficulty
    #[arg(long, value_enum, default_value_t = DifficultyFilter::Mixed)]
    pub difficulty: DifficultyFilter,

    /// List the full question catalog and exit
    #[arg(long)]
    pub catalog: bool,

    /// Export the question catalog as CSV to a file
    #[arg(long, value_name = "path")]
    pub export_catalog: Option<String>,

    /// Append debug events to quizgenius.log
    #[arg(long)]
    pub log: bool,
}
