use clap::Parser;

#[derive(Parser)]
#[command(name = "lvp")]
#[command(about = "Pick PanLex language variants from live suggestions.")]
#[command(version)]
pub struct Cli {
    /// Pick a language pair (source and target)
    #[arg(short = 'p', long)]
    pub pair: bool,

    /// Don't use cached suggestions
    #[arg(short = 'n', long)]
    pub nocache: bool,

    /// Output selection as JSON
    #[arg(long)]
    pub json: bool,

    /// Choose color theme
    #[arg(short = 'T', long)]
    pub theme: Option<String>,

    /// Generate config sample
    #[arg(long)]
    pub generate_config: bool,

    /// Edit configuration file
    #[arg(long)]
    pub edit_config: bool,

    /// Show status
    #[arg(long)]
    pub status: bool,

    /// Initial query text
    #[arg(num_args = 0..)]
    pub query: Vec<String>,
}
