use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use elementum_lib::model::config::AppConfig;
use elementum_lib::ui::lang::Language;
use elementum_lib::App;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Rule input: a binary numeral with exactly 8 digits, e.g. 10010110
    #[arg(required_unless_present = "welcome")]
    rule: Option<String>,

    /// Custom config file path
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Display language override
    #[arg(short, long, value_enum)]
    lang: Option<Language>,

    /// Overlay the rule digits onto the second row before running
    #[arg(long)]
    preview: bool,

    /// Print the welcome message and exit
    #[arg(long)]
    welcome: bool,
}

fn main() -> Result<()> {
    elementum_core::init_logging();
    let args = Args::parse();

    let mut config = AppConfig::load(&args.config)?;
    if let Some(lang) = args.lang {
        config.display.language = lang;
    }

    let app = App::new(config);
    if args.welcome {
        println!("{}", app.language().help_message());
        return Ok(());
    }

    let rule_text = args.rule.context("rule input is required")?;
    let mut stdout = io::stdout().lock();
    app.run(&rule_text, args.preview, &mut stdout)
}
