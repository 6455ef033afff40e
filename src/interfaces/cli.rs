use clap::error::ErrorKind;
use clap::{ArgAction, Parser};

const AFTER_HELP: &str = "\
t translates input text specified by argument or STDIN using Watson Language Translation API.
Source language will be automatically detected.

    export T_WATSON_LANGUAGE_TRANSLATOR_API_USERNAME=<Your Watson Language Translator API username>
    export T_WATSON_LANGUAGE_TRANSLATOR_API_PASSWORD=<Your Watson Language Translator API password>

Example:
    $ t Good morning!
    おはようございます!
    $ t おはようございます!
    Good morning!
    $ echo Good morning! | t";

#[derive(Parser, Debug)]
#[command(name = "t")]
#[command(about = "Translate between Japanese and English.")]
#[command(after_help = AFTER_HELP)]
#[command(version, disable_version_flag = true)]
pub struct Cli {
    /// Show version
    #[arg(short = 'v', long, action = ArgAction::Version)]
    pub version: Option<bool>,

    /// Generate config sample
    #[arg(long)]
    pub generate_config: bool,

    /// Text to translate (read from STDIN when piped)
    #[arg(num_args = 0..)]
    pub text: Vec<String>,
}

/// Exit status after a failed parse; help and version output count as success
pub fn parse_exit_code(err: &clap::Error) -> u8 {
    match err.kind() {
        ErrorKind::DisplayHelp
        | ErrorKind::DisplayVersion
        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => 0,
        _ => 1,
    }
}
