//! Command-line arguments.

use clap::Parser;

const KEYS: &str = "\
Keys:
  Enter           Continue / confirm
  Esc             Decline
  Space           Play or pause the transmission
  Left/Right      Seek 5 seconds
  Up/Down         Volume
  r               Restart the experience (final screen)
  Ctrl+C          Quit";

#[derive(Debug, Parser)]
#[command(name = "ubers", version)]
#[command(about = "A terminal rendition of the Ubers onboarding ritual")]
#[command(after_help = KEYS)]
pub struct Args {
    /// Forget the saved stage and start from the invite
    #[arg(long)]
    pub reset: bool,
}
