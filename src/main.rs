use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;

use bump_version::domain::BumpKind;
use bump_version::{bump, ui};

#[derive(clap::Parser)]
#[command(
    name = "bump-version",
    version,
    about = "Compute the next semantic version for a given bump kind"
)]
struct Args {
    #[arg(id = "version_arg", value_name = "VERSION", help = "Current version, e.g. 1.2.3 or 1.0.0-rc1")]
    version: String,

    #[arg(help = "Bump kind: major, minor or patch")]
    kind: String,
}

fn main() -> Result<()> {
    // Wrong argument count gets the short usage line and exit code 1;
    // --help and --version keep clap's standard output.
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => {
                ui::display_usage("bump-version");
                std::process::exit(1);
            }
        },
    };

    let kind = match args.kind.parse::<BumpKind>() {
        Ok(kind) => kind,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    match bump::bump(&args.version, kind) {
        Ok(next) => println!("{}", next),
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    }

    Ok(())
}
