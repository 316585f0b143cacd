mod commands;
mod dds;
mod error;
#[cfg(test)]
mod test_prelude;
mod util;

use argh::FromArgs;
use core::error::Error;

#[derive(FromArgs, Debug)]
/// Standard swizzle conversion tool for DDS files
struct TopLevel {
    #[argh(subcommand)]
    command: Commands,
}

#[derive(FromArgs, Debug)]
#[argh(subcommand)]
enum Commands {
    Swizzle(commands::swizzle::SwizzleCmd),
    Deswizzle(commands::deswizzle::DeswizzleCmd),
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let cli: TopLevel = argh::from_env();

    match cli.command {
        Commands::Swizzle(cmd) => {
            commands::swizzle::handle_swizzle_command(cmd)?;
        }
        Commands::Deswizzle(cmd) => {
            commands::deswizzle::handle_deswizzle_command(cmd)?;
        }
    }

    Ok(())
}
