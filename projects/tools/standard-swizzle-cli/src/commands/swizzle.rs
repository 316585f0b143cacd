use argh::FromArgs;
use standard_swizzle_api::SwizzleDirection;
use std::path::PathBuf;

#[derive(FromArgs, Debug)]
/// Convert the surface data of a DDS file to the standard swizzle layout
#[argh(subcommand, name = "swizzle")]
pub struct SwizzleCmd {
    /// input DDS file path
    #[argh(option)]
    pub input: PathBuf,

    /// output DDS file path
    #[argh(option)]
    pub output: PathBuf,
}

pub fn handle_swizzle_command(cmd: SwizzleCmd) -> Result<(), Box<dyn std::error::Error>> {
    super::convert_dds_file(&cmd.input, &cmd.output, SwizzleDirection::Swizzle)?;
    Ok(())
}
