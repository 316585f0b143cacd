use argh::FromArgs;
use standard_swizzle_api::SwizzleDirection;
use std::path::PathBuf;

#[derive(FromArgs, Debug)]
/// Convert the surface data of a swizzled DDS file back to row-major order
#[argh(subcommand, name = "deswizzle")]
pub struct DeswizzleCmd {
    /// input DDS file path
    #[argh(option)]
    pub input: PathBuf,

    /// output DDS file path
    #[argh(option)]
    pub output: PathBuf,
}

pub fn handle_deswizzle_command(cmd: DeswizzleCmd) -> Result<(), Box<dyn std::error::Error>> {
    super::convert_dds_file(&cmd.input, &cmd.output, SwizzleDirection::Deswizzle)?;
    Ok(())
}
