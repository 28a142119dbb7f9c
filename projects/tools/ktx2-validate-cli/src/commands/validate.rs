use crate::error::CliError;
use crate::report::{OutputFormat, ReportLog};
use argh::FromArgs;
use std::path::PathBuf;

#[derive(FromArgs, Debug)]
/// Validate a KTX2 file and report every specification violation
#[argh(subcommand, name = "validate")]
pub struct ValidateCmd {
    /// output format (text, json, mini-json) [default: text]
    #[argh(option, default = "OutputFormat::Text")]
    pub format: OutputFormat,

    /// treat warnings as errors
    #[argh(switch, short = 'e')]
    pub warnings_as_errors: bool,

    /// check compatibility with the KHR_texture_basisu glTF extension
    #[argh(switch, short = 'g')]
    pub gltf_basisu: bool,

    /// the KTX2 file to validate
    #[argh(positional)]
    pub input: PathBuf,
}

pub fn handle_validate_command(cmd: ValidateCmd) -> Result<i32, CliError> {
    // The flag is accepted for compatibility; the extended glTF checks need
    // the DFD passes and are not part of the structural validation.
    let _ = cmd.gltf_basisu;

    let mut log = ReportLog::new();
    let exit_code = ktx2_validate::validate_file(&cmd.input, cmd.warnings_as_errors, |report| {
        log.push(report);
    });

    let rendered = log.render(cmd.format, exit_code == 0)?;
    if !rendered.is_empty() {
        println!("{rendered}");
    }

    Ok(exit_code)
}
