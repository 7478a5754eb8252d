use clap::error::ErrorKind;
use roadnet_core::error::RoadnetError;
use roadnet_core::format::OutputFormat;

/// Parse output format from string
pub fn parse_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Whether raw arguments ask for JSON output.
///
/// Used when clap rejects the command line before `Cli::format` exists.
pub fn argv_requests_json<I>(args: I) -> bool
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--format=json" => return true,
            "--format" if args.next().as_deref() == Some("json") => return true,
            _ => {}
        }
    }
    false
}

/// Map a clap parse failure onto the roadnet error it stands for.
///
/// Help and version requests are not failures and map to `None`.
pub fn clap_failure(err: &clap::Error) -> Option<RoadnetError> {
    match err.kind() {
        ErrorKind::DisplayHelp
        | ErrorKind::DisplayVersion
        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => None,
        ErrorKind::ValueValidation
        | ErrorKind::InvalidValue
        | ErrorKind::InvalidSubcommand
        | ErrorKind::UnknownArgument
        | ErrorKind::MissingRequiredArgument
        | ErrorKind::ArgumentConflict
        | ErrorKind::TooManyValues
        | ErrorKind::WrongNumberOfValues => Some(RoadnetError::UsageError(err.to_string())),
        _ => Some(RoadnetError::Other(err.to_string())),
    }
}
