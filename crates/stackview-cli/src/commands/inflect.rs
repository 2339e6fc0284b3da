//! `stackview inflect`: apply a named string-form transformation.

use serde::Serialize;
use stackview_core::domain::Inflection;

use crate::{
    cli::{InflectArgs, OutputFormat},
    error::{CliResult, IntoCli},
    output::OutputManager,
};

#[derive(Serialize)]
struct InflectOutput<'a> {
    inflection: &'static str,
    input: &'a str,
    output: String,
}

pub fn execute(args: InflectArgs, output: OutputManager) -> CliResult<()> {
    let inflection = Inflection::from(args.inflection);
    let input = args.text.join(" ");
    let result = inflection.apply(&input);

    if output.format() == OutputFormat::Json {
        let json = serde_json::to_string(&InflectOutput {
            inflection: inflection.as_str(),
            input: &input,
            output: result,
        })
        .map_err(std::io::Error::from)
        .with_cli_context(|| "Failed to encode result")?;
        output.data(&json)?;
    } else {
        output.data(&result)?;
    }
    Ok(())
}
