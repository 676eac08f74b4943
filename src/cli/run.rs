use super::{
    configuration::{Configuration, Mode},
    error::Error,
    hex,
    logger::Logger,
};
use serde_json::json;

enum Output {
    Text(String),
    Bytes(Vec<u8>),
}

impl Output {
    fn len(&self) -> usize {
        match self {
            Self::Text(text) => text.len(),
            Self::Bytes(bytes) => bytes.len(),
        }
    }

    fn into_text(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::Bytes(bytes) => hex::encode(bytes),
        }
    }
}

fn trim_end(input: &[u8]) -> &[u8] {
    let len = input.iter().rposition(|byte| !byte.is_ascii_whitespace()).map_or(0, |index| index + 1);
    &input[..len]
}

// Raw encoder input is binary and kept as is; textual input loses trailing whitespace.
fn transform(configuration: &Configuration, input: &[u8]) -> Result<Result<Output, z85::Error>, Error> {
    Ok(match configuration.mode() {
        Mode::Encode if configuration.hex() => z85::encode(hex::decode(trim_end(input))?).map(Output::Text),
        Mode::Encode => z85::encode(input).map(Output::Text),
        Mode::Decode if configuration.hex() => z85::decode(trim_end(input)).map(|bytes| Output::Text(hex::encode(bytes))),
        Mode::Decode => z85::decode(trim_end(input)).map(Output::Bytes),
    })
}

/// Runs the configured transform over `input` and renders what goes to stdout.
///
/// Without JSON, codec failures are returned as errors. With JSON, decoded bytes are always hex
/// and codec failures are rendered as an `error` object.
pub fn run(configuration: &Configuration, input: &[u8], logger: &Logger) -> Result<Vec<u8>, Error> {
    let mode = configuration.mode();
    let output = transform(configuration, input)?;
    match &output {
        Ok(output) => logger.log(format!("{:?} produced {} bytes from {} input bytes", mode, output.len(), input.len())),
        Err(error) => logger.log(format!("{:?} failed: {}", mode, error)),
    }

    if configuration.json() {
        let value = match output {
            Ok(output) => json!({ "mode": mode, "input_length": input.len(), "output": output.into_text() }),
            Err(error) => json!({ "mode": mode, "input_length": input.len(), "error": error }),
        };
        let mut rendered = serde_json::to_vec(&value)?;
        rendered.push(b'\n');
        return Ok(rendered);
    }

    match output? {
        Output::Text(text) => Ok(format!("{}\n", text).into_bytes()),
        Output::Bytes(bytes) => Ok(bytes),
    }
}
