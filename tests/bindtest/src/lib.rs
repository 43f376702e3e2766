use anyhow::{bail, Context, Result};
use bindrs::util::pretty_parameters_string;
use bindrs::{BindConfig, ParameterBinder};
use serde::Deserialize;
use serde_json::{Map, Value};

/// One case file: the parameters of a statement and the expected bindings,
/// rendered one line per parameter, or a fragment of the expected error.
#[derive(Deserialize)]
struct BindCase {
    #[serde(default)]
    config: Option<BindConfig>,
    params: Map<String, Value>,
    #[serde(default)]
    expect: Vec<String>,
    #[serde(default)]
    error: Option<String>,
}

pub fn test_run(case_file: &str) -> Result<()> {
    let content = std::fs::read_to_string(case_file)
        .with_context(|| format!("failed to read case file {}", case_file))?;
    let case: BindCase = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse case file {}", case_file))?;

    let binder = ParameterBinder::new(case.config.unwrap_or_default());
    match (binder.bind_parameters(&case.params), case.error) {
        (Ok(resolved), None) => {
            let actual = pretty_parameters_string(&resolved);
            let expected = case.expect.join("\n");
            if actual != expected {
                bail!("expected:\n{}\nactual:\n{}", expected, actual);
            }
            Ok(())
        }
        (Ok(resolved), Some(expected)) => bail!(
            "expected error containing {:?}, but bound:\n{}",
            expected,
            pretty_parameters_string(&resolved)
        ),
        (Err(err), Some(expected)) => {
            if !err.to_string().contains(&expected) {
                bail!("expected error containing {:?}, got: {}", expected, err);
            }
            Ok(())
        }
        (Err(err), None) => Err(err).context("unexpected bind error"),
    }
}
