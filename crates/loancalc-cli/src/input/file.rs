use log::debug;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

/// Syntax of a loan input file, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InputFormat {
    Json,
    Yaml,
}

impl InputFormat {
    fn of(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => InputFormat::Yaml,
            _ => InputFormat::Json,
        }
    }

    fn name(self) -> &'static str {
        match self {
            InputFormat::Json => "JSON",
            InputFormat::Yaml => "YAML",
        }
    }
}

/// Read a loan input file into a typed struct. `.yaml`/`.yml` files parse
/// as YAML, everything else as JSON. Relative paths resolve against the
/// working directory.
pub fn read_input<T: DeserializeOwned>(path: &str) -> Result<T, Box<dyn std::error::Error>> {
    let path = Path::new(path);
    if !path.is_file() {
        return Err(format!("Loan input file not found: {}", path.display()).into());
    }

    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read '{}': {}", path.display(), e))?;

    let format = InputFormat::of(path);
    debug!("reading {} loan input from {}", format.name(), path.display());

    let parsed = match format {
        InputFormat::Yaml => serde_yaml::from_str(&contents).map_err(|e| e.to_string()),
        InputFormat::Json => serde_json::from_str(&contents).map_err(|e| e.to_string()),
    };
    parsed.map_err(|e| {
        format!(
            "Failed to parse '{}' as {}: {}",
            path.display(),
            format.name(),
            e
        )
        .into()
    })
}
