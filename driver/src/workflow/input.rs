use anyhow::Context;
use chancore::ChannelRecord;
use std::fs;
use std::path::Path;

/// Reads a channel record, as YAML for `.yaml`/`.yml` files and JSON otherwise.
pub fn load_record<P: AsRef<Path>>(path: P) -> anyhow::Result<ChannelRecord> {
    let path_ref = path.as_ref();
    let contents = fs::read_to_string(path_ref)
        .with_context(|| format!("reading channel record {}", path_ref.display()))?;
    let is_yaml = matches!(
        path_ref.extension().and_then(|ext| ext.to_str()),
        Some("yaml") | Some("yml")
    );
    let record = if is_yaml {
        serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing channel record {}", path_ref.display()))?
    } else {
        serde_json::from_str(&contents)
            .with_context(|| format!("parsing channel record {}", path_ref.display()))?
    };
    Ok(record)
}
