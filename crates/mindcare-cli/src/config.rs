//! Saved CLI settings, kept as versioned JSON in the platform config dir.

use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use eyre::WrapErr;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

const CONFIG_FILE: &str = "config.json";

/// One step per version bump: `MIGRATIONS[n]` lifts a version `n` file to
/// `n + 1`. The current version is the table length.
const MIGRATIONS: &[fn(&mut Map<String, Value>)] = &[add_catalog_path];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MindcareConfig {
    /// Absent in files written before versioning, which count as 0.
    #[serde(default)]
    pub config_version: u32,
    pub data_dir: PathBuf,
    /// `None` uses the built-in DSM-5 catalog.
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,
    pub created_at: jiff::Timestamp,
}

impl MindcareConfig {
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            config_version: current_version(),
            data_dir,
            catalog_path: None,
            created_at: jiff::Timestamp::now(),
        }
    }
}

fn current_version() -> u32 {
    MIGRATIONS.len() as u32
}

/// `$MINDCARE_CONFIG_DIR`, or `com.mindcare.cli` under the platform config dir.
pub fn config_dir() -> eyre::Result<PathBuf> {
    if let Some(dir) = std::env::var_os("MINDCARE_CONFIG_DIR") {
        return Ok(PathBuf::from(dir));
    }
    dirs::config_dir()
        .map(|base| base.join("com.mindcare.cli"))
        .ok_or_else(|| eyre::eyre!("this platform has no config directory"))
}

/// Where records live when neither a flag nor the config names a place.
pub fn default_data_dir() -> eyre::Result<PathBuf> {
    dirs::data_dir()
        .map(|base| base.join("mindcare"))
        .ok_or_else(|| eyre::eyre!("this platform has no data directory"))
}

/// Read the config in `dir`, upgrading older layouts in memory.
/// Returns `None` when nothing has been saved yet.
pub fn load_config(dir: &Path) -> eyre::Result<Option<MindcareConfig>> {
    let path = dir.join(CONFIG_FILE);
    let text = match std::fs::read_to_string(&path) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e).wrap_err_with(|| format!("reading {}", path.display())),
    };

    let raw: Value =
        serde_json::from_str(&text).wrap_err_with(|| format!("parsing {}", path.display()))?;
    let Value::Object(mut fields) = raw else {
        eyre::bail!("{} does not hold a JSON object", path.display());
    };
    upgrade(&mut fields)?;

    let config = serde_json::from_value(Value::Object(fields))
        .wrap_err_with(|| format!("reading fields of {}", path.display()))?;
    Ok(Some(config))
}

fn upgrade(fields: &mut Map<String, Value>) -> eyre::Result<()> {
    let found = fields
        .get("config_version")
        .and_then(Value::as_u64)
        .unwrap_or(0);
    let current = u64::from(current_version());
    if found > current {
        eyre::bail!(
            "config version {found} was written by a newer mindcare (this build reads up to \
             {current}); upgrade mindcare"
        );
    }

    for (from, step) in MIGRATIONS.iter().enumerate().skip(found as usize) {
        step(fields);
        fields.insert("config_version".into(), Value::from(from + 1));
        tracing::info!(from, to = from + 1, "config upgraded");
    }
    Ok(())
}

// v0 → v1
fn add_catalog_path(fields: &mut Map<String, Value>) {
    fields.entry("catalog_path").or_insert(Value::Null);
}

/// Replace the config in `dir`. The file is stamped with the current version
/// and swapped in whole; on Unix it is readable by the owner only.
pub fn save_config(dir: &Path, config: &MindcareConfig) -> eyre::Result<()> {
    std::fs::create_dir_all(dir).wrap_err_with(|| format!("creating {}", dir.display()))?;

    let stamped = MindcareConfig {
        config_version: current_version(),
        ..config.clone()
    };
    let body = serde_json::to_vec_pretty(&stamped)?;

    let path = dir.join(CONFIG_FILE);
    let mut staged = tempfile::NamedTempFile::new_in(dir)?;
    staged.write_all(&body)?;
    staged
        .persist(&path)
        .wrap_err_with(|| format!("replacing {}", path.display()))?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}
