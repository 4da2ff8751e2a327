use std::path::Path;

use anyhow::anyhow;
use config::{Config, File};
use serde::Deserialize;

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Lines longer than this many UTF-16 columns get a warning
    pub max_line_length: usize,
    pub diagnostics: bool,
    pub hover: bool,
}

impl Settings {
    /// Layered settings: defaults, then `~/.config/symscan/settings`, then `<root>/.symscan`.
    pub fn new(root_dir: &Path) -> anyhow::Result<Settings> {
        let expanded = shellexpand::tilde("~/.config/symscan/settings");
        Settings::from_sources(&expanded, root_dir)
    }

    /// Layered settings with an explicit user settings file, which need not exist.
    pub fn from_sources(user_settings: &str, root_dir: &Path) -> anyhow::Result<Settings> {
        let settings = Config::builder()
            .add_source(File::with_name(user_settings).required(false))
            .add_source(
                File::with_name(&format!(
                    "{}/.symscan",
                    root_dir
                        .to_str()
                        .ok_or(anyhow!("Can't convert root_dir to str"))?
                ))
                .required(false),
            )
            .set_default("max_line_length", 80)?
            .set_default("diagnostics", true)?
            .set_default("hover", true)?
            .build()
            .map_err(|err| anyhow!("Build err: {err}"))?;

        let settings = settings.try_deserialize::<Settings>()?;

        anyhow::Ok(settings)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            max_line_length: 80,
            diagnostics: true,
            hover: true,
        }
    }
}
