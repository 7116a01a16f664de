use crate::theme::{Accent, Theme};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct Config {
    pub theme: Theme,
    pub output_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: Theme::default_palette(),
            output_dir: PathBuf::from("diagrams"),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct AccentFile {
    fill: Option<String>,
    edge: Option<String>,
    deep: Option<String>,
}

impl AccentFile {
    fn apply(self, accent: &mut Accent) {
        if let Some(v) = self.fill {
            accent.fill = v;
        }
        if let Some(v) = self.edge {
            accent.edge = v;
        }
        if let Some(v) = self.deep {
            accent.deep = v;
        }
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct ThemeFile {
    background: Option<String>,
    title_ink: Option<String>,
    body_ink: Option<String>,
    subtle_ink: Option<String>,
    panel_fill: Option<String>,
    panel_edge: Option<String>,
    blue: Option<AccentFile>,
    green: Option<AccentFile>,
    purple: Option<AccentFile>,
    orange: Option<AccentFile>,
    red: Option<AccentFile>,
    amber: Option<AccentFile>,
    bronze: Option<AccentFile>,
    slate: Option<AccentFile>,
    emerald: Option<String>,
    tint_blue: Option<String>,
    tint_green: Option<String>,
    tint_red: Option<String>,
    highlight_blue: Option<String>,
    highlight_green: Option<String>,
    highlight_red: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigFile {
    theme: Option<ThemeFile>,
    output_dir: Option<PathBuf>,
}

/// Loads the run configuration, overlaying an optional JSON file on the
/// defaults. Absent fields keep their default values; the merged theme is
/// still validated later by `Theme::palette`.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let mut config = Config::default();
    let Some(path) = path else {
        return Ok(config);
    };

    let contents = std::fs::read_to_string(path)?;
    let parsed: ConfigFile = serde_json::from_str(&contents)?;

    if let Some(theme) = parsed.theme {
        if let Some(v) = theme.background {
            config.theme.background = v;
        }
        if let Some(v) = theme.title_ink {
            config.theme.title_ink = v;
        }
        if let Some(v) = theme.body_ink {
            config.theme.body_ink = v;
        }
        if let Some(v) = theme.subtle_ink {
            config.theme.subtle_ink = v;
        }
        if let Some(v) = theme.panel_fill {
            config.theme.panel_fill = v;
        }
        if let Some(v) = theme.panel_edge {
            config.theme.panel_edge = v;
        }
        if let Some(v) = theme.blue {
            v.apply(&mut config.theme.blue);
        }
        if let Some(v) = theme.green {
            v.apply(&mut config.theme.green);
        }
        if let Some(v) = theme.purple {
            v.apply(&mut config.theme.purple);
        }
        if let Some(v) = theme.orange {
            v.apply(&mut config.theme.orange);
        }
        if let Some(v) = theme.red {
            v.apply(&mut config.theme.red);
        }
        if let Some(v) = theme.amber {
            v.apply(&mut config.theme.amber);
        }
        if let Some(v) = theme.bronze {
            v.apply(&mut config.theme.bronze);
        }
        if let Some(v) = theme.slate {
            v.apply(&mut config.theme.slate);
        }
        if let Some(v) = theme.emerald {
            config.theme.emerald = v;
        }
        if let Some(v) = theme.tint_blue {
            config.theme.tint_blue = v;
        }
        if let Some(v) = theme.tint_green {
            config.theme.tint_green = v;
        }
        if let Some(v) = theme.tint_red {
            config.theme.tint_red = v;
        }
        if let Some(v) = theme.highlight_blue {
            config.theme.highlight_blue = v;
        }
        if let Some(v) = theme.highlight_green {
            config.theme.highlight_green = v;
        }
        if let Some(v) = theme.highlight_red {
            config.theme.highlight_red = v;
        }
    }

    if let Some(dir) = parsed.output_dir {
        config.output_dir = dir;
    }

    Ok(config)
}
