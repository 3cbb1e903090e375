use crate::error::{Error, Result};
use crate::theme::Theme;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CanvasConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 1024,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Integer font scale; one glyph cell is `8 * scale` pixels square.
    pub scale: i32,
    /// Space between a box edge and its label.
    pub padding: i32,
    pub arrow_length: i32,
    /// Horizontal space between sibling boxes.
    pub gap: i32,
    /// Extra space between an arrow tip row and the child row below it.
    pub vertical_gap: i32,
    /// Y coordinate of the root box.
    pub top_margin: i32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            scale: 1,
            padding: 3,
            arrow_length: 20,
            gap: 50,
            vertical_gap: 20,
            top_margin: 10,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    pub canvas: CanvasConfig,
    pub layout: LayoutConfig,
    pub theme: Theme,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigFile {
    theme: Option<String>,
    colors: Option<ColorsFile>,
    canvas: Option<CanvasFile>,
    layout: Option<LayoutFile>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ColorsFile {
    background: Option<String>,
    branch_fill: Option<String>,
    leaf_fill: Option<String>,
    text_color: Option<String>,
    line_color: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CanvasFile {
    /// Sets both dimensions; the canvas is square unless `width`/`height` override it.
    size: Option<u32>,
    width: Option<u32>,
    height: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LayoutFile {
    scale: Option<i32>,
    padding: Option<i32>,
    arrow_length: Option<i32>,
    gap: Option<i32>,
    vertical_gap: Option<i32>,
    top_margin: Option<i32>,
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let Some(path) = path else {
        return Ok(Config::default());
    };
    let contents = std::fs::read_to_string(path)?;
    parse_config(&contents)
}

/// Parses a JSON config; JSON5 (comments, trailing commas) is accepted as a fallback.
pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let parsed: ConfigFile = match serde_json::from_str(contents) {
        Ok(parsed) => parsed,
        Err(json_err) => json5::from_str(contents)
            .map_err(|_| anyhow::anyhow!("invalid config file: {json_err}"))?,
    };

    let mut config = Config::default();

    if let Some(theme_name) = parsed.theme.as_deref() {
        config.theme = Theme::from_name(theme_name)
            .ok_or_else(|| anyhow::anyhow!("unknown theme `{theme_name}`"))?;
    }

    if let Some(colors) = parsed.colors {
        if let Some(v) = colors.background {
            config.theme.background = v;
        }
        if let Some(v) = colors.branch_fill {
            config.theme.branch_fill = v;
        }
        if let Some(v) = colors.leaf_fill {
            config.theme.leaf_fill = v;
        }
        if let Some(v) = colors.text_color {
            config.theme.text_color = v;
        }
        if let Some(v) = colors.line_color {
            config.theme.line_color = v;
        }
    }
    // Fail at load time rather than halfway through a render.
    config.theme.palette()?;

    if let Some(canvas) = parsed.canvas {
        if let Some(size) = canvas.size {
            config.canvas.width = size;
            config.canvas.height = size;
        }
        if let Some(v) = canvas.width {
            config.canvas.width = v;
        }
        if let Some(v) = canvas.height {
            config.canvas.height = v;
        }
    }

    if let Some(layout) = parsed.layout {
        if let Some(v) = layout.scale {
            config.layout.scale = v;
        }
        if let Some(v) = layout.padding {
            config.layout.padding = v;
        }
        if let Some(v) = layout.arrow_length {
            config.layout.arrow_length = v;
        }
        if let Some(v) = layout.gap {
            config.layout.gap = v;
        }
        if let Some(v) = layout.vertical_gap {
            config.layout.vertical_gap = v;
        }
        if let Some(v) = layout.top_margin {
            config.layout.top_margin = v;
        }
    }

    config.validate()?;
    Ok(config)
}

/// Largest accepted canvas side.
pub const MAX_CANVAS_SIDE: u32 = 1 << 15;
/// Largest accepted font scale; one glyph cell is then 512 pixels.
pub const MAX_SCALE: i32 = 64;

impl Config {
    /// Checks that every dimension is in range so layout arithmetic cannot overflow.
    pub fn validate(&self) -> Result<()> {
        let CanvasConfig { width, height } = self.canvas;
        if width == 0 || height == 0 || width > MAX_CANVAS_SIDE || height > MAX_CANVAS_SIDE {
            return Err(Error::InvalidCanvas { width, height });
        }
        let layout = &self.layout;
        if !(1..=MAX_SCALE).contains(&layout.scale) {
            return Err(Error::InvalidLayout(format!(
                "font scale must be between 1 and {MAX_SCALE} (got {})",
                layout.scale
            )));
        }
        // Both sides fit in i32 after the MAX_CANVAS_SIDE check.
        let (width, height) = (width as i32, height as i32);
        check_range("padding", layout.padding, width)?;
        check_range("gap", layout.gap, width)?;
        check_range("arrow length", layout.arrow_length, height)?;
        check_range("vertical gap", layout.vertical_gap, height)?;
        check_range("top margin", layout.top_margin, height)?;
        Ok(())
    }
}

fn check_range(name: &str, value: i32, max: i32) -> Result<()> {
    if (0..=max).contains(&value) {
        Ok(())
    } else {
        Err(Error::InvalidLayout(format!(
            "{name} must be between 0 and {max} (got {value})"
        )))
    }
}
