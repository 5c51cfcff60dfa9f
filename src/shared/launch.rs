//! Start-Argumente: optionale Fenstergröße `width height`.

use anyhow::{bail, Context};

/// Standard-Fensterbreite in Pixeln.
pub const DEFAULT_WINDOW_WIDTH: u32 = 1000;
/// Standard-Fensterhöhe in Pixeln.
pub const DEFAULT_WINDOW_HEIGHT: u32 = 1000;

/// Geparste Start-Argumente.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaunchArgs {
    pub width: u32,
    pub height: u32,
}

impl Default for LaunchArgs {
    fn default() -> Self {
        Self {
            width: DEFAULT_WINDOW_WIDTH,
            height: DEFAULT_WINDOW_HEIGHT,
        }
    }
}

impl LaunchArgs {
    /// Parst `[width height]` (ohne Programmnamen).
    ///
    /// Keine Argumente → Standardgröße. Genau zwei positive Ganzzahlen erlaubt.
    pub fn parse<I, S>(args: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args: Vec<S> = args.into_iter().collect();
        match args.as_slice() {
            [] => Ok(Self::default()),
            [width, height] => Ok(Self {
                width: parse_dimension("width", width.as_ref())?,
                height: parse_dimension("height", height.as_ref())?,
            }),
            _ => bail!(
                "Erwartet keine oder genau zwei Argumente (width height), erhalten: {}",
                args.len()
            ),
        }
    }

    /// Fenstergröße als egui-kompatibles Array.
    pub fn inner_size(&self) -> [f32; 2] {
        [self.width as f32, self.height as f32]
    }
}

fn parse_dimension(name: &str, value: &str) -> anyhow::Result<u32> {
    let parsed: u32 = value
        .trim()
        .parse()
        .with_context(|| format!("Ungültige {name}: '{value}'"))?;
    if parsed == 0 {
        bail!("{name} muss größer als 0 sein");
    }
    Ok(parsed)
}
