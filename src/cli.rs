// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::Parser;

use crate::config::TrackballConfig;
use crate::viewport::Viewport;

#[derive(Parser, Debug, Clone)]
#[command(name = "arcball")]
#[command(about = "Arcball rotation controller", long_about = None)]
pub struct Cli {
    /// Initial window width in pixels
    #[arg(long, default_value_t = 500)]
    pub width: u32,

    /// Initial window height in pixels
    #[arg(long, default_value_t = 500)]
    pub height: u32,

    /// Virtual sphere radius in normalized device coordinates
    #[arg(long)]
    pub radius: Option<f32>,

    /// Rotation angle multiplier
    #[arg(long)]
    pub sensitivity: Option<f32>,

    /// Stop rotating when the mouse button is released
    #[arg(long = "no-spin", default_value = "false")]
    pub no_spin: bool,

    /// Replay a JSON drag script headlessly and print the final rotation
    #[arg(long, value_name = "FILE")]
    pub replay: Option<PathBuf>,
}

impl Cli {
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.width, self.height)
    }

    /// Overlay the options given on the command line onto `base`
    pub fn apply_to(&self, base: TrackballConfig) -> TrackballConfig {
        TrackballConfig {
            radius: self.radius.unwrap_or(base.radius),
            sensitivity: self.sensitivity.unwrap_or(base.sensitivity),
            spin: base.spin && !self.no_spin,
        }
    }
}
