use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "capsheet",
    version,
    about = "Caption a folder of images and compose a labeled contact sheet"
)]
pub struct CliArgs {
    /// Input directory containing source images (.png, .jpg, .jpeg)
    #[arg(short, long, default_value = "./input")]
    pub input_dir: PathBuf,

    /// Output directory for normalized images, captions, and the contact sheet
    #[arg(short, long, default_value = "./output_folder")]
    pub output_dir: PathBuf,

    /// Contact-sheet output path (default: <output-dir>/image_grid.jpg)
    #[arg(long)]
    pub grid: Option<PathBuf>,

    /// Skip square normalization; sources pass through at their original size
    #[arg(long, default_value_t = false)]
    pub no_rescale: bool,

    /// Output side length for inputs that are already square
    #[arg(long, default_value_t = 768)]
    pub square_size: u32,

    /// Output side length for cropped or undersized inputs
    #[arg(long, default_value_t = 512)]
    pub size: u32,

    /// Height of the caption band drawn under each grid cell
    #[arg(long, default_value_t = 100)]
    pub caption_height: u32,

    /// Caption font size in pixels
    #[arg(long, default_value_t = 16.0)]
    pub font_size: f32,

    /// Preferred caption font (TTF/OTF); system fonts and a built-in
    /// bitmap font are used as fallbacks
    #[arg(long)]
    pub font: Option<PathBuf>,

    /// JPEG quality (1-100) for all persisted images
    #[arg(short, long, default_value_t = 90)]
    pub quality: u8,

    /// Base URL of the OpenAI-compatible captioning service
    #[arg(long, default_value = "https://api.openai.com/v1")]
    pub endpoint: String,

    /// Captioning model name
    #[arg(long, default_value = "gpt-4o-mini")]
    pub model: String,

    /// API key for the captioning service
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub api_key: String,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
