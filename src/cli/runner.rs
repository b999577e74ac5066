use tracing::info;

use capsheet::core::processing::compose::{LINE_ADVANCE, TEXT_MARGIN};
use capsheet::{ComposeParams, NormalizeParams, OpenAiCaptioner, api};

use super::args::CliArgs;
use super::errors::AppError;

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }

    if args.size == 0 {
        return Err(AppError::ZeroSize { size: args.size }.into());
    }
    if args.square_size == 0 {
        return Err(AppError::ZeroSize {
            size: args.square_size,
        }
        .into());
    }
    if args.quality == 0 || args.quality > 100 {
        return Err(AppError::InvalidQuality {
            quality: args.quality,
        }
        .into());
    }
    let minimum_band = TEXT_MARGIN + LINE_ADVANCE;
    if args.caption_height < minimum_band {
        return Err(AppError::CaptionBandTooSmall {
            height: args.caption_height,
            minimum: minimum_band,
        }
        .into());
    }

    let captioner = OpenAiCaptioner::new(&args.endpoint, &args.model, &args.api_key)?;

    let normalize_params = NormalizeParams {
        rescale: !args.no_rescale,
        square_size: args.square_size,
        general_size: args.size,
        quality: args.quality,
    };
    let compose_params = ComposeParams {
        caption_height: args.caption_height,
        font_size: args.font_size,
        font_path: args.font.clone(),
        quality: args.quality,
    };

    let grid_path = args
        .grid
        .clone()
        .unwrap_or_else(|| args.output_dir.join("image_grid.jpg"));

    info!("Starting gallery run from directory: {:?}", args.input_dir);
    info!("Output directory: {:?}", args.output_dir);

    let report = api::run_gallery(
        &args.input_dir,
        &args.output_dir,
        &grid_path,
        &captioner,
        &normalize_params,
        &compose_params,
    )?;

    info!("Gallery run complete!");
    info!("Processed: {}", report.processed);
    info!("Skipped: {}", report.skipped);
    info!("Contact sheet: {:?}", grid_path);

    Ok(())
}
