use std::time::Instant;

use argh::FromArgs;
use harris_cli::{
    load_image, render_corners, to_grayscale_buffer, to_pixel_buffer, to_rgb_image, CornerPipeline, Marker,
};
use harris_detect::DetectorConfig;
use log::info;

/// Detects Harris corners in an image and writes a marked copy
#[derive(Debug, FromArgs)]
struct Args {
    /// input image path
    #[argh(option, short = 'i')]
    input: String,

    /// output image path
    #[argh(option, short = 'o', default = "String::from(\"corners.png\")")]
    output: String,

    /// gaussian window standard deviation
    #[argh(option)]
    sigma: Option<f32>,

    /// minimum cornerness for a detection
    #[argh(option)]
    threshold: Option<f32>,

    /// non-max suppression radius
    #[argh(option)]
    nms: Option<usize>,

    /// trace penalty in det - alpha * trace^2
    #[argh(option)]
    alpha: Option<f32>,

    /// worker threads (defaults to the CPU count)
    #[argh(option)]
    threads: Option<usize>,

    /// detector configuration file (.json or .toml)
    #[argh(option)]
    config: Option<String>,

    /// marker style: cross or circle
    #[argh(option, default = "Marker::Cross")]
    marker: Marker,

    /// detect on the luma channel only
    #[argh(switch)]
    grayscale: bool,

    /// also write the normalized cornerness map to this path
    #[argh(option)]
    response: Option<String>,
}

fn base_config(args: &Args) -> Result<DetectorConfig, Box<dyn std::error::Error>> {
    match &args.config {
        #[cfg(feature = "serde")]
        Some(path) => Ok(harris_cli::load_config(path)?),
        #[cfg(not(feature = "serde"))]
        Some(_) => Err("configuration files need the serde feature".into()),
        None => Ok(DetectorConfig::default()),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    let mut builder = base_config(&args)?.to_builder();
    if let Some(sigma) = args.sigma {
        builder = builder.sigma(sigma);
    }
    if let Some(threshold) = args.threshold {
        builder = builder.threshold(threshold);
    }
    if let Some(nms) = args.nms {
        builder = builder.nms_radius(nms);
    }
    if let Some(alpha) = args.alpha {
        builder = builder.alpha(alpha);
    }
    if let Some(threads) = args.threads {
        builder = builder.threads(threads);
    }
    let config = builder.to_config();
    info!("{}", config.summary());
    let pipeline = CornerPipeline::from_config(config)?;

    let img = load_image(&args.input)?;
    let canvas = to_pixel_buffer(&img);
    let input = if args.grayscale {
        to_grayscale_buffer(&img)?
    } else {
        canvas.clone()
    };

    // Time the full pipeline
    let t0 = Instant::now();
    let corners = pipeline.detect(&input);
    let elapsed = t0.elapsed();
    info!("Time taken: {:.2?}", elapsed);
    info!(
        "Detected {} corners in {}x{}x{} image",
        corners.len(),
        input.width(),
        input.height(),
        input.channels()
    );

    if let Some(path) = &args.response {
        to_rgb_image(&pipeline.normalized_response(&input)).save(path)?;
        info!("Saved cornerness map as {}", path);
    }

    render_corners(&canvas, &corners, args.marker).save(&args.output)?;
    info!("Saved result image as {}", args.output);
    Ok(())
}
