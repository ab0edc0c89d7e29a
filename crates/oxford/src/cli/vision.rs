//! The `vision` command group.

use clap::{ArgAction, Args, Subcommand};
use oxford_core::config::Overrides;
use oxford_core::{catalog, Call, ImageSource, Oxford, Service};
use std::path::PathBuf;

use super::{keys, print_json, Session};

/// Arguments for the vision command.
#[derive(Args, Debug)]
pub struct VisionArgs {
    /// Vision API subscription key (overrides the config file)
    #[arg(
        long,
        global = true,
        env = "OXFORD_VISION_APIKEY",
        hide_env_values = true,
        value_name = "KEY"
    )]
    pub apikey: Option<String>,

    #[command(subcommand)]
    pub command: VisionCommand,
}

#[derive(Subcommand, Debug)]
pub enum VisionCommand {
    /// Store the Vision API key in the config file
    SaveApiKey {
        /// Key to store (prompted for when omitted)
        #[arg(value_name = "APIKEY")]
        key: Option<String>,
    },

    #[command(flatten)]
    Api(VisionApiCommand),
}

/// Vision commands that call the service.
#[derive(Subcommand, Debug)]
pub enum VisionApiCommand {
    /// Describe the visual content of an image
    Analyze(AnalyzeArgs),

    /// Generate a thumbnail and save it to a file
    Thumbnail(ThumbnailArgs),

    /// Recognize printed text in an image
    Ocr(OcrArgs),
}

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Visual features to return, comma separated (e.g. Categories,Faces,Color)
    #[arg(
        long = "visual-features",
        alias = "features",
        env = "OXFORD_VISION_ANALYZE_FEATURES",
        value_delimiter = ',',
        value_name = "FEATURES"
    )]
    pub visual_features: Vec<String>,

    /// Image URL or local file path
    pub image: String,
}

#[derive(Args, Debug)]
pub struct ThumbnailArgs {
    /// Thumbnail width in pixels
    #[arg(
        long,
        env = "OXFORD_VISION_THUMBNAIL_WIDTH",
        default_value_t = 50,
        value_parser = clap::value_parser!(u32).range(1..=1024)
    )]
    pub width: u32,

    /// Thumbnail height in pixels
    #[arg(
        long,
        env = "OXFORD_VISION_THUMBNAIL_HEIGHT",
        default_value_t = 50,
        value_parser = clap::value_parser!(u32).range(1..=1024)
    )]
    pub height: u32,

    /// Scale and crop without centering on the region of interest
    #[arg(
        long = "no-smartcrop",
        action = ArgAction::SetFalse,
        env = "OXFORD_VISION_THUMBNAIL_SMARTCROP"
    )]
    pub smart_cropping: bool,

    /// File the thumbnail is written to
    #[arg(
        long,
        env = "OXFORD_VISION_THUMBNAIL_THUMBNAIL",
        default_value = "thumbnail.jpg",
        value_name = "PATH"
    )]
    pub thumbnail: PathBuf,

    /// Image URL or local file path
    pub image: String,
}

#[derive(Args, Debug)]
pub struct OcrArgs {
    /// BCP-47 language code of the text ("unk" to auto-detect)
    #[arg(long, env = "OXFORD_VISION_OCR_LANGUAGE", default_value = "unk")]
    pub language: String,

    /// Do not detect and correct text orientation
    #[arg(
        long = "no-detect-orientation",
        action = ArgAction::SetFalse,
        env = "OXFORD_VISION_OCR_DETECT_ORIENTATION"
    )]
    pub detect_orientation: bool,

    /// Image URL or local file path
    pub image: String,
}

/// Execute the vision command.
pub async fn execute(args: VisionArgs, session: Session) -> anyhow::Result<()> {
    match args.command {
        VisionCommand::SaveApiKey { key } => {
            keys::save(session.config_path(), Service::Vision, key)
        }
        VisionCommand::Api(command) => {
            let oxford = session.connect(Overrides {
                vision_key: args.apikey,
                ..Default::default()
            })?;
            match command {
                VisionApiCommand::Analyze(args) => analyze(&oxford, args).await,
                VisionApiCommand::Thumbnail(args) => thumbnail(&oxford, args).await,
                VisionApiCommand::Ocr(args) => ocr(&oxford, args).await,
            }
        }
    }
}

async fn analyze(oxford: &Oxford, args: AnalyzeArgs) -> anyhow::Result<()> {
    let image = ImageSource::resolve(&args.image)?;
    let features = (!args.visual_features.is_empty()).then(|| args.visual_features.join(","));

    let value = oxford
        .call(
            &catalog::ANALYZE,
            Call::new().query_opt("visualFeatures", features).image(image),
        )
        .await?;
    print_json(&value)
}

async fn thumbnail(oxford: &Oxford, args: ThumbnailArgs) -> anyhow::Result<()> {
    let image = ImageSource::resolve(&args.image)?;
    let call = Call::new()
        .query("width", args.width)
        .query("height", args.height)
        .query("smartCropping", args.smart_cropping)
        .image(image);

    let written = oxford
        .call_to_file(&catalog::THUMBNAIL, call, &args.thumbnail)
        .await?;
    println!(
        "Saved {}x{} thumbnail to {} ({written} bytes)",
        args.width,
        args.height,
        args.thumbnail.display()
    );
    Ok(())
}

async fn ocr(oxford: &Oxford, args: OcrArgs) -> anyhow::Result<()> {
    let image = ImageSource::resolve(&args.image)?;
    let call = Call::new()
        .query("language", args.language)
        .query("detectOrientation", args.detect_orientation)
        .image(image);

    let value = oxford.call(&catalog::OCR, call).await?;
    print_json(&value)
}
