use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use image_quality_gate::app::GateApp;
use image_quality_gate::core::interfaces::adapters::ProgressCallback;
use image_quality_gate::core::models::{CandidateImage, QualityVerdict, UploadProgress};
use image_quality_gate::global_constants::LOG_TAG_MAIN;
use image_quality_gate::settings::GateSettings;

const FALLBACK_MIME_TYPE: &str = "application/octet-stream";

#[derive(Parser, Debug)]
#[command(
    name = "image-quality-gate",
    about = "Checks an image for sharpness and readable text before upload"
)]
struct Cli {
    /// JPEG or PNG file to assess.
    image_path: PathBuf,

    /// Upload the image when it is accepted.
    #[arg(long)]
    upload: bool,

    /// Print the verdict as JSON.
    #[arg(long)]
    json: bool,
}

fn mime_type_for(image_path: &Path) -> &'static str {
    image::ImageFormat::from_path(image_path)
        .map(|format| format.to_mime_type())
        .unwrap_or(FALLBACK_MIME_TYPE)
}

fn print_verdict(verdict: &QualityVerdict, should_print_json: bool) -> anyhow::Result<()> {
    if should_print_json {
        println!("{}", serde_json::to_string_pretty(verdict)?);
    } else {
        println!("sharpness: {}", verdict.sharpness);
        for status_line in &verdict.status_lines {
            println!("{}", status_line);
        }
    }
    Ok(())
}

fn print_progress() -> ProgressCallback {
    Arc::new(|progress: UploadProgress| {
        eprintln!("upload progress: {}%", progress.percent());
    })
}

async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let settings = GateSettings::load().unwrap_or_else(|error| {
        log::warn!("{} Failed to load settings: {:#}, using defaults", LOG_TAG_MAIN, error);
        GateSettings::default()
    });

    let encoded_bytes = tokio::fs::read(&cli.image_path)
        .await
        .with_context(|| format!("Failed to read {:?}", cli.image_path))?;
    let candidate =
        CandidateImage::from_encoded_bytes(mime_type_for(&cli.image_path), encoded_bytes);

    let app = GateApp::build(&settings)?;

    let verdict = match app.assess(candidate.clone()).await {
        Ok(verdict) => verdict,
        Err(error) => {
            log::error!("{} {}", LOG_TAG_MAIN, error);
            println!("{}", error.status_line());
            return Ok(ExitCode::FAILURE);
        }
    };

    print_verdict(&verdict, cli.json)?;

    if cli.upload {
        match app.upload(&verdict, &candidate, print_progress()).await {
            Ok(payload) => println!("{}", serde_json::to_string_pretty(&payload)?),
            Err(error) => {
                log::error!("{} {}", LOG_TAG_MAIN, error);
                println!("{}", error.status_line());
                return Ok(ExitCode::FAILURE);
            }
        }
    }

    if verdict.is_accepted() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    env_logger::init();

    log::info!("{} Starting image quality gate", LOG_TAG_MAIN);

    let cli = Cli::parse();

    match run(cli).await {
        Ok(exit_code) => exit_code,
        Err(error) => {
            log::error!("{} {:#}", LOG_TAG_MAIN, error);
            eprintln!("error: {:#}", error);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_parses_path_and_flags_in_any_order() {
        let cli = Cli::try_parse_from(["image-quality-gate", "--json", "photo.png", "--upload"]).unwrap();

        assert_eq!(cli.image_path, PathBuf::from("photo.png"));
        assert!(cli.upload);
        assert!(cli.json);
    }

    #[test]
    fn test_cli_flags_default_to_off() {
        let cli = Cli::try_parse_from(["image-quality-gate", "photo.png"]).unwrap();

        assert!(!cli.upload);
        assert!(!cli.json);
    }

    #[test]
    fn test_cli_requires_path_and_rejects_unknown_flags() {
        assert!(Cli::try_parse_from(["image-quality-gate", "--json"]).is_err());
        assert!(Cli::try_parse_from(["image-quality-gate", "a.png", "--verbose"]).is_err());
        assert!(Cli::try_parse_from(["image-quality-gate", "a.png", "b.png"]).is_err());
    }

    #[test]
    fn test_mime_type_inferred_from_extension() {
        assert_eq!(mime_type_for(Path::new("scan.JPG")), "image/jpeg");
        assert_eq!(mime_type_for(Path::new("scan.png")), "image/png");
        assert_eq!(mime_type_for(Path::new("notes.txt")), FALLBACK_MIME_TYPE);
    }
}
