//! speechgen: generate a speech audio file from text.
//!
//! Usage:
//!   speechgen <text> <output_path> <content_type> [speed_factor]

use std::path::PathBuf;

use tracing::{debug, error};

use speechgen::generator::{AudioGenerator, ContentType, GenerateRequest, DEFAULT_SPEED_FACTOR};
use speechgen::media::MediaProcessor;
use speechgen::speech::SpeechClient;

fn main() {
    init_logging();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 4 {
        print_usage();
        std::process::exit(1);
    }

    let text = args[1].as_str();
    let output_path = PathBuf::from(&args[2]);
    let content_type = ContentType::from_arg(&args[3]);
    let speed_factor = match args.get(4) {
        Some(raw) => match raw.parse::<f64>() {
            Ok(factor) if factor.is_finite() && factor > 0.0 => factor,
            _ => {
                error!(value = %raw, "speed_factor must be a positive number");
                print_usage();
                std::process::exit(1);
            }
        },
        None => DEFAULT_SPEED_FACTOR,
    };

    let speech = match build_speech_client() {
        Ok(client) => client,
        Err(e) => {
            error!(error = %e, "failed to set up the speech client");
            std::process::exit(1);
        }
    };
    let generator = AudioGenerator::new(speech, MediaProcessor::from_env());

    let request = GenerateRequest::new(text, output_path, content_type)
        .with_speed_factor(speed_factor);
    match generator.generate(&request) {
        Ok(_) => {}
        Err(e) => {
            error!(error = %e, text = %request.text, "audio generation failed");
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!(
        r#"speechgen - generate a speech audio file from text

USAGE:
    speechgen <text> <output_path> <content_type> [speed_factor]

ARGS:
    <text>          Text to synthesize (quoted if it contains spaces)
    <output_path>   Where to write the MP3; parent directories are created
    <content_type>  'word' for slow single-word speech, anything else for
                    normal sentence speech
    [speed_factor]  Playback speed multiplier, default 1.2 (1.0 keeps the
                    synthesized timing; requires ffmpeg for other values)

ENVIRONMENT:
    SPEECHGEN_TTS_URL   Override the synthesis endpoint base URL
    SPEECHGEN_LANG      Synthesis language code (default: en)
    FFMPEG_BIN          Path to the ffmpeg executable (default: ffmpeg)
    RUST_LOG            Log filter, e.g. info or speechgen=debug"#
    );
}

fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn build_speech_client() -> speechgen::Result<SpeechClient> {
    let mut builder = SpeechClient::builder();
    if let Ok(url) = std::env::var("SPEECHGEN_TTS_URL") {
        builder = builder.base_url(url);
    }
    if let Ok(language) = std::env::var("SPEECHGEN_LANG") {
        builder = builder.language(language);
    }
    let client = builder.build()?;
    debug!(language = client.language(), "speech client ready");
    Ok(client)
}
