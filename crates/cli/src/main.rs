use std::path::{Path, PathBuf};
use std::process;
use std::time::Duration;

use clap::{Parser, Subcommand};
use serde::Serialize;
use uuid::Uuid;

use facesdk_core::groups::domain::group_api::GroupApi;
use facesdk_core::infrastructure::http_face_sdk::HttpFaceSdk;
use facesdk_core::maintenance::sweep_groups_use_case::SweepGroupsUseCase;
use facesdk_core::matching::domain::detect::{DetectRequest, ProcessParam};
use facesdk_core::matching::domain::face_match::MatchRequest;
use facesdk_core::matching::domain::image_source::ImageSource;
use facesdk_core::matching::domain::matching_api::MatchingApi;
use facesdk_core::matching::domain::quality_scenario::QualityScenario;
use facesdk_core::search::domain::search::SearchRequest;
use facesdk_core::search::domain::search_api::SearchApi;
use facesdk_core::shared::client_config::ClientConfig;
use facesdk_core::shared::constants::{CONTENT_TYPE_JPEG, DEFAULT_SERVICE_URL, SERVICE_URL_ENV};
use facesdk_core::shared::image_payload::ImagePayload;

/// Group names the integration suite creates.
const FIXTURE_GROUP_NAMES: [&str; 3] = ["test", "testGroup", "secondTestGroup"];

/// Operator commands for a FaceSDK web service.
#[derive(Parser)]
#[command(name = "facesdk")]
struct Cli {
    /// Service base URL.
    #[arg(long, global = true, env = SERVICE_URL_ENV, default_value = DEFAULT_SERVICE_URL)]
    service_url: String,

    /// Request timeout in seconds (no timeout when omitted).
    #[arg(long, global = true)]
    timeout: Option<u64>,

    /// Reject self-signed service certificates.
    #[arg(long, global = true)]
    strict_tls: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Detect faces in an image and print the response.
    Detect {
        image: PathBuf,

        /// Processing scenario, e.g. QualityFull or CropAllFaces.
        #[arg(long)]
        scenario: Option<QualityScenario>,

        /// Only report the most central face.
        #[arg(long)]
        only_central_face: bool,
    },
    /// Compare the faces of two images.
    Match {
        first: PathBuf,
        /// Source of the first image: name (live, document-rfid) or tag number.
        first_source: ImageSource,
        second: PathBuf,
        second_source: ImageSource,
    },
    /// List one page of groups.
    Groups {
        #[arg(long, default_value_t = 1)]
        page: u32,

        #[arg(long, default_value_t = 20)]
        size: u32,
    },
    /// Search groups for persons resembling the face in an image.
    Search {
        image: PathBuf,

        /// Group to search in (repeatable).
        #[arg(long = "group", required = true)]
        groups: Vec<Uuid>,

        #[arg(long)]
        limit: Option<u32>,

        /// Minimum similarity (0.0-1.0).
        #[arg(long)]
        threshold: Option<f32>,
    },
    /// Delete groups left behind by aborted test runs, with their persons.
    Sweep {
        /// Group name to delete (repeatable).
        #[arg(long = "name", default_values = FIXTURE_GROUP_NAMES)]
        names: Vec<String>,
    },
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    validate(&cli)?;
    let sdk = HttpFaceSdk::new(&build_config(&cli))?;

    match cli.command {
        Command::Detect {
            image,
            scenario,
            only_central_face,
        } => {
            let params = ProcessParam {
                scenario,
                only_central_face: only_central_face.then_some(true),
                ..ProcessParam::default()
            };
            let request = DetectRequest::new(read_image(&image)?).with_params(params);
            print_json(&sdk.detect(&request)?)
        }
        Command::Match {
            first,
            first_source,
            second,
            second_source,
        } => {
            let request = MatchRequest::from_images([
                (first_source, read_image(&first)?),
                (second_source, read_image(&second)?),
            ]);
            print_json(&sdk.match_faces(&request)?)
        }
        Command::Groups { page, size } => print_json(&sdk.get_all_groups(page, size)?),
        Command::Search {
            image,
            groups,
            limit,
            threshold,
        } => {
            let mut request = SearchRequest::new(ImagePayload::from_bytes(
                read_image(&image)?,
                content_type(&image),
            ))
            .in_groups(groups);
            request.limit = limit;
            request.threshold = threshold;
            print_json(&sdk.search(&request)?)
        }
        Command::Sweep { names } => {
            let report = SweepGroupsUseCase::new(&sdk, names).execute()?;
            log::info!(
                "Deleted {} groups and {} persons ({} failures)",
                report.groups_deleted,
                report.persons_deleted,
                report.failures
            );
            println!(
                "groups deleted: {}, persons deleted: {}, failures: {}",
                report.groups_deleted, report.persons_deleted, report.failures
            );
            Ok(())
        }
    }
}

fn build_config(cli: &Cli) -> ClientConfig {
    let mut config = ClientConfig::new(cli.service_url.trim());
    if let Some(seconds) = cli.timeout {
        config = config.with_timeout(Duration::from_secs(seconds));
    }
    if cli.strict_tls {
        config = config.with_strict_tls();
    }
    config
}

fn validate(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    if cli.timeout == Some(0) {
        return Err("Timeout must be at least 1 second".into());
    }
    match &cli.command {
        Command::Groups { page, size } => {
            if *page == 0 {
                return Err("Pages start at 1".into());
            }
            if *size == 0 {
                return Err("Page size must be positive".into());
            }
        }
        Command::Search { threshold, .. } => {
            if let Some(t) = threshold {
                if !(0.0..=1.0).contains(t) {
                    return Err(
                        format!("Threshold must be between 0.0 and 1.0, got {t}").into()
                    );
                }
            }
        }
        Command::Sweep { names } if names.is_empty() => {
            return Err("At least one group name is required".into());
        }
        _ => {}
    }
    Ok(())
}

fn read_image(path: &Path) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    let bytes = std::fs::read(path)
        .map_err(|e| format!("Cannot read image {}: {e}", path.display()))?;
    Ok(bytes)
}

/// MIME type guessed from the file extension, JPEG when unknown.
fn content_type(path: &Path) -> &'static str {
    mime_guess::from_path(path)
        .first_raw()
        .unwrap_or(CONTENT_TYPE_JPEG)
}

fn print_json<T: Serialize>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
