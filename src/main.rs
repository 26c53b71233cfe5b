use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use asset_scan::config::Config;
use asset_scan::http_client::ApiClient;
use asset_scan::models::{AssetListFilter, ServiceUpdate};
use chrono::NaiveDate;
use asset_scan::presenter::Presenter;
use asset_scan::resolver::Resolver;
use asset_scan::scanner::{self, DecodeOutcome, FrameDecoder, ScanEvent, ScannerConfig};
use asset_scan::services::{
    AssetsService, LocationsService, LogsService, ProfileService, ServiceHistoryService,
};
use asset_scan::view::AssetDetailView;
use asset_scan::AppResult;

#[derive(Parser)]
#[command(name = "asset-scan", about = "Scan-to-detail client for the IT asset inventory")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Read decoded QR payloads from stdin and resolve the first valid one
    Scan,
    /// Resolve an asset by numeric id or barcode
    Asset { identifier: String },
    /// Show an area and the schools registered in it
    Area { id: u64 },
    /// List assets registered to a school
    School {
        id: u64,
        #[arg(long)]
        type_code: Option<String>,
        #[arg(long)]
        category_code: Option<String>,
    },
    /// Search the repair logbook
    Services {
        #[arg(long)]
        search: Option<String>,
    },
    /// Edit a repair logbook entry
    ServiceEdit {
        id: u64,
        #[arg(long)]
        sn_or_barcode: String,
        #[arg(long)]
        status: String,
        #[arg(long)]
        ticket_no: Option<String>,
        #[arg(long)]
        date: Option<NaiveDate>,
        #[arg(long)]
        asset_name: Option<String>,
        #[arg(long)]
        production_year: Option<i32>,
        #[arg(long)]
        unit_name: Option<String>,
        #[arg(long)]
        owner: Option<String>,
        #[arg(long)]
        issue: Option<String>,
        #[arg(long)]
        vendor: Option<String>,
    },
    /// Search the update-log history
    Logs {
        #[arg(long)]
        search: Option<String>,
    },
    /// Show the signed-in user profile
    Me,
    /// Update the signed-in user's display name
    Rename { full_name: String },
}

/// Stand-in for a camera: each stdin line is one decoded frame payload,
/// an empty line is a frame with no code in it.
struct StdinDecoder {
    lines: Option<Lines<BufReader<Stdin>>>,
}

impl StdinDecoder {
    fn new() -> Self {
        Self { lines: None }
    }
}

#[async_trait::async_trait]
impl FrameDecoder for StdinDecoder {
    fn open(&mut self, _config: &ScannerConfig) -> AppResult<()> {
        self.lines = Some(BufReader::new(tokio::io::stdin()).lines());
        Ok(())
    }

    async fn decode_frame(&mut self) -> DecodeOutcome {
        let Some(lines) = self.lines.as_mut() else {
            return DecodeOutcome::Closed;
        };
        match lines.next_line().await {
            Ok(Some(line)) if line.trim().is_empty() => DecodeOutcome::Miss,
            Ok(Some(line)) => DecodeOutcome::Decoded(line),
            Ok(None) | Err(_) => DecodeOutcome::Closed,
        }
    }

    fn release(&mut self) {
        self.lines = None;
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "asset_scan=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = Config::from_env()?;
    let client = ApiClient::new(&config);
    let presenter = Presenter::default();

    match cli.command {
        Command::Scan => {
            let scanner_config = ScannerConfig {
                fps: config.scan_fps,
                ..ScannerConfig::default()
            };
            let (handle, mut events) = scanner::start(StdinDecoder::new(), scanner_config)?;

            let identifier = loop {
                match events.recv().await {
                    Some(ScanEvent::Navigate(id)) => break Some(id),
                    Some(ScanEvent::Rejected(err)) => eprintln!("{}", err),
                    None => break None,
                }
            };
            handle.stop().await;

            match identifier {
                Some(identifier) => show_asset(&client, &presenter, &identifier).await,
                None => {
                    eprintln!("scanner closed without a valid code");
                    std::process::exit(1);
                }
            }
        }
        Command::Asset { identifier } => show_asset(&client, &presenter, &identifier).await,
        Command::Area { id } => {
            let locations = LocationsService::new(client);
            let area = locations.area(id).await?;
            let schools = locations.area_schools(id).await?;
            print!("{}", presenter.render_area(&area, &schools));
        }
        Command::School {
            id,
            type_code,
            category_code,
        } => {
            let filter = AssetListFilter {
                type_code,
                category_code,
            };
            let school = LocationsService::new(client.clone()).school(id).await?;
            let assets = AssetsService::new(client).school_assets(id, &filter).await?;
            print!("{}", presenter.render_school(&school, &assets));
        }
        Command::Services { search } => {
            let records = ServiceHistoryService::new(client)
                .list(search.as_deref())
                .await?;
            print!("{}", presenter.render_services(&records));
        }
        Command::ServiceEdit {
            id,
            sn_or_barcode,
            status,
            ticket_no,
            date,
            asset_name,
            production_year,
            unit_name,
            owner,
            issue,
            vendor,
        } => {
            let update = ServiceUpdate {
                ticket_no,
                service_date: date,
                asset_name,
                sn_or_barcode,
                production_year,
                unit_name,
                owner,
                issue_description: issue,
                vendor,
                status,
            };
            let record = ServiceHistoryService::new(client).update(id, &update).await?;
            print!("{}", presenter.render_services(std::slice::from_ref(&record)));
        }
        Command::Logs { search } => {
            let logs = LogsService::new(client).list(search.as_deref()).await?;
            print!("{}", presenter.render_logs(&logs));
        }
        Command::Me => {
            let profile = ProfileService::new(client).me().await?;
            print!("{}", presenter.render_profile(&profile));
        }
        Command::Rename { full_name } => {
            let profile = ProfileService::new(client).rename(&full_name).await?;
            print!("{}", presenter.render_profile(&profile));
        }
    }

    Ok(())
}

/// Drive the scan-result view to a settled state and print it.
async fn show_asset(client: &ApiClient, presenter: &Presenter, identifier: &str) {
    let view = AssetDetailView::new(Resolver::new(AssetsService::new(client.clone())));
    if let Err(err) = view.show(identifier).await {
        tracing::error!(%err, "lookup task failed");
    }
    print!("{}", presenter.render_state(&view.state()));
}
