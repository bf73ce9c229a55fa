//! CLI module for the waste portal
//!
//! Subcommands cover the session lifecycle (`validate`, `login`, `whoami`,
//! `status`, `token`, `logout`) and the backend operations used by the
//! dashboard.

pub mod portal;
pub mod session;

use std::sync::Arc;

use clap::{Parser, Subcommand};

use crate::config::AppConfig;
use crate::infrastructure::logging;
use crate::infrastructure::session::{create_session_service, RecordingNavigator, SessionService};

/// Waste portal - session hand-off and backend client
#[derive(Parser)]
#[command(name = "waste-portal")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate a login/signup submission
    Validate(session::ValidateArgs),

    /// Validate a submission and store the resulting session
    Login(session::LoginArgs),

    /// Show the current user
    Whoami(session::WhoamiArgs),

    /// Report whether a session is stored
    Status,

    /// Print the stored bearer token
    Token,

    /// Clear the session and redirect to the issuing app
    Logout,

    /// List facilities, optionally filtered by type
    Facilities(portal::FacilitiesArgs),

    /// Show collection vehicle tracking
    Tracking(portal::TrackingArgs),

    /// Show the current user's statistics
    Stats,

    /// Show community statistics
    CommunityStats,

    /// List eco-friendly products
    Products,

    /// Purchase a product
    Purchase(portal::PurchaseArgs),

    /// Schedule a waste pickup
    Pickup(portal::PickupArgs),

    /// Report illegal dumping
    Report(portal::ReportArgs),
}

/// Loaded configuration plus the session wiring every command shares
pub struct Context {
    pub config: AppConfig,
    pub navigator: Arc<RecordingNavigator>,
    pub session: Arc<SessionService>,
}

impl Context {
    /// Load `.env` and configuration, start logging, and build the session service
    pub fn init() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let config = AppConfig::load().unwrap_or_default();
        logging::init_logging(&config.logging);

        let navigator = Arc::new(RecordingNavigator::new());
        let session = create_session_service(&config.session, navigator.clone())?;

        Ok(Self {
            config,
            navigator,
            session: Arc::new(session),
        })
    }
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let ctx = Context::init()?;

    match cli.command {
        Command::Validate(args) => session::validate(args),
        Command::Login(args) => session::login(&ctx, args).await,
        Command::Whoami(args) => session::whoami(&ctx, args).await,
        Command::Status => session::status(&ctx).await,
        Command::Token => session::token(&ctx).await,
        Command::Logout => session::logout(&ctx).await,
        Command::Facilities(args) => portal::facilities(&ctx, args).await,
        Command::Tracking(args) => portal::tracking(&ctx, args).await,
        Command::Stats => portal::stats(&ctx).await,
        Command::CommunityStats => portal::community_stats(&ctx).await,
        Command::Products => portal::products(&ctx).await,
        Command::Purchase(args) => portal::purchase(&ctx, args).await,
        Command::Pickup(args) => portal::pickup(&ctx, args).await,
        Command::Report(args) => portal::report(&ctx, args).await,
    }
}
