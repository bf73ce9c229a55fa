//! Backend commands used by the dashboard

use std::path::PathBuf;

use clap::Args;
use serde_json::Value;

use super::Context;
use crate::domain::{
    filter_facilities, DumpingReport, Facility, FacilityFilter, ImageAttachment, PickupRequest,
    PurchaseRequest,
};
use crate::infrastructure::waste_api::WasteApiClient;

#[derive(Debug, Args)]
pub struct FacilitiesArgs {
    /// "All" or a facility type such as "Recycling Center"
    #[arg(long = "type", default_value = "All")]
    pub facility_type: FacilityFilter,

    #[arg(long)]
    pub location: Option<String>,
}

#[derive(Debug, Args)]
pub struct TrackingArgs {
    /// Vehicle to track; defaults to the one serving the current user
    #[arg(long)]
    pub vehicle: Option<String>,
}

#[derive(Debug, Args)]
pub struct PurchaseArgs {
    #[arg(long)]
    pub product: u64,

    #[arg(long, default_value_t = 1)]
    pub quantity: u32,
}

#[derive(Debug, Args)]
pub struct PickupArgs {
    #[arg(long)]
    pub date: String,

    #[arg(long)]
    pub slot: String,

    #[arg(long)]
    pub waste_type: String,

    #[arg(long)]
    pub notes: Option<String>,
}

#[derive(Debug, Args)]
pub struct ReportArgs {
    #[arg(long)]
    pub location: String,

    #[arg(long)]
    pub description: String,

    /// Photo of the site
    #[arg(long)]
    pub image: Option<PathBuf>,
}

fn api(ctx: &Context) -> anyhow::Result<WasteApiClient> {
    Ok(WasteApiClient::new(&ctx.config.api, ctx.session.clone())?)
}

fn print(value: &Value) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub async fn facilities(ctx: &Context, args: FacilitiesArgs) -> anyhow::Result<()> {
    let type_param = match args.facility_type {
        FacilityFilter::All => None,
        FacilityFilter::Only(t) => Some(t.as_str()),
    };
    let value = api(ctx)?
        .get_facilities(type_param, args.location.as_deref())
        .await?;

    // The server may ignore the type parameter; filter locally when the
    // listing is in the expected shape.
    match serde_json::from_value::<Vec<Facility>>(value.clone()) {
        Ok(facilities) => {
            let filtered = filter_facilities(&facilities, args.facility_type);
            println!("{}", serde_json::to_string_pretty(&filtered)?);
            Ok(())
        }
        Err(e) => {
            tracing::debug!(error = %e, "Facility listing not in expected shape");
            print(&value)
        }
    }
}

pub async fn tracking(ctx: &Context, args: TrackingArgs) -> anyhow::Result<()> {
    let value = api(ctx)?
        .get_vehicle_tracking(args.vehicle.as_deref())
        .await?;
    print(&value)
}

pub async fn stats(ctx: &Context) -> anyhow::Result<()> {
    print(&api(ctx)?.get_user_stats().await?)
}

pub async fn community_stats(ctx: &Context) -> anyhow::Result<()> {
    print(&api(ctx)?.get_community_stats().await?)
}

pub async fn products(ctx: &Context) -> anyhow::Result<()> {
    print(&api(ctx)?.get_eco_products().await?)
}

pub async fn purchase(ctx: &Context, args: PurchaseArgs) -> anyhow::Result<()> {
    let request = PurchaseRequest::new(args.product).with_quantity(args.quantity);
    print(&api(ctx)?.purchase_product(&request).await?)
}

pub async fn pickup(ctx: &Context, args: PickupArgs) -> anyhow::Result<()> {
    let request = PickupRequest {
        date: args.date,
        time_slot: args.slot,
        waste_type: args.waste_type,
        notes: args.notes,
    };
    print(&api(ctx)?.schedule_pickup(&request).await?)
}

pub async fn report(ctx: &Context, args: ReportArgs) -> anyhow::Result<()> {
    let image = match args.image {
        Some(path) => {
            let bytes = tokio::fs::read(&path).await?;
            let file_name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "image".to_string());
            Some(ImageAttachment::new(file_name, bytes))
        }
        None => None,
    };

    let report = DumpingReport {
        location: args.location,
        description: args.description,
        image,
    };
    print(&api(ctx)?.report_illegal_dumping(report).await?)
}
