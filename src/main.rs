//! Offline inspection of eStay data snapshots.
//!
//! Loads a JSON snapshot of hotel listings into the in-memory store and
//! runs the same pipelines the platform uses: search, moderation, counts.

#[macro_use]
extern crate log;

use std::{
    fs::File,
    io::{BufReader, BufWriter},
    path::{Path, PathBuf},
};

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use time::{format_description::FormatItem, macros::format_description, Date};

use estay_application::prelude as flows;
use estay_boundary as json;
use estay_core::{
    entities::{Hotel, Id, MapPoint, PublicationStatus, Role, StayPeriod, User},
    repositories::{HotelRepo, Pagination},
    usecases,
};
use estay_db_mem::Connections;
use estay_gateways::ChannelNotifier;

const DATE_FORMAT: &[FormatItem<'static>] = format_description!("[year]-[month]-[day]");

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Path to a JSON snapshot of hotel listings.
    #[arg(long, default_value = "hotels.json")]
    snapshot: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Search the snapshot with the regular search pipeline.
    Search(SearchArgs),
    /// Apply an admin review decision and write the updated snapshot.
    Review(ReviewArgs),
    /// Print record counts.
    Stats,
}

#[derive(Args)]
struct SearchArgs {
    #[arg(long)]
    city: Option<String>,
    #[arg(long)]
    keyword: Option<String>,
    #[arg(long)]
    min_price: Option<f64>,
    #[arg(long)]
    max_price: Option<f64>,
    #[arg(long)]
    star_rating: Option<u8>,
    /// Required amenity, may be given multiple times.
    #[arg(long = "amenity")]
    amenities: Vec<String>,
    /// First night of the stay (YYYY-MM-DD). Together with --check-out
    /// this restricts the results to hotels with a free room.
    #[arg(long)]
    check_in: Option<String>,
    /// Morning of departure (YYYY-MM-DD), not part of the stay.
    #[arg(long)]
    check_out: Option<String>,
    #[arg(long)]
    lat: Option<f64>,
    #[arg(long)]
    lng: Option<f64>,
    #[arg(long, value_enum)]
    sort: Option<SortArg>,
    #[arg(long)]
    offset: Option<u64>,
    #[arg(long)]
    limit: Option<u64>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SortArg {
    PriceAsc,
    PriceDesc,
    Rating,
    Newest,
    Distance,
}

impl From<SortArg> for usecases::SortField {
    fn from(from: SortArg) -> Self {
        match from {
            SortArg::PriceAsc => Self::PriceAsc,
            SortArg::PriceDesc => Self::PriceDesc,
            SortArg::Rating => Self::Rating,
            SortArg::Newest => Self::Newest,
            SortArg::Distance => Self::Distance,
        }
    }
}

#[derive(Args)]
struct ReviewArgs {
    /// Ids of the hotels to review; all pending hotels when empty.
    ids: Vec<String>,
    #[arg(long, value_enum)]
    status: StatusArg,
    #[arg(long)]
    reason: Option<String>,
    /// Where to write the updated snapshot; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StatusArg {
    Rejected,
    Approved,
    Published,
    Offline,
}

impl From<StatusArg> for PublicationStatus {
    fn from(from: StatusArg) -> Self {
        match from {
            StatusArg::Rejected => Self::Rejected,
            StatusArg::Approved => Self::Approved,
            StatusArg::Published => Self::Published,
            StatusArg::Offline => Self::Offline,
        }
    }
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();
    let cli = Cli::parse();
    let connections = load_snapshot(&cli.snapshot)?;
    match cli.command {
        Command::Search(args) => search(&connections, args),
        Command::Review(args) => review(&connections, args),
        Command::Stats => stats(&connections),
    }
}

fn load_snapshot(path: &Path) -> Result<Connections> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open snapshot {}", path.display()))?;
    let hotels: Vec<json::Hotel> = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse snapshot {}", path.display()))?;
    let connections = Connections::init();
    let count = seed(&connections, hotels)?;
    info!("Loaded {} hotels from {}", count, path.display());
    Ok(connections)
}

fn seed(connections: &Connections, hotels: Vec<json::Hotel>) -> Result<usize> {
    let db = connections.exclusive();
    let mut count = 0;
    for dto in hotels {
        let hotel = Hotel::try_from(dto)?;
        db.create_hotel(hotel)?;
        count += 1;
    }
    Ok(count)
}

fn search(connections: &Connections, args: SearchArgs) -> Result<()> {
    let stay = stay_filter(args.check_in.as_deref(), args.check_out.as_deref())?;
    let near = match (args.lat, args.lng) {
        (None, None) => None,
        (Some(lat), Some(lng)) => Some(MapPoint::from_lat_lng_deg(lat, lng)),
        _ => bail!("Both --lat and --lng are required for sorting by distance"),
    };
    let query = usecases::HotelQuery {
        city: args.city,
        keyword: args.keyword,
        min_price: args.min_price,
        max_price: args.max_price,
        star_rating: args.star_rating,
        amenities: args.amenities,
        stay,
        near,
        sort: args.sort.map(Into::into),
        pagination: Pagination {
            offset: args.offset,
            limit: args.limit,
        },
    };
    let results = usecases::search_hotels(&connections.exclusive(), query)?;
    let response = json::SearchResponse {
        total: results.total as u64,
        hotels: results.hotels.into_iter().map(Into::into).collect(),
    };
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

fn stay_filter(check_in: Option<&str>, check_out: Option<&str>) -> Result<Option<StayPeriod>> {
    match (check_in, check_out) {
        (None, None) => Ok(None),
        (Some(check_in), Some(check_out)) => {
            let stay = StayPeriod::new(parse_date(check_in)?, parse_date(check_out)?)?;
            Ok(Some(stay))
        }
        _ => bail!("Both --check-in and --check-out are required for the availability filter"),
    }
}

fn parse_date(date: &str) -> Result<Date> {
    Date::parse(date, DATE_FORMAT).with_context(|| format!("Invalid date: {date}"))
}

fn review(connections: &Connections, args: ReviewArgs) -> Result<()> {
    let notify = ChannelNotifier::default();
    let _subscription = notify.subscribe_reviews(|hotel| {
        info!("Reviewed {} ({}): {:?}", hotel.name, hotel.id, hotel.status);
        Ok(())
    });

    let ids = if args.ids.is_empty() {
        let pending: Vec<String> = connections
            .exclusive()
            .all_hotels()?
            .into_iter()
            .filter(|hotel| hotel.status == PublicationStatus::Pending)
            .map(|hotel| hotel.id.into())
            .collect();
        if pending.is_empty() {
            bail!("No pending hotels in the snapshot");
        }
        pending
    } else {
        args.ids
    };
    let ids: Vec<&str> = ids.iter().map(String::as_str).collect();

    let review = usecases::HotelReview {
        reviewer: cli_admin(),
        status: args.status.into(),
        reject_reason: args.reason,
    };
    let count = flows::review_hotels(connections, &notify, &ids, review)?;
    info!("Applied the review decision to {count} hotels");
    write_snapshot(connections, args.out.as_deref())
}

// The CLI operates with admin privileges on local snapshots.
fn cli_admin() -> User {
    User {
        id: Id::new(),
        email: "admin@estay.local".into(),
        username: "admin".into(),
        role: Role::Admin,
    }
}

fn write_snapshot(connections: &Connections, out: Option<&Path>) -> Result<()> {
    let hotels: Vec<json::Hotel> = connections
        .exclusive()
        .all_hotels()?
        .into_iter()
        .map(Into::into)
        .collect();
    match out {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to write snapshot {}", path.display()))?;
            serde_json::to_writer_pretty(BufWriter::new(file), &hotels)?;
        }
        None => println!("{}", serde_json::to_string_pretty(&hotels)?),
    }
    Ok(())
}

fn stats(connections: &Connections) -> Result<()> {
    let stats = connections.exclusive().stats();
    println!("hotels   : {}", stats.hotels);
    println!("ratings  : {}", stats.ratings);
    println!("bookings : {}", stats.bookings);
    println!("messages : {}", stats.messages);
    println!("users    : {}", stats.users);
    Ok(())
}
