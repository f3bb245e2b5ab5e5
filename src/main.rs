use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use tokio::sync::watch;
use url::Url;

use panda_engine::app::{AppAction, AppState};
use panda_engine::config::Config;
use panda_engine::fixtures::FixtureRequests;
use panda_engine::lists::{ListDomain, ListIntent, ListRecord};
use panda_engine::logging;
use panda_engine::route::{link, Route, RouteIntent, RouteState};
use panda_engine::services::{Dependencies, MemoryPersistence, SecureString, SessionTokens};
use panda_engine::session::SessionIntent;
use panda_engine::shutdown::ShutdownCoordinator;
use panda_engine::store::Store;

/// Time without any state change after which a run counts as settled.
/// Longer than every built-in delay so pending continuations still fire.
const QUIET_PERIOD: Duration = Duration::from_millis(800);

#[derive(Parser)]
#[command(name = "panda-engine")]
#[command(about = "Gallery client state engine driven by fixture data", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file (defaults to the platform config directory)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Load a list domain against a JSON fixture and print the resulting record
    Replay {
        /// Fixture file with list pages and galleries
        #[arg(short, long)]
        fixture: PathBuf,

        /// List domain, e.g. frontpage, search, favorites[0], toplists[15]
        #[arg(short, long, default_value = "frontpage")]
        domain: ListDomain,

        /// Search keyword (search domain only)
        #[arg(short, long)]
        keyword: Option<String>,

        /// Keep requesting pages until the last one
        #[arg(long)]
        all_pages: bool,

        /// Sign in as this member id first (needed for watched and favorites)
        #[arg(long)]
        member_id: Option<String>,
    },

    /// Resolve a deep link and print the route it leads to
    Link {
        url: Url,

        /// Fixture used for reverse lookup; without it the link is only parsed
        #[arg(short, long)]
        fixture: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("loading configuration")?;
    logging::init(&config.logging);

    match cli.command {
        Commands::Replay {
            fixture,
            domain,
            keyword,
            all_pages,
            member_id,
        } => replay(config, fixture, domain, keyword, all_pages, member_id).await,
        Commands::Link { url, fixture } => resolve_link(config, url, fixture).await,
    }
}

async fn replay(
    config: Config,
    fixture: PathBuf,
    domain: ListDomain,
    keyword: Option<String>,
    all_pages: bool,
    member_id: Option<String>,
) -> anyhow::Result<()> {
    let first: AppAction = match (domain, keyword) {
        (ListDomain::Search, Some(keyword)) => ListIntent::Search { keyword }.into(),
        (_, Some(_)) => bail!("--keyword only applies to the search domain"),
        (domain, None) => ListIntent::Fetch { domain }.into(),
    };

    let requests = Arc::new(FixtureRequests::from_path(&fixture)?);
    let persistence = Arc::new(MemoryPersistence::new());
    let deps = Dependencies {
        persistence: persistence.clone(),
        ..Dependencies::in_memory(requests.clone())
    };

    let store = Store::new(AppState::with_settings(config.settings), deps);
    let dispatcher = store.dispatcher();
    let (record_tx, mut record_rx) = watch::channel(ListRecord::default());
    store.observers().subscribe(move |state| {
        record_tx.send_replace(state.lists.record(&domain).clone());
    });

    let coordinator = ShutdownCoordinator::new();
    let store_task = tokio::spawn(store.run(coordinator.handle()));

    if let Some(member_id) = member_id {
        dispatcher.submit(SessionIntent::SignedIn {
            tokens: SessionTokens {
                member_id,
                pass_hash: SecureString::new("fixture"),
                igneous: None,
            },
        });
    }
    dispatcher.submit(first);

    loop {
        tokio::select! {
            changed = record_rx.changed() => {
                if changed.is_err() {
                    break;
                }
            }
            _ = tokio::signal::ctrl_c() => break,
            _ = tokio::time::sleep(QUIET_PERIOD) => {
                let record = record_rx.borrow().clone();
                if record.is_busy() {
                    continue;
                }
                if all_pages && record.can_load_more() && !record.more_load_failed {
                    dispatcher.submit(ListIntent::FetchMore { domain });
                    continue;
                }
                break;
            }
        }
    }

    coordinator.signal();
    let state = store_task.await.context("store task failed")?;
    let record = state.lists.record(&domain);

    println!("domain:    {}", domain);
    println!("status:    {:?}", record.status());
    println!("page:      {}/{}", record.page.current, record.page.maximum);
    println!("items:     {}", record.items.len());
    println!("requests:  {}", requests.calls());
    println!("cached:    {}", persistence.len());
    for gallery in &record.items {
        println!("  {:>10}  {}", gallery.gid, gallery.title);
    }
    Ok(())
}

async fn resolve_link(config: Config, url: Url, fixture: Option<PathBuf>) -> anyhow::Result<()> {
    let settings = &config.settings;
    let redirect_to = settings
        .redirects_links_to_selected_host
        .then_some(settings.gallery_host);
    let Some(normalized) = link::normalize(&url, redirect_to) else {
        bail!("not a gallery host link: {}", url);
    };
    let Some(parsed) = link::parse(&normalized) else {
        bail!("unrecognized gallery link: {}", normalized);
    };
    println!("url:       {}", parsed.url);
    println!("gid:       {}", parsed.gid);
    println!("intent:    {:?}", parsed.intent);

    let Some(fixture) = fixture else {
        return Ok(());
    };

    let requests = Arc::new(FixtureRequests::from_path(&fixture)?);
    let store = Store::new(
        AppState::with_settings(config.settings),
        Dependencies::in_memory(requests),
    );
    let dispatcher = store.dispatcher();
    let (route_tx, mut route_rx) = watch::channel(RouteState::default());
    store.observers().subscribe(move |state| {
        route_tx.send_replace(state.route.clone());
    });

    let coordinator = ShutdownCoordinator::new();
    let store_task = tokio::spawn(store.run(coordinator.handle()));
    dispatcher.submit(RouteIntent::HandleUrl(url));

    loop {
        tokio::select! {
            changed = route_rx.changed() => {
                if changed.is_err() {
                    break;
                }
            }
            _ = tokio::signal::ctrl_c() => break,
            _ = tokio::time::sleep(QUIET_PERIOD) => {
                if route_rx.borrow().route != Route::Hud {
                    break;
                }
            }
        }
    }

    coordinator.signal();
    let state = store_task.await.context("store task failed")?;
    println!("route:     {:?}", state.route.route);
    if let Some(view) = &state.route.detail {
        println!("page:      {:?}", view.reading_page);
        println!("comment:   {:?}", view.comment_jump);
    }
    Ok(())
}
