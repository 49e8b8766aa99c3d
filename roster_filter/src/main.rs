use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use roster_filter::{parse_items, render_items, render_selector};
use roster_rs::{
    filter::MemoryListView,
    http::CanvasConfig,
    CourseId, RosterSession,
};
use tracing_subscriber::EnvFilter;
use url::Url;

/// Filter a course roster by group or section membership
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// ex. --base-url https://canvas.example.edu
    #[arg(long = "base-url", env = "CANVAS_BASE_URL")]
    base_url: String,

    #[arg(long = "access-token", env = "CANVAS_ACCESS_TOKEN", hide_env_values = true)]
    access_token: Option<String>,

    /// ex. --course 1234
    #[arg(long = "course")]
    course: CourseId,

    /// 0 waits indefinitely
    #[arg(long = "timeout-secs", default_value_t = 30)]
    timeout_secs: u64,

    /// ex. --item user_1 --item user_2/checked (default: every fetched student)
    #[arg(long = "item")]
    items: Vec<String>,

    /// ex. --filter group_10
    #[arg(long = "filter")]
    filter: Option<String>,

    #[arg(long = "select-all")]
    select_all: bool,
}

async fn run() -> anyhow::Result<()> {
    let args = Args::parse();

    let base_url = Url::parse(&args.base_url)
        .with_context(|| format!("invalid --base-url {}", args.base_url))?;
    let items = parse_items(&args.items)?;

    let mut config = CanvasConfig::new(base_url);
    if let Some(access_token) = args.access_token {
        config = config.with_access_token(access_token);
    }
    if args.timeout_secs > 0 {
        config = config.with_timeout(Duration::from_secs(args.timeout_secs));
    }
    let session = RosterSession::from_config(&config);
    let course_id = args.course;

    // Without explicit items the roster is every fetched student. The build is
    // shared with the ready signal below, so this does not fetch twice.
    let view = if items.is_empty() {
        match session.cache().get(&course_id).await {
            Ok(index) => MemoryListView::from_user_ids(index.user_ids().iter().copied()),
            // on_ready below hits the same cached failure and logs it
            Err(_) => MemoryListView::default(),
        }
    } else {
        MemoryListView::new(items)
    };

    let mut outcome = session.on_ready(&course_id, view).await;
    if let Some(controller) = outcome.controller_mut() {
        print!("{}", render_selector(&controller.selector_entries()));
        println!("=============================================");

        if let Some(filter) = &args.filter {
            let state = controller.apply_filter(filter);
            log::info!("filter {:?} applied: {:?}", filter, state);
        }

        if args.select_all {
            let count = controller.select_all_visible();
            log::info!("selected {} visible students", count);
        }
    }

    print!("{}", render_items(&outcome.into_view()));
    Ok(())
}

// ex. roster_filter --base-url https://canvas.example.edu --course 1234 --filter group_10 --select-all
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    run().await
}
