use anyhow::Result;
use clap::{Parser, Subcommand};
use joseon_annals::{
    AdvancedSearchRequest, AnnalsSource, SearchField, SearchRequest, SearchResponse,
};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

/// Joseon Annals - search the Annals of the Joseon Dynasty and fetch full article texts
#[derive(Parser, Debug)]
#[command(name = "joseon-annals")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Search the Annals of the Joseon Dynasty (조선왕조실록)", long_about = None)]
struct Cli {
    /// Enable verbose logging (can be used multiple times: -v, -vv, -vvv)
    #[arg(long, short, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Search the annals; results are printed as JSON
    Search {
        /// Search term, expected to be in Korean (e.g. '정도전', '왜란')
        query: String,

        /// Area to search: all, body, article_title, or title
        #[arg(long, default_value = "all")]
        field: String,

        /// King name filter (Hangeul or romanized); may be repeated
        #[arg(long = "king")]
        kings: Vec<String>,

        /// Explicit bibliography ID filter (e.g. ITKC_JT_D0); may be repeated
        #[arg(long = "bibliography-id")]
        bibliography_ids: Vec<String>,

        /// Use extended matching
        #[arg(long)]
        extended: bool,

        /// Result offset for pagination
        #[arg(long, default_value_t = 0)]
        start: u32,

        /// Number of results per page
        #[arg(long, default_value_t = 20)]
        rows: u32,
    },

    /// Fetch the full bilingual text of one article by its document ID
    Article {
        /// 자료ID of the article (e.g. ITKC_JT_A0_A04_07A_01A_00010)
        document_id: String,
    },

    /// List the king names the search filter understands
    Kings,
}

#[derive(Serialize)]
struct KingEntry {
    name: &'static str,
    bibliography_id: &'static str,
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // Logs go to stderr so stdout stays parseable JSON.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_search(
    source: &AnnalsSource,
    query: String,
    field: String,
    kings: Vec<String>,
    bibliography_ids: Vec<String>,
    extended: bool,
    start: u32,
    rows: u32,
) -> Result<SearchResponse> {
    let field = SearchField::parse(&field);

    // The advanced endpoint handling is only needed for multi-filter or
    // extended queries; a plain request takes the basic path.
    let advanced = extended || kings.len() > 1 || bibliography_ids.len() > 1;
    let response = if advanced {
        let mut request = AdvancedSearchRequest::new(query)
            .field(field)
            .extended(extended)
            .start(start)
            .rows(rows);
        request.king_names = kings;
        request.bibliography_ids = bibliography_ids;
        source.search_advanced(&request)?
    } else {
        let mut request = SearchRequest::new(query).field(field).start(start).rows(rows);
        request.king_name = kings.into_iter().next();
        request.bibliography_id = bibliography_ids.into_iter().next();
        source.search(&request)?
    };
    Ok(response)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Search {
            query,
            field,
            kings,
            bibliography_ids,
            extended,
            start,
            rows,
        } => {
            let source = AnnalsSource::new()?;
            let response = run_search(
                &source,
                query,
                field,
                kings,
                bibliography_ids,
                extended,
                start,
                rows,
            )?;
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        Commands::Article { document_id } => {
            let source = AnnalsSource::new()?;
            let article = source.fetch_article(&document_id)?;
            println!("{}", serde_json::to_string_pretty(&article)?);
        }
        Commands::Kings => {
            let entries: Vec<KingEntry> = joseon_annals::sources::kings::entries()
                .map(|(name, bibliography_id)| KingEntry {
                    name,
                    bibliography_id,
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
    }

    Ok(())
}
