/// Setlist - music catalog command-line interface
use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use setlist_catalog::{config::CatalogConfig, state::CatalogState};
use setlist_core::{
    types::{PlaylistFields, PlaylistFilter, TrackFields, TrackFilter, UserId},
    CatalogError,
};
use std::{path::PathBuf, process::ExitCode};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "setlist")]
#[command(about = "Setlist music catalog", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, env = "SETLIST_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage tracks
    #[command(subcommand)]
    Track(TrackCommand),
    /// Manage playlists
    #[command(subcommand)]
    Playlist(PlaylistCommand),
}

#[derive(Subcommand)]
enum TrackCommand {
    /// Create a track
    Create(TrackArgs),
    /// Upload an audio file and print its link
    Upload {
        /// File to upload
        path: PathBuf,
    },
    /// Show a track
    Get { id: String },
    /// Replace every field of a track
    Update {
        id: String,
        #[command(flatten)]
        fields: TrackArgs,
    },
    /// Delete a track and its file
    Delete { id: String },
    /// Search tracks (case-insensitive substring match)
    Search {
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        artist: Option<String>,
        #[arg(long)]
        album: Option<String>,
        #[arg(long)]
        genre: Option<String>,
    },
}

#[derive(Args)]
struct TrackArgs {
    #[arg(long)]
    title: String,
    #[arg(long)]
    artist: String,
    #[arg(long)]
    album: String,
    #[arg(long)]
    genre: String,
    #[arg(long)]
    year: u32,
    /// Duration in seconds
    #[arg(long)]
    duration: u32,
    /// Link returned by `track upload`
    #[arg(long)]
    link: String,
}

impl From<TrackArgs> for TrackFields {
    fn from(args: TrackArgs) -> Self {
        TrackFields {
            title: args.title,
            artist: args.artist,
            album: args.album,
            genre: args.genre,
            year: args.year,
            duration: args.duration,
            link: args.link,
        }
    }
}

#[derive(Subcommand)]
enum PlaylistCommand {
    /// Create a playlist
    Create {
        /// Creator identity
        #[arg(long)]
        user: String,
        #[command(flatten)]
        fields: PlaylistArgs,
    },
    /// Show a playlist with its tracks
    Get { id: String },
    /// Replace a playlist's fields and tracks
    Update {
        id: String,
        #[command(flatten)]
        fields: PlaylistArgs,
    },
    /// Delete a playlist (tracks are kept)
    Delete { id: String },
    /// Search playlists (case-insensitive substring match)
    Search {
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        genre: Option<String>,
    },
}

#[derive(Args)]
struct PlaylistArgs {
    #[arg(long)]
    title: String,
    #[arg(long)]
    description: String,
    #[arg(long)]
    genre: String,
    /// Track id, in playlist order (repeatable)
    #[arg(long = "track")]
    tracks: Vec<String>,
}

impl From<PlaylistArgs> for PlaylistFields {
    fn from(args: PlaylistArgs) -> Self {
        PlaylistFields {
            title: args.title,
            description: args.description,
            genre: args.genre,
            track_ids: Some(args.tracks),
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing (stdout is reserved for command output)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "setlist_catalog=info,setlist_storage=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => report(&err),
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = CatalogConfig::load(cli.config.as_deref())?;
    config.validate()?;

    let state = CatalogState::connect(&config).await?;

    match cli.command {
        Commands::Track(command) => run_track(&state, command).await,
        Commands::Playlist(command) => run_playlist(&state, command).await,
    }
}

async fn run_track(state: &CatalogState, command: TrackCommand) -> anyhow::Result<()> {
    let tracks = &state.tracks;

    match command {
        TrackCommand::Create(args) => print_json(&tracks.create(args.into()).await?),
        TrackCommand::Upload { path } => {
            let bytes = tokio::fs::read(&path)
                .await
                .with_context(|| format!("Failed to read {}", path.display()))?;
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();

            let link = tracks.upload(&bytes, &name).await?;
            print_json(&serde_json::json!({ "link": link }))
        }
        TrackCommand::Get { id } => print_json(&tracks.get(&id).await?),
        TrackCommand::Update { id, fields } => {
            print_json(&tracks.update(&id, fields.into()).await?)
        }
        TrackCommand::Delete { id } => print_json(&tracks.delete(&id).await?),
        TrackCommand::Search {
            title,
            artist,
            album,
            genre,
        } => {
            let filter = TrackFilter {
                title,
                artist,
                album,
                genre,
            };
            print_json(&tracks.search(&filter).await?)
        }
    }
}

async fn run_playlist(state: &CatalogState, command: PlaylistCommand) -> anyhow::Result<()> {
    let playlists = &state.playlists;

    match command {
        PlaylistCommand::Create { user, fields } => {
            print_json(&playlists.create(fields.into(), UserId::new(user)).await?)
        }
        PlaylistCommand::Get { id } => print_json(&playlists.get(&id).await?),
        PlaylistCommand::Update { id, fields } => {
            print_json(&playlists.update(&id, fields.into()).await?)
        }
        PlaylistCommand::Delete { id } => {
            playlists.delete(&id).await?;
            print_json(&serde_json::json!({ "deleted": id }))
        }
        PlaylistCommand::Search {
            title,
            description,
            genre,
        } => {
            let filter = PlaylistFilter {
                title,
                description,
                genre,
            };
            print_json(&playlists.search(&filter).await?)
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print an error and map it to the process exit code
fn report(err: &anyhow::Error) -> ExitCode {
    match err.downcast_ref::<CatalogError>() {
        Some(catalog) => {
            let kind = catalog.kind();
            if !kind.is_caller_error() {
                tracing::error!("{}", catalog);
            }
            eprintln!("error[{}]: {}", kind.code(), catalog.public_message());
            ExitCode::from(u8::try_from(kind.exit_code()).unwrap_or(1))
        }
        None => {
            eprintln!("error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
