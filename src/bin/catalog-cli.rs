use clap::{Parser, Subcommand};
use serde_json::{json, Value};

#[derive(Parser)]
#[command(name = "catalog-cli")]
#[command(about = "Command-line client for the music catalog API", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:5000")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all artists
    Artists,
    /// Show one artist
    Artist { id: u64 },
    /// Create an artist
    AddArtist { name: String },
    /// Rename an artist
    RenameArtist { id: u64, name: String },
    /// Delete an artist
    RemoveArtist { id: u64 },
    /// List an artist's albums
    Albums { artist_id: u64 },
    /// Create an album for an artist
    AddAlbum { artist_id: u64, name: String },
    /// List the songs on an album
    Songs { album_id: u64 },
    /// Show one song with its album and artist
    Song { id: u64 },
    /// Add a song to an album
    AddSong {
        album_id: u64,
        track_number: u32,
        name: String,
        lyrics: String,
    },
    /// List every song with the given track number
    Track { number: u32 },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = cli.url.trim_end_matches('/');

    let request = match cli.command {
        Commands::Artists => client.get(format!("{}/artists", base)),
        Commands::Artist { id } => client.get(format!("{}/artists/{}", base, id)),
        Commands::AddArtist { name } => client
            .post(format!("{}/artists", base))
            .json(&json!({ "name": name })),
        Commands::RenameArtist { id, name } => client
            .put(format!("{}/artists/{}", base, id))
            .json(&json!({ "name": name })),
        Commands::RemoveArtist { id } => client.delete(format!("{}/artists/{}", base, id)),
        Commands::Albums { artist_id } => {
            client.get(format!("{}/artists/{}/albums", base, artist_id))
        }
        Commands::AddAlbum { artist_id, name } => client
            .post(format!("{}/artists/{}/albums", base, artist_id))
            .json(&json!({ "name": name })),
        Commands::Songs { album_id } => client.get(format!("{}/albums/{}/songs", base, album_id)),
        Commands::Song { id } => client.get(format!("{}/songs/{}", base, id)),
        Commands::AddSong {
            album_id,
            track_number,
            name,
            lyrics,
        } => client
            .post(format!("{}/albums/{}/songs", base, album_id))
            .json(&json!({ "name": name, "trackNumber": track_number, "lyrics": lyrics })),
        Commands::Track { number } => {
            client.get(format!("{}/trackNumbers/{}/songs", base, number))
        }
    };

    print_response(request.send().await?).await
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    let text = res.text().await?;

    // The unmatched-route 404 is plain text, everything else JSON.
    let rendered = match serde_json::from_str::<Value>(&text) {
        Ok(json) => serde_json::to_string_pretty(&json)?,
        Err(_) => text,
    };

    if status.is_success() {
        println!("{}", rendered);
    } else {
        eprintln!("Error: API returned status {}", status);
        eprintln!("{}", rendered);
    }
    Ok(())
}
