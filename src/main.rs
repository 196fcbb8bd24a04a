use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;
use ssq::{QueryConfig, ServerInfo, ServerQuery};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ssq")]
#[command(version)]
#[command(about = "Query Source engine game servers")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    /// Server host name or IP address
    host: String,

    /// Server query port
    #[arg(short, long)]
    port: Option<u16>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Check that the server answers
    Ping,
    /// Server name, map, player counts and extra data
    Info,
    /// Fetch a challenge token
    Challenge,
    /// Connected players
    Players,
    /// Server rules (cvars)
    Rules,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = match &cli.log_level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    let config = match &cli.config {
        Some(path) => QueryConfig::load(path).with_context(|| format!("loading {path}"))?,
        None => QueryConfig::default(),
    };
    let port = cli.port.unwrap_or(config.default_port);
    let query = ServerQuery::new(config);
    let host = cli.host.as_str();

    match cli.command {
        Command::Ping => {
            query.a2a_ping(host, port).await?;
            println!("{host}:{port} is up");
        }
        Command::Info => {
            let info = query.a2s_info(host, port).await?;
            if cli.json {
                print_json(&info)?;
            } else {
                print_info(&info);
            }
        }
        Command::Challenge => {
            let challenge = query.a2s_challenge(host, port).await?;
            if cli.json {
                print_json(&challenge)?;
            } else {
                println!("{challenge}");
            }
        }
        Command::Players => {
            let players = query.a2s_player_auto(host, port).await?;
            if cli.json {
                print_json(&players)?;
            } else {
                for player in &players {
                    println!("{:>3} {:<32} {:>6} {:>8.0}s", player.index, player.name, player.score, player.duration);
                }
            }
        }
        Command::Rules => {
            let rules = query.a2s_rules_auto(host, port).await?;
            if cli.json {
                print_json(&rules)?;
            } else {
                for rule in &rules {
                    println!("{} = {}", rule.name, rule.value);
                }
            }
        }
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_info(info: &ServerInfo) {
    println!("name:     {}", info.name);
    println!("map:      {}", info.map);
    println!("game:     {} ({}, app {})", info.game, info.folder, info.app_id);
    println!("players:  {}/{} ({} bots)", info.players, info.max_players, info.bots);
    println!("type:     {:?} on {:?}", info.server_type, info.environment);
    println!("password: {}  vac: {}", info.password, info.vac);
    println!("version:  {}", info.version);

    let extra = &info.extra;
    if let Some(port) = extra.port {
        println!("port:     {port}");
    }
    if let Some(steam_id) = extra.steam_id {
        println!("steam id: {steam_id}");
    }
    if let Some(tv) = &extra.source_tv {
        println!("sourcetv: {} on port {}", tv.name, tv.port);
    }
    if let Some(keywords) = &extra.keywords {
        println!("keywords: {keywords}");
    }
    if let Some(game_id) = extra.game_id {
        println!("game id:  {game_id}");
    }
}
