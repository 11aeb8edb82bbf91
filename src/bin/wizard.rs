//! `wizard` - control a WiZ bulb from the command line.
//!
//! Run with: wizard <ip> <command>, or wizard --help

use std::net::Ipv4Addr;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use wizard_rs::{Brightness, ColorSpec, Configuration, Error, Kelvin, Light, SceneMode, Speed};

#[derive(Parser)]
#[command(name = "wizard", version)]
#[command(about = "Control WiZ smart bulbs over the local network", long_about = None)]
struct Cli {
    /// Log each request and reply
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print status as JSON
    #[arg(long, global = true)]
    json: bool,

    /// IP address of the bulb
    ip: Ipv4Addr,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Turn the bulb on
    On,

    /// Turn the bulb off
    Off,

    /// Toggle the bulb on/off
    Toggle,

    /// Get bulb status
    Status,

    /// Set brightness (0-100)
    Brightness {
        #[arg(value_parser = parse_brightness)]
        level: Brightness,
    },

    /// Set scene by ID
    Sceneid { id: u16 },

    /// Set scene by name (see `scenes`)
    Scene {
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
    },

    /// List available scenes
    Scenes,

    /// Set scene speed (1-200)
    Speed {
        #[arg(value_parser = parse_speed)]
        value: Speed,
    },

    /// Set color by hex code (leading # optional) or color name
    Color { color: ColorSpec },

    /// Set color by RGB values (0-255 each)
    Rgb { red: u8, green: u8, blue: u8 },

    /// Set color temperature (2700-6500 or presets: warm, neutral, cool)
    Temp { value: Kelvin },
}

fn parse_brightness(s: &str) -> Result<Brightness, String> {
    s.parse()
        .ok()
        .and_then(Brightness::create)
        .ok_or_else(|| "must be a number between 0 and 100".to_string())
}

fn parse_speed(s: &str) -> Result<Speed, String> {
    s.parse()
        .ok()
        .and_then(Speed::create)
        .ok_or_else(|| "must be a number between 1 and 200".to_string())
}

const NOT_APPLICABLE: &str = "N/A for current mode.";

fn print_scenes() {
    for (name, id) in SceneMode::catalog() {
        println!("{name}: {id}");
    }
}

fn print_status(config: &Configuration) {
    fn line(key: &str, value: Option<impl std::fmt::Display>) {
        match value {
            Some(v) => println!("{key}: {v}"),
            None => println!("{key}: {NOT_APPLICABLE}"),
        }
    }

    println!("Status:");
    line("power", config.power().map(|on| if on { "on" } else { "off" }));
    match (config.scene_id(), config.scene()) {
        (Some(id), Some(scene)) => println!("scene: {id} ({scene})"),
        (Some(id), None) => println!("scene: {id} (Unknown)"),
        (None, _) => println!("scene: {NOT_APPLICABLE}"),
    }
    line("red", config.red());
    line("green", config.green());
    line("blue", config.blue());
    line("speed", config.speed());
    line("temp", config.temp());
    line("brightness", config.brightness());
}

/// Print the catalog after a scene that does not resolve, then fail.
fn invalid_scene(kind: &str, value: String) -> Result<(), Box<dyn std::error::Error>> {
    println!("Invalid scene {kind}. Please choose from the following:");
    print_scenes();
    Err(Error::UnknownScene(value).into())
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    // Input is validated before connecting, so bad values never hit the wire.
    match cli.command {
        Commands::Scenes => {
            println!("Available scenes:");
            print_scenes();
        }
        Commands::Sceneid { id } => {
            if SceneMode::create(id).is_none() {
                return invalid_scene("ID", id.to_string());
            }
            Light::connect(cli.ip).await?.set_scene_id(id).await?
        }
        Commands::Scene { name } => {
            let name = name.join(" ");
            if SceneMode::from_name(&name).is_none() {
                return invalid_scene("value", name);
            }
            Light::connect(cli.ip).await?.set_scene_by_name(&name).await?
        }
        Commands::Status => {
            let mut light = Light::connect(cli.ip).await?;
            let config = light.get_status().await?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                print_status(config);
            }
        }
        Commands::On => Light::connect(cli.ip).await?.turn_on().await?,
        Commands::Off => Light::connect(cli.ip).await?.turn_off().await?,
        Commands::Toggle => Light::connect(cli.ip).await?.toggle().await?,
        Commands::Brightness { level } => {
            Light::connect(cli.ip).await?.set_brightness(level).await?
        }
        Commands::Speed { value } => Light::connect(cli.ip).await?.set_speed(value).await?,
        Commands::Color { color } => Light::connect(cli.ip).await?.set_color(&color).await?,
        Commands::Rgb { red, green, blue } => {
            Light::connect(cli.ip)
                .await?
                .set_color(&ColorSpec::rgb(red, green, blue))
                .await?
        }
        Commands::Temp { value } => {
            Light::connect(cli.ip).await?.set_temperature(value).await?
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .format_target(false)
        .init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
