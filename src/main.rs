use anyhow::Result;
use std::path::PathBuf;
use std::process::ExitCode;

use photogrid::config::Config;
use photogrid::fetch::load_gallery;
use photogrid::gallery::{GalleryEvent, GalleryState};
use photogrid::store::JsonStore;

#[derive(Debug, Default)]
struct Args {
    config_path: Option<PathBuf>,
    store_path: Option<PathBuf>,
    tag: Option<String>,
    search: Option<String>,
    reverse: bool,
    list_tags: bool,
}

fn parse_args() -> Args {
    let argv: Vec<String> = std::env::args().collect();
    let mut args = Args::default();

    let mut i = 1;
    while i < argv.len() {
        match argv[i].as_str() {
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            "--version" | "-V" => {
                println!("photogrid {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--config" | "-c" => {
                if i + 1 < argv.len() {
                    args.config_path = Some(PathBuf::from(&argv[i + 1]));
                    i += 1;
                } else {
                    eprintln!("Error: --config requires a path argument");
                    std::process::exit(1);
                }
            }
            "--store" | "-s" => {
                if i + 1 < argv.len() {
                    args.store_path = Some(PathBuf::from(&argv[i + 1]));
                    i += 1;
                } else {
                    eprintln!("Error: --store requires a path argument");
                    std::process::exit(1);
                }
            }
            "--tag" => {
                if i + 1 < argv.len() {
                    args.tag = Some(argv[i + 1].clone());
                    i += 1;
                } else {
                    eprintln!("Error: --tag requires a tag argument");
                    std::process::exit(1);
                }
            }
            "--search" => {
                if i + 1 < argv.len() {
                    args.search = Some(argv[i + 1].clone());
                    i += 1;
                } else {
                    eprintln!("Error: --search requires an input argument");
                    std::process::exit(1);
                }
            }
            "--reverse" => args.reverse = true,
            "--tags" => args.list_tags = true,
            _ => {
                eprintln!("Unknown argument: {}", argv[i]);
                print_help();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    args
}

fn print_help() {
    println!(
        r#"photogrid - gallery listing over a JSON document store

USAGE:
    photogrid [OPTIONS]

OPTIONS:
    --config, -c PATH   Path to config file
    --store, -s PATH    Path to the document store root (overrides config)
    --tag TAG           Show only photos carrying TAG
    --search INPUT      List tags whose label contains INPUT
    --tags              List all tags instead of photos
    --reverse           Reverse the photo display order
    --version, -V       Show version
    --help, -h          Show this help message

ENVIRONMENT:
    PHOTOGRID_LOG       Log level (trace, debug, info, warn, error)

Config file location: $XDG_CONFIG_HOME/photogrid/config.toml"#
    );
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let args = parse_args();

    // Logging init failure is not fatal for a listing tool.
    let _ = photogrid::logging::init(Some(Config::config_dir().join("logs")));

    let config = match &args.config_path {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let store_root = args
        .store_path
        .clone()
        .unwrap_or_else(|| config.store.path.clone());
    let store = JsonStore::open(store_root, config.store.meta_doc.clone());

    let mut state = GalleryState::new();
    state.apply(GalleryEvent::FetchStarted);
    state.apply(load_gallery(&store));

    if state.is_error() {
        eprintln!("Error: could not load the gallery");
        return Ok(ExitCode::FAILURE);
    }

    if args.list_tags || args.search.is_some() {
        state.apply(GalleryEvent::TagViewToggled);
        if let Some(input) = &args.search {
            state.apply(GalleryEvent::SearchSubmitted(input.clone()));
        }
        for tag in state.current_tags() {
            println!("{}", tag.label);
        }
        return Ok(ExitCode::SUCCESS);
    }

    if let Some(tag) = &args.tag {
        state.apply(GalleryEvent::TagSelected(tag.clone()));
    }
    if args.reverse {
        state.apply(GalleryEvent::ReverseToggled);
    }

    for photo in state.view_photos() {
        if photo.tags.is_empty() {
            println!("{:>4}  {}", photo.index, photo.source);
        } else {
            println!("{:>4}  {}  [{}]", photo.index, photo.source, photo.tags.join(", "));
        }
    }

    Ok(ExitCode::SUCCESS)
}
