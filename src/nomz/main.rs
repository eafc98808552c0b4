use clap::Parser;
use directories::ProjectDirs;
use nomz::app::App;
use nomz::config::NomzConfig;
use nomz::error::{NomzError, Result};
use nomz::render::Renderer;
use std::fs;
use std::path::PathBuf;

mod args;
mod print;

use args::{Cli, Commands};
use print::{print_areas, print_detail, print_restaurants, print_stats, print_warnings};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    if cli.no_color {
        console::set_colors_enabled(false);
    }

    let data_path = resolve_data_path(&cli);
    let json = fs::read_to_string(&data_path).map_err(|e| {
        NomzError::DataLoad(format!("failed to read {}: {}", data_path.display(), e))
    })?;

    let mut app = match App::from_json_str(&json) {
        Ok(app) => app,
        Err(e) => {
            // The render command's consumer expects markup even on failure,
            // matching the permanent load-failed page a web shell would show
            if matches!(cli.command, Some(Commands::Render { .. })) {
                if let Ok(renderer) = Renderer::new() {
                    println!("{}", renderer.render_load_failure(&e));
                }
            }
            return Err(e);
        }
    };

    print_warnings(&app.load_report().warnings);

    match cli.command {
        Some(Commands::Render { fragment }) => handle_render(&mut app, &fragment),
        Some(Commands::List { area }) => handle_list(&app, area),
        Some(Commands::Search { term }) => handle_search(&app, &term),
        Some(Commands::Show { id }) => handle_show(&app, id),
        Some(Commands::Areas) => {
            print_areas(app.store().areas());
            Ok(())
        }
        Some(Commands::Stats) => {
            print_stats(&app.store().stats());
            Ok(())
        }
        None => handle_list(&app, None),
    }
}

fn resolve_data_path(cli: &Cli) -> PathBuf {
    if let Some(path) = &cli.data {
        return path.clone();
    }
    let config = ProjectDirs::from("com", "nomz", "nomz")
        .map(|dirs| NomzConfig::load(dirs.config_dir()).unwrap_or_default())
        .unwrap_or_default();
    PathBuf::from(config.data_path)
}

fn handle_render(app: &mut App, fragment: &str) -> Result<()> {
    let view = app.navigate(fragment);
    println!("{}", view.html);
    Ok(())
}

fn handle_list(app: &App, area: Option<String>) -> Result<()> {
    let records: Vec<_> = match area {
        Some(area_id) => app.store().list_by_area(&area_id)?.collect(),
        None => app.store().all().iter().collect(),
    };
    print_restaurants(&records);
    Ok(())
}

fn handle_search(app: &App, term: &str) -> Result<()> {
    let records = app.store().search(term);
    print_restaurants(&records);
    Ok(())
}

fn handle_show(app: &App, id: u32) -> Result<()> {
    let record = app.store().get_by_id(id)?;
    print_detail(record);
    Ok(())
}
