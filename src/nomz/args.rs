use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "nomz")]
#[command(about = "Browse a restaurant directory from the command line", long_about = None)]
#[command(version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to the dataset JSON (overrides the configured path)
    #[arg(short, long, global = true)]
    pub data: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the HTML fragment for a URL fragment (e.g. "#/restaurant/3")
    #[command(alias = "r")]
    Render {
        /// Fragment to resolve ("#/", "#/area/<id>", "#/restaurant/<id>", "#/search/<q>")
        fragment: String,
    },

    /// List restaurants
    #[command(alias = "ls")]
    List {
        /// Restrict the listing to one area group (e.g. north-london)
        #[arg(short, long)]
        area: Option<String>,
    },

    /// Search restaurants by name, cuisine, or address
    Search { term: String },

    /// Show one restaurant in full
    #[command(alias = "s")]
    Show { id: u32 },

    /// List area groups with member counts
    Areas,

    /// Print collection statistics
    Stats,
}
