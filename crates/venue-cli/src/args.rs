use clap::{Args, Parser, Subcommand};
use venue_core::{FilterState, SortStrategy, Weekday};

/// CLI arguments for venue-cli
#[derive(Debug, Parser)]
#[command(
    name = "venue-cli",
    version,
    about = "Browse, filter and map the sports venue directory"
)]
pub struct CliArgs {
    /// Catalog file (.json, .json.gz or compiled .bin); defaults to the bundled dataset
    #[arg(short = 'i', long = "input", global = true)]
    pub input: Option<String>,

    /// TOML config file (page size, map settings)
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the catalog
    Stats,

    /// List all sports, amenities and cities in the catalog
    Facets,

    /// List venues matching the filters, one page at a time
    List {
        #[command(flatten)]
        filters: FilterArgs,

        /// Sort order: recommended, price-asc, price-desc, name
        #[arg(short = 's', long = "sort", default_value = "recommended")]
        sort: SortStrategy,

        /// Number of pages to show
        #[arg(short = 'p', long = "pages", default_value_t = 1)]
        pages: usize,
    },

    /// Show the details of one venue
    Show {
        /// Venue id
        id: String,
    },

    /// Show the map view: points, camera and (without a map key) a scatter plot
    Map {
        #[command(flatten)]
        filters: FilterArgs,

        /// Simulate a click on this venue's marker
        #[arg(long = "select")]
        select: Option<String>,
    },

    /// Write the loaded catalog in the compiled (.bin) format
    Build {
        /// Output path, should end in .bin
        #[arg(short = 'o', long = "out")]
        out: String,
    },
}

#[derive(Debug, Args)]
pub struct FilterArgs {
    /// Required sport (repeatable, all must match)
    #[arg(long = "sport")]
    pub sports: Vec<String>,

    /// Substring of city or address (case-insensitive)
    #[arg(long = "city")]
    pub city: Option<String>,

    /// Minimum price per hour
    #[arg(long = "min")]
    pub price_min: Option<f64>,

    /// Maximum price per hour
    #[arg(long = "max")]
    pub price_max: Option<f64>,

    /// Must be open on this weekday (e.g. sunday)
    #[arg(long = "day")]
    pub day: Option<Weekday>,

    /// Required amenity (repeatable, all must match)
    #[arg(long = "amenity")]
    pub amenities: Vec<String>,
}

impl FilterArgs {
    pub fn to_filter_state(&self) -> FilterState {
        FilterState {
            sports: self.sports.clone(),
            city: self.city.clone().unwrap_or_default(),
            price_min: self.price_min,
            price_max: self.price_max,
            day: self.day,
            amenities: self.amenities.clone(),
        }
    }
}
