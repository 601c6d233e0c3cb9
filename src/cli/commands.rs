use clap::{Parser, Subcommand};

use crate::cli::filter_args::FilterArgs;

#[derive(Parser)]
#[command(name = "estatelens", about = "Filter, rank and analyze investment properties")]
pub struct Cli {
    /// SQLite database path (overrides ESTATELENS_DB)
    #[arg(long, global = true)]
    pub db: Option<String>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Filter and rank the catalog, printing properties and a summary
    Explore {
        #[command(flatten)]
        filters: FilterArgs,
        /// Print only the summary
        #[arg(long)]
        summary_only: bool,
    },
    /// Add a property
    Add {
        /// JSON with address, neighborhood, latitude, longitude, price, size, rooms,
        /// propertyType, predictedROI, arbitrageScore and optional fields
        json: String,
    },
    /// Replace a property's fields
    Update {
        id: String,
        /// Same JSON shape as `add`
        json: String,
    },
    /// Delete a property
    Remove { id: String },
    /// Show one property
    Show { id: String },
    /// List the catalog in insertion order
    List {
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Import properties from a dataset file or the property-unit API
    Import {
        /// JSON file containing an array of properties
        #[arg(long, conflicts_with = "api")]
        file: Option<String>,
        /// Fetch from the API at ESTATELENS_API_URL (or --api-url)
        #[arg(long)]
        api: bool,
        #[arg(long, requires = "api")]
        api_url: Option<String>,
    },
    /// Per-cluster statistics
    Clusters,
    /// Catalog-wide market analytics
    Analytics,
    /// ROI histogram of the catalog
    Histogram {
        /// Bucket width in ROI percentage points
        #[arg(long, default_value = "0.5")]
        bin_width: f64,
    },
    /// Percentile of a property's ROI within its neighborhood and the catalog
    Percentile { id: String },
    /// Similar properties in the same neighborhood
    Comparables {
        id: String,
        #[arg(long, default_value = "5")]
        limit: usize,
    },
    /// Simulate holding-period returns for a property
    Simulate {
        id: String,
        /// JSON array of scenarios (name, interestRate, holdingPeriod, marketGrowth, rentalYield);
        /// defaults to base, optimistic and pessimistic cases
        #[arg(long)]
        scenarios: Option<String>,
        /// Override the holding period (months) of every scenario
        #[arg(long)]
        months: Option<u32>,
        /// Take the holding period from this saved search when --months is absent
        #[arg(long)]
        search: Option<String>,
    },
    /// Save a filter specification under a name
    SearchSave {
        name: String,
        #[command(flatten)]
        filters: FilterArgs,
    },
    /// List saved searches
    Searches,
    /// Delete a saved search
    SearchRemove { id: String },
    /// Re-run saved searches and report new matches
    Alerts {
        /// Check only this saved search
        id: Option<String>,
    },
}
