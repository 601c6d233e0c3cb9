use clap::Parser;
use estatelens::cli::commands::{Cli, Commands};
use estatelens::config::Config;
use estatelens::domain::clusters::overall_avg_roi;
use estatelens::domain::entities::property::NewProperty;
use estatelens::domain::values::scenario::Scenario;
use estatelens::infrastructure::sources::json_file::JsonFileSource;
use estatelens::infrastructure::sources::unit_api::UnitApiSource;
use estatelens::EstateLens;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("estatelens=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = Config::from_env();
    if let Some(db) = cli.db {
        config.db_path = db;
    }

    let lens = match EstateLens::new(&config) {
        Ok(lens) => lens,
        Err(e) => {
            eprintln!("Error initializing EstateLens: {e}");
            std::process::exit(1);
        }
    };

    let result = run_command(lens, &config, cli.command).await;
    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

async fn run_command(lens: EstateLens, config: &Config, cmd: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        Commands::Explore { filters, summary_only } => {
            let spec = filters.to_spec()?;
            let result = lens.explore(&spec)?;
            if summary_only {
                print_json(&result.summary)?;
            } else {
                print_json(&result)?;
            }
        }
        Commands::Add { json } => {
            let input: NewProperty = serde_json::from_str(&json)?;
            print_json(&lens.add_property(input)?)?;
        }
        Commands::Update { id, json } => {
            let input: NewProperty = serde_json::from_str(&json)?;
            print_json(&lens.update_property(&id, input)?)?;
        }
        Commands::Remove { id } => {
            lens.remove_property(&id)?;
            println!("Removed property {id}");
        }
        Commands::Show { id } => {
            print_json(&lens.get_property(&id)?)?;
        }
        Commands::List { limit } => {
            let mut properties = lens.list_properties()?;
            if let Some(limit) = limit {
                properties.truncate(limit);
            }
            print_json(&properties)?;
        }
        Commands::Import { file, api, api_url } => {
            let report = if let Some(path) = file {
                lens.import_from(&JsonFileSource::new(path)).await?
            } else if api {
                let base = api_url
                    .or_else(|| config.api_url.clone())
                    .ok_or("No API URL: pass --api-url or set ESTATELENS_API_URL")?;
                lens.import_from(&UnitApiSource::new(base, config.api_token.clone())).await?
            } else {
                return Err("Nothing to import: pass --file <path> or --api".into());
            };
            print_json(&report)?;
        }
        Commands::Clusters => {
            let clusters = lens.clusters()?;
            print_json(&serde_json::json!({
                "overallAvgROI": overall_avg_roi(&clusters),
                "clusters": clusters,
            }))?;
        }
        Commands::Analytics => {
            print_json(&lens.analytics()?)?;
        }
        Commands::Histogram { bin_width } => {
            print_json(&lens.roi_histogram(bin_width)?)?;
        }
        Commands::Percentile { id } => {
            print_json(&lens.roi_placement(&id)?)?;
        }
        Commands::Comparables { id, limit } => {
            print_json(&lens.comparables(&id, limit)?)?;
        }
        Commands::Simulate { id, scenarios, months, search } => {
            let scenarios: Vec<Scenario> = match scenarios {
                Some(json) => serde_json::from_str(&json)?,
                None => Scenario::defaults(),
            };
            let simulation = match search {
                Some(search_id) => lens.simulate_for_search(&id, &search_id, scenarios, months)?,
                None => lens.simulate(&id, scenarios, months)?,
            };
            print_json(&simulation)?;
        }
        Commands::SearchSave { name, filters } => {
            let spec = filters.to_spec()?;
            print_json(&lens.save_search(name, spec)?)?;
        }
        Commands::Searches => {
            print_json(&lens.saved_searches()?)?;
        }
        Commands::SearchRemove { id } => {
            lens.remove_search(&id)?;
            println!("Removed saved search {id}");
        }
        Commands::Alerts { id } => match id {
            Some(id) => print_json(&lens.check_search(&id)?)?,
            None => print_json(&lens.check_all_searches()?)?,
        },
    }
    Ok(())
}
