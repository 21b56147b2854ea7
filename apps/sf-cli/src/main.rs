use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use sf_app::{AnalysisOptions, AnalysisRequest, AppResult};
use sf_results::SolarAnalysis;

#[derive(Parser)]
#[command(name = "sf-cli")]
#[command(about = "SolarFlow CLI - Rooftop solar potential estimation tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate project file syntax and structure
    Validate {
        /// Path to the project YAML file
        project_path: PathBuf,
    },
    /// List sites in a project
    Sites {
        /// Path to the project YAML file
        project_path: PathBuf,
    },
    /// Analyze one site
    Analyze {
        /// Path to the project YAML file
        project_path: PathBuf,
        /// Site ID to analyze
        site_id: String,
        /// Skip cache and force re-analysis
        #[arg(long)]
        no_cache: bool,
    },
    /// Analyze every site in the project
    AnalyzeAll {
        /// Path to the project YAML file
        project_path: PathBuf,
        /// Skip cache and force re-analysis
        #[arg(long)]
        no_cache: bool,
    },
    /// List cached analyses for a site
    Analyses {
        /// Path to the project YAML file
        project_path: PathBuf,
        /// Site ID to list analyses for
        site_id: String,
    },
    /// Show details of a cached analysis
    ShowAnalysis {
        /// Path to the project YAML file
        project_path: PathBuf,
        /// Analysis ID to display
        analysis_id: String,
    },
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { project_path } => cmd_validate(&project_path),
        Commands::Sites { project_path } => cmd_sites(&project_path),
        Commands::Analyze {
            project_path,
            site_id,
            no_cache,
        } => cmd_analyze(&project_path, &site_id, !no_cache),
        Commands::AnalyzeAll {
            project_path,
            no_cache,
        } => cmd_analyze_all(&project_path, !no_cache),
        Commands::Analyses {
            project_path,
            site_id,
        } => cmd_analyses(&project_path, &site_id),
        Commands::ShowAnalysis {
            project_path,
            analysis_id,
        } => cmd_show_analysis(&project_path, &analysis_id),
    }
}

fn cmd_validate(project_path: &Path) -> AppResult<()> {
    println!("Validating project: {}", project_path.display());
    let project = sf_app::load_project(project_path)?;
    sf_app::validate_project(&project)?;
    println!("✓ Project is valid");
    Ok(())
}

fn cmd_sites(project_path: &Path) -> AppResult<()> {
    let project = sf_app::load_project(project_path)?;
    let sites = sf_app::list_sites(&project);

    if sites.is_empty() {
        println!("No sites found in project");
    } else {
        println!("Sites in project:");
        for site in sites {
            println!(
                "  {} - {} ({} m² roof, panel: {})",
                site.id, site.name, site.roof_area_m2, site.panel
            );
        }
    }
    Ok(())
}

fn cmd_analyze(project_path: &Path, site_id: &str, use_cache: bool) -> AppResult<()> {
    println!("Analyzing site: {}", site_id);

    let request = AnalysisRequest {
        project_path,
        site_id,
        options: AnalysisOptions {
            use_cache,
            ..AnalysisOptions::default()
        },
    };

    let response = sf_app::ensure_analysis(&request)?;

    if response.loaded_from_cache {
        println!("✓ Loaded from cache: {}", response.analysis_id);
    } else {
        println!("✓ Analysis completed: {}", response.analysis_id);
    }

    print_analysis(&response.analysis);
    Ok(())
}

fn cmd_analyze_all(project_path: &Path, use_cache: bool) -> AppResult<()> {
    let options = AnalysisOptions {
        use_cache,
        ..AnalysisOptions::default()
    };

    let outcomes = sf_app::analyze_all(project_path, &options)?;

    for outcome in &outcomes {
        match &outcome.result {
            Ok(response) => {
                let analysis = &response.analysis;
                println!(
                    "✓ {}: {} panels, {:.1} W{}",
                    outcome.site_id,
                    analysis.panel_count,
                    analysis.estimated_power_output_w,
                    if response.loaded_from_cache {
                        " (cached)"
                    } else {
                        ""
                    }
                );
            }
            Err(err) => println!("✗ {}: {}", outcome.site_id, err),
        }
    }

    let failed = outcomes.iter().filter(|o| o.result.is_err()).count();
    println!(
        "Analyzed {} site(s), {} failed",
        outcomes.len() - failed,
        failed
    );
    Ok(())
}

fn cmd_analyses(project_path: &Path, site_id: &str) -> AppResult<()> {
    let manifests = sf_app::list_analyses(project_path, site_id)?;

    if manifests.is_empty() {
        println!("No cached analyses found for site: {}", site_id);
    } else {
        println!("Cached analyses for site '{}':", site_id);
        for manifest in manifests {
            println!("  {} ({})", manifest.analysis_id, manifest.timestamp);
        }
    }
    Ok(())
}

fn cmd_show_analysis(project_path: &Path, analysis_id: &str) -> AppResult<()> {
    println!("Loading analysis: {}", analysis_id);

    let (manifest, analysis) = sf_app::load_analysis(project_path, analysis_id)?;

    println!("\nAnalysis for site '{}':", manifest.site_id);
    println!("  Computed: {}", manifest.timestamp);
    println!("  Engine:   {}", manifest.engine_version);
    print_analysis(&analysis);

    Ok(())
}

fn print_analysis(analysis: &SolarAnalysis) {
    println!("  Roof area:            {:.1} m²", analysis.roof_area_m2);
    println!("  Available area:       {:.1} m²", analysis.available_area_m2);
    println!("  Panel footprint:      {:.2} m²", analysis.panel_area_m2);
    println!("  Panel count:          {}", analysis.panel_count);
    println!("  Total panel area:     {:.1} m²", analysis.total_panel_area_m2);
    println!(
        "  Effective panel area: {:.1} m²",
        analysis.effective_panel_area_m2
    );
    println!(
        "  Estimated output:     {:.1} W",
        analysis.estimated_power_output_w
    );
    println!("  System efficiency:    {:.2}", analysis.efficiency);
}
