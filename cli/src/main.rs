//! CLI entrypoint for openprop
//!
//! This is the main binary that wires together all layers using
//! dependency injection: config decides the gateway (simulated or live
//! Ollama) and the run tracker, both shared by the assembler.

use anyhow::{bail, Result};
use clap::Parser;
use openprop_application::{
    AssembleProposalInput, AssembleProposalUseCase, GenerationGateway, NoProgress, NoRunTracker,
    RunTracker,
};
use openprop_domain::{ProposalContext, TemplateCatalog};
use openprop_infrastructure::{ConfigLoader, FileRunTracker, OllamaGateway, SimulatedGateway};
use openprop_presentation::{
    Cli, ConsoleFormatter, OutputFormat, ProposalWizard, SectionProgressReporter,
};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    if cli.list_templates {
        for tmpl in TemplateCatalog::templates() {
            println!(
                "{:<24} {} ({} sections)",
                tmpl.id,
                tmpl.title,
                tmpl.section_count()
            );
        }
        return Ok(());
    }

    // Load configuration
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow::anyhow!("Could not load configuration: {}", e))?
    };

    let simulate = cli.simulate || config.simulate;

    // === Dependency Injection ===
    let tracker: Arc<dyn RunTracker> = if config.tracking.enabled {
        Arc::new(FileRunTracker::new(&config.tracking.dir))
    } else {
        Arc::new(NoRunTracker::new())
    };

    let gateway: Arc<dyn GenerationGateway> = if simulate {
        Arc::new(SimulatedGateway::new())
    } else {
        Arc::new(OllamaGateway::new(
            &config.ollama.base_url,
            config.ollama.model.as_str(),
            config.generation.to_params(),
            tracker.clone(),
        ))
    };

    let mode = gateway.mode();
    info!("Starting openprop ({})", mode);

    let use_case = AssembleProposalUseCase::new(gateway, tracker);

    // Wizard mode
    if cli.wizard {
        let wizard = ProposalWizard::new(use_case, mode).with_progress(!cli.quiet);
        wizard.run().await?;
        return Ok(());
    }

    // Direct mode - template id is required
    let template_id = match cli.template {
        Some(id) => id,
        None => bail!("Template id is required. Use --wizard for interactive mode."),
    };

    let template = match TemplateCatalog::require(&template_id) {
        Ok(tmpl) => tmpl,
        Err(_) => bail!(
            "Unknown template '{}'. Valid ids: {}",
            template_id,
            TemplateCatalog::ids().join(", ")
        ),
    };

    let mut context = ProposalContext::new();
    if let Some(company) = cli.company {
        context = context.with_company_name(company);
    }
    if let Some(goal) = cli.goal {
        context = context.with_goal(goal);
    }
    if let Some(tone) = cli.tone {
        context = context.with_tone(tone);
    }

    // Print header
    if !cli.quiet {
        println!();
        println!("OpenProp - {}", template.title);
        println!("Company: {}", context.company_name());
        println!("Mode: {}", mode);
        println!();
    }

    // Execute with or without progress reporting
    let input = AssembleProposalInput::new(template, context);
    let result = if cli.quiet {
        use_case.execute(input, &NoProgress).await
    } else {
        let progress = SectionProgressReporter::new();
        use_case.execute(input, &progress).await
    };

    // Output results
    let output = match cli.output {
        OutputFormat::Document => ConsoleFormatter::format(&result),
        OutputFormat::Summary => ConsoleFormatter::format_summary(&result),
        OutputFormat::Json => ConsoleFormatter::format_json(&result),
    };

    println!("{}", output);

    if let Some(path) = cli.save {
        std::fs::write(&path, result.document.to_markdown())?;
        if !cli.quiet {
            println!("Saved document to {}", path.display());
        }
    }

    Ok(())
}
