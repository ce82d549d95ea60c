use clap::Parser;
use page_enhancer::config::AppConfig;
use page_enhancer::enhance::OpenAiEnhancer;
use page_enhancer::{EnhancedPage, Error, Pipeline};
use std::process::ExitCode;

mod args;
use args::Args;

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    env_logger::init();

    let args = Args::parse();

    match run(&args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Shown verbatim; enhancement messages are meant for the user
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: &Args) -> Result<(), Error> {
    ::log::info!("Processing {}", args.uri);

    let mut config = match &args.config {
        Some(path) => AppConfig::from_file(path)?,
        None => AppConfig::default(),
    }
    .with_env_overrides();
    if let Some(model) = &args.model {
        config.enhancer.model = model.clone();
    }

    let pipeline = Pipeline::new(args.source())
        .with_config(config)
        .with_options(args.options());

    let start_time = std::time::Instant::now();
    let page = if args.extract_only {
        EnhancedPage {
            content: pipeline.capture().await?,
            enhancement: None,
        }
    } else {
        let enhancer = OpenAiEnhancer::new(&pipeline.config().enhancer)?;
        pipeline.run(&enhancer).await?
    };
    ::log::info!(
        "Finished {} in {:.2} seconds",
        page.content.url,
        start_time.elapsed().as_secs_f64()
    );

    let json = if args.pretty {
        serde_json::to_string_pretty(&page).map_err(std::io::Error::from)?
    } else {
        serde_json::to_string(&page).map_err(std::io::Error::from)?
    };
    println!("{json}");
    Ok(())
}
