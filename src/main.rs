//! appseed's main application entry point.
//! Parses arguments, collects answers and hands them to the orchestrator.

use appseed::{
    cli::{get_args, Args},
    constants::PROJECT_NAME_TOKEN,
    error::{default_error_handler, Result},
    materializer::MaterializeOptions,
    orchestrator::Orchestrator,
    prompt::{answers_from_stdin, collect_answers, DialoguerPrompter},
    report::ConsoleReporter,
    runner::SystemRunner,
    template::TemplateRegistry,
};

/// Main application entry point.
fn main() {
    let args = get_args();

    // Logger configuration
    env_logger::Builder::new()
        .filter_level(if args.verbose { log::LevelFilter::Debug } else { log::LevelFilter::Warn })
        .init();

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Selects the template
/// 2. Collects answers (prompt or stdin)
/// 3. Creates and fills the project directory
/// 4. Initializes git, seeds `.env`, optionally updates dependencies and installs hooks
fn run(args: Args) -> Result<()> {
    let registry = TemplateRegistry::discover(args.templates_root())?;
    let template_root = registry.select()?;

    let answers = if args.stdin {
        answers_from_stdin()?
    } else {
        collect_answers(&DialoguerPrompter::new())?
    };

    let options =
        MaterializeOptions::with_defaults()?.substitute(PROJECT_NAME_TOKEN, answers.name());

    let runner = SystemRunner::new();
    let reporter = ConsoleReporter::new();
    let base_dir = std::env::current_dir()?;

    Orchestrator::new(&runner, &reporter, base_dir)
        .with_materialize_options(options)
        .run(&answers, template_root)?;

    Ok(())
}
