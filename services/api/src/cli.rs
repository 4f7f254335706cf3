use crate::demo::{run_batch, run_demo, run_score, BatchArgs, DemoArgs, ScoreArgs};
use crate::server;
use agripath::error::AppError;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "AgriPath",
    about = "Run the agricultural career guidance service or score questionnaires from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Score questionnaire answers offline
    Quiz {
        #[command(subcommand)]
        command: QuizCommand,
    },
    /// Walk through the reference student profiles and a sample analytics session
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum QuizCommand {
    /// Score a single JSON submission
    Score(ScoreArgs),
    /// Score every respondent in a CSV export
    Batch(BatchArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Quiz {
            command: QuizCommand::Score(args),
        } => run_score(args),
        Command::Quiz {
            command: QuizCommand::Batch(args),
        } => run_batch(args),
        Command::Demo(args) => run_demo(args).await,
    }
}
