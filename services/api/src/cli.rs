use crate::report::{
    run_candidate_export, run_candidate_list, run_candidate_stats, CandidateExportArgs,
    CandidateListArgs, CandidateStatsArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use fortitwin::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "FortiTwin Candidate Dashboard",
    about = "Serve and query the FortiTwin HR candidate dashboard",
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
    /// Query the candidate dataset from the command line
    Candidates {
        #[command(subcommand)]
        command: CandidatesCommand,
    },
}

#[derive(Subcommand, Debug)]
enum CandidatesCommand {
    /// Print one page of the filtered, sorted candidate table
    List(CandidateListArgs),
    /// Write the filtered, sorted candidates as CSV
    Export(CandidateExportArgs),
    /// Print headline statistics and breakdowns for the whole dataset
    Stats(CandidateStatsArgs),
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
        Command::Candidates { command } => match command {
            CandidatesCommand::List(args) => run_candidate_list(args),
            CandidatesCommand::Export(args) => run_candidate_export(args),
            CandidatesCommand::Stats(args) => run_candidate_stats(args),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_defaults_to_serve() {
        let cli = Cli::try_parse_from(["fortitwin-api"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn list_accepts_filter_flags() {
        let cli = Cli::try_parse_from([
            "fortitwin-api",
            "candidates",
            "list",
            "--department",
            "Engineering",
            "--sort",
            "score",
            "--direction",
            "desc",
            "--page-size",
            "10",
        ])
        .expect("parses");

        match cli.command {
            Some(Command::Candidates {
                command: CandidatesCommand::List(args),
            }) => {
                assert_eq!(args.query.department.as_deref(), Some("Engineering"));
                assert_eq!(args.query.sort.as_deref(), Some("score"));
                assert_eq!(args.page_size, Some(10));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn serve_accepts_host_and_port() {
        let cli = Cli::try_parse_from(["fortitwin-api", "serve", "--port", "8080"])
            .expect("parses");
        match cli.command {
            Some(Command::Serve(args)) => {
                assert_eq!(args.port, Some(8080));
                assert!(args.host.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
