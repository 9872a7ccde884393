use amp::{
    cli::{self, ParseOutcome},
    config, error, warning,
};

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        warning!("Cannot load environment. Err: {}", e);
    }

    let result = match cli::parse_args(std::env::args_os()) {
        Ok(args) => cli::run(args).await,
        Err(ParseOutcome::Display(e)) => e.exit(),
        Err(ParseOutcome::Failed(e)) => Err(e),
    };

    if let Err(e) = result {
        if e.is_usage() {
            eprintln!("{}", e);
        } else {
            error!("{}", e);
        }
        std::process::exit(e.exit_code());
    }
}
