use anyhow::Result;
use clap::Parser;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "aprender",
    version,
    about = "Recorrido por los fundamentos de Rust, sección a sección"
)]
struct Cli {}

pub(crate) fn run() -> Result<()> {
    let _cli = Cli::parse();
    debug!("starting walkthrough");
    aprender::run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn rejects_unknown_arguments() {
        assert!(Cli::try_parse_from(["aprender", "--section", "3"]).is_err());
        assert!(Cli::try_parse_from(["aprender"]).is_ok());
    }
}
