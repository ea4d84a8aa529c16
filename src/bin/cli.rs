// src/bin/cli.rs

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    covid_rank::cli::run()
}
