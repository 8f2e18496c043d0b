// src/bin/cli.rs
use color_eyre::eyre::WrapErr;
use sheet_catalog::cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    match cli::run() {
        // Same line the page's status bar would show.
        Err(e) if e.is_load_failure() => {
            eprintln!("{}", e.status_text());
            std::process::exit(1);
        }
        res => res.wrap_err("sheet_catalog cli failed"),
    }
}
