use colored::Colorize;

mod cli;

fn main() {
    match cli::run() {
        Ok(status) => std::process::exit(cli::output::exit_code(status)),
        Err(e) => {
            eprintln!("{} {}", "ERROR:".red(), e);
            std::process::exit(2);
        }
    }
}
