use circulate::ui::output;

fn main() {
    if let Err(err) = circulate::cli::run() {
        output::error(format!("{err:#}"));
        std::process::exit(1);
    }
}
