use typedlist::ui::output;

fn main() {
    if let Err(err) = typedlist::cli::run() {
        output::error(format!("{:#}", err));
        std::process::exit(1);
    }
}
