use assetgen::{
    cli::{get_args, get_log_level_from_verbose, print_usage, run},
    constants::exit_codes,
    error::default_error_handler,
};

fn main() {
    let args = get_args();
    env_logger::Builder::new()
        .filter_level(get_log_level_from_verbose(args.verbose))
        .init();

    if let Err(err) = run(args) {
        if err.shows_usage() {
            log::warn!("{err}");
            print_usage();
            std::process::exit(exit_codes::FAILURE);
        }
        default_error_handler(err);
    }
}
