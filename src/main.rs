mod nav;
mod navigator;
mod views;

#[cfg(feature = "prerender")]
mod cli;

#[cfg(not(any(feature = "web", feature = "prerender")))]
compile_error!("enable either the `web` or the `prerender` feature");

fn main() {
    #[cfg(feature = "web")]
    {
        dioxus::launch(views::App);
    }

    #[cfg(all(feature = "prerender", not(feature = "web")))]
    {
        env_logger::init();

        if let Err(e) = cli::run() {
            log::error!("Error rendering header:\n{}", e);
            std::process::exit(1);
        }
    }
}
