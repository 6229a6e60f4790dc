use miette::Result;
use tracing::debug;

use cmdtree::cli::{self, logging, Config};
use cmdtree::core::Driver;

fn main() -> Result<()> {
    // Reset SIGPIPE to default behavior (terminate silently) for proper Unix piping.
    #[cfg(unix)]
    {
        unsafe {
            libc::signal(libc::SIGPIPE, libc::SIG_DFL);
        }
    }
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .tab_width(4)
                .build(),
        )
    }))?;

    let config = Config::load();
    logging::init(&config)?;
    if let Some(color) = config.color {
        console::set_colors_enabled(color);
    }
    debug!(?config, "loaded configuration");

    let mut driver = Driver::new();
    cli::run(&mut driver)?;
    Ok(())
}
