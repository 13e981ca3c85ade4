mod layout;
mod logging;
mod platform;
mod shader;
mod step;

use anyhow::Context;
use layout::Layout;
use platform::Platform;
use step::BuildStep;

#[macro_use]
extern crate tracing;

fn main() -> anyhow::Result<()> {
    tracing::subscriber::set_global_default(logging::subscriber(
        logging::env_filter(),
        std::io::stdout,
    ))
    .context("could not install the log subscriber")?;

    let cwd = std::env::current_dir().context("could not determine the working directory")?;
    let layout = Layout::detect(&cwd);
    debug!(?layout, "resolved paths");

    let step = BuildStep::from_layout(layout, Platform::host());
    let summary = step.run()?;

    // per-shader failures are reported but do not change the exit code
    let failed = summary.failed();
    if failed > 0 {
        warn!("{failed} shader(s) failed to compile");
    }

    Ok(())
}
