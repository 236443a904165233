//! Submission loop between an input provider and an output writer.

use crate::classify;
use crate::config::Config;
use crate::input::InputProvider;
use crate::output::{render_header, render_outcome};
use std::error::Error;
use std::io::Write;

/// Counts of one session.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub classified: usize,
    pub failed: usize,
}

/// Classify every submission from `input` and write each outcome to `out`.
///
/// A failed submission is reported and the loop carries on, so an
/// interactive user can correct the address and try again.
pub fn run_session<P, W>(
    input: &mut P,
    config: &Config,
    out: &mut W,
) -> Result<SessionSummary, Box<dyn Error>>
where
    P: InputProvider,
    W: Write,
{
    log::info!("#Start run_session() format={}", config.format);
    let mut summary = SessionSummary::default();

    if let Some(header) = render_header(config.format) {
        out.write_all(header.as_bytes())?;
    }

    while let Some(candidate) = input.next_input() {
        let result = classify(&candidate);
        match &result {
            Ok(c) => {
                summary.classified += 1;
                log::info!("Classified {} as class {}", c.address, c.ip_class);
            }
            Err(e) => {
                summary.failed += 1;
                log::info!("Rejected {candidate:?}: {e}");
            }
        }
        out.write_all(render_outcome(&candidate, &result, config)?.as_bytes())?;
        out.flush()?;
    }

    log::info!(
        "# End run_session() classified={} failed={}",
        summary.classified,
        summary.failed
    );
    Ok(summary)
}
