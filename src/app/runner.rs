use crate::dispatch::Dispatcher;
use crate::domain::RunConfig;
use crate::error::AppResult;
use crate::metrics::{Aggregate, summarize};

use super::summary;

/// Warm-up, dispatch, aggregate, report. Probe failures never fail the run.
pub(crate) async fn run_local(config: RunConfig) -> AppResult<Aggregate> {
    println!("{}", summary::benchmarking_line(&config));

    let dispatcher = Dispatcher::for_config(config)?;
    if let Some(dump) = dispatcher.warm_up().await {
        for line in summary::header_lines(&dump) {
            println!("{}", line);
        }
    }

    let results = dispatcher.run().await?;
    let aggregate = summarize(&results);
    for line in summary::summary_lines(&aggregate, dispatcher.config()) {
        println!("{}", line);
    }
    Ok(aggregate)
}
