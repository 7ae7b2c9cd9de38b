use clap::Parser;
use serde::Serialize;

use crate::{
    cli::request::RequestArgs,
    core::{
        estimator::{Estimate, estimate},
        request::EstimationRequest,
        runtime::Runtime,
        validation::ValidationError,
    },
    prelude::*,
    tables::build_estimate_table,
};

#[derive(Parser)]
pub struct EstimateArgs {
    #[clap(flatten)]
    request: RequestArgs,

    /// Print the result as JSON instead of a table.
    #[clap(long, env = "JSON_OUTPUT")]
    json: bool,
}

impl EstimateArgs {
    #[instrument(skip_all)]
    pub fn run(self) -> Result {
        let request = EstimationRequest::from(self.request);
        let estimate = estimate(&request);
        if let Some(error) = estimate.error {
            warn!(%error, "the inputs do not validate");
        }
        if self.json {
            let report = Report::new(&request, &estimate);
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            println!("{}", build_estimate_table(&request, &estimate));
        }
        Ok(())
    }
}

/// Machine-readable estimate.
#[derive(Serialize)]
struct Report<'a> {
    request: &'a EstimationRequest,
    runtime: Runtime,
    display_text: String,
    error: Option<ValidationError>,
    message: Option<String>,
}

impl<'a> Report<'a> {
    fn new(request: &'a EstimationRequest, estimate: &Estimate) -> Self {
        Self {
            request,
            runtime: estimate.runtime,
            display_text: estimate.display_text(),
            error: estimate.error,
            message: estimate.error.map(|error| error.to_string()),
        }
    }
}
