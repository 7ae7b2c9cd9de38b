mod estimate;
mod form;
mod request;

use clap::{Parser, Subcommand};

use crate::{
    cli::{estimate::EstimateArgs, form::FormArgs},
    prelude::*,
};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Estimate the remaining runtime once and print the result.
    #[clap(name = "estimate")]
    Estimate(Box<EstimateArgs>),

    /// Interactive form: change the inputs one by one and watch the estimate follow.
    #[clap(name = "form")]
    Form(Box<FormArgs>),
}

impl Command {
    pub fn run(self) -> Result {
        match self {
            Self::Estimate(args) => args.run(),
            Self::Form(args) => args.run(),
        }
    }
}
