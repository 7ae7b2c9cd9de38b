use std::{
    io::{self, BufRead, Write},
    str::FromStr,
};

use clap::Parser;

use crate::{
    cli::request::RequestArgs,
    core::form::{Field, Form},
    prelude::*,
    quantity::parse_finite,
    tables::build_estimate_table,
};

const HELP: &str = "\
Commands:
  <field> <value>   change a field, for example `power 350` or `voltage=24`
  reset             restore the default values
  show              print the current estimate
  help              print this message
  quit              leave the form

Fields: current-percentage (percentage), discharge-rate (power), battery-capacity (capacity), \
voltage (volts), low-threshold (threshold)";

#[derive(Parser)]
pub struct FormArgs {
    /// Initial form values.
    #[clap(flatten)]
    request: RequestArgs,
}

impl FormArgs {
    #[instrument(skip_all)]
    pub fn run(self) -> Result {
        let mut form = Form::new(self.request.into());
        run_session(&mut form, io::stdin().lock(), io::stdout().lock())
    }
}

#[derive(Debug, PartialEq)]
enum Action {
    Set(Field, f64),
    Reset,
    Show,
    Help,
    Quit,
}

impl FromStr for Action {
    type Err = Error;

    fn from_str(line: &str) -> Result<Self> {
        let line = line.trim();
        match line.to_ascii_lowercase().as_str() {
            "" | "show" => return Ok(Self::Show),
            "reset" => return Ok(Self::Reset),
            "help" | "?" => return Ok(Self::Help),
            "quit" | "exit" | "q" => return Ok(Self::Quit),
            _ => {}
        }
        let (name, value) = line.split_once(['=', ' ', '\t']).unwrap_or((line, ""));
        let field: Field = name.parse()?;
        let value = parse_finite(value.trim().trim_start_matches('='))
            .with_context(|| format!("invalid value for `{field}`"))?;
        Ok(Self::Set(field, value))
    }
}

/// Run the form until the input ends or the user quits.
///
/// Lines that are not valid UTF-8 are decoded lossily and end up reported as unknown commands.
fn run_session(form: &mut Form, mut input: impl BufRead, mut output: impl Write) -> Result {
    render(form, &mut output)?;
    let mut buffer = Vec::new();
    loop {
        write!(output, "> ")?;
        output.flush()?;
        buffer.clear();
        if input.read_until(b'\n', &mut buffer).context("failed to read the input")? == 0 {
            writeln!(output)?;
            break;
        }
        let line = String::from_utf8_lossy(&buffer);
        match line.parse::<Action>() {
            Ok(Action::Set(field, value)) => {
                form.set(field, value);
                render(form, &mut output)?;
            }
            Ok(Action::Reset) => {
                form.reset();
                info!("reset to the defaults");
                render(form, &mut output)?;
            }
            Ok(Action::Show) => render(form, &mut output)?,
            Ok(Action::Help) => writeln!(output, "{HELP}")?,
            Ok(Action::Quit) => break,
            Err(error) => {
                warn!("{error:#}");
                writeln!(output, "{error:#}, type `help` for the list of commands")?;
            }
        }
    }
    Ok(())
}

fn render(form: &Form, output: &mut impl Write) -> Result {
    writeln!(output, "{}", build_estimate_table(form.request(), form.estimate()))?;
    Ok(())
}
