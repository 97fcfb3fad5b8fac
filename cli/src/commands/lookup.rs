use std::io::Write;

use anyhow::{Result, bail};
use clap::Args;
use trainer_coverage::Pokedex;
use trainer_records::{DataSource, IdOrName, ResourceKind};

use crate::display;

/// Look up one or more resources by pokedex id or name
#[derive(Args, Debug)]
pub struct Lookup {
    /// Ids or names; names are case-insensitive
    #[arg(value_name = "ID_OR_NAME", required = true)]
    pub keys: Vec<String>,
}

impl Lookup {
    /// A failed key is reported and the rest are still looked up.
    pub fn execute<S: DataSource, W: Write>(
        self,
        kind: ResourceKind,
        dex: &mut Pokedex<S>,
        out: &mut W,
    ) -> Result<()> {
        let mut failed = 0;
        for input in &self.keys {
            match describe(kind, input, dex) {
                Ok(text) => writeln!(out, "{text}\n")?,
                Err(e) => {
                    failed += 1;
                    writeln!(out, "{input} failed: {e:#}\n")?;
                }
            }
        }

        if failed > 0 {
            bail!("{failed} of {} {kind} lookups failed", self.keys.len());
        }
        Ok(())
    }
}

fn describe<S: DataSource>(kind: ResourceKind, input: &str, dex: &mut Pokedex<S>) -> Result<String> {
    let key: IdOrName = input.parse()?;
    let text = match kind {
        ResourceKind::Type => display::type_details(&*dex.type_(&key)?),
        ResourceKind::Move => display::move_details(&*dex.move_(&key)?),
        ResourceKind::Pokemon => display::species_details(&*dex.species(&key)?),
    };
    Ok(text)
}
