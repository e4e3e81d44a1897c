use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::sections::{self, Section};

pub const BANNER: &str = "=== Aprender Rust ===";
pub const FAREWELL: &str = "¡Ejemplos completados!";

/// Write the whole walkthrough to `out`.
///
/// Every section is `--- <title> ---`, its body, then one blank line. The list
/// built for the lists section is reused by the iterators section.
pub fn render<W: Write + ?Sized>(out: &mut W) -> Result<()> {
    writeln!(out, "{BANNER}\n").context("writing banner")?;

    let lista = sections::build_list();
    for section in Section::ALL {
        let title = section.title();
        debug!(section = section.number(), title, "writing section");
        write_section(out, section, &lista)
            .with_context(|| format!("writing section `{title}`"))?;
    }

    writeln!(out, "{FAREWELL}").context("writing closing line")?;
    Ok(())
}

fn write_section<W: Write + ?Sized>(out: &mut W, section: Section, lista: &[i32]) -> Result<()> {
    writeln!(out, "--- {} ---", section.title())?;
    match section {
        Section::Variables => sections::write_scalars(out)?,
        Section::Arrays => sections::write_array(out)?,
        Section::Lists => sections::write_list(out, lista)?,
        Section::Maps => sections::write_map(out)?,
        Section::Loops => sections::write_loops(out)?,
        Section::Functions => sections::write_functions(out)?,
        Section::Structs => sections::write_persona(out)?,
        Section::Iterators => sections::write_evens(out, lista)?,
    }
    writeln!(out)?;
    Ok(())
}

/// Render to stdout, flushing before returning.
pub fn run() -> Result<()> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    render(&mut out)?;
    out.flush().context("flushing stdout")?;
    info!(sections = Section::ALL.len(), "walkthrough complete");
    Ok(())
}
