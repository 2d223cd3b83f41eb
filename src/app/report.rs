use crate::error::Result;
use crate::simulation::atom::Atom;
use serde::Serialize;
use std::collections::BTreeMap;
use std::io::Write;

/// Writes the summary followed by labelled starting positions.
pub fn write_text<W: Write>(out: &mut W, atom: &Atom, radius_scale: f64) -> Result<()> {
    writeln!(out, "{}", atom.summary())?;
    writeln!(out, "Positions initiales (x, y) :")?;
    for (i, p) in atom.positions(radius_scale).iter().enumerate() {
        writeln!(out, "  {}: ({:.3}, {:.3})", electron_label(i), p.x, p.y)?;
    }
    Ok(())
}

/// 1-based, zero-padded label: `e01`, `e02`, ...
pub fn electron_label(index: usize) -> String {
    format!("e{:02}", index + 1)
}

#[derive(Debug, Serialize)]
pub struct Snapshot<'a> {
    pub name: &'a str,
    pub symbol: &'a str,
    pub atomic_number: u32,
    pub electron_count: usize,
    pub shells: BTreeMap<u32, usize>,
    pub radius_scale: f64,
    pub positions: Vec<LabelledPosition>,
}

#[derive(Debug, Serialize)]
pub struct LabelledPosition {
    pub label: String,
    pub shell: u32,
    pub x: f64,
    pub y: f64,
}

impl<'a> Snapshot<'a> {
    pub fn new(atom: &'a Atom, radius_scale: f64) -> Self {
        let positions = atom
            .electrons()
            .iter()
            .enumerate()
            .map(|(i, electron)| {
                let p = electron.position(radius_scale);
                LabelledPosition {
                    label: electron_label(i),
                    shell: electron.shell(),
                    x: p.x,
                    y: p.y,
                }
            })
            .collect();

        Self {
            name: atom.element().name(),
            symbol: atom.element().symbol(),
            atomic_number: atom.atomic_number(),
            electron_count: atom.electrons().len(),
            shells: atom.shell_counts(),
            radius_scale,
            positions,
        }
    }
}

pub fn write_json<W: Write>(out: &mut W, atom: &Atom, radius_scale: f64) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, &Snapshot::new(atom, radius_scale))?;
    writeln!(out)?;
    Ok(())
}
