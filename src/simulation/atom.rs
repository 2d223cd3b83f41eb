use crate::physics::electron::Electron;
use crate::physics::elements::{AtomConfig, Element};
use glam::DVec2;
use log::{debug, warn};
use std::collections::BTreeMap;

/// Bohr-style atom: a fixed set of electrons circling on numbered shells.
///
/// Electrons are stored shell by shell in the order of the configuration table,
/// and within a shell in creation order. Callers index into `positions()` with
/// that order.
#[derive(Clone, Debug)]
pub struct Atom {
    element: Element,
    configuration: &'static str,
    electrons: Vec<Electron>,
}

impl Atom {
    pub fn new(config: AtomConfig) -> Self {
        let total = config.total_electrons();
        if total != config.element.atomic_number as usize {
            warn!(
                "{} (Z={}) built with {} electrons from its shell table",
                config.element.name, config.element.atomic_number, total
            );
        }

        let electrons: Vec<Electron> = config
            .shells
            .iter()
            .flat_map(|spec| {
                (0..spec.electrons)
                    .map(move |i| Electron::new(spec.shell, spec.initial_angle(i), spec.speed(i)))
            })
            .collect();

        debug!(
            "populated {} with {} electrons on {} shells",
            config.element.name,
            electrons.len(),
            config.shells.len()
        );

        Self {
            element: config.element,
            configuration: config.configuration,
            electrons,
        }
    }

    pub fn oxygen() -> Self {
        Self::new(AtomConfig::oxygen())
    }

    pub fn element(&self) -> &Element {
        &self.element
    }

    pub fn atomic_number(&self) -> u32 {
        self.element.atomic_number
    }

    pub fn electrons(&self) -> &[Electron] {
        &self.electrons
    }

    pub fn step(&mut self, dt: f64) {
        for electron in &mut self.electrons {
            electron.step(dt);
        }
    }

    /// Electron count per shell, ascending by shell number.
    pub fn shell_counts(&self) -> BTreeMap<u32, usize> {
        let mut counts = BTreeMap::new();
        for electron in &self.electrons {
            *counts.entry(electron.shell()).or_insert(0) += 1;
        }
        counts
    }

    pub fn summary(&self) -> String {
        let mut lines = vec![
            format!("Atome : {} (Z={})", self.element.name, self.element.atomic_number),
            format!(
                "Configuration (approx.): {} -> total {} électrons",
                self.configuration,
                self.electrons.len()
            ),
            format!("Nombre d'électrons: {}", self.electrons.len()),
        ];
        for (shell, count) in self.shell_counts() {
            lines.push(format!("  couche {shell}: {count} électrons"));
        }
        lines.join("\n")
    }

    pub fn positions(&self, radius_scale: f64) -> Vec<DVec2> {
        self.electrons
            .iter()
            .map(|electron| electron.position(radius_scale))
            .collect()
    }
}

impl Default for Atom {
    fn default() -> Self {
        Self::oxygen()
    }
}
