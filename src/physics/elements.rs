use serde::Serialize;

/// Basic metadata describing a chemical element.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Element {
    pub atomic_number: u32,
    pub symbol: &'static str,
    pub name: &'static str,
}

impl Element {
    pub const fn new(atomic_number: u32, symbol: &'static str, name: &'static str) -> Self {
        Self {
            atomic_number,
            symbol,
            name,
        }
    }

    pub const fn oxygen() -> Self {
        Self::new(8, "O", "Oxygène")
    }

    pub fn symbol(&self) -> &'static str {
        self.symbol
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

/// Occupancy and initial conditions for one shell.
///
/// Electron `i` on the shell starts at angle `2π·i/electrons` and moves at
/// `base_speed + (i mod speed_cycle)·speed_step` radians per step.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ShellSpec {
    pub shell: u32,
    pub electrons: usize,
    pub base_speed: f64,
    pub speed_step: f64,
    pub speed_cycle: usize,
}

impl ShellSpec {
    pub const fn new(
        shell: u32,
        electrons: usize,
        base_speed: f64,
        speed_step: f64,
        speed_cycle: usize,
    ) -> Self {
        Self {
            shell,
            electrons,
            base_speed,
            speed_step,
            speed_cycle,
        }
    }

    pub fn initial_angle(&self, index: usize) -> f64 {
        std::f64::consts::TAU * index as f64 / self.electrons as f64
    }

    pub fn speed(&self, index: usize) -> f64 {
        let cycle = self.speed_cycle.max(1);
        self.base_speed + (index % cycle) as f64 * self.speed_step
    }
}

/// Everything the atom needs at construction time.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AtomConfig {
    pub element: Element,
    /// Illustrative configuration shown in the summary, e.g. `1s2 2s2 2p4`.
    pub configuration: &'static str,
    pub shells: Vec<ShellSpec>,
}

const OXYGEN_SHELLS: [ShellSpec; 2] = [
    ShellSpec::new(1, 2, 0.12, 0.02, 2),
    ShellSpec::new(2, 6, 0.07, 0.01, 3),
];

impl AtomConfig {
    pub fn oxygen() -> Self {
        Self {
            element: Element::oxygen(),
            configuration: "1s2 2s2 2p4",
            shells: OXYGEN_SHELLS.to_vec(),
        }
    }

    pub fn total_electrons(&self) -> usize {
        self.shells.iter().map(|shell| shell.electrons).sum()
    }
}

impl Default for AtomConfig {
    fn default() -> Self {
        Self::oxygen()
    }
}
