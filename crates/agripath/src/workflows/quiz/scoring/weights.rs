use super::super::domain::{CareerPath, Priority, RiskTolerance};

/// Base affinity (0-3) of each priority for each path.
/// Rows follow `Priority::ordered()`, columns follow `CareerPath::ordered()`.
const PATH_WEIGHTS: [[u8; CareerPath::COUNT]; Priority::COUNT] = [
    // Research, Academics, Agribusiness, Govt Banking, Other Govt
    [1, 1, 3, 3, 1], // Salary
    [1, 2, 0, 3, 3], // Job Security
    [0, 1, 0, 3, 3], // Prestige of Govt Job
    [3, 2, 2, 0, 0], // Innovative and Impactful work
    [2, 1, 3, 3, 1], // Career Growth
    [1, 1, 3, 0, 1], // Flexibility of location
    [2, 1, 3, 0, 0], // Foreign placement opportunities
    [1, 2, 0, 1, 3], // Work-life balance
    [3, 3, 1, 0, 0], // Intellectual freedom
    [1, 3, 1, 0, 1], // Teaching and mentoring
];

pub(crate) const RISK_BONUS: u32 = 20;
pub(crate) const HIGH_INTEREST_BONUS: u32 = 8;
pub(crate) const MODERATE_INTEREST_BONUS: u32 = 3;
pub(crate) const HIGH_INTEREST_MIN: u8 = 8;
pub(crate) const MODERATE_INTEREST_MIN: u8 = 6;

pub fn base_weight(path: CareerPath, priority: Priority) -> u8 {
    PATH_WEIGHTS[priority.index()][path.index()]
}

/// Multiplier for a zero-based rank: the top slot counts 10x, the last 1x.
pub fn rank_multiplier(rank: usize) -> u32 {
    (Priority::COUNT.saturating_sub(rank)) as u32
}

/// Points `priority` adds to `path` when ranked at `rank`.
pub fn priority_contribution(path: CareerPath, priority: Priority, rank: usize) -> u32 {
    rank_multiplier(rank) * u32::from(base_weight(path, priority))
}

/// Paths that a risk-tolerance answer reinforces with a flat bonus.
pub fn reinforced_paths(risk: RiskTolerance) -> &'static [CareerPath] {
    match risk {
        RiskTolerance::Steady => &[
            CareerPath::OtherGovtJobs,
            CareerPath::Academics,
            CareerPath::Research,
        ],
        RiskTolerance::Variable => &[CareerPath::AgribusinessManagement],
        RiskTolerance::ImpactOverIncome => &[CareerPath::Research, CareerPath::Academics],
    }
}
