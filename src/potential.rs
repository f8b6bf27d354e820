//! Potential tables for attack and support relations.
//!
//! A potential table assigns a nonnegative weight to each of the four joint
//! values of a pair of binary arguments, encoding how strongly one argument
//! reinforces or suppresses belief in the other. Eight named presets cover
//! the commonly used BAF semantics; custom values are accepted for both
//! tables.

use ndarray::{array, Array2};

/// Alias f64 ndarray::Array2 as Table
pub type Table = Array2<f64>;

/// The two relation kinds of a bipolar argumentation framework.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RelationKind {
    Attack,
    Support
}

impl RelationKind {

    /// The keyword used for this kind in the model language.
    pub fn keyword(&self) -> &'static str {
        match *self {
            RelationKind::Attack => "attack",
            RelationKind::Support => "support"
        }
    }

}

/// A 2x2 potential over the joint values of a relation's two arguments.
///
/// Entries are indexed `(source value, target value)`; the canonical flat
/// order is `(0,0), (0,1), (1,0), (1,1)`. All entries are expected to be
/// nonnegative; a table that zeroes out every reachable assignment surfaces
/// later as `EristicError::DegenerateModel` during inference.
#[derive(Clone, Debug, PartialEq)]
pub struct PotentialTable {
    table: Table
}

impl PotentialTable {

    /// Build a table from values in `(0,0), (0,1), (1,0), (1,1)` order.
    pub fn from_values(values: [f64; 4]) -> Self {
        let [v00, v01, v10, v11] = values;
        PotentialTable { table: array![[v00, v01], [v10, v11]] }
    }

    /// Weight of the joint value `(a, b)`. Both indices must be 0 or 1.
    pub fn value(&self, a: usize, b: usize) -> f64 {
        self.table[[a, b]]
    }

    /// The four entries in canonical flat order.
    pub fn values(&self) -> [f64; 4] {
        [
            self.table[[0, 0]],
            self.table[[0, 1]],
            self.table[[1, 0]],
            self.table[[1, 1]]
        ]
    }

}

/// The eight built-in factor specifications.
///
/// Each preset fixes both the attack and the support table as literal
/// 4-tuples. `Weak` is the default.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Preset {
    Strong,
    Tolerant,
    Requiting,
    Strict,
    Weak,
    Parsimonious,
    Penalizing,
    Permissive
}

impl Preset {

    /// The attack table of this preset.
    pub fn attack(self) -> PotentialTable {
        PotentialTable::from_values(match self {
            Preset::Strong => [1.0, 1.0, 2.0, 0.0],
            Preset::Tolerant => [1.0, 1.0, 2.0, 0.5],
            Preset::Requiting => [1.0, 1.0, 2.0, 1.0],
            Preset::Strict => [1.0, 1.0, 1.5, 0.0],
            Preset::Weak => [1.0, 1.0, 1.5, 0.5],
            Preset::Parsimonious => [1.0, 1.0, 1.5, 1.0],
            Preset::Penalizing => [1.0, 1.0, 1.0, 0.0],
            Preset::Permissive => [1.0, 1.0, 1.0, 0.5]
        })
    }

    /// The support table of this preset.
    pub fn support(self) -> PotentialTable {
        PotentialTable::from_values(match self {
            Preset::Strong => [1.0, 1.0, 0.0, 2.0],
            Preset::Tolerant => [1.0, 1.0, 0.5, 2.0],
            Preset::Requiting => [1.0, 1.0, 1.0, 2.0],
            Preset::Strict => [1.0, 1.0, 0.0, 1.5],
            Preset::Weak => [1.0, 1.0, 0.5, 1.5],
            Preset::Parsimonious => [1.0, 1.0, 1.0, 1.5],
            Preset::Penalizing => [1.0, 1.0, 0.0, 1.0],
            Preset::Permissive => [1.0, 1.0, 0.5, 1.0]
        })
    }

}

/// The currently active attack and support tables.
///
/// This is an explicit configuration value threaded into
/// `FactorGraph::build`, not process-wide state. Built graphs capture tables
/// by value, so editing a `Semantics` afterwards never alters an existing
/// graph.
#[derive(Clone, Debug, PartialEq)]
pub struct Semantics {
    attack: PotentialTable,
    support: PotentialTable
}

impl Semantics {

    /// Both tables taken from a named preset.
    pub fn preset(preset: Preset) -> Self {
        Semantics { attack: preset.attack(), support: preset.support() }
    }

    /// User-edited tables, in `(0,0), (0,1), (1,0), (1,1)` order.
    pub fn custom(attack: [f64; 4], support: [f64; 4]) -> Self {
        Semantics {
            attack: PotentialTable::from_values(attack),
            support: PotentialTable::from_values(support)
        }
    }

    /// The active attack table.
    pub fn attack(&self) -> &PotentialTable {
        &self.attack
    }

    /// The active support table.
    pub fn support(&self) -> &PotentialTable {
        &self.support
    }

    /// Replace the active attack table.
    pub fn set_attack(&mut self, values: [f64; 4]) {
        self.attack = PotentialTable::from_values(values);
    }

    /// Replace the active support table.
    pub fn set_support(&mut self, values: [f64; 4]) {
        self.support = PotentialTable::from_values(values);
    }

    /// The active table for the given relation kind.
    pub fn table(&self, kind: RelationKind) -> &PotentialTable {
        match kind {
            RelationKind::Attack => &self.attack,
            RelationKind::Support => &self.support
        }
    }

}

impl Default for Semantics {

    /// Starts out with the `Weak` preset.
    fn default() -> Self {
        Semantics::preset(Preset::Weak)
    }

}
