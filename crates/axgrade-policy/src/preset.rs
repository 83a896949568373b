//! Built-in grading presets.
//!
//! Each preset pairs a checker invocation with an allow-list written in the
//! form that invocation prints. The two forms must never be mixed: a
//! bare-name allow-list cannot match `leanchecker` declaration lines.

use axgrade_contracts::axiom::{OutputForm, NO_AXIOMS_SENTINEL};

use crate::config::{AllowListConfig, CheckerConfig, CommandStep, GraderConfig};

/// Name of the preset used when nothing else is selected.
pub const DEFAULT_PRESET: &str = "print-axioms";

/// Axiom names accepted by the `print-axioms` preset, plus the sentinel.
pub const BARE_NAME_AXIOMS: &[&str] = &[
    NO_AXIOMS_SENTINEL,
    "propext",
    "quot.sound",
    "classical.choice",
];

/// Full declarations accepted by the `leanchecker` preset.
pub const DECLARATION_AXIOMS: &[&str] = &[
    "axiom propext : Π {a b : Prop}, (a <-> b) -> a = b",
    "axiom classical.choice : Π {α : Sort u}, nonempty α -> α",
    "axiom quot.sound : Π {α : Sort u}, Π {r : α -> α -> Prop}, Π {a b : α}, r a b -> quot.mk r a = quot.mk r b",
];

/// A named, ready-to-use configuration.
#[derive(Debug, Clone, Copy)]
pub struct Preset {
    pub name: &'static str,
    pub description: &'static str,
    build: fn() -> GraderConfig,
}

impl Preset {
    pub fn config(&self) -> GraderConfig {
        (self.build)()
    }
}

/// Every built-in preset, default first.
pub const PRESETS: &[Preset] = &[
    Preset {
        name: "print-axioms",
        description: "lean SolutionTest.lean in src/, bare axiom names",
        build: print_axioms,
    },
    Preset {
        name: "leanchecker",
        description: "export with lean -E, re-check with leanchecker, full axiom declarations",
        build: leanchecker,
    },
];

/// Look up a preset by name.
pub fn find(name: &str) -> Option<&'static Preset> {
    PRESETS.iter().find(|p| p.name == name)
}

fn print_axioms() -> GraderConfig {
    GraderConfig {
        allow_list: AllowListConfig {
            form: OutputForm::BareName,
            axioms: owned(BARE_NAME_AXIOMS),
        },
        checker: CheckerConfig {
            working_dir: Some("src".into()),
            steps: vec![step("lean", &["SolutionTest.lean"])],
        },
    }
}

fn leanchecker() -> GraderConfig {
    GraderConfig {
        allow_list: AllowListConfig {
            form: OutputForm::Declaration,
            axioms: owned(DECLARATION_AXIOMS),
        },
        checker: CheckerConfig {
            working_dir: Some("src".into()),
            steps: vec![
                step("lean", &["SolutionTest.lean", "-E", "SolutionTest.out"]),
                step("leanchecker", &["SolutionTest.out", "submission"]),
            ],
        },
    }
}

fn step(program: &str, args: &[&str]) -> CommandStep {
    CommandStep {
        program: program.to_string(),
        args: owned(args),
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
