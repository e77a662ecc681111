//! The demo registry: every demo with its category, a one-line summary and
//! typical real-world uses.

use crate::{oop, patterns, PatternError, Result};
use serde::Serialize;
use std::fmt;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    OopPrinciple,
    Creational,
    Structural,
    Behavioral,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Category::OopPrinciple => "oop principle",
            Category::Creational => "creational",
            Category::Structural => "structural",
            Category::Behavioral => "behavioral",
        };
        f.write_str(label)
    }
}

pub type RunFn = fn(&mut dyn Write) -> Result<()>;

#[derive(Serialize)]
pub struct Demo {
    pub name: &'static str,
    pub title: &'static str,
    pub category: Category,
    pub summary: &'static str,
    pub use_cases: &'static [&'static str],
    #[serde(skip)]
    run: RunFn,
}

impl Demo {
    pub fn run(&self, out: &mut dyn Write) -> Result<()> {
        tracing::debug!(demo = self.name, "running demo");
        (self.run)(out)
    }
}

impl fmt::Debug for Demo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Demo")
            .field("name", &self.name)
            .field("category", &self.category)
            .finish_non_exhaustive()
    }
}

static CATALOG: [Demo; 14] = [
    // OOP principles
    Demo {
        name: "abstraction",
        title: "Abstraction",
        category: Category::OopPrinciple,
        summary: "Expose what a type can do through an abstract contract and hide how it does it.",
        use_cases: &[],
        run: oop::abstraction::run,
    },
    Demo {
        name: "encapsulation",
        title: "Encapsulation",
        category: Category::OopPrinciple,
        summary: "Keep state private and allow access only through controlled methods.",
        use_cases: &[],
        run: oop::encapsulation::run,
    },
    Demo {
        name: "inheritance",
        title: "Inheritance",
        category: Category::OopPrinciple,
        summary: "Share a default behavior that specialised types may override.",
        use_cases: &[],
        run: oop::inheritance::run,
    },
    Demo {
        name: "polymorphism",
        title: "Polymorphism",
        category: Category::OopPrinciple,
        summary: "One operation, many implementations, chosen by the concrete type at runtime.",
        use_cases: &[],
        run: oop::polymorphism::run,
    },
    // Design patterns
    Demo {
        name: "adapter",
        title: "Adapter",
        category: Category::Structural,
        summary: "Allow objects with incompatible interfaces to collaborate.",
        use_cases: &[
            "Legacy systems: integrating new systems with legacy ones",
            "Third-party libraries: making them fit your own interfaces",
            "Cross-platform development: adapting platform-specific types to a common interface",
        ],
        run: patterns::adapter::run,
    },
    Demo {
        name: "builder",
        title: "Builder",
        category: Category::Creational,
        summary: "Construct complex objects step by step.",
        use_cases: &[
            "Document generation with multiple sections",
            "Meal planning with customizable drink, main course and dessert",
            "Configuring vehicles, software setups or API clients",
        ],
        run: patterns::builder::run,
    },
    Demo {
        name: "command",
        title: "Command",
        category: Category::Behavioral,
        summary: "Turn a request into a stand-alone object that can be passed, queued or delayed.",
        use_cases: &[
            "Remote controls switching devices on and off",
            "Queuing systems with undoable operations",
            "Executing database transactions as command objects",
        ],
        run: patterns::command::run,
    },
    Demo {
        name: "decorator",
        title: "Decorator",
        category: Category::Structural,
        summary: "Add behavior to an object by wrapping it in layers that share its interface.",
        use_cases: &[
            "Coffee shops: adding milk or sugar without changing the base coffee",
            "Data streams: adding encryption, compression or buffering",
            "Games: stacking abilities such as flying or armor on a character",
        ],
        run: patterns::decorator::run,
    },
    Demo {
        name: "factory",
        title: "Factory",
        category: Category::Creational,
        summary: "Create objects through a common interface without naming their concrete type.",
        use_cases: &[
            "UI components for different platforms",
            "Choosing a JSON, XML or CSV parser from the input type",
            "Selecting a payment provider at runtime",
        ],
        run: patterns::factory::run,
    },
    Demo {
        name: "observer",
        title: "Observer",
        category: Category::Behavioral,
        summary: "Notify every dependent automatically when a subject changes.",
        use_cases: &[
            "Event systems: subscribing to UI events",
            "Chat applications notifying users of new messages",
            "Stock tickers updating many viewers",
        ],
        run: patterns::observer::run,
    },
    Demo {
        name: "proxy",
        title: "Proxy",
        category: Category::Structural,
        summary: "Stand in for a real service and control access to it.",
        use_cases: &[
            "Virtual proxies loading heavy objects on demand",
            "Access control based on user roles",
            "Transparent logging or monitoring of calls",
        ],
        run: patterns::proxy::run,
    },
    Demo {
        name: "singleton",
        title: "Singleton",
        category: Category::Creational,
        summary: "Ensure a type has only one instance and provide a global access point to it.",
        use_cases: &[
            "Centralized application configuration",
            "A single logger instance",
            "A cache shared across the application",
        ],
        run: patterns::singleton::run,
    },
    Demo {
        name: "state",
        title: "State",
        category: Category::Behavioral,
        summary: "Let an object change its behavior when its internal state changes.",
        use_cases: &[
            "State machines",
            "ATMs: idle, processing or out of service",
            "Media players: playing, paused or stopped",
        ],
        run: patterns::state::run,
    },
    Demo {
        name: "strategy",
        title: "Strategy",
        category: Category::Behavioral,
        summary: "Make a family of algorithms interchangeable behind one interface.",
        use_cases: &[
            "Picking a sorting algorithm by data size",
            "Choosing a payment method at checkout",
            "Applying different image filters",
        ],
        run: patterns::strategy::run,
    },
];

pub fn catalog() -> &'static [Demo] {
    &CATALOG
}

/// Looks a demo up by its name, case-insensitively.
pub fn find(name: &str) -> Result<&'static Demo> {
    let name = name.trim();
    CATALOG
        .iter()
        .find(|demo| demo.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| PatternError::UnknownDemo(name.to_string()))
}

/// Resolves a list of names; an empty list selects the whole catalog.
pub fn select(names: &[String]) -> Result<Vec<&'static Demo>> {
    if names.is_empty() {
        return Ok(CATALOG.iter().collect());
    }
    names.iter().map(|name| find(name)).collect()
}
