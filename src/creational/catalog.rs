//! Singleton: one lazily created, process-wide catalog of the demonstrations.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use tracing::debug;

use crate::domain::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Creational,
    Structural,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Creational => write!(f, "creational"),
            Category::Structural => write!(f, "structural"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pattern {
    SimpleBuilder,
    ClassicBuilder,
    AbstractFactory,
    FactoryMethod,
    Prototype,
    Singleton,
    Composite,
    Decorator,
}

impl Pattern {
    pub const ALL: [Pattern; 8] = [
        Pattern::SimpleBuilder,
        Pattern::ClassicBuilder,
        Pattern::AbstractFactory,
        Pattern::FactoryMethod,
        Pattern::Prototype,
        Pattern::Singleton,
        Pattern::Composite,
        Pattern::Decorator,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Pattern::SimpleBuilder => "builder",
            Pattern::ClassicBuilder => "classic-builder",
            Pattern::AbstractFactory => "abstract-factory",
            Pattern::FactoryMethod => "factory-method",
            Pattern::Prototype => "prototype",
            Pattern::Singleton => "singleton",
            Pattern::Composite => "composite",
            Pattern::Decorator => "decorator",
        }
    }

    pub fn category(self) -> Category {
        match self {
            Pattern::Composite | Pattern::Decorator => Category::Structural,
            _ => Category::Creational,
        }
    }

    pub fn summary(self) -> &'static str {
        match self {
            Pattern::SimpleBuilder => "fluent builder for an immutable user",
            Pattern::ClassicBuilder => "director drives simple and complex report builders",
            Pattern::AbstractFactory => "modern and victorian furniture families",
            Pattern::FactoryMethod => "email or SMS notification chosen by channel",
            Pattern::Prototype => "shapes cloned through a trait object",
            Pattern::Singleton => "one shared instance, created on first use",
            Pattern::Composite => "price of nested boxes of products",
            Pattern::Decorator => "notifier wrapped with slack and SMS delivery",
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Pattern {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        Pattern::ALL
            .into_iter()
            .find(|p| p.name() == wanted)
            .ok_or_else(|| DomainError::UnknownPattern(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub pattern: Pattern,
    pub category: Category,
    pub summary: &'static str,
}

/// The catalog of all demonstrations. Only reachable through [`PatternCatalog::instance`].
#[derive(Debug)]
pub struct PatternCatalog {
    entries: Vec<CatalogEntry>,
}

static INSTANCE: OnceLock<PatternCatalog> = OnceLock::new();

impl PatternCatalog {
    fn new() -> Self {
        debug!("initializing pattern catalog");
        let entries = Pattern::ALL
            .into_iter()
            .map(|pattern| CatalogEntry {
                pattern,
                category: pattern.category(),
                summary: pattern.summary(),
            })
            .collect();
        Self { entries }
    }

    pub fn instance() -> &'static PatternCatalog {
        INSTANCE.get_or_init(PatternCatalog::new)
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn by_category(&self, category: Category) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter().filter(move |e| e.category == category)
    }

    pub fn lookup(&self, name: &str) -> Result<&CatalogEntry, DomainError> {
        let pattern: Pattern = name.parse()?;
        self.entries
            .iter()
            .find(|e| e.pattern == pattern)
            .ok_or_else(|| DomainError::UnknownPattern(name.to_string()))
    }
}
