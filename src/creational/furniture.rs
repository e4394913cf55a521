//! Abstract factory: families of matching furniture.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Style {
    Modern,
    Victorian,
}

impl Style {
    pub const ALL: [Style; 2] = [Style::Modern, Style::Victorian];

    pub fn factory(self) -> Box<dyn FurnitureFactory> {
        match self {
            Style::Modern => Box::new(ModernFurnitureFactory),
            Style::Victorian => Box::new(VictorianFurnitureFactory),
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Style::Modern => write!(f, "Modern"),
            Style::Victorian => write!(f, "Victorian"),
        }
    }
}

/// Behaviour shared by every piece of furniture.
pub trait Furniture {
    fn style(&self) -> Style;
    fn kind(&self) -> &'static str;

    fn has_legs(&self) -> String {
        format!("{} {} has 4 legs", self.style(), self.kind())
    }

    fn sit_on(&self) -> String {
        format!("{} {} is comfortable", self.style(), self.kind())
    }
}

pub trait Chair: Furniture {}
pub trait Sofa: Furniture {}
pub trait CoffeeTable: Furniture {}

macro_rules! furniture {
    ($name:ident, $family:ident, $style:expr, $kind:literal) => {
        #[derive(Debug, Default, Clone, Copy)]
        pub struct $name;

        impl Furniture for $name {
            fn style(&self) -> Style {
                $style
            }

            fn kind(&self) -> &'static str {
                $kind
            }
        }

        impl $family for $name {}
    };
}

furniture!(ModernChair, Chair, Style::Modern, "Chair");
furniture!(ModernSofa, Sofa, Style::Modern, "Sofa");
furniture!(ModernCoffeeTable, CoffeeTable, Style::Modern, "CoffeeTable");
furniture!(VictorianChair, Chair, Style::Victorian, "Chair");
furniture!(VictorianSofa, Sofa, Style::Victorian, "Sofa");
furniture!(VictorianCoffeeTable, CoffeeTable, Style::Victorian, "CoffeeTable");

/// Creates one complete family of furniture in a single style.
pub trait FurnitureFactory {
    fn create_chair(&self) -> Box<dyn Chair>;
    fn create_sofa(&self) -> Box<dyn Sofa>;
    fn create_coffee_table(&self) -> Box<dyn CoffeeTable>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ModernFurnitureFactory;

impl FurnitureFactory for ModernFurnitureFactory {
    fn create_chair(&self) -> Box<dyn Chair> {
        Box::new(ModernChair)
    }

    fn create_sofa(&self) -> Box<dyn Sofa> {
        Box::new(ModernSofa)
    }

    fn create_coffee_table(&self) -> Box<dyn CoffeeTable> {
        Box::new(ModernCoffeeTable)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct VictorianFurnitureFactory;

impl FurnitureFactory for VictorianFurnitureFactory {
    fn create_chair(&self) -> Box<dyn Chair> {
        Box::new(VictorianChair)
    }

    fn create_sofa(&self) -> Box<dyn Sofa> {
        Box::new(VictorianSofa)
    }

    fn create_coffee_table(&self) -> Box<dyn CoffeeTable> {
        Box::new(VictorianCoffeeTable)
    }
}
