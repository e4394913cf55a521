//! Creational patterns: builders, factories, prototype and singleton

pub mod catalog;
pub mod furniture;
pub mod notification;
pub mod report;
pub mod shape;
pub mod user;

pub use catalog::{CatalogEntry, Category, Pattern, PatternCatalog};
pub use furniture::{FurnitureFactory, Style};
pub use notification::{factory_for, Channel, Notification, NotificationFactory};
pub use report::{ComplexReportBuilder, Report, ReportBuilder, ReportDirector, SimpleReportBuilder};
pub use shape::{Circle, Rectangle, Shape, ShapeBase, ShapeGallery};
pub use user::{User, UserBuilder};
