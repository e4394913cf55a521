//! Demonstration runners: each returns the console lines its pattern prints.

use tracing::{info, instrument};

use crate::application::composite::format_value;
use crate::application::ApplicationResult;
use crate::config::Settings;
use crate::creational::{
    factory_for, Channel, ComplexReportBuilder, Pattern, PatternCatalog, ReportBuilder,
    ReportDirector, ShapeGallery, SimpleReportBuilder, Style, User,
};
use crate::domain::CompositeTree;
use crate::structural::{stack, Layer};

#[instrument(level = "debug", skip(settings))]
pub fn run_demo(pattern: Pattern, settings: &Settings) -> ApplicationResult<Vec<String>> {
    info!("running {} demo", pattern);
    match pattern {
        Pattern::SimpleBuilder => Ok(simple_builder()),
        Pattern::ClassicBuilder => Ok(classic_builder()),
        Pattern::AbstractFactory => Ok(abstract_factory()),
        Pattern::FactoryMethod => factory_method(settings),
        Pattern::Prototype => Ok(prototype()),
        Pattern::Singleton => Ok(singleton()),
        Pattern::Composite => composite(settings),
        Pattern::Decorator => Ok(decorator()),
    }
}

fn simple_builder() -> Vec<String> {
    let user1 = User::builder("Salma", "Ayman")
        .age(30)
        .phone("1234567")
        .address("Fake address 1234")
        .build();
    let user2 = User::builder("Nada", "Alassal").age(40).phone("5655").build();

    user1.lines().into_iter().chain(user2.lines()).collect()
}

fn classic_builder() -> Vec<String> {
    let builders: Vec<Box<dyn ReportBuilder>> = vec![
        Box::new(SimpleReportBuilder::default()),
        Box::new(ComplexReportBuilder::default()),
    ];
    builders
        .into_iter()
        .flat_map(|builder| {
            let mut director = ReportDirector::new(builder);
            director.build_report();
            director.report().lines()
        })
        .collect()
}

fn abstract_factory() -> Vec<String> {
    let mut lines = Vec::new();
    for style in Style::ALL {
        let factory = style.factory();
        let chair = factory.create_chair();
        let sofa = factory.create_sofa();
        let table = factory.create_coffee_table();
        lines.extend([
            chair.has_legs(),
            chair.sit_on(),
            sofa.has_legs(),
            sofa.sit_on(),
            table.has_legs(),
            table.sit_on(),
        ]);
    }
    lines
}

fn factory_method(settings: &Settings) -> ApplicationResult<Vec<String>> {
    let factory = factory_for(&settings.default_channel)?;
    let (recipient, message) = match settings.default_channel.parse::<Channel>()? {
        Channel::Email => ("example@example", "Hello from email!"),
        Channel::Sms => ("+1234567890", "Hello from SMS!"),
    };
    let notification = factory.create_notification(recipient, message);
    Ok(vec![notification.send()])
}

fn prototype() -> Vec<String> {
    let gallery = ShapeGallery::new();
    let copies = gallery.copies();
    gallery
        .shapes()
        .iter()
        .map(|s| format!("original: {}", s.describe()))
        .chain(copies.iter().map(|s| format!("copy:     {}", s.describe())))
        .collect()
}

fn singleton() -> Vec<String> {
    let first = PatternCatalog::instance();
    let second = PatternCatalog::instance();
    let mut lines = Vec::new();
    if std::ptr::eq(first, second) {
        lines.push("singleton1 and singleton2 are the same instance.".to_string());
    }
    lines.push(format!("catalog holds {} patterns", first.entries().len()));
    lines
}

fn composite(settings: &Settings) -> ApplicationResult<Vec<String>> {
    let mut tree = CompositeTree::with_max_depth(settings.max_depth);

    let product1 = tree.leaf("Product 1", 10.0);
    let product2 = tree.leaf("Product 2", 20.0);
    let product3 = tree.leaf("Product 3", 30.0);
    let product4 = tree.leaf("Product 4", 40.0);

    let box1 = tree.composite("box1");
    let box2 = tree.composite("box2");
    let box3 = tree.composite("box3");

    tree.add_child(box1, product1)?;
    tree.add_child(box2, product2)?;
    tree.add_child(box3, product3)?;
    tree.add_child(box3, product4)?;
    tree.add_child(box2, box3)?;
    tree.add_child(box1, box2)?;

    Ok(vec![format!(
        "Total price of box1 = {}",
        format_value(tree.value(box1)?, settings.precision)
    )])
}

fn decorator() -> Vec<String> {
    stack(&[Layer::Slack, Layer::Sms]).send("Hello World")
}
