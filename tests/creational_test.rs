//! Tests for the creational patterns

use rstest::rstest;

use patterns::creational::furniture::Furniture;
use patterns::creational::{
    factory_for, Category, Channel, Circle, ComplexReportBuilder, Pattern, PatternCatalog, Report,
    Notification, NotificationFactory, ReportDirector, Shape, ShapeBase, ShapeGallery,
    SimpleReportBuilder, Style, User,
};
use patterns::domain::DomainError;

// ============================================================
// Builder
// ============================================================

#[test]
fn given_all_fields_when_building_user_then_getters_return_them() {
    let user = User::builder("Salma", "Ayman")
        .age(30)
        .phone("1234567")
        .address("Fake address 1234")
        .build();

    assert_eq!(user.first_name(), "Salma");
    assert_eq!(user.last_name(), "Ayman");
    assert_eq!(user.age(), Some(30));
    assert_eq!(user.phone(), Some("1234567"));
    assert_eq!(user.address(), Some("Fake address 1234"));
}

#[test]
fn given_no_address_when_building_user_then_address_absent() {
    let user = User::builder("Nada", "Alassal").age(40).phone("5655").build();

    assert_eq!(user.address(), None);
    assert_eq!(user.lines(), vec!["Nada", "Alassal", "40", "5655", "null"]);
}

#[rstest]
#[case::simple(Box::new(SimpleReportBuilder::default()), "Simple")]
#[case::complex(Box::new(ComplexReportBuilder::default()), "Complex")]
fn given_builder_when_director_builds_then_report_complete(
    #[case] builder: Box<dyn patterns::creational::ReportBuilder>,
    #[case] prefix: &str,
) {
    let mut director = ReportDirector::new(builder);
    director.build_report();

    assert_eq!(
        director.report(),
        Report {
            header: Some(format!("{prefix} Header")),
            body: Some(format!("{prefix} Body")),
            footer: Some(format!("{prefix} Footer")),
        }
    );
}

#[test]
fn given_director_not_run_when_taking_report_then_parts_missing() {
    let director = ReportDirector::new(Box::new(SimpleReportBuilder::default()));
    assert_eq!(director.report(), Report::default());
    assert_eq!(director.report().lines(), vec!["null", "null", "null"]);
}

// ============================================================
// Abstract Factory
// ============================================================

#[rstest]
#[case(Style::Modern, "Modern")]
#[case(Style::Victorian, "Victorian")]
fn given_style_when_creating_family_then_products_match(#[case] style: Style, #[case] name: &str) {
    let factory = style.factory();
    let chair = factory.create_chair();
    let sofa = factory.create_sofa();
    let table = factory.create_coffee_table();

    assert_eq!(chair.style(), style);
    assert_eq!(sofa.style(), style);
    assert_eq!(table.style(), style);
    assert_eq!(chair.has_legs(), format!("{name} Chair has 4 legs"));
    assert_eq!(sofa.sit_on(), format!("{name} Sofa is comfortable"));
    assert_eq!(table.has_legs(), format!("{name} CoffeeTable has 4 legs"));
}

// ============================================================
// Factory Method
// ============================================================

#[rstest]
#[case("email", "example@example", "Sending an email to example@example: hi")]
#[case("SMS", "+1234567890", "Sending an SMS to +1234567890: hi")]
fn given_channel_when_creating_notification_then_sends_on_channel(
    #[case] channel: &str,
    #[case] recipient: &str,
    #[case] expected: &str,
) {
    let factory = factory_for(channel).unwrap();
    let notification = factory.create_notification(recipient, "hi");
    assert_eq!(notification.send(), expected);
}

#[test]
fn given_unknown_channel_when_resolving_factory_then_errors() {
    assert!(matches!(
        factory_for("fax"),
        Err(DomainError::UnknownChannel(ref c)) if c == "fax"
    ));
    assert_eq!("sms".parse::<Channel>(), Ok(Channel::Sms));
}

// ============================================================
// Prototype
// ============================================================

#[test]
fn given_circle_when_cloned_through_trait_then_copy_is_independent() {
    let original = Circle {
        base: ShapeBase {
            x: 1,
            y: 2,
            color: Some("red".to_string()),
        },
        radius: 3,
    };
    let mut copy = original.clone_shape();
    assert_eq!(copy.describe(), original.describe());

    copy.base_mut().color = Some("blue".to_string());

    assert_eq!(original.base().color.as_deref(), Some("red"));
    assert_eq!(copy.base().color.as_deref(), Some("blue"));
}

#[test]
fn given_gallery_when_copied_then_copies_match_originals() {
    let gallery = ShapeGallery::new();
    let copies = gallery.copies();

    assert_eq!(gallery.shapes().len(), 4);
    let originals: Vec<_> = gallery.shapes().iter().map(|s| s.describe()).collect();
    let copied: Vec<_> = copies.iter().map(|s| s.describe()).collect();
    assert_eq!(originals, copied);
    // seeded prototypes and their clones are pairwise equal
    assert_eq!(originals[0], originals[1]);
    assert_eq!(originals[2], originals[3]);
}

// ============================================================
// Singleton
// ============================================================

#[test]
fn given_two_accesses_when_comparing_then_same_instance() {
    let first = PatternCatalog::instance();
    let second = PatternCatalog::instance();
    assert!(std::ptr::eq(first, second));
}

#[test]
fn given_catalog_when_listing_then_holds_every_pattern() {
    let catalog = PatternCatalog::instance();

    assert_eq!(catalog.entries().len(), Pattern::ALL.len());
    assert_eq!(catalog.by_category(Category::Structural).count(), 2);
    assert_eq!(
        catalog.lookup("factory_method").unwrap().pattern,
        Pattern::FactoryMethod
    );
    assert!(matches!(
        catalog.lookup("observer"),
        Err(DomainError::UnknownPattern(_))
    ));
}
