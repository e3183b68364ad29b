// SPDX-License-Identifier: MPL-2.0
use iced_folio::content::{Catalog, MediaEntry};
use iced_folio::domain::Section;
use iced_folio::i18n::fluent::I18n;
use iced_folio::i18n::COPY_KEYS;
use tempfile::tempdir;

#[test]
fn embedded_catalog_backs_both_card_sections() {
    let catalog = Catalog::load(None);
    assert!(!catalog.items_for(Section::Projects).is_empty());
    assert!(!catalog.items_for(Section::Lab).is_empty());
    assert!(catalog.items_for(Section::Bio).is_empty());
}

#[test]
fn every_embedded_item_is_well_formed() {
    let catalog = Catalog::load(None);
    for section in [Section::Projects, Section::Lab] {
        for item in catalog.items_for(section) {
            assert!(!item.id.is_empty());
            assert!(!item.title.is_empty());
            assert!(item.hero().is_some(), "item {} has no media", item.id);
            for entry in &item.media {
                assert!(!entry.thumbnail_address().is_empty());
                if let MediaEntry::Video { .. } = entry {
                    assert!(entry.watch_url().is_some());
                }
            }
        }
    }
}

#[test]
fn content_dir_override_replaces_a_collection() {
    let dir = tempdir().expect("temp dir");
    std::fs::write(
        dir.path().join("projects.json"),
        r#"[
            {
                "id": "override-1",
                "title": "Override",
                "description": "Replacement catalog",
                "tech": ["Rust"],
                "media": [{ "type": "image", "src": "images/override.png" }]
            }
        ]"#,
    )
    .expect("write override document");

    let catalog = Catalog::load(Some(dir.path()));
    let projects = catalog.items_for(Section::Projects);
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0].id, "override-1");

    // lab.json is absent from the override directory, so the embedded
    // collection is still served.
    assert!(!catalog.items_for(Section::Lab).is_empty());
}

#[test]
fn malformed_override_falls_back_to_embedded_content() {
    let dir = tempdir().expect("temp dir");
    std::fs::write(dir.path().join("projects.json"), "{ not json ]")
        .expect("write malformed document");

    let catalog = Catalog::load(Some(dir.path()));
    let embedded = Catalog::load(None);
    assert_eq!(
        catalog.items_for(Section::Projects).len(),
        embedded.items_for(Section::Projects).len()
    );
}

#[test]
fn both_copy_tables_cover_every_key() {
    let mut i18n = I18n::new(Some("en".into()));
    for locale in i18n.available_locales.clone() {
        i18n.set_locale(locale.clone());
        for key in COPY_KEYS {
            assert!(
                !i18n.tr(key).starts_with("MISSING:"),
                "locale {locale} is missing key {key}"
            );
        }
    }
}

#[test]
fn language_switch_is_atomic_across_the_page_copy() {
    let mut i18n = I18n::new(Some("en".into()));
    let english: Vec<String> = COPY_KEYS.iter().map(|key| i18n.tr(key)).collect();

    i18n.set_locale("es".parse().expect("valid locale"));
    let spanish: Vec<String> = COPY_KEYS.iter().map(|key| i18n.tr(key)).collect();

    // Every key resolves in both locales; no mixed-language page states.
    for (key, value) in COPY_KEYS.iter().zip(&spanish) {
        assert!(!value.starts_with("MISSING:"), "es missing {key}");
    }
    assert_ne!(english, spanish);
}

#[test]
fn unknown_locale_never_partially_applies() {
    let mut i18n = I18n::new(Some("en".into()));
    i18n.set_locale("de".parse().expect("valid locale"));
    assert_eq!(i18n.current_locale().to_string(), "en");
    for key in COPY_KEYS {
        assert!(!i18n.tr(key).starts_with("MISSING:"));
    }
}
