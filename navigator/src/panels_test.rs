use super::*;

#[test]
fn reference_has_six_panels_in_nav_order() {
    let registry = PanelRegistry::reference();
    let ids: Vec<&str> = registry.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, ["experience", "projects", "blog", "about", "videos", "contact"]);
    assert_eq!(registry.len(), 6);
    assert!(!registry.is_empty());
}

#[test]
fn reference_blog_anchor() {
    let registry = PanelRegistry::reference();
    let blog = registry.get("blog").unwrap();
    assert_eq!(blog.anchor(), Point::new(2400.0, 350.0));
    assert_eq!(blog.kind, PanelKind::Blog);
    assert_eq!(blog.name, "Blog");
}

#[test]
fn first_is_landing_panel() {
    assert_eq!(PanelRegistry::reference().first().id, "experience");
}

#[test]
fn get_unknown_is_none() {
    assert!(PanelRegistry::reference().get("nowhere").is_none());
}

#[test]
fn empty_registry_rejected() {
    assert!(matches!(PanelRegistry::new(Vec::new()), Err(RegistryError::Empty)));
}

#[test]
fn duplicate_ids_rejected() {
    let panels = vec![
        Panel::new("a", "A", 0.0, 0.0, PanelKind::Blog),
        Panel::new("a", "Again", 10.0, 0.0, PanelKind::About),
    ];
    let err = PanelRegistry::new(panels).unwrap_err();
    assert!(matches!(err, RegistryError::DuplicateId(ref id) if id == "a"));
}

#[test]
fn from_json_uses_type_field_for_kind() {
    let raw = r#"[
        {"id": "home", "name": "Home", "x": 10, "y": 20, "type": "about"},
        {"id": "talks", "name": "Talks", "x": 900, "y": 20, "type": "videos"}
    ]"#;
    let registry = PanelRegistry::from_json(raw).unwrap();
    assert_eq!(registry.first().kind, PanelKind::About);
    assert_eq!(registry.get("talks").unwrap().kind, PanelKind::Videos);
}

#[test]
fn from_json_unknown_kind_is_parse_error() {
    let raw = r#"[{"id": "x", "name": "X", "x": 0, "y": 0, "type": "gallery"}]"#;
    assert!(matches!(PanelRegistry::from_json(raw), Err(RegistryError::Parse(_))));
}

#[test]
fn every_kind_has_presentation() {
    for panel in PanelRegistry::reference().iter() {
        assert!(panel.kind.accent_color().starts_with('#'));
        assert!(!panel.kind.icon().is_empty());
    }
    assert_eq!(PanelKind::Contact.accent_color(), "#16a085");
    assert_eq!(PanelKind::Videos.icon(), "youtube");
}

// --- Content ---

#[test]
fn each_kind_reads_its_collections() {
    use content::Collection;
    assert_eq!(PanelKind::Blog.collections(), [Collection::BlogPosts]);
    assert_eq!(PanelKind::About.collections(), [Collection::Profiles]);
    assert_eq!(PanelKind::Contact.collections(), [Collection::Profiles, Collection::SocialLinks]);
}

#[test]
fn item_count_sums_loaded_rows() {
    use content::{Collection, ContentSource, MemorySource, PanelContent};
    use serde_json::json;

    let mut source = MemorySource::new();
    source.create(Collection::Profiles, json!({"id": "p1", "name": "Ada"})).unwrap();
    source
        .create(Collection::SocialLinks, json!({"platform": "GitHub", "url": "https://github.com/x"}))
        .unwrap();
    let loaded = PanelContent::load(&source);

    assert_eq!(PanelKind::Contact.item_count(&loaded), 2);
    assert_eq!(PanelKind::About.item_count(&loaded), 1);
    assert_eq!(PanelKind::Projects.item_count(&loaded), 0);
}
