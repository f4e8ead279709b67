use fptour_tutorial::{Section, TutorialConfig, eq_section, interop_section, run};

fn render(config: &TutorialConfig) -> String {
    let mut out = Vec::new();
    run(config, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn default_config_prints_both_sections_in_order() {
    let text = render(&TutorialConfig::default());

    let eq_at = text.find(eq_section::HEADER).unwrap();
    let interop_at = text.find(interop_section::HEADER).unwrap();
    assert!(eq_at < interop_at);
}

#[test]
fn selected_sections_only() {
    let config = TutorialConfig {
        sections: vec![Section::Interop],
    };
    let text = render(&config);

    assert!(text.starts_with(interop_section::HEADER));
    assert!(!text.contains(eq_section::HEADER));
}

#[test]
fn empty_selection_prints_nothing() {
    let config = TutorialConfig { sections: vec![] };
    assert!(render(&config).is_empty());
}

#[test]
fn configuration_comes_from_lookup() {
    let config = TutorialConfig::from_lookup(|_| Some("eq".to_string())).unwrap();
    let text = render(&config);

    assert!(text.contains("Same user id true"));
    assert!(!text.contains("Index found"));
}
