use super::*;

#[test]
fn catalog_holds_five_projects_in_gallery_order() {
    let titles = PROJECTS.iter().map(|p| p.title).collect::<Vec<_>>();
    assert_eq!(
        titles,
        vec![
            "Smart Laundry App",
            "JARVIS - Offline AI Voice Assistant",
            "PivotPath – AI Career Transition Advisor",
            "Dr. Youth Clinic App Design",
            "UI/UX Case Study Collection",
        ]
    );
}

#[test]
fn every_project_has_all_fields_filled() {
    for p in PROJECTS {
        assert!(!p.title.is_empty());
        assert!(!p.description.is_empty());
        assert!(!p.details.is_empty());
        assert!(!p.placeholder.is_empty());
        assert!(!p.tech.is_empty(), "{} has no tech tags", p.title);
        assert!(p.tech.iter().all(|t| !t.is_empty()));
    }
}

#[test]
fn project_lookup_by_index() {
    let pivot = project(2).map(|p| (p.placeholder, p.tech));
    assert_eq!(
        pivot,
        Some(("CAREER", &["Python", "Machine Learning", "Streamlit", "Scikit-learn"][..]))
    );
    assert_eq!(project(PROJECTS.len()), None);
}
