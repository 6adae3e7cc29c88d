//! Validation, patching and filtering of projects.

use super::*;
use rstest::{fixture, rstest};

fn fields(title: &str) -> ProjectFields {
    ProjectFields {
        title: Some(title.to_owned()),
        ..ProjectFields::default()
    }
}

fn project(id: i32, category: ProjectCategory) -> Project {
    ProjectDraft::try_from(ProjectFields {
        category: Some(category.label().to_owned()),
        ..fields(&format!("project {id}"))
    })
    .expect("valid draft")
    .into_project(ProjectId::new(id))
}

#[fixture]
fn catalogue() -> Vec<Project> {
    vec![
        project(5, ProjectCategory::DataScience),
        project(4, ProjectCategory::FullStack),
        project(3, ProjectCategory::DataScience),
        project(2, ProjectCategory::MachineLearning),
        project(1, ProjectCategory::DataAnalysis),
    ]
}

#[rstest]
#[case(None)]
#[case(Some(""))]
#[case(Some("   "))]
fn draft_requires_a_title(#[case] title: Option<&str>) {
    let result = ProjectDraft::try_from(ProjectFields {
        title: title.map(str::to_owned),
        ..ProjectFields::default()
    });
    assert_eq!(result, Err(ProjectValidationError::EmptyTitle));
}

#[rstest]
fn draft_defaults_category_and_clears_blank_links() {
    let draft = ProjectDraft::try_from(ProjectFields {
        image_url: Some(String::new()),
        live_link: Some(" https://demo.example ".to_owned()),
        tools: Some(vec!["React".to_owned(), " React".to_owned()]),
        ..fields(" Portfolio ")
    })
    .expect("valid draft");
    assert_eq!(draft.title(), "Portfolio");
    assert_eq!(draft.category(), ProjectCategory::FullStack);
    assert_eq!(draft.image_url(), None);
    assert_eq!(draft.live_link(), Some("https://demo.example"));
    assert_eq!(draft.tools().as_slice(), ["React"]);
}

#[rstest]
#[case("Data Analysis", ProjectCategory::DataAnalysis)]
#[case("Machine Learning", ProjectCategory::MachineLearning)]
#[case(" Full Stack ", ProjectCategory::FullStack)]
#[case("Data Science", ProjectCategory::DataScience)]
fn draft_parses_category_labels(#[case] raw: &str, #[case] expected: ProjectCategory) {
    let draft = ProjectDraft::try_from(ProjectFields {
        category: Some(raw.to_owned()),
        ..fields("t")
    })
    .expect("valid draft");
    assert_eq!(draft.category(), expected);
}

#[rstest]
#[case("data science")]
#[case("Robotics")]
#[case("all")]
fn draft_rejects_unknown_categories(#[case] raw: &str) {
    let result = ProjectDraft::try_from(ProjectFields {
        category: Some(raw.to_owned()),
        ..fields("t")
    });
    assert_eq!(result, Err(ProjectValidationError::UnknownCategory));
}

#[rstest]
fn changes_require_at_least_one_field() {
    let result = ProjectChanges::try_from(ProjectFields::default());
    assert_eq!(result, Err(ProjectValidationError::EmptyUpdate));
}

#[rstest]
fn changes_reject_blank_title() {
    let result = ProjectChanges::try_from(fields(" "));
    assert_eq!(result, Err(ProjectValidationError::EmptyTitle));
}

#[rstest]
fn changes_patch_only_supplied_fields() {
    let mut stored = ProjectDraft::try_from(ProjectFields {
        description: Some("first".to_owned()),
        source_code_link: Some("https://git.example/repo".to_owned()),
        ..fields("Dashboard")
    })
    .expect("valid draft")
    .into_project(ProjectId::new(9));

    let changes = ProjectChanges::try_from(ProjectFields {
        source_code_link: Some(String::new()),
        category: Some("Data Analysis".to_owned()),
        ..ProjectFields::default()
    })
    .expect("valid changes");
    changes.apply_to(&mut stored);

    assert_eq!(stored.title, "Dashboard");
    assert_eq!(stored.description, "first");
    assert_eq!(stored.source_code_link, None);
    assert_eq!(stored.category, ProjectCategory::DataAnalysis);
}

#[rstest]
fn filter_all_returns_everything(catalogue: Vec<Project>) {
    let filtered = CategoryFilter::All.apply(catalogue.clone());
    assert_eq!(filtered, catalogue);
}

#[rstest]
#[case(ProjectCategory::DataScience, &[5, 3])]
#[case(ProjectCategory::FullStack, &[4])]
#[case(ProjectCategory::MachineLearning, &[2])]
#[case(ProjectCategory::DataAnalysis, &[1])]
fn filter_returns_exact_matches_in_order(
    catalogue: Vec<Project>,
    #[case] category: ProjectCategory,
    #[case] expected: &[i32],
) {
    let ids: Vec<i32> = CategoryFilter::Only(category)
        .apply(catalogue)
        .iter()
        .map(|project| project.id.get())
        .collect();
    assert_eq!(ids, expected);
}

#[rstest]
fn filter_rejects_unknown_labels() {
    assert_eq!(
        "Games".parse::<CategoryFilter>(),
        Err(ProjectValidationError::UnknownCategory)
    );
}

#[rstest]
fn category_serialises_as_label() {
    let json = serde_json::to_string(&ProjectCategory::MachineLearning).expect("serialise");
    assert_eq!(json, r#""Machine Learning""#);
}
