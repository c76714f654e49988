//! Property-based tests for project parsing and catalog queries.

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::catalog::Catalog;
    use crate::project::{parse_project, Project};
    use proptest::prelude::*;

    /// Plain text: no quotes, brackets, commas, colons, or edge whitespace.
    fn plain() -> impl Strategy<Value = String> {
        "[A-Za-z0-9][A-Za-z0-9 ._/-]{0,20}[A-Za-z0-9]"
            .prop_filter("not a boolean literal", |s| s != "true" && s != "false")
    }

    fn render(
        title: &str,
        description: &str,
        technologies: &[String],
        category: &str,
        featured: bool,
        date: &str,
    ) -> String {
        format!(
            "---\ntitle: {title}\ndescription: {description}\ntechnologies: [{}]\n\
             category: {category}\nimageUrl: /img/{category}.png\nfeatured: {featured}\n\
             date: {date}\n---\n\nbody\n",
            technologies.join(", ")
        )
    }

    proptest! {
        #[test]
        fn test_plain_fields_roundtrip(
            title in plain(),
            description in plain(),
            technologies in prop::collection::vec(plain(), 1..5),
            category in plain(),
            featured in any::<bool>(),
            date in plain(),
        ) {
            let raw = render(&title, &description, &technologies, &category, featured, &date);
            let (fm, body) = parse_project(&raw).unwrap();

            prop_assert_eq!(fm.title, title);
            prop_assert_eq!(fm.description, description);
            prop_assert_eq!(fm.technologies, technologies);
            prop_assert_eq!(fm.image_url, format!("/img/{category}.png"));
            prop_assert_eq!(fm.category, category);
            prop_assert_eq!(fm.featured, featured);
            prop_assert_eq!(fm.date, date);
            prop_assert_eq!(body, "body");
        }

        #[test]
        fn test_all_technologies_sorted_and_unique(
            sets in prop::collection::vec(prop::collection::vec(plain(), 1..4), 0..6),
        ) {
            let catalog: Catalog = sets
                .iter()
                .enumerate()
                .map(|(i, techs)| {
                    let raw = render("t", "d", techs, "c", false, "2024-01-01");
                    Project::from_source(format!("p{i}"), &raw).unwrap()
                })
                .collect();

            let all = catalog.all_technologies();
            prop_assert!(all.windows(2).all(|w| w[0] < w[1]));
            for techs in &sets {
                for tech in techs {
                    prop_assert!(all.contains(tech));
                }
            }
        }

        #[test]
        fn test_catalog_order_is_newest_first(
            days in prop::collection::vec(1u32..=28, 0..8),
        ) {
            let catalog: Catalog = days
                .iter()
                .enumerate()
                .map(|(i, day)| {
                    let date = format!("2024-02-{day:02}");
                    let raw = render("t", "d", &["x".to_string()], "c", false, &date);
                    Project::from_source(format!("p{i}"), &raw).unwrap()
                })
                .collect();

            let stamps: Vec<_> = catalog.iter().map(|p| p.timestamp()).collect();
            prop_assert!(stamps.windows(2).all(|w| w[0] >= w[1]));
        }
    }
}
