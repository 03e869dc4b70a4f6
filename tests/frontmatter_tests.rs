use conference_content::{
    ContentKind, Frontmatter, Organizer, Page, Post, Presenter, Schedule, ScheduleCategory, Social,
    ValidationErrorKind, slug::slugify, validate_content,
};
use serde_json::{Map, Value, json};

fn map(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected an object, got {other}"),
    }
}

#[test]
fn presenter_without_slug_gets_slug_and_permalink() {
    for name in ["Ada Lovelace", "Łukasz Langa", "Dr. José Núñez-Pérez", "  Grace  Hopper "] {
        let p = Presenter::from_mapping(&map(json!({ "name": name }))).unwrap();
        let expected = slugify(name);
        assert_eq!(p.slug(), expected);
        assert_eq!(
            p.base.permalink.as_deref(),
            Some(format!("/presenters/{expected}/").as_str())
        );
    }
}

#[test]
fn presenter_permalink_is_never_overwritten() {
    for slug in [None, Some("custom-slug")] {
        let mut raw = json!({ "name": "Ada Lovelace", "permalink": "/team/ada/" });
        if let Some(slug) = slug {
            raw["slug"] = json!(slug);
        }
        let p = Presenter::from_mapping(&map(raw)).unwrap();
        assert_eq!(p.base.permalink.as_deref(), Some("/team/ada/"));
    }
}

#[test]
fn schedule_group_always_follows_category() {
    for category in ScheduleCategory::ALL {
        for group in ScheduleCategory::ALL {
            let s = Schedule::from_mapping(&map(json!({
                "category": category.as_str(),
                "group": group.as_str(),
            })))
            .unwrap();
            assert_eq!(s.group, Some(category));
        }
    }
}

#[test]
fn schedule_rejects_keynote_category() {
    let err = Schedule::from_mapping(&map(json!({ "category": "keynote", "title": "Opening" })))
        .unwrap_err();
    assert_eq!(err.field, "category");
    match err.kind {
        ValidationErrorKind::Invalid { message } => {
            assert!(message.contains("keynote"), "{message}");
            assert!(message.contains("social-event"), "{message}");
        }
        other => panic!("unexpected error kind {other:?}"),
    }
}

#[test]
fn schedule_requires_category() {
    let err = Schedule::from_mapping(&map(json!({ "title": "Opening" }))).unwrap_err();
    assert_eq!(err.field, "category");
    assert_eq!(err.kind, ValidationErrorKind::Missing);
}

#[test]
fn mastodon_short_handles_become_urls() {
    let s = Social::from_mapping(&map(json!({ "mastodon": "@alice@example.social" }))).unwrap();
    assert_eq!(s.mastodon.as_deref(), Some("https://example.social/@alice"));

    let url = json!({ "mastodon": "https://example.social/@alice" });
    let s = Social::from_mapping(&map(url)).unwrap();
    assert_eq!(s.mastodon.as_deref(), Some("https://example.social/@alice"));
}

#[test]
fn page_extra_fields_are_retrievable() {
    let page = Page::from_mapping(&map(json!({ "title": "Sponsors", "foo": "bar" }))).unwrap();
    assert_eq!(page.extra("foo"), Some(&json!("bar")));
    assert_eq!(page.extra("title"), None);

    let exported = page.to_mapping().unwrap();
    assert_eq!(exported.get("foo"), Some(&json!("bar")));
}

#[test]
fn extra_fields_keep_their_shape() {
    let raw = json!({
        "name": "Ada Lovelace",
        "sessions": [{ "room": "A" }],
        "sponsor_tier": 3
    });
    let p = Presenter::from_mapping(&map(raw)).unwrap();
    assert_eq!(p.extra("sessions"), Some(&json!([{ "room": "A" }])));
    assert_eq!(p.extra("sponsor_tier"), Some(&json!(3)));
}

fn assert_revalidates<T>(raw: Value)
where
    T: Frontmatter + PartialEq + std::fmt::Debug,
{
    let first = T::from_mapping(&map(raw)).unwrap();
    let exported = first.to_mapping().unwrap();
    let second = T::from_mapping(&exported).unwrap();
    assert_eq!(second, first);
}

#[test]
fn exported_records_revalidate_to_the_same_record() {
    assert_revalidates::<Page>(json!({
        "title": "Venue",
        "hero_theme": "dark",
        "redirect_from": ["/location/"],
        "extra_flag": true
    }));
    assert_revalidates::<Post>(json!({
        "title": "CFP is open",
        "date": "2024-03-01 12:00:00 -0500",
        "categories": ["news"],
        "tags": ["cfp"]
    }));
    assert_revalidates::<Presenter>(json!({
        "name": "Ada Lovelace",
        "pronouns": "she/her",
        "social": { "mastodon": "@ada@example.social", "github": "ada" }
    }));
    assert_revalidates::<Organizer>(json!({
        "name": "Grace Hopper",
        "hidden": true
    }));
    assert_revalidates::<Schedule>(json!({
        "title": "Keynote",
        "category": "talks",
        "group": "tutorials",
        "start_datetime": "2024-09-23 09:00:00 -0400",
        "end_datetime": "2024-09-23 09:45:00 -0400",
        "presenter_slugs": ["ada-lovelace"],
        "video_url": "https://example.com/v"
    }));
}

#[test]
fn fractional_seconds_survive_revalidation() {
    assert_revalidates::<Post>(json!({ "date": "2024-06-01T09:30:00.250-04:00" }));
    assert_revalidates::<Schedule>(json!({
        "category": "talks",
        "start_datetime": "2024-09-23T10:00:00.5Z"
    }));

    let post = Post::from_mapping(&map(json!({ "date": "2024-06-01T09:30:00.250-04:00" })))
        .unwrap();
    let exported = post.to_mapping().unwrap();
    assert_eq!(exported.get("date"), Some(&json!("2024-06-01 09:30:00.250 -0400")));
}

#[test]
fn explicit_null_difficulty_survives_revalidation() {
    assert_revalidates::<Schedule>(json!({ "category": "talks", "difficulty": null }));
    let s = Schedule::from_mapping(&map(json!({ "category": "talks", "difficulty": null })))
        .unwrap();
    assert_eq!(s.difficulty, None);
    let s = Schedule::from_mapping(&map(json!({ "category": "talks" }))).unwrap();
    assert_eq!(s.difficulty.as_deref(), Some("All"));
}

#[test]
fn type_errors_name_field_and_types() {
    let err = Post::from_mapping(&map(json!({
        "date": "2024-03-01 12:00:00 -0500",
        "published": "sometimes"
    })))
    .unwrap_err();
    assert_eq!(err.field, "published");
    let message = err.to_string();
    assert!(message.contains("boolean"), "{message}");
    assert!(message.contains("string"), "{message}");
}

#[test]
fn validate_content_covers_every_kind() {
    let samples = [
        (ContentKind::Page, json!({})),
        (ContentKind::Post, json!({ "date": "2024-03-01 12:00:00 -0500" })),
        (ContentKind::Presenter, json!({ "name": "Ada" })),
        (ContentKind::Organizer, json!({ "name": "Grace" })),
        (ContentKind::Schedule, json!({ "category": "lunch" })),
    ];
    for (kind, raw) in samples {
        let record = validate_content(kind, &map(raw)).unwrap();
        assert_eq!(record.kind(), kind);
        assert!(record.base().published);
    }
}
